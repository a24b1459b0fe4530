use dioxus::prelude::*;
use dioxus_router::use_navigator;

use quiz_core::{Difficulty, QuizSession};

use crate::context::AppContext;
use crate::routes::Route;

#[component]
pub fn HomeView() -> Element {
    let ctx = use_context::<AppContext>();
    let mut session = use_context::<Signal<QuizSession>>();
    let navigator = use_navigator();

    let question_count = ctx.question_count();
    let high_score = session.read().high_score();
    let loading = session.read().is_loading();
    let error = session.read().error().map(str::to_string);
    let mut selected = use_signal(|| session.peek().difficulty());

    let on_start = move |_| {
        let question_service = ctx.question_service();
        let difficulty = selected();
        spawn(async move {
            session.write().start_loading();
            match question_service.load(question_count, difficulty).await {
                Ok(loaded) => {
                    if session
                        .write()
                        .load_questions(loaded.records, difficulty)
                        .is_ok()
                    {
                        navigator.push(Route::Quiz {});
                    }
                }
                Err(err) => session.write().report_error(err.to_string()),
            }
        });
    };

    rsx! {
        div { class: "page home-page",
            div { class: "card home-card",
                h1 { "Quiz App" }
                p { class: "tagline", "Test your knowledge with our interactive quiz!" }

                if high_score > 0 {
                    div { class: "high-score-banner",
                        p { "Your High Score: {high_score}/{question_count}" }
                    }
                }

                if let Some(message) = error {
                    div { class: "error-banner",
                        p { "{message}" }
                    }
                }

                label { r#for: "difficulty", "Select Difficulty:" }
                select {
                    id: "difficulty",
                    value: "{selected().as_str()}",
                    disabled: loading,
                    onchange: move |evt| {
                        if let Ok(level) = evt.value().parse::<Difficulty>() {
                            selected.set(level);
                            session.write().set_difficulty(level);
                        }
                    },
                    for level in Difficulty::ALL {
                        option { value: "{level.as_str()}", "{level.label()}" }
                    }
                }

                button {
                    class: "btn btn-primary start-button",
                    r#type: "button",
                    disabled: loading,
                    onclick: on_start,
                    if loading { "Loading Questions..." } else { "Start Quiz" }
                }

                ul { class: "quiz-facts",
                    li { "{question_count} multiple choice questions" }
                    li { "30 seconds per question" }
                    li { "Instant feedback" }
                }
            }
        }
    }
}

use dioxus::prelude::*;
use dioxus_router::use_navigator;

use quiz_core::QuizSession;

use crate::routes::Route;
use crate::vm::{is_new_high_score, map_review_rows, percentage, score_message};

#[component]
pub fn ResultsView() -> Element {
    let mut session = use_context::<Signal<QuizSession>>();
    let navigator = use_navigator();

    let snapshot = session.read();
    let completed = snapshot.is_completed();
    let total = snapshot.question_count();
    let score = snapshot.score();
    let high_score = snapshot.high_score();
    let rows = map_review_rows(&snapshot);
    drop(snapshot);

    let mut on_restart = move |_| {
        session.write().restart();
        navigator.push(Route::Home {});
    };

    if !completed {
        return rsx! {
            div { class: "page results-page",
                div { class: "card status-card",
                    h2 { "No results yet" }
                    p { "Finish a quiz to see your review here." }
                    button {
                        class: "btn btn-primary",
                        r#type: "button",
                        onclick: move |_| { navigator.push(Route::Home {}); },
                        "Go Back Home"
                    }
                }
            }
        };
    }

    let percent = percentage(score, total);
    let (message, message_class) = score_message(percent);
    let new_record = is_new_high_score(score, high_score);

    rsx! {
        div { class: "page results-page",
            div { class: "card results-header",
                h1 { "Quiz Complete!" }
                p { class: "score-message {message_class}", "{message}" }

                div { class: "score-summary",
                    p { class: "score-line", "{score}/{total}" }
                    p { class: "score-percent", "{percent}% Correct" }
                    div { class: "progress-track",
                        div { class: "progress-fill", style: "width: {percent}%" }
                    }
                }

                if new_record {
                    div { class: "high-score-banner",
                        p { "New High Score! You've improved your best performance!" }
                    }
                }

                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    onclick: move |evt| on_restart(evt),
                    "Take Another Quiz"
                }
            }

            div { class: "card review-card",
                h2 { "Quiz Review" }
                for row in rows {
                    div {
                        key: "{row.number}",
                        class: if row.is_correct { "review-row review-correct" } else { "review-row review-incorrect" },
                        div { class: "review-row-header",
                            span { class: "review-number", "Question {row.number}" }
                            span { class: "review-verdict",
                                if row.is_correct { "Correct" } else { "Incorrect" }
                            }
                        }
                        h3 { class: "review-prompt", "{row.prompt}" }
                        p { class: "review-answer",
                            "Your Answer: "
                            span { "{row.user_answer}" }
                        }
                        if let Some(correct) = row.correct_answer {
                            p { class: "review-answer",
                                "Correct Answer: "
                                span { class: "feedback-answer", "{correct}" }
                            }
                        }
                    }
                }

                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    onclick: move |evt| on_restart(evt),
                    "Try Again"
                }
            }
        }
    }
}

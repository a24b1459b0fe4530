use std::time::Duration;

use dioxus::core::Task;
use dioxus::prelude::*;
use dioxus_router::use_navigator;

use quiz_core::{AdvanceOutcome, QuizSession, TickOutcome};
use services::HighScoreService;

use crate::context::AppContext;
use crate::routes::Route;
use crate::vm::{map_feedback, option_class, progress_percent, timer_class};

#[component]
pub fn QuizView() -> Element {
    let ctx = use_context::<AppContext>();
    let mut session = use_context::<Signal<QuizSession>>();
    let navigator = use_navigator();
    let mut ticker = use_signal(|| None::<Task>);

    // Key the ticker on (question, running) so per-second countdown updates
    // do not respawn it.
    let ticker_key = use_memo(move || {
        let snapshot = session.read();
        (snapshot.current_index(), snapshot.timer_active())
    });

    // One ticker task at a time. Replacing the handle cancels any task left
    // over from a superseded question, so a stale tick can never fire after
    // the countdown was stopped or restarted.
    use_effect(move || {
        let (_, running) = ticker_key();
        if let Some(previous) = ticker.write().take() {
            previous.cancel();
        }
        if running {
            let task = spawn(async move {
                let mut interval = tokio::time::interval(Duration::from_secs(1));
                // The first tick completes immediately; skip it.
                interval.tick().await;
                loop {
                    interval.tick().await;
                    if session.write().tick() != TickOutcome::Counted {
                        break;
                    }
                }
            });
            ticker.set(Some(task));
        }
    });

    let snapshot = session.read();
    let loading = snapshot.is_loading();
    let error = snapshot.error().map(str::to_string);
    let completed = snapshot.is_completed();
    let total = snapshot.question_count();
    let index = snapshot.current_index();
    let score = snapshot.score();
    let remaining = snapshot.time_remaining();
    let question = snapshot.current_question().cloned();
    let answer = snapshot.current_answer().cloned();
    let resolved = snapshot.is_current_resolved();
    let is_last = snapshot.is_last_question();
    drop(snapshot);

    if loading {
        return rsx! {
            div { class: "page quiz-page",
                div { class: "card status-card",
                    p { "Loading questions..." }
                }
            }
        };
    }

    if let Some(message) = error {
        return rsx! {
            div { class: "page quiz-page",
                div { class: "card status-card",
                    h2 { "Error Loading Quiz" }
                    p { "{message}" }
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

    if completed {
        return rsx! {
            div { class: "page quiz-page",
                div { class: "card status-card",
                    h2 { "Quiz Complete!" }
                    button {
                        class: "btn btn-primary",
                        r#type: "button",
                        onclick: move |_| { navigator.push(Route::Results {}); },
                        "See Results"
                    }
                }
            }
        };
    }

    let Some(question) = question else {
        return rsx! {
            div { class: "page quiz-page",
                div { class: "card status-card",
                    h2 { "No Questions Available" }
                    p { "Please try again later." }
                    button {
                        class: "btn btn-primary",
                        r#type: "button",
                        onclick: move |_| { navigator.push(Route::Home {}); },
                        "Go Back Home"
                    }
                }
            }
        };
    };

    let option_rows: Vec<(String, String, String)> = question
        .options()
        .iter()
        .map(|option| {
            let selected = answer.as_ref().is_some_and(|a| a.is_option(option));
            let class = option_class(resolved, selected, question.is_correct(option));
            (option.clone(), class, option.clone())
        })
        .collect();
    let feedback = answer.as_ref().map(|answer| map_feedback(&question, answer));
    let progress = progress_percent(index + 1, total);
    let at_first = index == 0;

    let high_scores = ctx.high_scores();
    let on_next = move |_| {
        let outcome = session.write().advance();
        if let Ok(AdvanceOutcome::Completed { .. }) = outcome {
            let high_scores = high_scores.clone();
            let best = session.peek().high_score();
            spawn(async move {
                persist_best_score(&high_scores, best).await;
            });
            navigator.push(Route::Results {});
        }
    };

    rsx! {
        div { class: "page quiz-page",
            header { class: "card quiz-header",
                div { class: "quiz-header-row",
                    div {
                        h1 { "Quiz Time!" }
                        p { class: "quiz-position", "Question {index + 1} of {total}" }
                    }
                    div { class: "quiz-header-meta",
                        span { class: "{timer_class(remaining)}", "{remaining}s" }
                        span { class: "quiz-score", "Score: {score}/{index}" }
                    }
                }
                div { class: "progress-track",
                    div { class: "progress-fill", style: "width: {progress}%" }
                }
            }

            div { class: "card question-card",
                span { class: "category-badge", "{question.category()}" }
                h2 { class: "question-prompt", "{question.prompt()}" }

                div { class: "options",
                    for (label, class, choice) in option_rows {
                        button {
                            key: "{label}",
                            class: "{class}",
                            r#type: "button",
                            disabled: resolved,
                            onclick: move |_| {
                                let _ = session.write().select_answer(&choice);
                            },
                            "{label}"
                        }
                    }
                }

                if let Some(feedback) = feedback {
                    div { class: "feedback-panel",
                        p { class: "feedback-headline", "{feedback.headline}" }
                        if let Some(correct) = feedback.reveal {
                            p { class: "feedback-reveal",
                                "The correct answer is: "
                                span { class: "feedback-answer", "{correct}" }
                            }
                        }
                    }
                }
            }

            div { class: "card navigation-card",
                button {
                    class: "btn btn-secondary",
                    r#type: "button",
                    disabled: at_first,
                    onclick: move |_| {
                        let _ = session.write().retreat();
                    },
                    "Previous"
                }
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    disabled: !resolved,
                    onclick: on_next,
                    if is_last { "Finish Quiz" } else { "Next" }
                }
                if !resolved {
                    p { class: "navigation-hint", "Please select an answer to continue" }
                }
            }
        }
    }
}

/// Write the best score back to durable storage after completion.
///
/// Best effort: the in-session high score is already current, so a failed
/// write only costs durability across restarts. It is logged and never
/// blocks navigation to the results screen.
pub(crate) async fn persist_best_score(high_scores: &HighScoreService, best: u32) {
    if let Err(err) = high_scores.record(best).await {
        log::warn!("failed to persist high score: {err}");
    }
}

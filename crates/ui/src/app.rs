use dioxus::prelude::*;
use dioxus_router::Router;

use quiz_core::QuizSession;

use crate::context::AppContext;
use crate::routes::Route;

#[component]
pub fn App() -> Element {
    let ctx = use_context::<AppContext>();

    // One session signal for the whole app. Every view reads the same
    // snapshot and every intent funnels through its operations.
    use_context_provider(|| Signal::new(QuizSession::with_high_score(ctx.initial_high_score())));

    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }

        document::Title { "Quiz App" }

        div { class: "app-root",
            ErrorBoundary {
                handle_error: |errors: ErrorContext| rsx! {
                    div { class: "fatal",
                        h1 { "Something went wrong" }
                        pre { "{errors:?}" }
                    }
                },
                Router::<Route> {}
            }
        }
    }
}

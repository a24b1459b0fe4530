use std::sync::Arc;

use services::{HighScoreService, QuestionService};

/// What the composition root must provide to the UI.
pub trait UiApp: Send + Sync {
    fn question_count(&self) -> u32;
    fn initial_high_score(&self) -> u32;

    fn question_service(&self) -> Arc<QuestionService>;
    fn high_scores(&self) -> Arc<HighScoreService>;
}

#[derive(Clone)]
pub struct AppContext {
    question_count: u32,
    initial_high_score: u32,
    question_service: Arc<QuestionService>,
    high_scores: Arc<HighScoreService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            question_count: app.question_count(),
            initial_high_score: app.initial_high_score(),
            question_service: app.question_service(),
            high_scores: app.high_scores(),
        }
    }

    /// How many questions a session asks for.
    #[must_use]
    pub fn question_count(&self) -> u32 {
        self.question_count
    }

    /// The best score read from durable storage at startup; seeds the
    /// session signal.
    #[must_use]
    pub fn initial_high_score(&self) -> u32 {
        self.initial_high_score
    }

    #[must_use]
    pub fn question_service(&self) -> Arc<QuestionService> {
        Arc::clone(&self.question_service)
    }

    #[must_use]
    pub fn high_scores(&self) -> Arc<HighScoreService> {
        Arc::clone(&self.high_scores)
    }
}

// This context is provided by the application composition root (`crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}

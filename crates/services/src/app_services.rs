use std::sync::Arc;

use storage::repository::Storage;

use crate::error::AppServicesError;
use crate::high_score_service::HighScoreService;
use crate::question_service::QuestionService;
use crate::question_source::{QuestionSource, TriviaApiClient};

/// Assembles the app-facing services and the startup high-score read.
#[derive(Clone)]
pub struct AppServices {
    question_service: Arc<QuestionService>,
    high_scores: Arc<HighScoreService>,
    question_count: u32,
    initial_high_score: u32,
}

impl AppServices {
    /// Build services backed by `SQLite` storage and the remote trivia API.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if storage initialization or the startup
    /// high-score read fails.
    pub async fn new_sqlite(
        db_url: &str,
        api_base_url: &str,
        question_count: u32,
    ) -> Result<Self, AppServicesError> {
        let storage = Storage::sqlite(db_url).await?;
        let source: Arc<dyn QuestionSource> = Arc::new(TriviaApiClient::with_base_url(api_base_url));
        Self::assemble(storage, source, question_count).await
    }

    /// Build services on in-memory storage with the given source. Used by
    /// tests and ephemeral runs.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if the startup high-score read fails.
    pub async fn new_in_memory(
        source: Arc<dyn QuestionSource>,
        question_count: u32,
    ) -> Result<Self, AppServicesError> {
        Self::assemble(Storage::in_memory(), source, question_count).await
    }

    async fn assemble(
        storage: Storage,
        source: Arc<dyn QuestionSource>,
        question_count: u32,
    ) -> Result<Self, AppServicesError> {
        let high_scores = Arc::new(HighScoreService::new(Arc::clone(&storage.high_scores)));
        let initial_high_score = high_scores.load().await?;
        let question_service = Arc::new(QuestionService::new(source));

        Ok(Self {
            question_service,
            high_scores,
            question_count,
            initial_high_score,
        })
    }

    #[must_use]
    pub fn question_service(&self) -> Arc<QuestionService> {
        Arc::clone(&self.question_service)
    }

    #[must_use]
    pub fn high_scores(&self) -> Arc<HighScoreService> {
        Arc::clone(&self.high_scores)
    }

    #[must_use]
    pub fn question_count(&self) -> u32 {
        self.question_count
    }

    /// The best score read from durable storage at startup.
    #[must_use]
    pub fn initial_high_score(&self) -> u32 {
        self.initial_high_score
    }
}

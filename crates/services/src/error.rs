//! Shared error types for the services crate.

use thiserror::Error;

use quiz_core::QuestionError;
use storage::repository::StorageError;
use storage::sqlite::SqliteInitError;

/// Errors emitted by a `QuestionSource`.
///
/// All of these are recovered locally by substituting the fallback question
/// set; they are logged, never surfaced to the user.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SourceError {
    #[error("question request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),

    #[error("question source rejected the request (response code {code})")]
    Api { code: u8 },

    #[error("question source returned no results")]
    EmptyResults,

    #[error(transparent)]
    InvalidQuestion(#[from] QuestionError),

    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// Errors emitted by `QuestionService::load`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuizLoadError {
    /// The source failed and the fallback set is empty too. A configuration
    /// bug, not a runtime condition.
    #[error("no questions available: source failed and the fallback set is empty")]
    FallbackExhausted,
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Sqlite(#[from] SqliteInitError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

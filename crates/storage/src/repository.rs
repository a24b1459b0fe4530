use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use thiserror::Error;

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Fixed key under which the single best score is persisted.
pub const HIGH_SCORE_NAMESPACE: &str = "quiz";

/// Repository contract for the one persisted integer: the best score.
#[async_trait]
pub trait HighScoreRepository: Send + Sync {
    /// Fetch the stored best score, if one was ever written.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the value cannot be read.
    async fn load_high_score(&self) -> Result<Option<u32>, StorageError>;

    /// Persist the best score, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the value cannot be stored.
    async fn store_high_score(&self, score: u32) -> Result<(), StorageError>;
}

/// In-memory repository for tests and ephemeral runs.
#[derive(Clone, Default)]
pub struct InMemoryHighScores {
    scores: Arc<Mutex<HashMap<String, u32>>>,
}

impl InMemoryHighScores {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl HighScoreRepository for InMemoryHighScores {
    async fn load_high_score(&self) -> Result<Option<u32>, StorageError> {
        let guard = self
            .scores
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.get(HIGH_SCORE_NAMESPACE).copied())
    }

    async fn store_high_score(&self, score: u32) -> Result<(), StorageError> {
        let mut guard = self
            .scores
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.insert(HIGH_SCORE_NAMESPACE.to_string(), score);
        Ok(())
    }
}

/// Aggregates repositories behind trait objects for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub high_scores: Arc<dyn HighScoreRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        let high_scores: Arc<dyn HighScoreRepository> = Arc::new(InMemoryHighScores::new());
        Self { high_scores }
    }
}

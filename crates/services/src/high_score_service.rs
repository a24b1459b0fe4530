use std::sync::Arc;

use storage::repository::{HighScoreRepository, StorageError};

/// Durable best-score policy: read once at startup, write only on increase.
#[derive(Clone)]
pub struct HighScoreService {
    repo: Arc<dyn HighScoreRepository>,
}

impl HighScoreService {
    #[must_use]
    pub fn new(repo: Arc<dyn HighScoreRepository>) -> Self {
        Self { repo }
    }

    /// The stored best score, or zero if none was ever written.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the repository cannot be read.
    pub async fn load(&self) -> Result<u32, StorageError> {
        Ok(self.repo.load_high_score().await?.unwrap_or(0))
    }

    /// Persist `score` if it beats the stored best. Returns whether a write
    /// happened.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the repository cannot be read or written.
    pub async fn record(&self, score: u32) -> Result<bool, StorageError> {
        let stored = self.repo.load_high_score().await?.unwrap_or(0);
        if score <= stored {
            return Ok(false);
        }
        self.repo.store_high_score(score).await?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    use async_trait::async_trait;
    use storage::repository::InMemoryHighScores;

    struct CountingRepo {
        inner: InMemoryHighScores,
        writes: AtomicU32,
    }

    impl CountingRepo {
        fn new() -> Self {
            Self {
                inner: InMemoryHighScores::new(),
                writes: AtomicU32::new(0),
            }
        }
    }

    #[async_trait]
    impl HighScoreRepository for CountingRepo {
        async fn load_high_score(&self) -> Result<Option<u32>, StorageError> {
            self.inner.load_high_score().await
        }

        async fn store_high_score(&self, score: u32) -> Result<(), StorageError> {
            self.writes.fetch_add(1, Ordering::SeqCst);
            self.inner.store_high_score(score).await
        }
    }

    #[tokio::test]
    async fn missing_score_loads_as_zero() {
        let service = HighScoreService::new(Arc::new(InMemoryHighScores::new()));
        assert_eq!(service.load().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn writes_only_on_increase() {
        let repo = Arc::new(CountingRepo::new());
        let service = HighScoreService::new(Arc::clone(&repo) as Arc<dyn HighScoreRepository>);

        assert!(service.record(5).await.unwrap());
        assert!(!service.record(5).await.unwrap());
        assert!(!service.record(3).await.unwrap());
        assert!(service.record(8).await.unwrap());

        assert_eq!(repo.writes.load(Ordering::SeqCst), 2);
        assert_eq!(service.load().await.unwrap(), 8);
    }

    #[tokio::test]
    async fn zero_is_never_persisted() {
        let repo = Arc::new(CountingRepo::new());
        let service = HighScoreService::new(Arc::clone(&repo) as Arc<dyn HighScoreRepository>);
        assert!(!service.record(0).await.unwrap());
        assert_eq!(repo.writes.load(Ordering::SeqCst), 0);
    }
}

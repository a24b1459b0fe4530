use async_trait::async_trait;
use sqlx::Row;

use crate::repository::{HIGH_SCORE_NAMESPACE, HighScoreRepository, StorageError};

use super::SqliteRepository;

#[async_trait]
impl HighScoreRepository for SqliteRepository {
    async fn load_high_score(&self) -> Result<Option<u32>, StorageError> {
        let row = sqlx::query("SELECT best_score FROM high_scores WHERE namespace = ?1")
            .bind(HIGH_SCORE_NAMESPACE)
            .fetch_optional(&self.pool)
            .await
            .map_err(|err| StorageError::Connection(err.to_string()))?;

        let Some(row) = row else {
            return Ok(None);
        };

        let best_score: i64 = row
            .try_get("best_score")
            .map_err(|err| StorageError::Serialization(err.to_string()))?;
        let best_score = u32::try_from(best_score)
            .map_err(|err| StorageError::Serialization(err.to_string()))?;
        Ok(Some(best_score))
    }

    async fn store_high_score(&self, score: u32) -> Result<(), StorageError> {
        sqlx::query(
            r"
            INSERT INTO high_scores (namespace, best_score)
            VALUES (?1, ?2)
            ON CONFLICT(namespace) DO UPDATE SET
                best_score = excluded.best_score
            ",
        )
        .bind(HIGH_SCORE_NAMESPACE)
        .bind(i64::from(score))
        .execute(&self.pool)
        .await
        .map_err(|err| StorageError::Connection(err.to_string()))?;

        Ok(())
    }
}

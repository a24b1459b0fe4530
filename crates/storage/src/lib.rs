#![forbid(unsafe_code)]

pub mod repository;
pub mod sqlite;

pub use repository::{
    HIGH_SCORE_NAMESPACE, HighScoreRepository, InMemoryHighScores, Storage, StorageError,
};
pub use sqlite::{SqliteInitError, SqliteRepository};

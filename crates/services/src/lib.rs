#![forbid(unsafe_code)]

pub mod app_services;
pub mod error;
pub mod fallback;
pub mod high_score_service;
pub mod question_service;
pub mod question_source;

pub use app_services::AppServices;
pub use error::{AppServicesError, QuizLoadError, SourceError};
pub use fallback::fallback_questions;
pub use high_score_service::HighScoreService;
pub use question_service::{LoadedQuestions, QuestionService};
pub use question_source::{DEFAULT_API_BASE_URL, QuestionSource, TriviaApiClient};

use std::sync::Arc;

use quiz_core::{Difficulty, QuestionRecord};

use crate::error::QuizLoadError;
use crate::fallback::fallback_questions;
use crate::question_source::QuestionSource;

/// A loaded question set, tagged with whether the fallback was substituted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedQuestions {
    pub records: Vec<QuestionRecord>,
    pub from_fallback: bool,
}

/// Loads questions from the source, substituting the fallback set on failure.
///
/// The substitution is policy, not error handling: a failed fetch is logged
/// and recovered here so the quiz is always playable. `FallbackExhausted` is
/// reachable only with an empty fallback set, which is a configuration bug.
#[derive(Clone)]
pub struct QuestionService {
    source: Arc<dyn QuestionSource>,
    fallback: Vec<QuestionRecord>,
}

impl QuestionService {
    #[must_use]
    pub fn new(source: Arc<dyn QuestionSource>) -> Self {
        Self::with_fallback(source, fallback_questions())
    }

    #[must_use]
    pub fn with_fallback(source: Arc<dyn QuestionSource>, fallback: Vec<QuestionRecord>) -> Self {
        Self { source, fallback }
    }

    /// Fetch `count` questions at the given difficulty, falling back to the
    /// static set if the source fails.
    ///
    /// # Errors
    ///
    /// Returns `QuizLoadError::FallbackExhausted` if the source failed and
    /// the fallback set is empty.
    pub async fn load(
        &self,
        count: u32,
        difficulty: Difficulty,
    ) -> Result<LoadedQuestions, QuizLoadError> {
        match self.source.fetch(count, difficulty).await {
            Ok(records) if !records.is_empty() => Ok(LoadedQuestions {
                records,
                from_fallback: false,
            }),
            Ok(_) => {
                log::warn!("question source returned an empty set, using fallback questions");
                self.fallback_set()
            }
            Err(err) => {
                log::warn!("question fetch failed, using fallback questions: {err}");
                self.fallback_set()
            }
        }
    }

    fn fallback_set(&self) -> Result<LoadedQuestions, QuizLoadError> {
        if self.fallback.is_empty() {
            return Err(QuizLoadError::FallbackExhausted);
        }
        Ok(LoadedQuestions {
            records: self.fallback.clone(),
            from_fallback: true,
        })
    }
}

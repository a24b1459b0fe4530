use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question prompt is empty")]
    EmptyPrompt,

    #[error("a question needs at least two options, got {len}")]
    TooFewOptions { len: usize },

    #[error("option {index} is blank")]
    BlankOption { index: usize },

    #[error("correct answer is not one of the options")]
    CorrectAnswerMissing,
}

/// Unvalidated question fields as they arrive from a source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionDraft {
    pub category: String,
    pub prompt: String,
    pub options: Vec<String>,
    pub correct_answer: String,
}

impl QuestionDraft {
    /// Validate the draft into an immutable `QuestionRecord`.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError` if the prompt is empty, fewer than two options
    /// are present, any option is blank, or the correct answer does not match
    /// one of the options.
    pub fn validate(self) -> Result<QuestionRecord, QuestionError> {
        if self.prompt.trim().is_empty() {
            return Err(QuestionError::EmptyPrompt);
        }
        if self.options.len() < 2 {
            return Err(QuestionError::TooFewOptions {
                len: self.options.len(),
            });
        }
        if let Some(index) = self.options.iter().position(|opt| opt.trim().is_empty()) {
            return Err(QuestionError::BlankOption { index });
        }
        if !self.options.contains(&self.correct_answer) {
            return Err(QuestionError::CorrectAnswerMissing);
        }

        Ok(QuestionRecord {
            category: self.category,
            prompt: self.prompt,
            options: self.options,
            correct_answer: self.correct_answer,
        })
    }
}

/// A validated multiple-choice question. Immutable once built; owned by the
/// session for the session's lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionRecord {
    category: String,
    prompt: String,
    options: Vec<String>,
    correct_answer: String,
}

impl QuestionRecord {
    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Options in presentation order.
    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    #[must_use]
    pub fn correct_answer(&self) -> &str {
        &self.correct_answer
    }

    #[must_use]
    pub fn is_correct(&self, option: &str) -> bool {
        self.correct_answer == option
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> QuestionDraft {
        QuestionDraft {
            category: "Geography".to_string(),
            prompt: "What is the capital of France?".to_string(),
            options: vec![
                "Paris".to_string(),
                "London".to_string(),
                "Berlin".to_string(),
                "Madrid".to_string(),
            ],
            correct_answer: "Paris".to_string(),
        }
    }

    #[test]
    fn validates_a_well_formed_draft() {
        let record = draft().validate().unwrap();
        assert_eq!(record.prompt(), "What is the capital of France?");
        assert_eq!(record.options().len(), 4);
        assert!(record.is_correct("Paris"));
        assert!(!record.is_correct("London"));
    }

    #[test]
    fn rejects_empty_prompt() {
        let mut bad = draft();
        bad.prompt = "   ".to_string();
        assert_eq!(bad.validate().unwrap_err(), QuestionError::EmptyPrompt);
    }

    #[test]
    fn rejects_single_option() {
        let mut bad = draft();
        bad.options = vec!["Paris".to_string()];
        assert_eq!(
            bad.validate().unwrap_err(),
            QuestionError::TooFewOptions { len: 1 }
        );
    }

    #[test]
    fn rejects_blank_option() {
        let mut bad = draft();
        bad.options[2] = String::new();
        assert_eq!(
            bad.validate().unwrap_err(),
            QuestionError::BlankOption { index: 2 }
        );
    }

    #[test]
    fn rejects_correct_answer_outside_options() {
        let mut bad = draft();
        bad.correct_answer = "Rome".to_string();
        assert_eq!(
            bad.validate().unwrap_err(),
            QuestionError::CorrectAnswerMissing
        );
    }
}

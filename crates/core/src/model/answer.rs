use serde::{Deserialize, Serialize};

/// What the session records once a question index is resolved.
///
/// `NoAnswer` is the sentinel written when the countdown expires before the
/// user picks an option. It is a distinct variant rather than a magic string,
/// so it can never compare equal to a real option and is always scored
/// incorrect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Answer {
    Choice(String),
    NoAnswer,
}

impl Answer {
    /// True if this answer is the given option string.
    #[must_use]
    pub fn is_option(&self, option: &str) -> bool {
        matches!(self, Self::Choice(choice) if choice == option)
    }

    #[must_use]
    pub fn is_no_answer(&self) -> bool {
        matches!(self, Self::NoAnswer)
    }

    /// The selected option, if one was selected.
    #[must_use]
    pub fn choice(&self) -> Option<&str> {
        match self {
            Self::Choice(choice) => Some(choice),
            Self::NoAnswer => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_answer_never_matches_an_option_string() {
        let sentinel = Answer::NoAnswer;
        for option in ["Paris", "London", "", "NoAnswer", "no answer"] {
            assert!(!sentinel.is_option(option));
        }
        assert!(sentinel.choice().is_none());
        assert!(sentinel.is_no_answer());
    }

    #[test]
    fn choice_matches_only_its_own_option() {
        let answer = Answer::Choice("Paris".to_string());
        assert!(answer.is_option("Paris"));
        assert!(!answer.is_option("London"));
        assert_eq!(answer.choice(), Some("Paris"));
    }
}

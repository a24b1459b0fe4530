use quiz_core::{Answer, QuestionRecord};

/// CSS class for an option button, given the resolution state.
///
/// After resolution the correct option is always marked, and an incorrect
/// selection is marked against it.
#[must_use]
pub fn option_class(resolved: bool, selected: bool, is_correct: bool) -> String {
    let mut class = String::from("option-button");
    if selected {
        class.push_str(" selected");
    }
    if resolved {
        if is_correct {
            class.push_str(" correct");
        } else if selected {
            class.push_str(" incorrect");
        }
    }
    class
}

/// Countdown badge class with urgency tiers.
#[must_use]
pub fn timer_class(remaining: u32) -> &'static str {
    if remaining <= 5 {
        "timer-badge timer-critical"
    } else if remaining <= 10 {
        "timer-badge timer-warning"
    } else {
        "timer-badge timer-ok"
    }
}

/// Progress through the quiz as a whole percentage.
#[must_use]
pub fn progress_percent(current: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    let percent = (current * 100) / total;
    u32::try_from(percent.min(100)).unwrap_or(100)
}

/// The feedback panel shown once a question is resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackVm {
    pub headline: &'static str,
    /// The correct answer, revealed only on a miss.
    pub reveal: Option<String>,
}

#[must_use]
pub fn map_feedback(question: &QuestionRecord, answer: &Answer) -> FeedbackVm {
    match answer {
        Answer::Choice(choice) if question.is_correct(choice) => FeedbackVm {
            headline: "Correct!",
            reveal: None,
        },
        Answer::Choice(_) => FeedbackVm {
            headline: "Incorrect!",
            reveal: Some(question.correct_answer().to_string()),
        },
        Answer::NoAnswer => FeedbackVm {
            headline: "Time's up!",
            reveal: Some(question.correct_answer().to_string()),
        },
    }
}

use quiz_core::QuizSession;

/// Shown in place of an option when the countdown resolved the question.
pub const NO_ANSWER_LABEL: &str = "No answer selected";

/// One row of the per-question review list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewRowVm {
    pub number: usize,
    pub prompt: String,
    pub user_answer: String,
    /// The correct answer, shown only when the row is a miss.
    pub correct_answer: Option<String>,
    pub is_correct: bool,
}

#[must_use]
pub fn map_review_rows(session: &QuizSession) -> Vec<ReviewRowVm> {
    session
        .questions()
        .iter()
        .enumerate()
        .map(|(index, question)| {
            let answer = session.answer_for(index);
            let is_correct =
                answer.is_some_and(|answer| answer.is_option(question.correct_answer()));
            let user_answer = answer
                .and_then(|answer| answer.choice())
                .unwrap_or(NO_ANSWER_LABEL)
                .to_string();
            let correct_answer = if is_correct {
                None
            } else {
                Some(question.correct_answer().to_string())
            };
            ReviewRowVm {
                number: index + 1,
                prompt: question.prompt().to_string(),
                user_answer,
                correct_answer,
                is_correct,
            }
        })
        .collect()
}

#[must_use]
pub fn percentage(score: u32, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    let total = u32::try_from(total).unwrap_or(u32::MAX);
    (score * 100) / total
}

/// Tiered closing message for the results header.
#[must_use]
pub fn score_message(percentage: u32) -> (&'static str, &'static str) {
    if percentage >= 90 {
        ("Outstanding!", "score-top")
    } else if percentage >= 80 {
        ("Excellent!", "score-high")
    } else if percentage >= 70 {
        ("Good job!", "score-good")
    } else if percentage >= 60 {
        ("Not bad!", "score-fair")
    } else {
        ("Keep practicing!", "score-low")
    }
}

/// True when the finished score set a record. Completion already folded the
/// score into the high score, so a record run reads back as equal.
#[must_use]
pub fn is_new_high_score(score: u32, high_score: u32) -> bool {
    score > 0 && score >= high_score
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::{Difficulty, QuestionDraft, QuestionRecord};

    fn question(prompt: &str, correct: &str, wrong: &str) -> QuestionRecord {
        QuestionDraft {
            category: "General".to_string(),
            prompt: prompt.to_string(),
            options: vec![correct.to_string(), wrong.to_string()],
            correct_answer: correct.to_string(),
        }
        .validate()
        .unwrap()
    }

    fn finished_session() -> QuizSession {
        let mut session = QuizSession::new();
        session
            .load_questions(
                vec![
                    question("First?", "yes", "no"),
                    question("Second?", "left", "right"),
                ],
                Difficulty::Easy,
            )
            .unwrap();
        session.select_answer("yes").unwrap();
        session.advance().unwrap();
        // Let the second question expire into the sentinel.
        for _ in 0..30 {
            session.tick();
        }
        session.advance().unwrap();
        session
    }

    #[test]
    fn review_rows_label_misses_and_the_sentinel() {
        let rows = map_review_rows(&finished_session());
        assert_eq!(rows.len(), 2);

        assert!(rows[0].is_correct);
        assert_eq!(rows[0].user_answer, "yes");
        assert!(rows[0].correct_answer.is_none());

        assert!(!rows[1].is_correct);
        assert_eq!(rows[1].user_answer, NO_ANSWER_LABEL);
        assert_eq!(rows[1].correct_answer.as_deref(), Some("left"));
    }

    #[test]
    fn percentage_is_whole_valued() {
        assert_eq!(percentage(0, 0), 0);
        assert_eq!(percentage(1, 2), 50);
        assert_eq!(percentage(10, 10), 100);
        assert_eq!(percentage(1, 3), 33);
    }

    #[test]
    fn score_messages_follow_the_tiers() {
        assert_eq!(score_message(95).0, "Outstanding!");
        assert_eq!(score_message(85).0, "Excellent!");
        assert_eq!(score_message(75).0, "Good job!");
        assert_eq!(score_message(65).0, "Not bad!");
        assert_eq!(score_message(10).0, "Keep practicing!");
    }

    #[test]
    fn new_high_score_requires_a_nonzero_record() {
        assert!(is_new_high_score(5, 5));
        assert!(!is_new_high_score(3, 5));
        assert!(!is_new_high_score(0, 0));
    }
}

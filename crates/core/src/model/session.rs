use std::collections::BTreeMap;

use thiserror::Error;

use crate::model::{Answer, Difficulty, QuestionRecord};
use crate::timer::{Countdown, CountdownStep};

/// Contract violations signaled by session operations.
///
/// Every variant leaves the session untouched: an out-of-order call is a
/// fault for the caller, never a state corruption.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("question set is empty")]
    EmptyQuestionSet,

    #[error("no active question")]
    NoActiveQuestion,

    #[error("current question has not been answered yet")]
    UnresolvedQuestion,

    #[error("already at the first question")]
    AtFirstQuestion,
}

/// Outcome of `select_answer`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectOutcome {
    Recorded { correct: bool },
    /// The question was already resolved; the call changed nothing.
    AlreadyResolved,
}

/// Outcome of `advance`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvanceOutcome {
    NextQuestion,
    Completed { new_high_score: bool },
}

/// Outcome of `tick`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// No countdown was running; the tick was a stale event.
    Idle,
    Counted,
    /// The countdown hit zero and the question was auto-resolved.
    Expired,
}

/// The single authoritative record of quiz progress.
///
/// All mutation goes through the named operations below, so user intents and
/// timer ticks funnel through one path. Operations either apply fully or
/// signal a `SessionError` and leave the state exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizSession {
    questions: Vec<QuestionRecord>,
    current_index: usize,
    answers: BTreeMap<usize, Answer>,
    score: u32,
    high_score: u32,
    difficulty: Difficulty,
    countdown: Countdown,
    loading: bool,
    error: Option<String>,
    completed: bool,
}

impl QuizSession {
    /// An empty session with no questions loaded.
    #[must_use]
    pub fn new() -> Self {
        Self::with_high_score(0)
    }

    /// An empty session seeded with a high score read from durable storage.
    #[must_use]
    pub fn with_high_score(high_score: u32) -> Self {
        Self {
            questions: Vec::new(),
            current_index: 0,
            answers: BTreeMap::new(),
            score: 0,
            high_score,
            difficulty: Difficulty::default(),
            countdown: Countdown::idle(),
            loading: false,
            error: None,
            completed: false,
        }
    }

    // ─── Operations ────────────────────────────────────────────────────────

    /// Mark the session as waiting for questions.
    pub fn start_loading(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Install a fresh question set and begin the first question.
    ///
    /// Resets every per-session field except `high_score`; the difficulty
    /// argument becomes the stored preference. Starts the first question's
    /// countdown.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::EmptyQuestionSet` if `records` is empty. The
    /// caller is expected to substitute the fallback set instead of passing
    /// an empty fetch result through.
    pub fn load_questions(
        &mut self,
        records: Vec<QuestionRecord>,
        difficulty: Difficulty,
    ) -> Result<(), SessionError> {
        if records.is_empty() {
            return Err(SessionError::EmptyQuestionSet);
        }
        self.questions = records;
        self.current_index = 0;
        self.answers.clear();
        self.score = 0;
        self.completed = false;
        self.loading = false;
        self.error = None;
        self.difficulty = difficulty;
        self.countdown.start();
        Ok(())
    }

    /// Surface a user-visible error state blocking quiz start.
    ///
    /// Only reachable when even the static fallback set is empty.
    pub fn report_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
        self.loading = false;
    }

    /// Record the user's option for the current question.
    ///
    /// Resolution is final: once the current question has an answer entry,
    /// further selections are `AlreadyResolved` no-ops (the view disables
    /// input after resolution, so this is an expected outcome, not a fault).
    /// Resolving always stops the countdown, whatever the outcome.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NoActiveQuestion` if the session is completed
    /// or no questions are loaded.
    pub fn select_answer(&mut self, option: &str) -> Result<SelectOutcome, SessionError> {
        let question = self
            .questions
            .get(self.current_index)
            .ok_or(SessionError::NoActiveQuestion)?;
        if self.answers.contains_key(&self.current_index) {
            return Ok(SelectOutcome::AlreadyResolved);
        }

        let correct = question.is_correct(option);
        self.answers
            .insert(self.current_index, Answer::Choice(option.to_string()));
        if correct {
            self.score += 1;
        }
        self.countdown.stop();
        Ok(SelectOutcome::Recorded { correct })
    }

    /// Move to the next question, or complete the session on the last one.
    ///
    /// Completion folds the final score into the high score. Moving to the
    /// next question starts a fresh countdown at the full limit.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NoActiveQuestion` once completed, and
    /// `SessionError::UnresolvedQuestion` if the current question has no
    /// answer entry yet.
    pub fn advance(&mut self) -> Result<AdvanceOutcome, SessionError> {
        if self.current_index >= self.questions.len() {
            return Err(SessionError::NoActiveQuestion);
        }
        if !self.answers.contains_key(&self.current_index) {
            return Err(SessionError::UnresolvedQuestion);
        }

        self.countdown.stop();
        if self.current_index == self.questions.len() - 1 {
            self.current_index = self.questions.len();
            self.completed = true;
            let new_high_score = self.score > self.high_score;
            self.high_score = self.high_score.max(self.score);
            Ok(AdvanceOutcome::Completed { new_high_score })
        } else {
            self.current_index += 1;
            self.countdown.start();
            Ok(AdvanceOutcome::NextQuestion)
        }
    }

    /// Step back to the previous question for review.
    ///
    /// Deliberately does not restart the countdown for the revisited
    /// question: going back is review, not a re-timed attempt.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::AtFirstQuestion` at index zero and
    /// `SessionError::NoActiveQuestion` once completed.
    pub fn retreat(&mut self) -> Result<(), SessionError> {
        if self.completed {
            return Err(SessionError::NoActiveQuestion);
        }
        if self.current_index == 0 {
            return Err(SessionError::AtFirstQuestion);
        }
        self.countdown.stop();
        self.current_index -= 1;
        Ok(())
    }

    /// Advance the countdown by one second.
    ///
    /// Called once per elapsed second by the ticker. A tick while the
    /// countdown is idle is an ordinary stale event (for example, one queued
    /// behind a `select_answer` that already stopped the timer) and changes
    /// nothing. Expiry auto-resolves the current question with the
    /// `NoAnswer` sentinel, scored as incorrect.
    pub fn tick(&mut self) -> TickOutcome {
        match self.countdown.tick_down() {
            CountdownStep::Idle => TickOutcome::Idle,
            CountdownStep::Counted => TickOutcome::Counted,
            CountdownStep::Expired => {
                if self.current_index < self.questions.len() {
                    self.answers
                        .entry(self.current_index)
                        .or_insert(Answer::NoAnswer);
                }
                TickOutcome::Expired
            }
        }
    }

    /// Reset every per-session field, preserving the high score and the
    /// difficulty preference.
    pub fn restart(&mut self) {
        self.questions.clear();
        self.current_index = 0;
        self.answers.clear();
        self.score = 0;
        self.completed = false;
        self.loading = false;
        self.error = None;
        self.countdown = Countdown::idle();
    }

    // ─── Snapshot accessors ────────────────────────────────────────────────

    #[must_use]
    pub fn questions(&self) -> &[QuestionRecord] {
        &self.questions
    }

    #[must_use]
    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// The question currently presented, or `None` when empty or completed.
    #[must_use]
    pub fn current_question(&self) -> Option<&QuestionRecord> {
        self.questions.get(self.current_index)
    }

    #[must_use]
    pub fn answer_for(&self, index: usize) -> Option<&Answer> {
        self.answers.get(&index)
    }

    #[must_use]
    pub fn current_answer(&self) -> Option<&Answer> {
        self.answers.get(&self.current_index)
    }

    /// True once the current question has an answer entry.
    #[must_use]
    pub fn is_current_resolved(&self) -> bool {
        self.answers.contains_key(&self.current_index)
    }

    #[must_use]
    pub fn is_last_question(&self) -> bool {
        !self.questions.is_empty() && self.current_index == self.questions.len() - 1
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// The stored difficulty preference, survives `restart`.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
    }

    #[must_use]
    pub fn time_remaining(&self) -> u32 {
        self.countdown.remaining()
    }

    #[must_use]
    pub fn timer_active(&self) -> bool {
        self.countdown.is_active()
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.completed
    }
}

impl Default for QuizSession {
    fn default() -> Self {
        Self::new()
    }
}

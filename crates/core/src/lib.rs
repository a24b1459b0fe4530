#![forbid(unsafe_code)]

pub mod model;
pub mod timer;

pub use model::{
    AdvanceOutcome, Answer, Difficulty, DifficultyParseError, QuestionDraft, QuestionError,
    QuestionRecord, QuizSession, SelectOutcome, SessionError, TickOutcome,
};
pub use timer::{Countdown, CountdownStep, QUESTION_TIME_LIMIT_SECS};

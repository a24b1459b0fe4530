mod answer;
mod difficulty;
mod question;
mod session;

pub use answer::Answer;
pub use difficulty::{Difficulty, DifficultyParseError};
pub use question::{QuestionDraft, QuestionError, QuestionRecord};
pub use session::{AdvanceOutcome, QuizSession, SelectOutcome, SessionError, TickOutcome};

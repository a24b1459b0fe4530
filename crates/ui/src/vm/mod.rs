mod quiz_vm;
mod results_vm;

pub use quiz_vm::{FeedbackVm, map_feedback, option_class, progress_percent, timer_class};
pub use results_vm::{
    NO_ANSWER_LABEL, ReviewRowVm, is_new_high_score, map_review_rows, percentage, score_message,
};

use std::sync::Arc;

use async_trait::async_trait;

use quiz_core::{Difficulty, QuestionDraft, QuestionRecord, QuizSession};
use services::{HighScoreService, fallback_questions};
use storage::repository::{HighScoreRepository, StorageError};

use super::quiz::persist_best_score;
use super::test_harness::{ViewKind, setup_view_harness};

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

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_renders_difficulties_and_high_score() {
    let session = QuizSession::with_high_score(8);
    let mut harness = setup_view_harness(ViewKind::Home, session).await;
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Start Quiz"), "missing start button in {html}");
    for label in ["Easy", "Medium", "Hard"] {
        assert!(html.contains(label), "missing {label} in {html}");
    }
    let banner = "Your High Score: 8/10";
    assert!(html.contains(banner), "missing {banner} in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_hides_banner_without_a_high_score() {
    let session = QuizSession::new();
    let mut harness = setup_view_harness(ViewKind::Home, session).await;
    harness.rebuild();
    let html = harness.render();
    assert!(!html.contains("Your High Score"), "unexpected banner in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_renders_the_first_question() {
    let mut session = QuizSession::new();
    session
        .load_questions(fallback_questions(), Difficulty::Medium)
        .unwrap();
    let mut harness = setup_view_harness(ViewKind::Quiz, session).await;
    harness.rebuild();
    let html = harness.render();

    assert!(
        html.contains("What is the capital of France?"),
        "missing prompt in {html}"
    );
    assert!(html.contains("Paris"), "missing option in {html}");
    assert!(
        html.contains("Question 1 of 10"),
        "missing position in {html}"
    );
    assert!(html.contains("30s"), "missing countdown in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_reveals_feedback_after_a_miss() {
    let mut session = QuizSession::new();
    session
        .load_questions(
            vec![question("Pick one", "right", "wrong")],
            Difficulty::Easy,
        )
        .unwrap();
    session.select_answer("wrong").unwrap();

    let mut harness = setup_view_harness(ViewKind::Quiz, session).await;
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Incorrect!"), "missing feedback in {html}");
    assert!(
        html.contains("The correct answer is:"),
        "missing reveal in {html}"
    );
    assert!(
        html.contains("option-button selected incorrect"),
        "missing miss styling in {html}"
    );
    assert!(
        html.contains("option-button correct"),
        "missing correct styling in {html}"
    );
    assert!(html.contains("Finish Quiz"), "missing finish label in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn results_view_smoke_renders_score_and_review_rows() {
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
    for _ in 0..30 {
        session.tick();
    }
    session.advance().unwrap();

    let mut harness = setup_view_harness(ViewKind::Results, session).await;
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Quiz Complete!"), "missing title in {html}");
    assert!(html.contains("1/2"), "missing score in {html}");
    assert!(html.contains("50% Correct"), "missing percent in {html}");
    assert!(
        html.contains("No answer selected"),
        "missing sentinel label in {html}"
    );
    assert!(
        html.contains("New High Score!"),
        "missing record banner in {html}"
    );
    assert!(html.contains("Take Another Quiz"), "missing restart in {html}");
}

struct BrokenScores;

#[async_trait]
impl HighScoreRepository for BrokenScores {
    async fn load_high_score(&self) -> Result<Option<u32>, StorageError> {
        Err(StorageError::Connection("database is locked".to_string()))
    }

    async fn store_high_score(&self, _score: u32) -> Result<(), StorageError> {
        Err(StorageError::Connection("database is locked".to_string()))
    }
}

#[tokio::test(flavor = "current_thread")]
async fn high_score_persistence_failure_is_not_fatal() {
    // The in-session high score is already current; a broken repository
    // must not propagate out of the completion path.
    let service = HighScoreService::new(Arc::new(BrokenScores));
    persist_best_score(&service, 7).await;
}

#[tokio::test(flavor = "current_thread")]
async fn results_view_smoke_shows_placeholder_before_completion() {
    let session = QuizSession::new();
    let mut harness = setup_view_harness(ViewKind::Results, session).await;
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("No results yet"), "missing placeholder in {html}");
}

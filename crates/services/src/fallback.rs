//! Static question set substituted when the remote source fails.
//!
//! The quiz must always be playable: a fetch failure is never fatal, it just
//! swaps in this set.

use quiz_core::{QuestionDraft, QuestionRecord};

const FALLBACK: &[(&str, &str, [&str; 4], &str)] = &[
    (
        "Geography",
        "What is the capital of France?",
        ["London", "Berlin", "Paris", "Madrid"],
        "Paris",
    ),
    (
        "Science & Nature",
        "Which planet is known as the Red Planet?",
        ["Venus", "Mars", "Jupiter", "Saturn"],
        "Mars",
    ),
    (
        "Science & Nature",
        "What is the largest mammal in the world?",
        ["African Elephant", "Blue Whale", "Giraffe", "Polar Bear"],
        "Blue Whale",
    ),
    (
        "Art",
        "Who painted the Mona Lisa?",
        [
            "Vincent van Gogh",
            "Pablo Picasso",
            "Leonardo da Vinci",
            "Claude Monet",
        ],
        "Leonardo da Vinci",
    ),
    (
        "Science & Nature",
        "What is the chemical symbol for gold?",
        ["Go", "Gd", "Au", "Ag"],
        "Au",
    ),
    (
        "Geography",
        "Which ocean is the largest?",
        ["Atlantic", "Indian", "Arctic", "Pacific"],
        "Pacific",
    ),
    (
        "History",
        "In which year did the Second World War end?",
        ["1943", "1944", "1945", "1946"],
        "1945",
    ),
    (
        "Science & Nature",
        "How many bones are in the adult human body?",
        ["186", "206", "226", "246"],
        "206",
    ),
    (
        "Entertainment",
        "Who wrote the play Romeo and Juliet?",
        [
            "Charles Dickens",
            "William Shakespeare",
            "Jane Austen",
            "Oscar Wilde",
        ],
        "William Shakespeare",
    ),
    (
        "Geography",
        "What is the longest river in the world?",
        ["Amazon", "Nile", "Yangtze", "Mississippi"],
        "Nile",
    ),
];

/// The always-available fallback sequence.
#[must_use]
pub fn fallback_questions() -> Vec<QuestionRecord> {
    FALLBACK
        .iter()
        .filter_map(|(category, prompt, options, correct)| {
            QuestionDraft {
                category: (*category).to_string(),
                prompt: (*prompt).to_string(),
                options: options.iter().map(|opt| (*opt).to_string()).collect(),
                correct_answer: (*correct).to_string(),
            }
            .validate()
            .ok()
        })
        .collect()
}

//! The remote trivia question source.
//!
//! Speaks the Open Trivia DB wire shape: `GET {base}/api.php?amount=N&
//! difficulty=D&type=multiple`, answered with a `response_code` and a list of
//! records carrying the correct answer separately from the incorrect ones.
//! Payload text is HTML-entity encoded and decoded here before validation.

use async_trait::async_trait;
use rand::Rng;
use reqwest::Client;
use serde::Deserialize;

use quiz_core::{Difficulty, QuestionDraft, QuestionRecord};

use crate::error::SourceError;

pub const DEFAULT_API_BASE_URL: &str = "https://opentdb.com";

/// Contract for anything that can supply an ordered question sequence.
#[async_trait]
pub trait QuestionSource: Send + Sync {
    /// Fetch `count` questions at the given difficulty.
    ///
    /// # Errors
    ///
    /// Returns `SourceError` for network failures, API rejections, empty
    /// payloads, or records that fail validation.
    async fn fetch(&self, count: u32, difficulty: Difficulty)
    -> Result<Vec<QuestionRecord>, SourceError>;
}

#[derive(Debug, Deserialize)]
struct TriviaResponse {
    response_code: u8,
    results: Vec<TriviaQuestion>,
}

#[derive(Debug, Deserialize)]
struct TriviaQuestion {
    category: String,
    question: String,
    correct_answer: String,
    incorrect_answers: Vec<String>,
}

impl TriviaQuestion {
    /// Build the ordered option list by inserting the correct answer at a
    /// random position among the incorrect ones, then validate.
    fn into_record(self) -> Result<QuestionRecord, SourceError> {
        let correct = decode_entities(&self.correct_answer);
        let mut options: Vec<String> = self
            .incorrect_answers
            .iter()
            .map(|raw| decode_entities(raw))
            .collect();
        let slot = rand::rng().random_range(0..=options.len());
        options.insert(slot, correct.clone());

        let record = QuestionDraft {
            category: decode_entities(&self.category),
            prompt: decode_entities(&self.question),
            options,
            correct_answer: correct,
        }
        .validate()?;
        Ok(record)
    }
}

/// HTTP client for the trivia API.
#[derive(Clone)]
pub struct TriviaApiClient {
    client: Client,
    base_url: String,
}

impl TriviaApiClient {
    #[must_use]
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_API_BASE_URL)
    }

    #[must_use]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

impl Default for TriviaApiClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl QuestionSource for TriviaApiClient {
    async fn fetch(
        &self,
        count: u32,
        difficulty: Difficulty,
    ) -> Result<Vec<QuestionRecord>, SourceError> {
        let url = format!("{}/api.php", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[
                ("amount", count.to_string()),
                ("difficulty", difficulty.as_str().to_string()),
                ("type", "multiple".to_string()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::HttpStatus(status));
        }

        let payload: TriviaResponse = response.json().await?;
        if payload.response_code != 0 {
            return Err(SourceError::Api {
                code: payload.response_code,
            });
        }
        if payload.results.is_empty() {
            return Err(SourceError::EmptyResults);
        }

        payload
            .results
            .into_iter()
            .map(TriviaQuestion::into_record)
            .collect()
    }
}

/// Decode the HTML entities the trivia API embeds in its payload text.
///
/// Handles the common named entities plus numeric forms (`&#39;`, `&#x27;`).
/// Unrecognized sequences pass through unchanged.
#[must_use]
pub fn decode_entities(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut rest = raw;

    while let Some(start) = rest.find('&') {
        out.push_str(&rest[..start]);
        rest = &rest[start..];

        let Some(end) = rest.find(';') else {
            break;
        };
        let entity = &rest[..=end];
        match decode_entity(entity) {
            Some(decoded) => out.push(decoded),
            None => out.push_str(entity),
        }
        rest = &rest[end + 1..];
    }

    out.push_str(rest);
    out
}

fn decode_entity(entity: &str) -> Option<char> {
    let named = match entity {
        "&amp;" => Some('&'),
        "&lt;" => Some('<'),
        "&gt;" => Some('>'),
        "&quot;" | "&ldquo;" | "&rdquo;" => Some('"'),
        "&apos;" | "&lsquo;" | "&rsquo;" => Some('\''),
        "&ndash;" | "&mdash;" => Some('-'),
        "&hellip;" => Some('…'),
        "&nbsp;" => Some(' '),
        "&eacute;" => Some('é'),
        "&ouml;" => Some('ö'),
        "&uuml;" => Some('ü'),
        _ => None,
    };
    if named.is_some() {
        return named;
    }

    let body = entity.strip_prefix("&#")?.strip_suffix(';')?;
    let code = if let Some(hex) = body.strip_prefix(['x', 'X']) {
        u32::from_str_radix(hex, 16).ok()?
    } else {
        body.parse::<u32>().ok()?
    };
    char::from_u32(code)
}

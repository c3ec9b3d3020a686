//! JSON request shape for `/suggest` and its mapping onto [`ConstraintSet`].

use crate::constraints::ConstraintSet;
use crate::corpus::WordCorpus;
use crate::engine;
use crate::error::{RequestError, WireError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const SCHEMA_HELP: &str = r#"Failed to unmarshal the application/json request. Expected Schema:
	"KnownInPosition": map[int]string
	"KnownOutOfPosition": string
	"KnownBad": string
"#;

pub const NO_WORDS: &str = "Unable to find any words.";

/// Request body as sent by the client.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct WireChoices {
    pub known_in_position: BTreeMap<String, String>,
    pub known_out_of_position: String,
    pub known_bad: String,
}

impl TryFrom<WireChoices> for ConstraintSet {
    type Error = WireError;

    fn try_from(wire: WireChoices) -> Result<Self, Self::Error> {
        let mut constraints = ConstraintSet::new();

        for (key, value) in &wire.known_in_position {
            let position: usize = key
                .trim()
                .parse()
                .map_err(|_| WireError::InvalidPosition(key.clone()))?;
            // Only the first letter of each value counts.
            let c = value
                .chars()
                .next()
                .ok_or(WireError::EmptyLetter(position))?;
            constraints.known_in_position.insert(position, c);
        }

        constraints.known_out_of_position = wire.known_out_of_position.chars().collect();
        constraints.known_bad = wire.known_bad.chars().collect();

        Ok(constraints)
    }
}

/// Result of a well-formed query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SuggestOutcome {
    Words(Vec<String>),
    NoWords,
}

impl SuggestOutcome {
    pub fn from_words(words: Vec<&str>) -> Self {
        if words.is_empty() {
            SuggestOutcome::NoWords
        } else {
            SuggestOutcome::Words(words.into_iter().map(str::to_string).collect())
        }
    }
}

/// Decode, validate and answer one request body against the corpus.
pub fn answer(corpus: &WordCorpus, body: &[u8]) -> Result<SuggestOutcome, RequestError> {
    let wire: WireChoices = serde_json::from_slice(body)?;
    let constraints = ConstraintSet::try_from(wire)?;
    constraints.validate(corpus.word_length())?;

    Ok(SuggestOutcome::from_words(engine::suggest_words(
        corpus,
        &constraints,
    )))
}

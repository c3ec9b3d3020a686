//! Error types.
//!
//! Every failure is detected at a boundary (corpus loading, request decoding,
//! constraint validation). The filtering engine itself never fails.

use std::path::PathBuf;

/// Failure to load the word corpus.
#[derive(Debug, thiserror::Error)]
pub enum CorpusError {
    #[error("failed to read word list {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read word list: {0}")]
    Read(#[from] std::io::Error),

    #[error("word length {0} must be between 1 and {max}", max = crate::corpus::MAX_WORD_LENGTH)]
    WordLength(usize),
}

/// A constraint set that must be rejected before filtering.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConstraintError {
    #[error("Conflicting configuration with letter '{letter}'.")]
    Conflict { letter: char },

    #[error("Position {position} is outside a word of length {word_length}.")]
    PositionOutOfRange { position: usize, word_length: usize },
}

/// A guess and feedback pattern that can't be turned into constraints.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FeedbackError {
    #[error("guess '{guess}' has {guess_len} letters but the pattern has {pattern_len}")]
    LengthMismatch {
        guess: String,
        guess_len: usize,
        pattern_len: usize,
    },

    #[error("invalid feedback pattern '{0}' (use g=green, y=yellow, b=gray)")]
    InvalidPattern(String),
}

/// A structurally valid request whose values don't map onto constraints.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WireError {
    #[error("KnownInPosition key '{0}' is not a position")]
    InvalidPosition(String),

    #[error("KnownInPosition value for position {0} is empty")]
    EmptyLetter(usize),
}

/// Everything that stops a `/suggest` request before it reaches the engine.
#[derive(Debug, thiserror::Error)]
pub enum RequestError {
    #[error("{0}")]
    Malformed(#[from] serde_json::Error),

    #[error(transparent)]
    Wire(#[from] WireError),

    #[error(transparent)]
    Constraint(#[from] ConstraintError),
}

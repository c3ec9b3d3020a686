//! # Wordle Suggest
//!
//! Narrows a word list to the words consistent with what previous guesses
//! revealed: letters confirmed at a position, letters present elsewhere, and
//! letters absent from the word.
//!
//! Each query builds a position index and a character index over the corpus
//! and filters by set intersection and subtraction.

pub mod config;
pub mod constraints;
pub mod corpus;
pub mod engine;
pub mod error;
pub mod feedback;
pub mod index;
pub mod server;
pub mod wire;

pub use config::ServerConfig;
pub use constraints::ConstraintSet;
pub use corpus::{WordCorpus, WordId, MAX_WORD_LENGTH};
pub use engine::{scan, suggest, suggest_words};
pub use error::{ConstraintError, CorpusError, FeedbackError, RequestError, WireError};
pub use feedback::{Feedback, FeedbackPattern};
pub use index::{CharacterIndex, Indices, PositionIndex};
pub use wire::{SuggestOutcome, WireChoices};

/// Default word length for Wordle
pub const WORD_LENGTH: usize = 5;

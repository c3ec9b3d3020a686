//! Lookup structures derived from a [`WordCorpus`].
//!
//! Both indices are rebuilt for every query and hold only [`WordId`] handles.

use crate::corpus::{WordCorpus, WordId};
use std::collections::{HashMap, HashSet};

pub type WordSet = HashSet<WordId>;
pub type CharMap = HashMap<char, WordSet>;

/// Words keyed by (position, character).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionIndex {
    positions: Vec<CharMap>,
}

impl PositionIndex {
    pub fn build(corpus: &WordCorpus) -> Self {
        let word_length = corpus.word_length();
        let mut positions = vec![CharMap::new(); word_length];

        for (id, word) in corpus.iter() {
            // Words longer than the configured length only fill the first slots.
            for (i, c) in word.chars().take(word_length).enumerate() {
                positions[i].entry(c).or_default().insert(id);
            }
        }

        Self { positions }
    }

    /// Words with `c` at `position`, or `None` when no word has it there.
    pub fn get(&self, position: usize, c: char) -> Option<&WordSet> {
        self.positions.get(position)?.get(&c)
    }

    /// Number of position slots (the configured word length).
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.iter().all(HashMap::is_empty)
    }
}

/// Words keyed by every character they contain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterIndex {
    chars: CharMap,
}

impl CharacterIndex {
    pub fn build(corpus: &WordCorpus) -> Self {
        let mut chars = CharMap::new();

        for (id, word) in corpus.iter() {
            for c in word.chars() {
                chars.entry(c).or_default().insert(id);
            }
        }

        Self { chars }
    }

    pub fn get(&self, c: char) -> Option<&WordSet> {
        self.chars.get(&c)
    }

    /// Number of distinct characters seen in the corpus.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }
}

/// The per-request pair of indices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Indices {
    pub positions: PositionIndex,
    pub characters: CharacterIndex,
}

impl Indices {
    pub fn build(corpus: &WordCorpus) -> Self {
        Self {
            positions: PositionIndex::build(corpus),
            characters: CharacterIndex::build(corpus),
        }
    }
}

//! What is known about the target word.

use crate::error::ConstraintError;
use std::collections::{BTreeMap, HashSet};

/// Letters learned from previous guesses.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConstraintSet {
    /// Letters confirmed at a position (green)
    pub known_in_position: BTreeMap<usize, char>,
    /// Letters present somewhere in the word (yellow)
    pub known_out_of_position: Vec<char>,
    /// Letters absent from the word (gray)
    pub known_bad: Vec<char>,
}

impl ConstraintSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn in_position(mut self, position: usize, c: char) -> Self {
        self.known_in_position.insert(position, c);
        self
    }

    pub fn out_of_position(mut self, c: char) -> Self {
        self.known_out_of_position.push(c);
        self
    }

    pub fn bad(mut self, c: char) -> Self {
        self.known_bad.push(c);
        self
    }

    /// Letters known to be in the word, wherever they are.
    pub fn known_good(&self) -> HashSet<char> {
        self.known_in_position
            .values()
            .chain(self.known_out_of_position.iter())
            .copied()
            .collect()
    }

    /// Reject sets that can't describe any word of `word_length` letters.
    ///
    /// Bad letters are checked in the order they were given, so the reported
    /// letter is the first offending one.
    pub fn validate(&self, word_length: usize) -> Result<(), ConstraintError> {
        if let Some(&position) = self.known_in_position.keys().find(|&&p| p >= word_length) {
            return Err(ConstraintError::PositionOutOfRange {
                position,
                word_length,
            });
        }

        let good = self.known_good();
        match self.known_bad.iter().find(|c| good.contains(c)) {
            Some(&letter) => Err(ConstraintError::Conflict { letter }),
            None => Ok(()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.constraint_count() == 0
    }

    pub fn constraint_count(&self) -> usize {
        self.known_in_position.len() + self.known_out_of_position.len() + self.known_bad.len()
    }
}

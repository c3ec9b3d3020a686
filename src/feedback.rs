//! Turning a guess and its colour feedback into constraints.
//!
//! The game reports green/yellow/gray for every letter of a guess. This module
//! parses that report and folds it into a [`ConstraintSet`].

use crate::constraints::ConstraintSet;
use crate::error::FeedbackError;

/// Represents the feedback for a single letter position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feedback {
    /// Correct letter in correct position (green)
    Correct,
    /// Correct letter in wrong position (yellow)
    Present,
    /// Letter not in word (gray)
    Absent,
}

impl Feedback {
    /// Convert to a character for display
    pub fn to_char(self) -> char {
        match self {
            Feedback::Correct => '🟩',
            Feedback::Present => '🟨',
            Feedback::Absent => '⬛',
        }
    }

    /// Parse from a character (g=green, y=yellow, b=black/gray)
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'g' | '2' => Some(Feedback::Correct),
            'y' | '1' => Some(Feedback::Present),
            'b' | 'x' | '0' | '.' => Some(Feedback::Absent),
            _ => None,
        }
    }
}

/// Feedback for every letter of one guess.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FeedbackPattern(Vec<Feedback>);

impl FeedbackPattern {
    pub fn new(feedbacks: Vec<Feedback>) -> Self {
        Self(feedbacks)
    }

    /// Parse a pattern from a string like "gybbb" or "21000"
    pub fn parse(s: &str, word_length: usize) -> Option<Self> {
        let feedbacks = s
            .chars()
            .map(Feedback::from_char)
            .collect::<Option<Vec<_>>>()?;
        if feedbacks.len() != word_length {
            return None;
        }
        Some(Self(feedbacks))
    }

    pub fn feedbacks(&self) -> &[Feedback] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn is_win(&self) -> bool {
        self.0.iter().all(|&f| f == Feedback::Correct)
    }

    /// Display as emoji string
    pub fn to_emoji_string(&self) -> String {
        self.0.iter().map(|f| f.to_char()).collect()
    }
}

impl std::fmt::Display for FeedbackPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_emoji_string())
    }
}

impl ConstraintSet {
    /// Fold the feedback for `guess` into this set.
    ///
    /// A gray letter is only recorded as bad when it isn't already known to be
    /// in the word: guessing a letter twice can colour one copy green or yellow
    /// and the other gray.
    pub fn record_guess(
        &mut self,
        guess: &str,
        pattern: &FeedbackPattern,
    ) -> Result<(), FeedbackError> {
        let letters: Vec<char> = guess.chars().collect();
        if letters.len() != pattern.len() {
            return Err(FeedbackError::LengthMismatch {
                guess: guess.to_string(),
                guess_len: letters.len(),
                pattern_len: pattern.len(),
            });
        }

        let pairs: Vec<(char, Feedback)> = letters
            .into_iter()
            .zip(pattern.feedbacks().iter().copied())
            .collect();

        for (i, &(c, fb)) in pairs.iter().enumerate() {
            match fb {
                Feedback::Correct => {
                    self.known_in_position.insert(i, c);
                }
                Feedback::Present => {
                    if !self.known_out_of_position.contains(&c) {
                        self.known_out_of_position.push(c);
                    }
                }
                Feedback::Absent => {}
            }
        }

        // Gray letters last, so a green or yellow copy later in the guess wins.
        let good = self.known_good();
        for &(c, fb) in &pairs {
            if fb == Feedback::Absent && !good.contains(&c) && !self.known_bad.contains(&c) {
                self.known_bad.push(c);
            }
        }

        Ok(())
    }

    /// Parse `guess:pattern` (e.g. `crane:gybbb`) and fold it in.
    pub fn record_guess_str(&mut self, entry: &str, word_length: usize) -> Result<(), FeedbackError> {
        let (guess, pattern) = entry
            .split_once(':')
            .ok_or_else(|| FeedbackError::InvalidPattern(entry.to_string()))?;
        let pattern = FeedbackPattern::parse(pattern, word_length)
            .ok_or_else(|| FeedbackError::InvalidPattern(pattern.to_string()))?;
        self.record_guess(guess, &pattern)
    }
}

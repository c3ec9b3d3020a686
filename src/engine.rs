//! Constraint filtering over the corpus indices.
//!
//! Note that this approach can still suggest impossible words. The position
//! where an out-of-position letter was discovered is not taken into account:
//! if a letter is yellow at position 0 we'd want only words with that letter
//! at positions 1-4, but the character index still admits position 0.

use crate::constraints::ConstraintSet;
use crate::corpus::{WordCorpus, WordId};
use crate::index::{Indices, WordSet};
use rayon::prelude::*;
use tracing::debug;

/// Narrow `candidates` to the words also in `other`.
///
/// Iterates whichever side is smaller, so the cost is O(min(|a|, |b|)).
/// `other` is only read.
pub fn intersect(candidates: &mut WordSet, other: Option<&WordSet>) {
    let Some(other) = other else {
        candidates.clear();
        return;
    };

    if candidates.len() <= other.len() {
        candidates.retain(|id| other.contains(id));
    } else {
        *candidates = other
            .iter()
            .filter(|id| candidates.contains(*id))
            .copied()
            .collect();
    }
}

/// Filter the corpus with prebuilt indices.
///
/// Results come back in corpus order. An empty result means no word fits.
pub fn suggest<'a>(
    corpus: &'a WordCorpus,
    indices: &Indices,
    constraints: &ConstraintSet,
) -> Vec<&'a str> {
    // Start with every word as a candidate; only this set is mutated.
    let mut candidates: WordSet = corpus.ids().collect();

    for (&position, &c) in &constraints.known_in_position {
        intersect(&mut candidates, indices.positions.get(position, c));
    }

    for &c in &constraints.known_out_of_position {
        intersect(&mut candidates, indices.characters.get(c));
    }

    for &c in &constraints.known_bad {
        if let Some(words) = indices.characters.get(c) {
            if words.len() < candidates.len() {
                for id in words {
                    candidates.remove(id);
                }
            } else {
                candidates.retain(|id| !words.contains(id));
            }
        }
    }

    let mut ids: Vec<WordId> = candidates.into_iter().collect();
    ids.sort_unstable();

    debug!(
        candidates = ids.len(),
        constraints = constraints.constraint_count(),
        "filtered corpus"
    );

    ids.into_iter().map(|id| corpus.word(id)).collect()
}

/// Build fresh indices for this query and filter with them.
pub fn suggest_words<'a>(corpus: &'a WordCorpus, constraints: &ConstraintSet) -> Vec<&'a str> {
    let indices = Indices::build(corpus);
    suggest(corpus, &indices, constraints)
}

/// Check a single word against the constraints without any index.
///
/// Agrees with [`suggest`] word for word, including the out-of-position gap.
pub fn matches(word: &str, word_length: usize, constraints: &ConstraintSet) -> bool {
    let in_position = constraints
        .known_in_position
        .iter()
        .all(|(&p, &c)| p < word_length && word.chars().nth(p) == Some(c));

    in_position
        && constraints
            .known_out_of_position
            .iter()
            .all(|&c| word.contains(c))
        && !constraints.known_bad.iter().any(|&c| word.contains(c))
}

/// Linear scan of the whole corpus, in parallel. Results in corpus order.
pub fn scan<'a>(corpus: &'a WordCorpus, constraints: &ConstraintSet) -> Vec<&'a str> {
    let word_length = corpus.word_length();
    corpus
        .words()
        .par_iter()
        .filter(|word| matches(word, word_length, constraints))
        .map(String::as_str)
        .collect()
}

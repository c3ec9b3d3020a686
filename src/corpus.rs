//! The word corpus.
//!
//! The corpus owns every word string. Everything built per request (indices,
//! candidate sets) refers to words through [`WordId`] handles.

use crate::error::CorpusError;
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, info, warn};

/// Longest word length a corpus accepts. Each position gets its own index bucket.
pub const MAX_WORD_LENGTH: usize = 32;

/// Handle to a word owned by a [`WordCorpus`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WordId(u32);

impl WordId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// An immutable, deduplicated list of candidate words in first-seen order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordCorpus {
    words: Vec<String>,
    word_length: usize,
    malformed: usize,
}

impl WordCorpus {
    /// Build a corpus from any sequence of words.
    ///
    /// Surrounding whitespace is trimmed and blank entries are dropped. Words
    /// whose length differs from `word_length` are kept and counted; they
    /// only populate the position slots they actually have.
    pub fn from_words<I, S>(words: I, word_length: usize) -> Result<Self, CorpusError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if !(1..=MAX_WORD_LENGTH).contains(&word_length) {
            return Err(CorpusError::WordLength(word_length));
        }

        let mut seen = HashSet::new();
        let mut kept = Vec::new();
        let mut malformed = 0;

        for word in words {
            let word = word.as_ref().trim();
            if word.is_empty() || !seen.insert(word.to_string()) {
                continue;
            }
            if word.chars().count() != word_length {
                debug!(word, "word length differs from configured length");
                malformed += 1;
            }
            kept.push(word.to_string());
        }

        if malformed > 0 {
            warn!(
                malformed,
                word_length, "corpus contains words of unexpected length"
            );
        }

        Ok(Self {
            words: kept,
            word_length,
            malformed,
        })
    }

    /// Read one word per line.
    ///
    /// Lines that aren't valid UTF-8 are decoded lossily rather than failing
    /// the whole list.
    pub fn from_reader<R: BufRead>(reader: R, word_length: usize) -> Result<Self, CorpusError> {
        Self::from_words(read_lines(reader)?, word_length)
    }

    /// Load a word list file, one word per line.
    pub fn load(path: impl AsRef<Path>, word_length: usize) -> Result<Self, CorpusError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| CorpusError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let lines = read_lines(BufReader::new(file)).map_err(|source| CorpusError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let corpus = Self::from_words(lines, word_length)?;
        info!(
            path = %path.display(),
            words = corpus.len(),
            "loaded word list"
        );
        Ok(corpus)
    }

    pub fn word_length(&self) -> usize {
        self.word_length
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Number of words whose length differs from [`Self::word_length`].
    pub fn malformed_count(&self) -> usize {
        self.malformed
    }

    /// Resolve a handle. Handles are only valid for the corpus that issued them.
    pub fn word(&self, id: WordId) -> &str {
        &self.words[id.index()]
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }

    pub fn ids(&self) -> impl Iterator<Item = WordId> + '_ {
        (0..self.words.len()).map(|i| WordId(i as u32))
    }

    pub fn iter(&self) -> impl Iterator<Item = (WordId, &str)> + '_ {
        self.words
            .iter()
            .enumerate()
            .map(|(i, w)| (WordId(i as u32), w.as_str()))
    }

    pub(crate) fn words(&self) -> &[String] {
        &self.words
    }
}

fn read_lines<R: BufRead>(reader: R) -> std::io::Result<Vec<String>> {
    let mut lines = Vec::new();
    let mut invalid = 0;

    for line in reader.split(b'\n') {
        let line = line?;
        match String::from_utf8(line) {
            Ok(line) => lines.push(line),
            Err(err) => {
                invalid += 1;
                lines.push(String::from_utf8_lossy(err.as_bytes()).into_owned());
            }
        }
    }

    if invalid > 0 {
        warn!(invalid, "word list contains lines that are not valid UTF-8");
    }
    Ok(lines)
}

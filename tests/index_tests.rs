use wordle_suggest::{CharacterIndex, Indices, PositionIndex, WordCorpus, WORD_LENGTH};

fn corpus(words: &[&str]) -> WordCorpus {
    WordCorpus::from_words(words, WORD_LENGTH).unwrap()
}

fn words_at(corpus: &WordCorpus, index: &PositionIndex, pos: usize, c: char) -> Vec<String> {
    let mut words: Vec<String> = index
        .get(pos, c)
        .map(|set| set.iter().map(|&id| corpus.word(id).to_string()).collect())
        .unwrap_or_default();
    words.sort();
    words
}

#[test]
fn test_position_index_buckets() {
    let corpus = corpus(&["apple", "angle", "crane"]);
    let index = PositionIndex::build(&corpus);

    assert_eq!(index.len(), WORD_LENGTH);
    assert_eq!(words_at(&corpus, &index, 0, 'a'), vec!["angle", "apple"]);
    assert_eq!(words_at(&corpus, &index, 4, 'e'), vec!["angle", "apple", "crane"]);
    assert_eq!(words_at(&corpus, &index, 2, 'a'), vec!["crane"]);
    assert!(index.get(0, 'z').is_none());
    assert!(index.get(WORD_LENGTH, 'a').is_none());
}

#[test]
fn test_character_index_counts_each_word_once() {
    let corpus = corpus(&["apple", "crane"]);
    let index = CharacterIndex::build(&corpus);

    assert_eq!(index.get('p').unwrap().len(), 1);
    assert_eq!(index.get('e').unwrap().len(), 2);
    assert!(index.get('z').is_none());
    assert_eq!(index.len(), 7); // a p l e c r n
}

#[test]
fn test_indexing_is_idempotent() {
    let corpus = corpus(&["slate", "trace", "crate", "raise", "arise"]);
    assert_eq!(Indices::build(&corpus), Indices::build(&corpus));
}

#[test]
fn test_empty_corpus_has_empty_indices() {
    let corpus = corpus(&[]);
    let indices = Indices::build(&corpus);

    assert!(indices.positions.is_empty());
    assert!(indices.characters.is_empty());
}

#[test]
fn test_odd_length_words_are_clamped() {
    let corpus = corpus(&["ab", "abcdefg"]);
    let index = PositionIndex::build(&corpus);

    assert_eq!(words_at(&corpus, &index, 1, 'b'), vec!["ab", "abcdefg"]);
    assert_eq!(words_at(&corpus, &index, 4, 'e'), vec!["abcdefg"]);
    assert!(index.get(5, 'f').is_none());

    // The character index isn't clamped.
    let chars = CharacterIndex::build(&corpus);
    assert_eq!(chars.get('g').unwrap().len(), 1);
}

#[test]
fn test_non_ascii_words_are_indexed_by_char() {
    let corpus = corpus(&["ääkkö"]);
    let index = PositionIndex::build(&corpus);

    assert_eq!(words_at(&corpus, &index, 1, 'ä'), vec!["ääkkö"]);
    assert_eq!(words_at(&corpus, &index, 4, 'ö'), vec!["ääkkö"]);
}

use std::io::{BufReader, Cursor, Read, Write};
use wordle_suggest::{
    ConstraintSet, CorpusError, ServerConfig, WordCorpus, MAX_WORD_LENGTH, WORD_LENGTH,
};

#[test]
fn test_dedup_and_blank_lines() {
    let corpus = WordCorpus::from_words(["crane", "", "slate", "crane", "  ", " trace\r"], WORD_LENGTH)
        .unwrap();

    let words: Vec<&str> = corpus.iter().map(|(_, w)| w).collect();
    assert_eq!(words, vec!["crane", "slate", "trace"]);
    assert_eq!(corpus.len(), 3);
    assert_eq!(corpus.malformed_count(), 0);
}

#[test]
fn test_malformed_words_are_kept_and_counted() {
    let corpus = WordCorpus::from_words(["crane", "ab", "toolong"], WORD_LENGTH).unwrap();

    assert_eq!(corpus.len(), 3);
    assert_eq!(corpus.malformed_count(), 2);
    assert!(corpus.contains("ab"));
}

#[test]
fn test_word_length_bounds() {
    assert!(matches!(
        WordCorpus::from_words(["crane"], 0),
        Err(CorpusError::WordLength(0))
    ));
    assert!(matches!(
        WordCorpus::from_words(["crane"], MAX_WORD_LENGTH + 1),
        Err(CorpusError::WordLength(n)) if n == MAX_WORD_LENGTH + 1
    ));
    assert!(matches!(
        WordCorpus::from_words(["crane"], usize::MAX),
        Err(CorpusError::WordLength(usize::MAX))
    ));

    let widest = WordCorpus::from_words(["crane"], MAX_WORD_LENGTH).unwrap();
    assert_eq!(widest.word_length(), MAX_WORD_LENGTH);
}

#[test]
fn test_from_reader() {
    let corpus = WordCorpus::from_reader(Cursor::new("crane\nslate\n\ntrace\n"), WORD_LENGTH).unwrap();
    assert_eq!(corpus.len(), 3);
    assert_eq!(corpus.word_length(), WORD_LENGTH);
}

#[test]
fn test_non_utf8_line_does_not_fail_the_list() {
    let bytes: &[u8] = b"apple\ncaf\xe9s\nangle\r\n";
    let corpus = WordCorpus::from_reader(Cursor::new(bytes), WORD_LENGTH).unwrap();

    assert_eq!(corpus.len(), 3);
    assert!(corpus.contains("apple"));
    assert!(corpus.contains("angle"));
    assert!(corpus.contains("caf\u{FFFD}s"));

    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(bytes).unwrap();
    let loaded = WordCorpus::load(file.path(), WORD_LENGTH).unwrap();
    assert_eq!(loaded, corpus);
}

struct FailingReader;

impl Read for FailingReader {
    fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
        Err(std::io::Error::new(std::io::ErrorKind::Other, "disk went away"))
    }
}

#[test]
fn test_reader_error_is_reported() {
    let result = WordCorpus::from_reader(BufReader::new(FailingReader), WORD_LENGTH);
    assert!(matches!(result, Err(CorpusError::Read(_))));
}

// A directory opens fine on unix but fails on the first read.
#[cfg(unix)]
#[test]
fn test_read_error_keeps_the_path() {
    let dir = tempfile::tempdir().unwrap();

    match WordCorpus::load(dir.path(), WORD_LENGTH) {
        Err(CorpusError::Io { path, .. }) => assert_eq!(path, dir.path()),
        other => panic!("expected an io error with the path, got {other:?}"),
    }
}

#[test]
fn test_load_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "apple\nangle\nankle\nample").unwrap();

    let config = ServerConfig::new(file.path());
    let corpus = config.load_corpus().unwrap();

    assert_eq!(corpus.len(), 4);
    let results = wordle_suggest::suggest_words(&corpus, &ConstraintSet::new().bad('n'));
    assert_eq!(results, vec!["apple", "ample"]);
}

#[test]
fn test_load_empty_file() {
    let file = tempfile::NamedTempFile::new().unwrap();
    let corpus = WordCorpus::load(file.path(), WORD_LENGTH).unwrap();
    assert!(corpus.is_empty());
}

#[test]
fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.txt");

    match WordCorpus::load(&path, WORD_LENGTH) {
        Err(CorpusError::Io { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("expected an io error, got {other:?}"),
    }
}

#[test]
fn test_ids_resolve_to_words() {
    let corpus = WordCorpus::from_words(["crane", "slate"], WORD_LENGTH).unwrap();
    let ids: Vec<_> = corpus.ids().collect();

    assert_eq!(corpus.word(ids[0]), "crane");
    assert_eq!(corpus.word(ids[1]), "slate");
    assert_eq!(ids[1].index(), 1);
}

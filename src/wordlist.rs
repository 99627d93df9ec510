//! Dictionary word list
//!
//! Loads the set of known English words used to flag guessable passwords.
//! The set is built once at startup and handed to the evaluator.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable overriding the word list location.
pub const WORDLIST_PATH_ENV: &str = "PWD_WORDLIST_PATH";

pub const DEFAULT_WORDLIST_PATH: &str = "./assets/words.txt";

#[derive(Error, Debug)]
pub enum WordListError {
    #[error("Word list file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read word list file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Word list file is empty")]
    EmptyFile,
    #[cfg(feature = "fetch")]
    #[error("Failed to download word list: {0}")]
    Fetch(#[from] reqwest::Error),
}

/// Immutable set of lowercase dictionary words.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordSet {
    words: HashSet<String>,
}

impl WordSet {
    /// A word set with no entries. Dictionary checks against it always pass.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds a word set from arbitrary words; entries are trimmed and lowercased.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        Self { words }
    }

    /// Parses newline-separated words.
    pub fn parse(content: &str) -> Self {
        Self::from_words(content.lines())
    }

    /// Loads a word list file, one word per line.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - File does not exist
    /// - File cannot be read
    /// - File has no words
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, WordListError> {
        let path = path.as_ref();

        if !path.exists() {
            #[cfg(feature = "tracing")]
            tracing::debug!("Word list not found at {:?}", path);
            return Err(WordListError::FileNotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path)?;
        let set = Self::parse(&content);

        if set.is_empty() {
            #[cfg(feature = "tracing")]
            tracing::debug!("Word list at {:?} has no words", path);
            return Err(WordListError::EmptyFile);
        }

        #[cfg(feature = "tracing")]
        tracing::info!("Word list loaded: {} words from {:?}", set.len(), path);

        Ok(set)
    }

    /// Case-insensitive membership test on the whole string.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for WordSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_words(iter)
    }
}

/// Returns the word list file path.
///
/// Priority:
/// 1. Environment variable `PWD_WORDLIST_PATH`
/// 2. Default path `./assets/words.txt`
pub fn get_wordlist_path() -> PathBuf {
    std::env::var(WORDLIST_PATH_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_WORDLIST_PATH))
}

/// Loads the word list from the configured path.
pub fn load_wordlist() -> Result<WordSet, WordListError> {
    WordSet::from_path(get_wordlist_path())
}

/// Loads a word list, falling back to an empty set when it is unavailable.
///
/// A missing dictionary only makes the dictionary-word rule permissive, so
/// the failure is logged and swallowed here.
pub fn load_or_empty<P: AsRef<Path>>(path: P) -> WordSet {
    match WordSet::from_path(path.as_ref()) {
        Ok(set) => set,
        Err(_e) => {
            #[cfg(feature = "tracing")]
            tracing::warn!("Dictionary check disabled: {}", _e);
            WordSet::empty()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// Helper to safely set env var in tests
    fn set_env(key: &str, value: &str) {
        // SAFETY: env-mutating tests are serialized
        unsafe { std::env::set_var(key, value); }
    }

    /// Helper to safely remove env var in tests
    fn remove_env(key: &str) {
        // SAFETY: env-mutating tests are serialized
        unsafe { std::env::remove_var(key); }
    }

    fn setup_with_tempfile(words: &[&str]) -> NamedTempFile {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        for word in words {
            writeln!(temp_file, "{}", word).expect("Failed to write");
        }
        temp_file
    }

    #[test]
    #[serial]
    fn test_get_wordlist_path_default() {
        remove_env(WORDLIST_PATH_ENV);

        let path = get_wordlist_path();
        assert_eq!(path, PathBuf::from("./assets/words.txt"));
    }

    #[test]
    #[serial]
    fn test_get_wordlist_path_from_env() {
        let custom_path = "/custom/path/words.txt";
        set_env(WORDLIST_PATH_ENV, custom_path);

        let path = get_wordlist_path();
        assert_eq!(path, PathBuf::from(custom_path));

        remove_env(WORDLIST_PATH_ENV);
    }

    #[test]
    #[serial]
    fn test_load_wordlist_from_env() {
        let temp_file = setup_with_tempfile(&["apple", "banana"]);
        set_env(WORDLIST_PATH_ENV, temp_file.path().to_str().unwrap());

        let set = load_wordlist().expect("word list should load");
        assert_eq!(set.len(), 2);
        assert!(set.contains("banana"));

        remove_env(WORDLIST_PATH_ENV);
    }

    #[test]
    fn test_from_path_file_not_found() {
        let result = WordSet::from_path("/nonexistent/path/words.txt");
        match result {
            Err(WordListError::FileNotFound(path)) => {
                assert_eq!(path, PathBuf::from("/nonexistent/path/words.txt"));
            }
            other => panic!("Expected FileNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_from_path_empty_file() {
        let temp_file = setup_with_tempfile(&["", "   "]);
        let result = WordSet::from_path(temp_file.path());
        assert!(matches!(result, Err(WordListError::EmptyFile)));
    }

    #[test]
    fn test_from_path_normalizes_entries() {
        let temp_file = setup_with_tempfile(&["Password", "  qwerty  ", "", "password"]);
        let set = WordSet::from_path(temp_file.path()).expect("word list should load");

        assert_eq!(set.len(), 2);
        assert!(set.contains("password"));
        assert!(set.contains("qwerty"));
    }

    #[test]
    fn test_contains_is_case_insensitive() {
        let set = WordSet::from_words(["dragon"]);
        assert!(set.contains("dragon"));
        assert!(set.contains("DRAGON"));
        assert!(set.contains("DrAgOn"));
    }

    #[test]
    fn test_contains_matches_whole_string_only() {
        let set = WordSet::from_words(["dragon"]);
        assert!(!set.contains("dragon1"));
        assert!(!set.contains("drag"));
        assert!(!set.contains(" dragon"));
    }

    #[cfg(feature = "tracing")]
    #[test]
    fn test_load_or_empty_missing_file_warns_once() {
        use std::sync::{Arc, Mutex};
        use tracing_subscriber::layer::{Context, SubscriberExt};

        struct LevelRecorder(Arc<Mutex<Vec<tracing::Level>>>);

        impl<S: tracing::Subscriber> tracing_subscriber::Layer<S> for LevelRecorder {
            fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
                self.0.lock().unwrap().push(*event.metadata().level());
            }
        }

        let levels = Arc::new(Mutex::new(Vec::new()));
        let subscriber = tracing_subscriber::registry().with(LevelRecorder(levels.clone()));
        let set = tracing::subscriber::with_default(subscriber, || {
            load_or_empty("/nonexistent/path/words.txt")
        });

        assert!(set.is_empty());
        let levels = levels.lock().unwrap();
        assert!(!levels.contains(&tracing::Level::ERROR), "levels: {:?}", levels);
        assert_eq!(
            levels.iter().filter(|l| **l == tracing::Level::WARN).count(),
            1,
            "levels: {:?}",
            levels
        );
    }

    #[test]
    fn test_load_or_empty_missing_file() {
        let set = load_or_empty("/nonexistent/path/words.txt");
        assert!(set.is_empty());
        assert!(!set.contains("anything"));
    }

    #[test]
    fn test_collect_into_word_set() {
        let set: WordSet = vec!["One", "two"].into_iter().collect();
        assert!(set.contains("one"));
        assert!(set.contains("TWO"));
    }
}

//! One-time word list acquisition.
//!
//! When no local copy exists the list is downloaded once and cached on disk;
//! later runs load the cached file directly.

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::wordlist::{WordListError, WordSet};

/// Environment variable overriding the download location.
pub const WORDLIST_URL_ENV: &str = "PWD_WORDLIST_URL";

pub const DEFAULT_WORDLIST_URL: &str =
    "https://raw.githubusercontent.com/dwyl/english-words/master/words_alpha.txt";

/// Returns the word list download URL.
///
/// Priority:
/// 1. Environment variable `PWD_WORDLIST_URL`
/// 2. [`DEFAULT_WORDLIST_URL`]
pub fn get_wordlist_url() -> String {
    std::env::var(WORDLIST_URL_ENV).unwrap_or_else(|_| DEFAULT_WORDLIST_URL.to_string())
}

/// Downloads the word list from `url` and writes it to `path`.
///
/// Parent directories are created as needed. Returns the number of bytes
/// written.
pub fn fetch_wordlist<P: AsRef<Path>>(path: P, url: &str) -> Result<usize, WordListError> {
    let path = path.as_ref();

    #[cfg(feature = "tracing")]
    tracing::info!("Downloading word list from {} to {:?}", url, path);

    let body = reqwest::blocking::get(url)?.error_for_status()?.text()?;
    if body.trim().is_empty() {
        return Err(WordListError::EmptyFile);
    }

    store_wordlist(path, &body)?;
    Ok(body.len())
}

/// Writes `body` to `path` through a temporary file in the same directory,
/// so `path` only ever holds a complete list.
fn store_wordlist(path: &Path, body: &str) -> Result<(), WordListError> {
    let parent = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    std::fs::create_dir_all(parent)?;

    let mut file = NamedTempFile::new_in(parent)?;
    file.write_all(body.as_bytes())?;
    file.as_file().sync_all()?;
    file.persist(path).map_err(|e| e.error)?;
    Ok(())
}

/// Loads the cached word list at `path`, downloading it first if absent.
pub fn acquire_wordlist<P: AsRef<Path>>(path: P, url: &str) -> Result<WordSet, WordListError> {
    let path = path.as_ref();

    if !path.exists() {
        fetch_wordlist(path, url)?;
    }

    WordSet::from_path(path)
}

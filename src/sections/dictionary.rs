//! Dictionary section - checks if the whole password is a known word.

use secrecy::{ExposeSecret, SecretString};

use super::SectionResult;
use crate::types::Suggestion;
use crate::wordlist::WordSet;

/// Flags passwords equal (case-insensitively) to a dictionary word.
pub fn dictionary_section(password: &SecretString, words: &WordSet) -> SectionResult {
    if words.contains(password.expose_secret()) {
        return Some(Suggestion::DictionaryWord);
    }
    None
}

//! Length section - checks password minimum length.

use secrecy::{ExposeSecret, SecretString};

use super::SectionResult;
use crate::types::Suggestion;
use crate::wordlist::WordSet;

pub const MIN_LENGTH: usize = 8;

/// Checks if the password meets minimum length requirements.
///
/// Length is counted in characters, not bytes.
pub fn length_section(password: &SecretString, _words: &WordSet) -> SectionResult {
    if password.expose_secret().chars().count() < MIN_LENGTH {
        return Some(Suggestion::MinLength);
    }
    None
}

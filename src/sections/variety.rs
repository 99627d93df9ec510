//! Character variety sections - letter case, digits, special characters.

use secrecy::{ExposeSecret, SecretString};

use super::SectionResult;
use crate::types::Suggestion;
use crate::wordlist::WordSet;

/// Characters that count as special.
pub const SPECIAL_CHARS: &str = "!@#$%^&*(),.?\":{}|<>";

fn is_special(c: char) -> bool {
    SPECIAL_CHARS.contains(c)
}

/// Requires at least one ASCII uppercase and one ASCII lowercase letter.
pub fn mixed_case_section(password: &SecretString, _words: &WordSet) -> SectionResult {
    let pwd = password.expose_secret();
    let has_upper = pwd.chars().any(|c| c.is_ascii_uppercase());
    let has_lower = pwd.chars().any(|c| c.is_ascii_lowercase());

    if !(has_upper && has_lower) {
        return Some(Suggestion::MixedCase);
    }
    None
}

pub fn digit_section(password: &SecretString, _words: &WordSet) -> SectionResult {
    if !password.expose_secret().chars().any(|c| c.is_ascii_digit()) {
        return Some(Suggestion::Digit);
    }
    None
}

pub fn special_char_section(password: &SecretString, _words: &WordSet) -> SectionResult {
    if !password.expose_secret().chars().any(is_special) {
        return Some(Suggestion::SpecialChar);
    }
    None
}

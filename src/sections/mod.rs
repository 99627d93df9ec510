//! Password evaluation sections
//!
//! Each section checks one rule and reports the unmet rule, if any.

mod dictionary;
mod length;
mod variety;

pub use dictionary::dictionary_section;
pub use length::{MIN_LENGTH, length_section};
pub use variety::{SPECIAL_CHARS, digit_section, mixed_case_section, special_char_section};

use secrecy::SecretString;

use crate::types::Suggestion;
use crate::wordlist::WordSet;

/// Result type for section evaluation functions.
/// - `Some(suggestion)` - Section failed
/// - `None` - Section passed
pub type SectionResult = Option<Suggestion>;

/// Signature shared by every section.
pub type Section = fn(&SecretString, &WordSet) -> SectionResult;

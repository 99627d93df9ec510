//! Password strength evaluator - main evaluation logic.

use secrecy::SecretString;

use crate::sections::{
    Section, dictionary_section, digit_section, length_section, mixed_case_section,
    special_char_section,
};
use crate::types::Evaluation;
use crate::wordlist::WordSet;

/// Evaluates passwords against a fixed dictionary.
#[derive(Debug, Clone, Default)]
pub struct Evaluator {
    words: WordSet,
}

impl Evaluator {
    pub fn new(words: WordSet) -> Self {
        Self { words }
    }

    pub fn words(&self) -> &WordSet {
        &self.words
    }

    /// Evaluates password strength.
    ///
    /// A password shorter than the minimum length is rejected by the length
    /// rule alone. Otherwise every remaining rule runs and all unmet rules
    /// are reported, in order.
    pub fn evaluate(&self, password: &SecretString) -> Evaluation {
        evaluate_password_strength(password, &self.words)
    }
}

/// Evaluates password strength against `words`.
///
/// # Returns
/// An `Evaluation` holding the verdict and the suggestions.
pub fn evaluate_password_strength(password: &SecretString, words: &WordSet) -> Evaluation {
    if let Some(suggestion) = length_section(password, words) {
        #[cfg(feature = "tracing")]
        tracing::debug!("section length failed, skipping remaining sections");
        return Evaluation::from_findings(vec![suggestion]);
    }

    // Orchestrator: execute sections in sequence
    let sections: [(&str, Section); 4] = [
        ("mixed_case", mixed_case_section),
        ("digit", digit_section),
        ("special", special_char_section),
        ("dictionary", dictionary_section),
    ];

    let mut findings = Vec::new();
    for (_section_name, section_fn) in sections {
        if let Some(suggestion) = section_fn(password, words) {
            #[cfg(feature = "tracing")]
            tracing::debug!("section {} failed", _section_name);
            findings.push(suggestion);
        }
    }

    Evaluation::from_findings(findings)
}

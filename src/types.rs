//! Evaluation result types.

use std::fmt;

/// Message returned in place of suggestions when a password passes every rule.
pub const STRONG_MESSAGE: &str = "Excellent! Your password is strong.";

/// Binary strength classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    Weak,
    Strong,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Weak => write!(f, "Weak"),
            Verdict::Strong => write!(f, "Strong"),
        }
    }
}

/// An unmet rule, reported back to the user as an improvement hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suggestion {
    MinLength,
    MixedCase,
    Digit,
    SpecialChar,
    DictionaryWord,
}

impl Suggestion {
    pub fn message(&self) -> &'static str {
        match self {
            Suggestion::MinLength => "Use at least 8 characters.",
            Suggestion::MixedCase => "Use both uppercase and lowercase letters.",
            Suggestion::Digit => "Include at least one number.",
            Suggestion::SpecialChar => "Include at least one special character (!, @, #, etc).",
            Suggestion::DictionaryWord => "Avoid using dictionary words.",
        }
    }
}

impl fmt::Display for Suggestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Outcome of a single evaluation.
///
/// `suggestions` is never empty: a weak password lists every unmet rule in
/// evaluation order, a strong one carries [`STRONG_MESSAGE`] alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    pub verdict: Verdict,
    pub suggestions: Vec<String>,
}

impl Evaluation {
    /// Builds an evaluation from the unmet rules.
    pub fn from_findings(findings: Vec<Suggestion>) -> Self {
        if findings.is_empty() {
            return Self {
                verdict: Verdict::Strong,
                suggestions: vec![STRONG_MESSAGE.to_string()],
            };
        }
        Self {
            verdict: Verdict::Weak,
            suggestions: findings.iter().map(ToString::to_string).collect(),
        }
    }

    pub fn is_strong(&self) -> bool {
        self.verdict == Verdict::Strong
    }

    /// Meter value in percent: 33 for a weak password, 100 for a strong one.
    pub fn progress(&self) -> u8 {
        match self.verdict {
            Verdict::Weak => 33,
            Verdict::Strong => 100,
        }
    }

    pub fn into_parts(self) -> (Verdict, Vec<String>) {
        (self.verdict, self.suggestions)
    }
}

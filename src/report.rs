//! Plain-text rendering of evaluation results.

use std::fmt::Write;

use crate::types::{Evaluation, Verdict};

/// Message shown when there is nothing to evaluate.
pub const EMPTY_INPUT_MESSAGE: &str = "Please enter a password.";

pub const TIPS_TITLE: &str = "What makes a strong password?";

pub const TIPS: [&str; 5] = [
    "At least 8 characters",
    "Mix of uppercase and lowercase letters",
    "Include numbers (0-9)",
    "Include special symbols (! @ # $)",
    "Avoid using dictionary words or personal info",
];

const BAR_WIDTH: usize = 30;

fn progress_bar(percent: u8) -> String {
    let filled = BAR_WIDTH * usize::from(percent.min(100)) / 100;
    format!("[{}{}]", "#".repeat(filled), ".".repeat(BAR_WIDTH - filled))
}

/// Renders an evaluation as verdict, meter and bulleted suggestions.
pub fn render_report(evaluation: &Evaluation) -> String {
    let marker = match evaluation.verdict {
        Verdict::Weak => "(!)",
        Verdict::Strong => "(ok)",
    };

    let mut out = String::new();
    let _ = writeln!(out, "Strength: {} {}", evaluation.verdict, marker);
    let _ = writeln!(
        out,
        "Progress: {} {}%",
        progress_bar(evaluation.progress()),
        evaluation.progress()
    );
    let _ = writeln!(out, "Suggestions:");
    for suggestion in &evaluation.suggestions {
        let _ = writeln!(out, "• {}", suggestion);
    }
    out
}

pub fn render_tips() -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", TIPS_TITLE);
    for tip in TIPS {
        let _ = writeln!(out, "✔ {}", tip);
    }
    out
}

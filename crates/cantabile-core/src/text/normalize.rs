//! Prompt text normalizer.
//!
//! Collapses whitespace runs, repeated commas, whitespace before a full
//! stop and a few stuttered words ("and and", "the the", "very very",
//! "really really"). The result never contains two consecutive spaces and
//! normalizing twice gives the same text as normalizing once.

use std::sync::OnceLock;

use regex::Regex;

// Patterns are constant; a failure to compile is a programming error.
fn regex(cell: &'static OnceLock<Regex>, pattern: &str) -> &'static Regex {
    cell.get_or_init(|| Regex::new(pattern).expect("invalid normalizer pattern"))
}

fn whitespace_run() -> &'static Regex {
    static CELL: OnceLock<Regex> = OnceLock::new();
    regex(&CELL, r"\s+")
}

fn comma_run() -> &'static Regex {
    static CELL: OnceLock<Regex> = OnceLock::new();
    regex(&CELL, r",(?:\s*,)+")
}

fn space_before_period() -> &'static Regex {
    static CELL: OnceLock<Regex> = OnceLock::new();
    regex(&CELL, r"\s+\.")
}

/// Words whose immediate repetition is collapsed, with their patterns.
/// Matching is case-sensitive.
fn stutters() -> &'static [(Regex, &'static str)] {
    static CELL: OnceLock<Vec<(Regex, &'static str)>> = OnceLock::new();
    CELL.get_or_init(|| {
        ["and", "the", "very", "really"]
            .into_iter()
            .map(|word| {
                let pattern = format!(r"\b{word}(?:\s+{word})+\b");
                (
                    Regex::new(&pattern).expect("invalid stutter pattern"),
                    word,
                )
            })
            .collect()
    })
}

/// Collapse every whitespace run to a single space and trim the ends.
#[must_use]
pub fn collapse_whitespace(text: &str) -> String {
    whitespace_run().replace_all(text, " ").trim().to_string()
}

/// Normalize prompt text. Total and pure.
#[must_use]
pub fn normalize(text: &str) -> String {
    let mut out = whitespace_run().replace_all(text, " ").into_owned();
    out = comma_run().replace_all(&out, ",").into_owned();
    out = space_before_period().replace_all(&out, ".").into_owned();
    for (pattern, word) in stutters() {
        out = pattern.replace_all(&out, *word).into_owned();
    }
    out.trim().to_string()
}

//! Best-effort leaf translation via glossary substitution.
//!
//! This is a pre-fill aid, not a translator: matching is plain substring
//! containment, applied in glossary order, with no word boundaries, case
//! folding, or longest-match resolution. Anything the glossary cannot touch
//! is wrapped in a review marker instead of being guessed at.

use crate::core::glossary;
use serde_json::Value;

/// Prefix marking a value that needs manual review.
pub const REVIEW_PREFIX: &str = "[TODO:";

/// Inputs this short (in characters) are never wrapped in a review marker;
/// they are usually abbreviations or punctuation.
const MIN_REVIEW_LEN: usize = 3;

/// Translates a catalog leaf. Non-string values pass through unchanged.
pub fn translate_value(value: &Value, language: &str) -> Value {
    match value {
        Value::String(text) => Value::String(translate_text(text, language)),
        other => other.clone(),
    }
}

/// Translates a single string using the terminology table, then the target
/// language's phrase table.
///
/// Each matching entry replaces all occurrences of its source substring;
/// entries fire cumulatively in table order, so a later entry sees the output
/// of earlier ones. If neither pass changed the text and it is longer than
/// [`MIN_REVIEW_LEN`] characters, the original is wrapped as
/// `[TODO: <original>]` for manual review.
pub fn translate_text(text: &str, language: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let mut translated = text.to_string();

    for entry in glossary::TERMINOLOGY {
        if let Some(replacement) = entry.equivalent(language) {
            if translated.contains(entry.source) {
                translated = translated.replace(entry.source, replacement);
            }
        }
    }

    if let Some(phrases) = glossary::phrases(language) {
        for (source, replacement) in phrases {
            if translated.contains(source) {
                translated = translated.replace(source, replacement);
            }
        }
    }

    if translated == text && text.chars().count() > MIN_REVIEW_LEN {
        return format!("{REVIEW_PREFIX} {text}]");
    }

    translated
}

/// Whether a leaf carries the manual-review marker.
pub fn needs_review(value: &Value) -> bool {
    matches!(value, Value::String(s) if s.starts_with(REVIEW_PREFIX))
}

// Label normalization and validation.

use std::collections::HashSet;

use super::types::{MAX_LABEL_LENGTH, MIN_LABEL_LENGTH};

/// Trim, collapse inner whitespace runs and lower-case.
pub fn normalize_label(label: &str) -> String {
    label
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// A label is valid if it is 2-30 characters, not blank, and has nothing
/// that would need escaping inside a JSON string (quotes, backslashes,
/// control characters). Stored label sets are matched by substring on the
/// serialized form, so an escaped label would never be found.
pub fn validate_label(label: &str) -> bool {
    if label.trim().is_empty() {
        return false;
    }
    let len = label.chars().count();
    if !(MIN_LABEL_LENGTH..=MAX_LABEL_LENGTH).contains(&len) {
        return false;
    }
    !label
        .chars()
        .any(|c| c == '"' || c == '\\' || c.is_control())
}

/// Normalize and validate ranked candidates in order, dropping invalid
/// labels and duplicates, until `cap` labels are collected.
pub fn finalize<I, S>(ranked: I, cap: usize) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = HashSet::new();
    let mut labels = Vec::new();
    for candidate in ranked {
        if labels.len() >= cap {
            break;
        }
        let normalized = normalize_label(candidate.as_ref());
        if validate_label(&normalized) && seen.insert(normalized.clone()) {
            labels.push(normalized);
        }
    }
    labels
}

// Output formatting: colored terminal display and JSON.

pub mod terminal;

use anyhow::{Context, Result};
use serde::Serialize;

/// Shorten text for a one-line preview, appending "..." when cut.
///
/// Counts characters, not bytes, so CJK text and emoji never split mid-char.
pub fn preview(text: &str, max_chars: usize) -> String {
    let mut chars = text.chars();
    let head: String = chars.by_ref().take(max_chars).collect();
    if chars.next().is_some() {
        format!("{head}...")
    } else {
        head
    }
}

/// Pretty-printed JSON for stdout.
pub fn to_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).context("Failed to serialize output as JSON")
}

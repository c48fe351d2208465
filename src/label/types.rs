// Label result type and the constants callers rely on.
//
// The constants are part of the public contract: the storage layer and any
// AI-backed labeler outside this crate read the same values.

use serde::{Deserialize, Serialize};

/// Minimum cleaned content length (in characters) required to generate labels.
pub const MIN_CONTENT_LENGTH: usize = 50;

/// Hard maximum number of labels per article. Requests outside `1..=MAX_LABELS`
/// are clamped to this value.
pub const MAX_LABELS: usize = 5;

/// Minimum label length in characters.
pub const MIN_LABEL_LENGTH: usize = 2;

/// Maximum label length in characters.
pub const MAX_LABEL_LENGTH: usize = 30;

/// Maximum input size forwarded to an AI labeling path. The local engine
/// never truncates its own input.
pub const MAX_INPUT_CHARS_FOR_AI: usize = 5000;

/// Labels generated for one article.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelResult {
    /// Labels in ranked order, unique, each 2-30 characters
    pub labels: Vec<String>,
    /// True if the content was too short to label. `labels` is empty then.
    pub is_too_short: bool,
}

impl LabelResult {
    /// The outcome for input below [`MIN_CONTENT_LENGTH`].
    pub fn too_short() -> Self {
        Self {
            labels: Vec::new(),
            is_too_short: true,
        }
    }

    /// Serialize just the labels as a JSON array, the form stored alongside
    /// an article (e.g. `["kernel","scheduler"]`).
    pub fn labels_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.labels)
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

// Label engine: the public entry point tying the pipeline together.
//
//   clean -> length gate -> classify -> tokenize -> score -> rank/select
//         -> normalize/validate
//
// The engine has no state. One value can be shared by any number of threads
// and every call is a pure function of its arguments.

use tracing::debug;

use super::language::Script;
use super::normalize::finalize;
use super::preprocess::clean;
use super::ranking::{rank, select_cjk, select_latin};
use super::scoring::score;
use super::tokenize::{cjk_ngrams, latin_words};
use super::traits::LabelGenerator;
use super::types::{LabelResult, MAX_LABELS, MIN_CONTENT_LENGTH};

/// Local label generator based on term frequency statistics.
#[derive(Debug, Clone, Copy, Default)]
pub struct Labeler;

impl Labeler {
    pub fn new() -> Self {
        Self
    }

    /// Generate up to `max_labels` labels for `text`.
    ///
    /// Never fails. Text under [`MIN_CONTENT_LENGTH`] characters after
    /// cleaning gives [`LabelResult::too_short`]. A `max_labels` of zero,
    /// negative, or above [`MAX_LABELS`] is silently treated as
    /// [`MAX_LABELS`]; callers should not read an out-of-range request as
    /// an error.
    pub fn generate_labels(&self, text: &str, max_labels: i64) -> LabelResult {
        let cleaned = clean(text);
        let length = cleaned.chars().count();

        if length < MIN_CONTENT_LENGTH {
            debug!(length, "Content too short to label");
            return LabelResult::too_short();
        }

        let cap = effective_max_labels(max_labels);
        let script = Script::detect(&cleaned);

        let tokens = match script {
            Script::Latin => latin_words(&cleaned),
            Script::Cjk => cjk_ngrams(&cleaned),
        };

        let mut candidates = score(&tokens, script);
        rank(&mut candidates);

        let selected = match script {
            Script::Latin => select_latin(&candidates, cap),
            Script::Cjk => select_cjk(&candidates, cap),
        };

        let labels = finalize(&selected, cap);

        debug!(
            ?script,
            length,
            tokens = tokens.len(),
            candidates = candidates.len(),
            labels = labels.len(),
            "Generated labels"
        );

        LabelResult {
            labels,
            is_too_short: false,
        }
    }
}

impl LabelGenerator for Labeler {
    fn name(&self) -> &'static str {
        "local"
    }

    fn generate(&self, text: &str, max_labels: i64) -> LabelResult {
        self.generate_labels(text, max_labels)
    }
}

/// The label cap actually applied for a requested count.
pub fn effective_max_labels(requested: i64) -> usize {
    match usize::try_from(requested) {
        Ok(n) if (1..=MAX_LABELS).contains(&n) => n,
        _ => MAX_LABELS,
    }
}

/// Convenience wrapper around [`Labeler::generate_labels`].
pub fn generate_labels(text: &str, max_labels: i64) -> LabelResult {
    Labeler.generate_labels(text, max_labels)
}

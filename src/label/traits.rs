// Label generator trait: the swap-ready abstraction.
//
// The local frequency-based `Labeler` is the default implementation. An
// AI-backed labeler can slot in behind the same interface without the
// batch pipeline or CLI changing.

use super::types::LabelResult;

/// Trait for producing labels from one article's text.
///
/// Implementations must be callable from many threads at once; the batch
/// pipeline shares one generator across all its workers.
pub trait LabelGenerator: Send + Sync {
    /// Short name for logs.
    fn name(&self) -> &'static str;

    /// Generate up to `max_labels` labels. Out-of-range counts are clamped by
    /// the implementation, never rejected.
    fn generate(&self, text: &str, max_labels: i64) -> LabelResult;

    /// Label several texts, returning results in the same order.
    /// Default implementation calls `generate` sequentially.
    fn generate_all(&self, texts: &[String], max_labels: i64) -> Vec<LabelResult> {
        texts
            .iter()
            .map(|text| self.generate(text, max_labels))
            .collect()
    }
}

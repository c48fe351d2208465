// Candidate ranking and selection.
//
// Ordering is a total order (score descending, then first occurrence
// ascending) so the same document always produces the same labels,
// independent of hash map iteration order.

use std::cmp::Ordering;
use std::collections::HashSet;

use super::scoring::Candidate;

/// Sort candidates by score descending, breaking ties by first occurrence.
pub fn rank(candidates: &mut [Candidate]) {
    candidates.sort_by(compare);
}

fn compare(a: &Candidate, b: &Candidate) -> Ordering {
    b.score
        .total_cmp(&a.score)
        .then_with(|| a.first_seen.cmp(&b.first_seen))
}

/// Take the top `cap` ranked words.
pub fn select_latin(ranked: &[Candidate], cap: usize) -> Vec<String> {
    let mut picked = Picked::new(cap);
    for candidate in ranked {
        if picked.push(&candidate.text) {
            break;
        }
    }
    picked.into_labels()
}

/// Two passes over the ranked list: trigrams first, then bigrams to fill
/// whatever slots remain.
pub fn select_cjk(ranked: &[Candidate], cap: usize) -> Vec<String> {
    let mut picked = Picked::new(cap);
    for len in [3, 2] {
        for candidate in ranked.iter().filter(|c| c.char_len == len) {
            if picked.push(&candidate.text) {
                return picked.into_labels();
            }
        }
    }
    picked.into_labels()
}

/// Bounded, duplicate-free append shared by both selectors.
struct Picked {
    cap: usize,
    labels: Vec<String>,
    seen: HashSet<String>,
}

impl Picked {
    fn new(cap: usize) -> Self {
        Self {
            cap,
            labels: Vec::with_capacity(cap),
            seen: HashSet::new(),
        }
    }

    /// Append `text` unless already picked or full. Returns true once the cap
    /// is reached.
    fn push(&mut self, text: &str) -> bool {
        if !self.is_full() && self.seen.insert(text.to_string()) {
            self.labels.push(text.to_string());
        }
        self.is_full()
    }

    fn is_full(&self) -> bool {
        self.labels.len() >= self.cap
    }

    fn into_labels(self) -> Vec<String> {
        self.labels
    }
}

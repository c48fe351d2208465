// Term-frequency scoring with frequency band and n-gram length boosts.
//
// Terms that recur but aren't everywhere carry the most topical signal, so
// counts inside a "sweet spot" band get a multiplier. CJK n-grams get noisy
// at high counts, which is why their band is narrower.

use std::collections::HashMap;

use super::language::Script;

/// Multiplier for terms whose count falls inside the frequency band.
pub const BAND_BOOST: f64 = 1.5;

/// Multiplier for CJK trigrams over bigrams.
pub const TRIGRAM_BOOST: f64 = 1.5;

/// Inclusive count band boosted in Latin text.
pub const LATIN_BAND: (usize, usize) = (2, 10);

/// Inclusive count band boosted in CJK text.
pub const CJK_BAND: (usize, usize) = (2, 8);

/// A distinct token or n-gram with its statistics for one document.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub text: String,
    /// Raw occurrences in the token sequence
    pub count: usize,
    pub score: f64,
    /// Length in characters (2 = bigram, 3 = trigram for CJK)
    pub char_len: usize,
    /// Index of the first occurrence in the token sequence. Used as the
    /// tie-break when scores are equal.
    pub first_seen: usize,
}

/// Count and score every distinct token. Candidates come back in order of
/// first occurrence; an empty token sequence yields no candidates.
pub fn score(tokens: &[String], script: Script) -> Vec<Candidate> {
    if tokens.is_empty() {
        return Vec::new();
    }

    // token -> index into `candidates`, which keeps first-occurrence order
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut candidates: Vec<Candidate> = Vec::new();

    for (pos, token) in tokens.iter().enumerate() {
        match index.get(token.as_str()) {
            Some(&i) => candidates[i].count += 1,
            None => {
                index.insert(token.as_str(), candidates.len());
                candidates.push(Candidate {
                    text: token.clone(),
                    count: 1,
                    score: 0.0,
                    char_len: token.chars().count(),
                    first_seen: pos,
                });
            }
        }
    }

    let total = tokens.len() as f64;
    for candidate in &mut candidates {
        let tf = candidate.count as f64 / total;
        candidate.score = match script {
            Script::Latin => tf * band_boost(candidate.count, LATIN_BAND),
            Script::Cjk => {
                let length_boost = if candidate.char_len == 3 {
                    TRIGRAM_BOOST
                } else {
                    1.0
                };
                tf * length_boost * band_boost(candidate.count, CJK_BAND)
            }
        };
    }

    candidates
}

fn band_boost(count: usize, (low, high): (usize, usize)) -> f64 {
    if (low..=high).contains(&count) {
        BAND_BOOST
    } else {
        1.0
    }
}

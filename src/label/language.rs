// Script classification: decides whether the word pipeline or the
// character n-gram pipeline handles a document.

/// A document whose CJK share of non-whitespace characters is strictly
/// above this fraction goes through the n-gram pipeline.
pub const CJK_MAJORITY_THRESHOLD: f64 = 0.5;

/// Which labeling pipeline a document takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Script {
    /// Space-delimited words
    Latin,
    /// Chinese/Japanese/Korean characters, labeled by character n-grams
    Cjk,
}

impl Script {
    pub fn detect(cleaned: &str) -> Self {
        if is_cjk_dominant(cleaned) {
            Script::Cjk
        } else {
            Script::Latin
        }
    }
}

/// Han ideographs (unified, extension A/B, compatibility), kana and Hangul
/// syllables. CJK punctuation and fullwidth forms are not included; they act
/// as boundaries for the n-gram tokenizer. The Katakana block carries two
/// punctuation marks, U+30A0 (゠) and U+30FB (・), which are excluded.
pub fn is_cjk_char(c: char) -> bool {
    matches!(c as u32,
        0x4E00..=0x9FFF
        | 0x3400..=0x4DBF
        | 0x20000..=0x2A6DF
        | 0xF900..=0xFAFF
        | 0x3040..=0x309F
        | 0x30A1..=0x30FA
        | 0x30FC..=0x30FF
        | 0xAC00..=0xD7AF
    )
}

/// True if CJK characters make up more than [`CJK_MAJORITY_THRESHOLD`] of the
/// non-whitespace characters. Empty input is not CJK-dominant.
pub fn is_cjk_dominant(cleaned: &str) -> bool {
    let mut total = 0usize;
    let mut cjk = 0usize;
    for c in cleaned.chars().filter(|c| !c.is_whitespace()) {
        total += 1;
        if is_cjk_char(c) {
            cjk += 1;
        }
    }

    if total == 0 {
        return false;
    }
    cjk as f64 / total as f64 > CJK_MAJORITY_THRESHOLD
}

// Tokenizers for the two pipelines.
//
// Latin text is split into lower-cased words. CJK text has no word
// delimiters, so every run of CJK characters is cut into overlapping
// bigrams and trigrams instead.

use std::collections::HashSet;
use std::sync::LazyLock;

use stop_words::{get, LANGUAGE};

use super::language::is_cjk_char;
use super::types::MAX_LABEL_LENGTH;

/// Words shorter than this (in characters) are dropped by the Latin tokenizer.
pub const MIN_WORD_CHARS: usize = 3;

/// English stop words, built once and shared read-only by every call.
static STOP_WORDS: LazyLock<HashSet<String>> =
    LazyLock::new(|| get(LANGUAGE::English).into_iter().collect());

pub fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.contains(word)
}

/// Split Latin text into lower-cased word tokens, in document order.
///
/// Any non-alphabetic character is a boundary, so "lock-free" yields
/// "lock" and "free". Short words, words too long to be a label, and stop
/// words are dropped.
pub fn latin_words(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphabetic())
        .filter(|w| (MIN_WORD_CHARS..=MAX_LABEL_LENGTH).contains(&w.chars().count()))
        .filter(|w| !is_stop_word(w))
        .map(str::to_string)
        .collect()
}

/// Emit the bigram and then the trigram starting at each position of every
/// CJK run. Non-CJK characters end a run and never appear in an n-gram.
pub fn cjk_ngrams(text: &str) -> Vec<String> {
    let mut ngrams = Vec::new();
    let mut run: Vec<char> = Vec::new();

    for c in text.chars() {
        if is_cjk_char(c) {
            run.push(c);
        } else {
            push_run_ngrams(&run, &mut ngrams);
            run.clear();
        }
    }
    push_run_ngrams(&run, &mut ngrams);

    ngrams
}

fn push_run_ngrams(run: &[char], out: &mut Vec<String>) {
    for start in 0..run.len() {
        for n in [2, 3] {
            if start + n <= run.len() {
                out.push(run[start..start + n].iter().collect());
            }
        }
    }
}

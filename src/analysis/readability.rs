//! Readability statistics derived from raw text.
//!
//! Words come from the same cleaning rule as sentiment scoring; sentences
//! come from the same terminator family. Every ratio is guarded: a text with
//! no detectable sentences yields an all-zero bundle, and sentences without
//! any surviving cleaned word fall back to 0.0 for the per-word ratios.

use crate::core::{round3, ReadabilityMetrics};
use crate::lexicon::Lexicon;
use once_cell::sync::Lazy;
use regex::Regex;

use super::cleaner;

/// Cleaned tokens longer than this many characters count as complex. A
/// length proxy, not syllable-based complexity.
const COMPLEX_WORD_LEN: usize = 2;

/// Personal pronouns counted by whole-word match over cleaned tokens.
/// Cleaned tokens are already lower-cased, so membership is case-insensitive.
const PERSONAL_PRONOUNS: [&str; 5] = ["i", "we", "my", "ours", "us"];

/// Maximal vowel runs; each run approximates one syllable.
static VOWEL_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[aeiou]+").unwrap());

/// Compute the nine readability metrics for `raw_text`.
pub fn analyze(raw_text: &str, stop_words: &Lexicon) -> ReadabilityMetrics {
    let words = cleaner::clean(raw_text, stop_words);
    let sentences = cleaner::split_sentences(raw_text);
    if sentences.is_empty() {
        return ReadabilityMetrics::default();
    }

    let complex_word_count = words.iter().filter(|w| w.len() > COMPLEX_WORD_LEN).count();
    let avg_sentence_length = words.len() as f64 / sentences.len() as f64;
    let pct_complex_words = if words.is_empty() {
        0.0
    } else {
        complex_word_count as f64 / words.len() as f64
    };
    let fog_index = 0.4 * (avg_sentence_length + pct_complex_words);
    let syllable_count = words.iter().map(|w| count_syllables(w)).sum();
    let personal_pronoun_count = words
        .iter()
        .filter(|w| PERSONAL_PRONOUNS.contains(&w.as_str()))
        .count();
    let avg_word_length = if words.is_empty() {
        0.0
    } else {
        words.iter().map(String::len).sum::<usize>() as f64 / words.len() as f64
    };

    ReadabilityMetrics {
        avg_sentence_length: round3(avg_sentence_length),
        pct_complex_words: round3(pct_complex_words),
        fog_index: round3(fog_index),
        avg_words_per_sentence: round3(avg_sentence_length),
        complex_word_count,
        word_count: words.len(),
        syllable_count,
        personal_pronoun_count,
        avg_word_length: round3(avg_word_length),
    }
}

/// Count maximal vowel runs in a cleaned word.
fn count_syllables(word: &str) -> usize {
    VOWEL_RUN.find_iter(word).count()
}

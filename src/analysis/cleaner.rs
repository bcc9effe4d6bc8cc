//! Text normalization: word tokenization, stop-word filtering, and sentence
//! segmentation. All downstream metrics depend on these exact rules.

use crate::lexicon::Lexicon;
use once_cell::sync::Lazy;
use regex::Regex;

/// Word-like units: alphanumeric runs, optionally joined by internal
/// apostrophes.
static TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[A-Za-z0-9]+(?:'[A-Za-z0-9]+)*").unwrap());

/// English contraction suffixes split off a word-like unit. The stem
/// survives; the suffix is discarded.
static CONTRACTION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(?:n't|'(?:s|re|ve|ll|d|m|t))$").unwrap());

/// Sentence terminators: one or more of `.` `!` `?`.
static SENTENCE_END: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?]+").unwrap());

/// Lower-cased alphabetic tokens of `text` with stop words removed.
///
/// Contractions lose their suffix (`don't` becomes `do`); tokens containing
/// digits, or apostrophes that survive suffix-stripping, are dropped
/// entirely. Empty input yields an empty sequence.
pub fn clean(text: &str, stop_words: &Lexicon) -> Vec<String> {
    TOKEN
        .find_iter(text)
        .filter_map(|m| {
            let stem = CONTRACTION.replace(m.as_str(), "");
            if stem.is_empty() || !stem.chars().all(|c| c.is_ascii_alphabetic()) {
                return None;
            }
            let word = stem.to_lowercase();
            if stop_words.contains(&word) {
                None
            } else {
                Some(word)
            }
        })
        .collect()
}

/// Sentence-segmented units of `text`.
///
/// Whitespace-only input has no sentences; prose without a terminator is a
/// single sentence.
pub fn split_sentences(text: &str) -> Vec<String> {
    SENTENCE_END
        .split(text)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
        .collect()
}

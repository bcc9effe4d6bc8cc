//! Lexicon-based sentiment scoring over cleaned token streams.

use crate::core::{round3, SentimentScores};
use crate::lexicon::Lexicon;

/// Score a cleaned token sequence against the positive and negative lexicons.
///
/// Tokens arrive lower-cased; lexicon entries are matched exactly as loaded.
/// Standard sentiment word lists ship lower-cased, so this is
/// case-insensitive in practice, but a mixed-case lexicon entry never
/// matches.
///
/// An empty token sequence, or one with no lexicon hits, scores 0.0 for both
/// polarity and subjectivity; the divisions are guarded, never propagated as
/// errors.
pub fn score(tokens: &[String], positive: &Lexicon, negative: &Lexicon) -> SentimentScores {
    let positive_score = tokens.iter().filter(|t| positive.contains(t)).count() as u32;
    let negative_score = tokens.iter().filter(|t| negative.contains(t)).count() as u32;
    let total = positive_score + negative_score;

    let polarity_score = if total > 0 {
        round3((positive_score as f64 - negative_score as f64) / total as f64)
    } else {
        0.0
    };
    let subjectivity_score = if tokens.is_empty() {
        0.0
    } else {
        round3(total as f64 / tokens.len() as f64)
    };

    SentimentScores {
        positive_score,
        negative_score,
        polarity_score,
        subjectivity_score,
    }
}

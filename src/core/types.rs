//! Common type definitions used across the codebase

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A document to analyze: the external join key plus its raw text.
///
/// `raw_text` is a single unbroken passage; the fetch stage has already
/// collapsed line breaks. A text consisting of a single whitespace character
/// is the placeholder for a document with no extractable content and is
/// analyzable like any other (it produces an all-zero metric bundle).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub raw_text: String,
}

impl Document {
    pub fn new(id: impl Into<String>, raw_text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            raw_text: raw_text.into(),
        }
    }
}

/// Lexicon hit counts and the scores derived from them.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SentimentScores {
    pub positive_score: u32,
    pub negative_score: u32,
    /// Net sentiment in [-1, 1]; 0.0 when there are no lexicon hits.
    pub polarity_score: f64,
    /// Fraction of tokens that hit either lexicon, in [0, 1].
    pub subjectivity_score: f64,
}

/// Sentence/word statistics and composite readability indices.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ReadabilityMetrics {
    pub avg_sentence_length: f64,
    pub pct_complex_words: f64,
    pub fog_index: f64,
    /// Duplicate of `avg_sentence_length`; both output columns are populated
    /// from the same computation.
    pub avg_words_per_sentence: f64,
    pub complex_word_count: usize,
    pub word_count: usize,
    pub syllable_count: usize,
    pub personal_pronoun_count: usize,
    pub avg_word_length: f64,
}

/// The full metric bundle computed for one document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentMetrics {
    pub id: String,
    pub sentiment: SentimentScores,
    pub readability: ReadabilityMetrics,
}

/// Number of writable metric columns in the output table.
pub const METRIC_COLUMN_COUNT: usize = 13;

impl DocumentMetrics {
    /// Flatten into output-column order: offsets 0-12 of the writable range.
    pub fn values(&self) -> [MetricValue; METRIC_COLUMN_COUNT] {
        [
            MetricValue::Count(self.sentiment.positive_score as u64),
            MetricValue::Count(self.sentiment.negative_score as u64),
            MetricValue::Float(self.sentiment.polarity_score),
            MetricValue::Float(self.sentiment.subjectivity_score),
            MetricValue::Float(self.readability.avg_sentence_length),
            MetricValue::Float(self.readability.pct_complex_words),
            MetricValue::Float(self.readability.fog_index),
            MetricValue::Float(self.readability.avg_words_per_sentence),
            MetricValue::Count(self.readability.complex_word_count as u64),
            MetricValue::Count(self.readability.word_count as u64),
            MetricValue::Count(self.readability.syllable_count as u64),
            MetricValue::Count(self.readability.personal_pronoun_count as u64),
            MetricValue::Float(self.readability.avg_word_length),
        ]
    }
}

/// A single cell value destined for the output table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum MetricValue {
    Float(f64),
    Count(u64),
}

impl MetricValue {
    /// Round float values to 3 decimals; counts pass through unchanged.
    /// Idempotent on already-rounded values.
    pub fn rounded(self) -> Self {
        match self {
            MetricValue::Float(v) => MetricValue::Float(crate::core::round3(v)),
            count => count,
        }
    }
}

impl fmt::Display for MetricValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetricValue::Float(v) => write!(f, "{v}"),
            MetricValue::Count(n) => write!(f, "{n}"),
        }
    }
}

/// Summary of a completed analysis run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResults {
    pub timestamp: DateTime<Utc>,
    pub documents_processed: usize,
    /// Rows actually updated in the output table.
    pub matched: usize,
    /// Identifiers whose bundle had no output row.
    pub unmatched: Vec<String>,
    pub metrics: Vec<DocumentMetrics>,
}

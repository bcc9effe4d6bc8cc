//! Core data types and numeric helpers.

pub mod types;

pub use types::{
    AnalysisResults, Document, DocumentMetrics, MetricValue, ReadabilityMetrics, SentimentScores,
    METRIC_COLUMN_COUNT,
};

/// Round to 3 decimal places, half away from zero.
pub fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

//! Matching computed metric bundles to output rows.

use crate::core::DocumentMetrics;
use crate::errors::AnalysisError;
use crate::io::table::OutputTable;
use anyhow::Result;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// What to do when a computed bundle has no matching output row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnmatchedPolicy {
    /// Drop the bundle with a debug log entry.
    Ignore,
    /// Drop the bundle and log a warning.
    #[default]
    Warn,
    /// Abort the run on the first unmatched identifier.
    Fail,
}

/// Outcome of applying a batch of bundles to the table.
///
/// `unmatched` is recorded under every policy so the run summary stays
/// accurate; the policy only governs log severity and whether the run
/// aborts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchReport {
    pub matched: usize,
    pub unmatched: Vec<String>,
}

/// Write all 13 values of `metrics` into the row keyed by its identifier.
///
/// Floats are re-rounded to 3 decimals at write time, which is idempotent
/// for already-rounded values. Returns whether a row matched.
pub fn apply_metrics(table: &mut OutputTable, metrics: &DocumentMetrics) -> bool {
    match table.resolve(&metrics.id) {
        Some(row) => {
            for (offset, value) in metrics.values().into_iter().enumerate() {
                table.write(row, offset, value.rounded());
            }
            true
        }
        None => false,
    }
}

/// Apply a whole batch in document order, honoring the unmatched policy.
pub fn apply_batch(
    table: &mut OutputTable,
    metrics: &[DocumentMetrics],
    policy: UnmatchedPolicy,
) -> Result<MatchReport> {
    let mut report = MatchReport::default();
    for bundle in metrics {
        if apply_metrics(table, bundle) {
            report.matched += 1;
            continue;
        }
        match policy {
            UnmatchedPolicy::Ignore => {
                log::debug!("no output row for document {}; bundle dropped", bundle.id);
            }
            UnmatchedPolicy::Warn => {
                log::warn!("no output row for document {}; bundle dropped", bundle.id);
            }
            UnmatchedPolicy::Fail => {
                return Err(AnalysisError::UnmatchedDocument(bundle.id.clone()).into());
            }
        }
        report.unmatched.push(bundle.id.clone());
    }
    Ok(report)
}

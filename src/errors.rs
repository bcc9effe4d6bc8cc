//! Typed errors for the configuration failures that abort a run.
//!
//! Per-document degeneracy (empty text, zero sentences, zero words) is never
//! an error; the analysis functions recover locally with zero-valued metrics.
//! The variants here are the fatal cases: nothing downstream can be trusted
//! without lexicons or an output table.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Which lexicon a loading failure refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexiconKind {
    StopWords,
    Positive,
    Negative,
}

impl fmt::Display for LexiconKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LexiconKind::StopWords => "stop-word",
            LexiconKind::Positive => "positive",
            LexiconKind::Negative => "negative",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("{kind} lexicon not found at {}", .path.display())]
    LexiconMissing { kind: LexiconKind, path: PathBuf },

    #[error("{kind} lexicon at {} is empty; nothing can be scored", .path.display())]
    LexiconEmpty { kind: LexiconKind, path: PathBuf },

    #[error("output table not found at {}", .0.display())]
    TableMissing(PathBuf),

    #[error("no output row matches document id `{0}`")]
    UnmatchedDocument(String),

    #[error("configuration file not found at {}", .0.display())]
    ConfigMissing(PathBuf),
}

//! Run configuration: lexicon, document, and table paths plus policies.
//!
//! Values come from three layers: built-in defaults, an optional
//! `.lexiscore.toml` file, and CLI flags. The analyze command applies the CLI
//! layer on top of whatever this module loads.

use crate::errors::AnalysisError;
use crate::matcher::UnmatchedPolicy;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = ".lexiscore.toml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LexiscoreConfig {
    /// Directory of cached document text files.
    #[serde(default = "default_documents_dir")]
    pub documents_dir: PathBuf,

    /// Directory whose `.txt` word lists are unioned into the stop-word set.
    #[serde(default = "default_stop_words_dir")]
    pub stop_words_dir: PathBuf,

    /// Positive sentiment word list.
    #[serde(default = "default_positive_words")]
    pub positive_words: PathBuf,

    /// Negative sentiment word list.
    #[serde(default = "default_negative_words")]
    pub negative_words: PathBuf,

    /// CSV table updated in place with the computed metrics.
    #[serde(default = "default_output_table")]
    pub output_table: PathBuf,

    /// Policy for bundles whose identifier has no output row.
    #[serde(default)]
    pub on_unmatched: UnmatchedPolicy,
}

impl Default for LexiscoreConfig {
    fn default() -> Self {
        Self {
            documents_dir: default_documents_dir(),
            stop_words_dir: default_stop_words_dir(),
            positive_words: default_positive_words(),
            negative_words: default_negative_words(),
            output_table: default_output_table(),
            on_unmatched: UnmatchedPolicy::default(),
        }
    }
}

fn default_documents_dir() -> PathBuf {
    PathBuf::from("txt_files")
}

fn default_stop_words_dir() -> PathBuf {
    PathBuf::from("StopWords")
}

fn default_positive_words() -> PathBuf {
    PathBuf::from("MasterDictionary/positive-words.txt")
}

fn default_negative_words() -> PathBuf {
    PathBuf::from("MasterDictionary/negative-words.txt")
}

fn default_output_table() -> PathBuf {
    PathBuf::from("output_data.csv")
}

/// Load configuration. An explicitly given path must exist; otherwise
/// `.lexiscore.toml` in the working directory is used when present, and
/// built-in defaults apply when it is not.
pub fn load_config(explicit: Option<&Path>) -> Result<LexiscoreConfig> {
    let path = match explicit {
        Some(path) => {
            if !path.is_file() {
                return Err(AnalysisError::ConfigMissing(path.to_path_buf()).into());
            }
            path.to_path_buf()
        }
        None => {
            let discovered = PathBuf::from(CONFIG_FILE);
            if !discovered.is_file() {
                return Ok(LexiscoreConfig::default());
            }
            discovered
        }
    };
    let contents = fs::read_to_string(&path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let config: LexiscoreConfig = toml::from_str(&contents)
        .with_context(|| format!("failed to parse config {}", path.display()))?;
    log::debug!("loaded config from {}", path.display());
    Ok(config)
}

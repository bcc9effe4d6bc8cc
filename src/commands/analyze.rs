//! The analyze command: one end-to-end batch run.

use crate::analysis;
use crate::cli;
use crate::config::{self, LexiscoreConfig};
use crate::core::{AnalysisResults, Document, DocumentMetrics};
use crate::io::documents::{DirectorySource, DocumentSource};
use crate::io::output::create_writer;
use crate::io::table::OutputTable;
use crate::lexicon::LexiconSet;
use crate::matcher::{self, UnmatchedPolicy};
use anyhow::{Context, Result};
use chrono::Utc;
use rayon::prelude::*;
use std::path::PathBuf;

/// Everything the analyze command needs, CLI flags still unmerged.
pub struct AnalyzeOptions {
    pub config: Option<PathBuf>,
    pub documents: Option<PathBuf>,
    pub stop_words: Option<PathBuf>,
    pub positive: Option<PathBuf>,
    pub negative: Option<PathBuf>,
    pub table: Option<PathBuf>,
    pub format: cli::OutputFormat,
    pub output: Option<PathBuf>,
    pub on_unmatched: Option<UnmatchedPolicy>,
    pub no_parallel: bool,
}

pub fn handle_analyze(options: AnalyzeOptions) -> Result<()> {
    let config = merge_config(config::load_config(options.config.as_deref())?, &options);

    log::info!("loading lexicons");
    let lexicons = LexiconSet::load(
        &config.stop_words_dir,
        &config.positive_words,
        &config.negative_words,
    )?;

    log::info!("loading output table {}", config.output_table.display());
    let mut table = OutputTable::load(&config.output_table)?;

    log::info!(
        "reading documents from {}",
        config.documents_dir.display()
    );
    let documents = DirectorySource::new(&config.documents_dir).documents()?;
    log::info!("analyzing {} documents", documents.len());

    let metrics = compute_metrics(&documents, &lexicons, !options.no_parallel);

    let report = matcher::apply_batch(&mut table, &metrics, config.on_unmatched)?;
    table
        .save(&config.output_table)
        .with_context(|| format!("failed to save {}", config.output_table.display()))?;

    let results = AnalysisResults {
        timestamp: Utc::now(),
        documents_processed: documents.len(),
        matched: report.matched,
        unmatched: report.unmatched,
        metrics,
    };

    let mut writer = create_writer(options.format.into(), options.output.as_deref())?;
    writer.write_results(&results)
}

/// Per-document computation is pure, so the batch parallelizes freely; the
/// collected bundles keep document order either way, and table writes happen
/// afterwards, sequentially, so final table state matches a sequential run.
fn compute_metrics(
    documents: &[Document],
    lexicons: &LexiconSet,
    parallel: bool,
) -> Vec<DocumentMetrics> {
    if parallel {
        documents
            .par_iter()
            .map(|document| analysis::analyze_document(document, lexicons))
            .collect()
    } else {
        documents
            .iter()
            .map(|document| analysis::analyze_document(document, lexicons))
            .collect()
    }
}

fn merge_config(mut config: LexiscoreConfig, options: &AnalyzeOptions) -> LexiscoreConfig {
    if let Some(path) = &options.documents {
        config.documents_dir = path.clone();
    }
    if let Some(path) = &options.stop_words {
        config.stop_words_dir = path.clone();
    }
    if let Some(path) = &options.positive {
        config.positive_words = path.clone();
    }
    if let Some(path) = &options.negative {
        config.negative_words = path.clone();
    }
    if let Some(path) = &options.table {
        config.output_table = path.clone();
    }
    if let Some(policy) = options.on_unmatched {
        config.on_unmatched = policy;
    }
    config
}

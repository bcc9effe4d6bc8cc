use crate::io::output;
use crate::matcher::UnmatchedPolicy;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "lexiscore")]
#[command(about = "Document sentiment and readability analyzer", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Score documents and write their metrics into the output table
    Analyze {
        /// Configuration file (defaults to .lexiscore.toml when present)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Directory of document text files
        #[arg(long)]
        documents: Option<PathBuf>,

        /// Directory of stop-word lists
        #[arg(long = "stop-words")]
        stop_words: Option<PathBuf>,

        /// Positive word list
        #[arg(long)]
        positive: Option<PathBuf>,

        /// Negative word list
        #[arg(long)]
        negative: Option<PathBuf>,

        /// Output table (CSV) updated in place
        #[arg(long)]
        table: Option<PathBuf>,

        /// Run-summary format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Write the run summary to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Policy for documents without a matching output row
        #[arg(long = "on-unmatched", value_enum)]
        on_unmatched: Option<UnmatchedPolicy>,

        /// Disable parallel metric computation
        #[arg(long)]
        no_parallel: bool,
    },
    /// Create a starter configuration file
    Init {
        /// Overwrite an existing configuration file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable run summary
    Terminal,
    /// Machine-readable JSON report
    Json,
}

impl From<OutputFormat> for output::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Terminal => output::OutputFormat::Terminal,
            OutputFormat::Json => output::OutputFormat::Json,
        }
    }
}

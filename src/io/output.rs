//! Run-summary writers: terminal and JSON.

use crate::core::AnalysisResults;
use anyhow::{Context, Result};
use colored::Colorize;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Terminal,
}

pub trait OutputWriter {
    fn write_results(&mut self, results: &AnalysisResults) -> Result<()>;
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_results(&mut self, results: &AnalysisResults) -> Result<()> {
        let json = serde_json::to_string_pretty(results)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        Ok(())
    }
}

pub struct TerminalWriter<W: Write> {
    writer: W,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_results(&mut self, results: &AnalysisResults) -> Result<()> {
        writeln!(self.writer, "{}", "Analysis complete".bold())?;
        writeln!(
            self.writer,
            "  documents processed: {}",
            results.documents_processed
        )?;
        writeln!(
            self.writer,
            "  rows updated:        {}",
            results.matched.to_string().green()
        )?;
        if !results.unmatched.is_empty() {
            writeln!(
                self.writer,
                "  unmatched ids:       {}",
                results.unmatched.len().to_string().yellow()
            )?;
            for id in &results.unmatched {
                writeln!(self.writer, "    - {id}")?;
            }
        }
        Ok(())
    }
}

pub fn create_writer(format: OutputFormat, output: Option<&Path>) -> Result<Box<dyn OutputWriter>> {
    let sink: Box<dyn Write> = match output {
        Some(path) => Box::new(
            File::create(path)
                .with_context(|| format!("failed to create report file {}", path.display()))?,
        ),
        None => Box::new(io::stdout()),
    };
    Ok(match format {
        OutputFormat::Json => Box::new(JsonWriter::new(sink)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(sink)),
    })
}

//! The CSV-backed output table: one header row, one row per known
//! identifier. Rows pre-exist; the analyzer only mutates metric cells, never
//! adds or removes rows.

use crate::core::MetricValue;
use crate::errors::AnalysisError;
use anyhow::{Context, Result};
use std::collections::HashMap;
use std::path::Path;

/// First writable metric column; columns 0 and 1 hold the identifier and the
/// source URL.
pub const FIRST_METRIC_COLUMN: usize = 2;

/// Opaque handle to a resolved output row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowHandle(usize);

/// In-memory copy of the output structure, with an identifier index built
/// once at load.
#[derive(Debug, Clone, PartialEq)]
pub struct OutputTable {
    header: Vec<String>,
    rows: Vec<Vec<String>>,
    index: HashMap<String, usize>,
}

impl OutputTable {
    /// Build a table from a header and data rows. The first occurrence of a
    /// duplicate key wins; later rows with the same key are never indexed.
    pub fn new(header: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        let mut index = HashMap::new();
        for (position, row) in rows.iter().enumerate() {
            if let Some(key) = row.first() {
                index.entry(key.clone()).or_insert(position);
            }
        }
        Self {
            header,
            rows,
            index,
        }
    }

    /// Load the table from a CSV file. A missing file is fatal.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(AnalysisError::TableMissing(path.to_path_buf()).into());
        }
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_path(path)
            .with_context(|| format!("failed to open output table {}", path.display()))?;

        let mut records = reader.records();
        let header = match records.next() {
            Some(record) => record?.iter().map(str::to_owned).collect(),
            None => Vec::new(),
        };
        let mut rows = Vec::new();
        for record in records {
            rows.push(record?.iter().map(str::to_owned).collect());
        }
        Ok(Self::new(header, rows))
    }

    /// Resolve an identifier to its row, if any. Exact, case-sensitive match
    /// on the key column.
    pub fn resolve(&self, id: &str) -> Option<RowHandle> {
        self.index.get(id).copied().map(RowHandle)
    }

    /// Write one metric value at `offset` from the first writable column,
    /// padding the row when it is shorter than the target cell.
    pub fn write(&mut self, row: RowHandle, offset: usize, value: MetricValue) {
        let column = FIRST_METRIC_COLUMN + offset;
        let cells = &mut self.rows[row.0];
        if cells.len() <= column {
            cells.resize(column + 1, String::new());
        }
        cells[column] = value.to_string();
    }

    /// Metric cell for `id` at `offset`, if present.
    pub fn cell(&self, id: &str, offset: usize) -> Option<&str> {
        let row = *self.index.get(id)?;
        self.rows
            .get(row)?
            .get(FIRST_METRIC_COLUMN + offset)
            .map(String::as_str)
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Save the table back to disk, header first.
    pub fn save(&self, path: &Path) -> Result<()> {
        let mut writer = csv::WriterBuilder::new()
            .flexible(true)
            .from_path(path)
            .with_context(|| format!("failed to write output table {}", path.display()))?;
        if !self.header.is_empty() {
            writer.write_record(&self.header)?;
        }
        for row in &self.rows {
            writer.write_record(row)?;
        }
        writer.flush()?;
        Ok(())
    }
}

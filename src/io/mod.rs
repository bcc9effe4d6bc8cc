//! I/O: document sources, the output table, and report writers.

pub mod documents;
pub mod output;
pub mod table;

pub use documents::{DirectorySource, DocumentSource};
pub use output::{create_writer, OutputFormat, OutputWriter};
pub use table::{OutputTable, RowHandle, FIRST_METRIC_COLUMN};

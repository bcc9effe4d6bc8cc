//! CLI command implementations.
//!
//! - **analyze**: run the batch sentiment/readability analysis
//! - **init**: write a starter configuration file

pub mod analyze;
pub mod init;

pub use analyze::{handle_analyze, AnalyzeOptions};
pub use init::init_config;

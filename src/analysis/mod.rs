//! The text-analytics engine: cleaning, sentiment scoring, and readability.

pub mod cleaner;
pub mod readability;
pub mod sentiment;

pub use cleaner::{clean, split_sentences};

use crate::core::{Document, DocumentMetrics};
use crate::lexicon::LexiconSet;

/// Compute the full metric bundle for one document.
///
/// Pure function of the document text and the run's lexicons; safe to call
/// from parallel workers.
pub fn analyze_document(document: &Document, lexicons: &LexiconSet) -> DocumentMetrics {
    let tokens = cleaner::clean(&document.raw_text, &lexicons.stop_words);
    let sentiment = sentiment::score(&tokens, &lexicons.positive, &lexicons.negative);
    let readability = readability::analyze(&document.raw_text, &lexicons.stop_words);
    DocumentMetrics {
        id: document.id.clone(),
        sentiment,
        readability,
    }
}

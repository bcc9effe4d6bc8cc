//! Lexicon loading: the stop, positive, and negative word sets.
//!
//! Word-list files are newline-delimited, one word per line. Files are read
//! tolerantly: undecodable byte sequences degrade to replacement characters,
//! which can never form an alphabetic token and are inert downstream. Blank
//! lines are skipped.

use crate::errors::{AnalysisError, LexiconKind};
use anyhow::{Context, Result};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// An immutable set of words behind a membership test.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lexicon {
    words: HashSet<String>,
}

impl Lexicon {
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    /// Membership test. Entries are compared exactly as stored.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Lower-case every entry, collapsing case variants.
    pub fn folded(self) -> Self {
        Self {
            words: self.words.into_iter().map(|w| w.to_lowercase()).collect(),
        }
    }

    /// Load a single newline-delimited word file.
    pub fn load(path: &Path) -> Result<Self> {
        let bytes = fs::read(path)
            .with_context(|| format!("failed to read word list {}", path.display()))?;
        Ok(Self::parse(&String::from_utf8_lossy(&bytes)))
    }

    /// Union of every `.txt` word list directly under `dir`. A missing
    /// directory yields the empty set.
    pub fn load_dir(dir: &Path) -> Result<Self> {
        let mut words = HashSet::new();
        if !dir.is_dir() {
            return Ok(Self::default());
        }
        for entry in WalkDir::new(dir)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
        {
            let entry =
                entry.with_context(|| format!("failed to scan word lists in {}", dir.display()))?;
            let path = entry.path();
            if !entry.file_type().is_file() {
                continue;
            }
            if path.extension().is_some_and(|ext| ext == "txt") {
                let bytes = fs::read(path)
                    .with_context(|| format!("failed to read word list {}", path.display()))?;
                words.extend(Self::parse(&String::from_utf8_lossy(&bytes)).words);
            }
        }
        Ok(Self { words })
    }

    fn parse(contents: &str) -> Self {
        let words = contents
            .lines()
            .filter(|line| !line.is_empty())
            .map(str::to_owned)
            .collect();
        Self { words }
    }
}

/// The three lexicons of a run, loaded once at startup and read-only
/// thereafter. Passed by reference into every scoring function.
#[derive(Debug, Clone, Default)]
pub struct LexiconSet {
    pub stop_words: Lexicon,
    pub positive: Lexicon,
    pub negative: Lexicon,
}

impl LexiconSet {
    /// Load all three lexicons. An empty stop-word set is valid (the union of
    /// nothing); a missing or empty positive/negative list is fatal.
    ///
    /// Stop words are folded to lower case so that stop matching is
    /// case-insensitive on both sides. The sentiment lexicons are kept as
    /// loaded: a mixed-case entry there will never match a (lower-cased)
    /// token.
    pub fn load(stop_dir: &Path, positive_path: &Path, negative_path: &Path) -> Result<Self> {
        let stop_words = Lexicon::load_dir(stop_dir)?.folded();
        log::debug!(
            "loaded {} stop words from {}",
            stop_words.len(),
            stop_dir.display()
        );
        let positive = load_sentiment(positive_path, LexiconKind::Positive)?;
        let negative = load_sentiment(negative_path, LexiconKind::Negative)?;
        log::debug!(
            "loaded {} positive and {} negative words",
            positive.len(),
            negative.len()
        );
        Ok(Self {
            stop_words,
            positive,
            negative,
        })
    }
}

fn load_sentiment(path: &Path, kind: LexiconKind) -> Result<Lexicon> {
    if !path.is_file() {
        return Err(AnalysisError::LexiconMissing {
            kind,
            path: path.to_path_buf(),
        }
        .into());
    }
    let lexicon = Lexicon::load(path)?;
    if lexicon.is_empty() {
        return Err(AnalysisError::LexiconEmpty {
            kind,
            path: path.to_path_buf(),
        }
        .into());
    }
    Ok(lexicon)
}

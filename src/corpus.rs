//! Word corpus loading.
//!
//! The corpus is a comma-separated file of `word,frequency` rows, usually
//! sorted by descending frequency. Rows that don't describe a word of the
//! expected length with an integer frequency are dropped. Fields are taken
//! as written: a padded word fails the length rule.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::{debug, info};

use crate::constraint::Constraint;
use crate::error::{FilterError, Result};

/// A corpus word with its usage frequency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordEntry {
    pub word: String,
    pub frequency: i64,
}

/// The in-memory word list, kept in file order
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    entries: Vec<WordEntry>,
    skipped: usize,
}

impl Corpus {
    /// Load a corpus from CSV data, keeping only `word_length`-letter words.
    pub fn from_reader<R: Read>(reader: R, word_length: usize) -> Result<Self> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .from_reader(reader);

        let mut corpus = Corpus::default();
        for result in csv_reader.records() {
            let record = result?;
            let line = record.position().map_or(0, |pos| pos.line());

            let (word, count) = match (record.get(0), record.get(1)) {
                (Some(word), Some(count)) => (word, count),
                _ => return Err(FilterError::MissingField { line }),
            };

            if word.chars().count() != word_length {
                corpus.skipped += 1;
                continue;
            }

            let frequency = match count.parse::<i64>() {
                Ok(frequency) => frequency,
                Err(e) => {
                    debug!(line, word, count, error = %e, "skipping row with bad frequency");
                    corpus.skipped += 1;
                    continue;
                }
            };

            corpus.entries.push(WordEntry {
                word: word.to_string(),
                frequency,
            });
        }

        info!(
            words = corpus.entries.len(),
            skipped = corpus.skipped,
            "loaded corpus"
        );
        Ok(corpus)
    }

    /// Load a corpus from a CSV file on disk.
    pub fn from_path<P: AsRef<Path>>(path: P, word_length: usize) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| FilterError::CorpusOpen {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(file, word_length)
    }

    pub fn entries(&self) -> &[WordEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of rows dropped while loading
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// Entries satisfying `constraint`, in corpus order
    pub fn matches<'a>(
        &'a self,
        constraint: &'a Constraint,
    ) -> impl Iterator<Item = &'a WordEntry> + 'a {
        self.entries
            .iter()
            .filter(move |entry| constraint.is_match(&entry.word))
    }
}

impl FromIterator<WordEntry> for Corpus {
    fn from_iter<I: IntoIterator<Item = WordEntry>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
            skipped: 0,
        }
    }
}

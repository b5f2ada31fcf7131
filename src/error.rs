//! Error types for building constraints and loading the corpus.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FilterError {
    #[error("Slate must be {expected} letters or underscores, got {actual}")]
    SlateLength { expected: usize, actual: usize },

    #[error("Invalid slate character '{character}' at position {position}")]
    SlateCharacter { character: char, position: usize },

    #[error("More than {max} known letters ({known})")]
    TooManyKnownLetters { known: usize, max: usize },

    #[error("Can't open corpus file {}: {source}", path.display())]
    CorpusOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Can't parse corpus: {0}")]
    Csv(#[from] csv::Error),

    #[error("Corpus row at line {line} is missing the frequency column")]
    MissingField { line: u64 },

    #[error("Can't write matches: {0}")]
    Output(#[source] io::Error),
}

/// Result type alias for filter operations.
pub type Result<T> = std::result::Result<T, FilterError>;

//! # Wordle Filter
//!
//! Filters a frequency-sorted word corpus down to the words consistent with
//! what is known about a Wordle target: letters fixed at positions, letters
//! present somewhere, and letters known to be absent.

use std::io::{self, Write};

pub mod constraint;
pub mod corpus;
pub mod error;

pub use constraint::{Constraint, PositionMatcher};
pub use corpus::{Corpus, WordEntry};
pub use error::{FilterError, Result};

/// Word length for Wordle
pub const WORD_LENGTH: usize = 5;

/// Slate placeholder for an unknown position
pub const WILDCARD: char = '_';

/// Corpus file read when no path is given
pub const DEFAULT_CORPUS_PATH: &str = "unigram_freq.csv";

/// Words from `corpus` that satisfy `constraint`, in corpus order.
pub fn filter_words<'a>(corpus: &'a Corpus, constraint: &'a Constraint) -> Vec<&'a str> {
    corpus
        .matches(constraint)
        .map(|entry| entry.word.as_str())
        .collect()
}

/// Write `words` one per line and flush.
///
/// A closed pipe on the reading side (e.g. `| head`) ends output early and
/// is not an error; any other write failure is.
pub fn write_words<'a, W, I>(out: &mut W, words: I) -> Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a str>,
{
    let written = words
        .into_iter()
        .try_for_each(|word| writeln!(out, "{}", word))
        .and_then(|()| out.flush());

    match written {
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        Err(e) => Err(FilterError::Output(e)),
        Ok(()) => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Accepts `capacity` bytes, then fails every write with `kind`.
    struct FailingWriter {
        written: Vec<u8>,
        capacity: usize,
        kind: io::ErrorKind,
    }

    impl FailingWriter {
        fn new(capacity: usize, kind: io::ErrorKind) -> Self {
            Self {
                written: Vec::new(),
                capacity,
                kind,
            }
        }
    }

    impl Write for FailingWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if self.written.len() + buf.len() > self.capacity {
                return Err(io::Error::new(self.kind, "writer full"));
            }
            self.written.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn writes_one_word_per_line() {
        let mut out = Vec::new();
        write_words(&mut out, ["yield", "obeys"]).unwrap();
        assert_eq!(out, b"yield\nobeys\n");
    }

    #[test]
    fn broken_pipe_stops_quietly() {
        let mut out = FailingWriter::new(6, io::ErrorKind::BrokenPipe);
        write_words(&mut out, ["yield", "obeys"]).unwrap();
        assert_eq!(out.written, b"yield\n");
    }

    #[test]
    fn other_write_errors_are_reported() {
        let mut out = FailingWriter::new(6, io::ErrorKind::Other);
        let result = write_words(&mut out, ["yield", "obeys"]);
        assert!(matches!(result, Err(FilterError::Output(_))));
    }
}

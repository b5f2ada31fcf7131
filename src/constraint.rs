//! Constraint matching for candidate words.
//!
//! A [`Constraint`] is compiled once from the slate, the known-but-unplaced
//! letters and the excluded letters, then evaluated against every word in
//! the corpus.

use std::fmt;

use tracing::warn;

use crate::error::{FilterError, Result};
use crate::{WILDCARD, WORD_LENGTH};

/// Matcher for a single slate position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PositionMatcher {
    /// Letter confirmed at this position
    Exact(char),
    /// Any lowercase letter
    AnyLetter,
}

impl PositionMatcher {
    /// Parse from a slate character (`_` = wildcard, `a`-`z` = exact)
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            WILDCARD => Some(PositionMatcher::AnyLetter),
            'a'..='z' => Some(PositionMatcher::Exact(c)),
            _ => None,
        }
    }

    /// Convert back to a slate character
    pub fn to_char(self) -> char {
        match self {
            PositionMatcher::Exact(c) => c,
            PositionMatcher::AnyLetter => WILDCARD,
        }
    }

    pub fn accepts(self, c: char) -> bool {
        match self {
            PositionMatcher::Exact(expected) => c == expected,
            PositionMatcher::AnyLetter => c.is_ascii_lowercase(),
        }
    }

    pub fn is_exact(self) -> bool {
        matches!(self, PositionMatcher::Exact(_))
    }
}

/// Everything known about the target word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constraint {
    /// One matcher per letter position
    positions: Vec<PositionMatcher>,
    /// Letters that must appear somewhere, as a multiset in caller order
    required_letters: Vec<char>,
    /// Letters that must not appear anywhere
    excluded_letters: Vec<char>,
}

impl Constraint {
    /// Build a constraint for standard five-letter words.
    ///
    /// `slate` holds one character per position: a confirmed letter or `_`.
    /// `extra_letters` are letters known to be in the word but not yet
    /// placed, and `excluded_letters` are letters known to be absent.
    pub fn parse(slate: &str, extra_letters: &str, excluded_letters: &str) -> Result<Self> {
        Self::with_length(WORD_LENGTH, slate, extra_letters, excluded_letters)
    }

    /// Build a constraint for words of `word_length` letters.
    pub fn with_length(
        word_length: usize,
        slate: &str,
        extra_letters: &str,
        excluded_letters: &str,
    ) -> Result<Self> {
        let slate_len = slate.chars().count();
        if slate_len != word_length {
            return Err(FilterError::SlateLength {
                expected: word_length,
                actual: slate_len,
            });
        }

        let positions = slate
            .chars()
            .enumerate()
            .map(|(position, character)| {
                PositionMatcher::from_char(character)
                    .ok_or(FilterError::SlateCharacter { character, position })
            })
            .collect::<Result<Vec<_>>>()?;

        let required_letters: Vec<char> = extra_letters.chars().collect();
        let fixed = positions.iter().filter(|m| m.is_exact()).count();
        let known = fixed + required_letters.len();
        if known > word_length {
            return Err(FilterError::TooManyKnownLetters {
                known,
                max: word_length,
            });
        }

        Ok(Self {
            positions,
            required_letters,
            excluded_letters: excluded_letters.chars().collect(),
        })
    }

    pub fn positions(&self) -> &[PositionMatcher] {
        &self.positions
    }

    pub fn required_letters(&self) -> &[char] {
        &self.required_letters
    }

    pub fn excluded_letters(&self) -> &[char] {
        &self.excluded_letters
    }

    /// Word length this constraint was built for
    pub fn word_length(&self) -> usize {
        self.positions.len()
    }

    /// Check if a word satisfies the slate, the excluded letters and the
    /// required letters, in that order.
    pub fn is_match(&self, word: &str) -> bool {
        let word_chars: Vec<char> = word.chars().collect();

        if word_chars.len() != self.positions.len() {
            warn!(
                word,
                expected = self.positions.len(),
                actual = word_chars.len(),
                "word length does not fit the slate pattern"
            );
            return false;
        }

        let placed = self
            .positions
            .iter()
            .zip(&word_chars)
            .all(|(matcher, &c)| matcher.accepts(c));
        if !placed {
            return false;
        }

        if word_chars.iter().any(|c| self.excluded_letters.contains(c)) {
            return false;
        }

        self.contains_required(word_chars)
    }

    /// Each required letter consumes one occurrence from the word, so a
    /// letter listed twice needs two occurrences.
    fn contains_required(&self, mut remaining: Vec<char>) -> bool {
        for known in &self.required_letters {
            match remaining.iter().position(|c| c == known) {
                Some(index) => {
                    remaining.remove(index);
                }
                None => return false,
            }
        }
        true
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let slate: String = self.positions.iter().map(|m| m.to_char()).collect();
        write!(f, "{}", slate)
    }
}

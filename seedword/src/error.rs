//! Error types for mnemonic decoding.

use alloc::{string::String, vec::Vec};
use core::fmt;

/// Errors that can occur while decoding a mnemonic.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// The phrase does not have 12, 15, 18, 21 or 24 words.
    InvalidMnemonic {
        /// Number of words found in the phrase.
        word_count: usize,
    },
    /// A word of the phrase is not in the word list.
    WordNotFound {
        /// The unknown word.
        word: String,
        /// Zero-based position of the word in the phrase.
        position: usize,
    },
    /// The checksum bits do not match the hash of the recovered entropy.
    ChecksumIncorrect,
    /// A word list was built from a number of entries other than 2048.
    InvalidWordListLength(usize),
    /// Mnemonic prefix is too short for unambiguous expansion.
    PrefixTooShort {
        /// The prefix that was too short.
        prefix: String,
        /// Minimum required prefix length.
        min_len: usize,
    },
    /// Mnemonic prefix does not match any word in the word list.
    UnknownPrefix(String),
    /// Mnemonic prefix matches multiple words in the word list.
    AmbiguousPrefix {
        /// The ambiguous prefix.
        prefix: String,
        /// Words that match the prefix.
        candidates: Vec<String>,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidMnemonic { word_count } => {
                write!(
                    f,
                    "invalid mnemonic: {word_count} words, must be 12, 15, 18, 21, or 24"
                )
            }
            Self::WordNotFound { word, position } => {
                write!(f, "word \"{word}\" at position {position} is not in the word list")
            }
            Self::ChecksumIncorrect => write!(f, "checksum incorrect"),
            Self::InvalidWordListLength(n) => {
                write!(f, "word list has {n} entries, expected 2048")
            }
            Self::PrefixTooShort { prefix, min_len } => {
                write!(f, "prefix \"{prefix}\" is too short (minimum {min_len} characters)")
            }
            Self::UnknownPrefix(prefix) => {
                write!(f, "prefix \"{prefix}\" does not match any word")
            }
            Self::AmbiguousPrefix { prefix, candidates } => {
                write!(f, "prefix \"{prefix}\" is ambiguous, matches: {}", candidates.join(", "))
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

/// A convenient Result type alias for seedword operations.
pub type Result<T> = core::result::Result<T, Error>;

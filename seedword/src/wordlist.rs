//! Word lists and reverse lookup.
//!
//! A [`WordList`] is an ordered vocabulary of exactly 2048 words; the
//! position of a word is the 11-bit value it encodes. The word-to-index map
//! is built once when the list is constructed and never mutated, so a list
//! can be shared freely between threads.

use alloc::borrow::Cow;
use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use bip39::Language;

use crate::{Error, Result};

/// Number of words in a BIP-39 word list.
pub const WORDLIST_LEN: usize = 2048;

/// An ordered 2048-word vocabulary with a memoized reverse index.
#[derive(Clone)]
pub struct WordList {
    words: Vec<Cow<'static, str>>,
    index: BTreeMap<Cow<'static, str>, u16>,
}

impl fmt::Debug for WordList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WordList")
            .field("first", &self.words.first())
            .field("last", &self.words.last())
            .finish_non_exhaustive()
    }
}

impl WordList {
    /// Build a word list from its words, in index order.
    ///
    /// Only the length is checked. If a word appears more than once, lookups
    /// resolve to its first position.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidWordListLength`] unless exactly 2048 words are
    /// given.
    pub fn new<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<Cow<'static, str>>,
    {
        let words: Vec<Cow<'static, str>> = words.into_iter().map(Into::into).collect();
        if words.len() != WORDLIST_LEN {
            return Err(Error::InvalidWordListLength(words.len()));
        }

        let mut index = BTreeMap::new();
        for (i, word) in words.iter().enumerate() {
            index.entry(word.clone()).or_insert(i as u16);
        }

        Ok(Self { words, index })
    }

    /// Parse a newline-separated word list, one word per line.
    ///
    /// Surrounding whitespace is trimmed and blank lines are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidWordListLength`] unless the text holds
    /// exactly 2048 words.
    pub fn from_text(text: &str) -> Result<Self> {
        Self::new(
            text.lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(String::from),
        )
    }

    /// The word list bundled with the `bip39` crate for `language`.
    pub fn from_language(language: Language) -> Self {
        let words = language.word_list();
        let index = words
            .iter()
            .enumerate()
            .map(|(i, &word)| (Cow::Borrowed(word), i as u16))
            .collect();
        Self {
            words: words.iter().map(|&word| Cow::Borrowed(word)).collect(),
            index,
        }
    }

    /// The shared English word list.
    #[cfg(feature = "std")]
    pub fn english() -> &'static Self {
        static ENGLISH: once_cell::sync::Lazy<WordList> =
            once_cell::sync::Lazy::new(|| WordList::from_language(Language::English));
        &ENGLISH
    }

    /// Index of `word`, if present.
    #[inline]
    pub fn index_of(&self, word: &str) -> Option<u16> {
        self.index.get(word).copied()
    }

    /// Word at `index`, if in range.
    #[inline]
    pub fn word(&self, index: usize) -> Option<&str> {
        self.words.get(index).map(AsRef::as_ref)
    }

    /// Check whether `word` is in the list.
    #[inline]
    pub fn contains(&self, word: &str) -> bool {
        self.index.contains_key(word)
    }

    /// Iterate over the words in index order.
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.words.iter().map(AsRef::as_ref)
    }

    /// Resolve every word of a phrase to its index.
    ///
    /// # Errors
    ///
    /// Returns [`Error::WordNotFound`] for the first word missing from the
    /// list.
    pub fn indices(&self, words: &[&str]) -> Result<Vec<u16>> {
        words
            .iter()
            .enumerate()
            .map(|(position, &word)| {
                self.index_of(word).ok_or_else(|| {
                    tracing::debug!(position, "word not found in word list");
                    Error::WordNotFound {
                        word: String::from(word),
                        position,
                    }
                })
            })
            .collect()
    }
}

//! Mnemonic sentence tokenizing and word count rules.
//!
//! A BIP-39 sentence carries `11 * n` bits for `n` words, of which `n / 3`
//! are checksum bits and the rest are entropy. [`WordCount`] holds the
//! per-length constants so that no other module hardcodes them.

use alloc::vec::Vec;

use crate::{Error, Result};

/// Number of bits encoded by each word.
pub const BITS_PER_WORD: usize = 11;

/// Supported mnemonic lengths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum WordCount {
    /// 12 words (128-bit entropy, 4 checksum bits)
    Twelve = 12,
    /// 15 words (160-bit entropy, 5 checksum bits)
    Fifteen = 15,
    /// 18 words (192-bit entropy, 6 checksum bits)
    Eighteen = 18,
    /// 21 words (224-bit entropy, 7 checksum bits)
    TwentyOne = 21,
    /// 24 words (256-bit entropy, 8 checksum bits)
    TwentyFour = 24,
}

impl WordCount {
    /// All supported word counts, shortest first.
    pub const ALL: [Self; 5] = [
        Self::Twelve,
        Self::Fifteen,
        Self::Eighteen,
        Self::TwentyOne,
        Self::TwentyFour,
    ];

    /// Number of words.
    #[inline]
    pub const fn words(self) -> usize {
        self as usize
    }

    /// Total width of the entropy and checksum bitstream.
    #[inline]
    pub const fn total_bits(self) -> usize {
        self.words() * BITS_PER_WORD
    }

    /// Number of trailing checksum bits (`total_bits / 33`).
    #[inline]
    pub const fn checksum_bits(self) -> usize {
        self.words() / 3
    }

    /// Mask isolating the checksum bits of the bitstream.
    #[inline]
    pub const fn checksum_mask(self) -> u8 {
        (((1u16) << self.checksum_bits()) - 1) as u8
    }

    /// Right shift aligning the first hash byte with the checksum width.
    ///
    /// Equivalent to dividing by `256 / 2^checksum_bits`; zero for 24 words,
    /// where the whole byte is the checksum.
    #[inline]
    pub const fn checksum_shift(self) -> u32 {
        (8 - self.checksum_bits()) as u32
    }

    /// Number of entropy bits.
    #[inline]
    pub const fn entropy_bits(self) -> usize {
        self.total_bits() - self.checksum_bits()
    }

    /// Number of entropy bytes.
    #[inline]
    pub const fn entropy_bytes(self) -> usize {
        self.words() / 3 * 4
    }
}

impl TryFrom<usize> for WordCount {
    type Error = Error;

    fn try_from(word_count: usize) -> Result<Self> {
        match word_count {
            12 => Ok(Self::Twelve),
            15 => Ok(Self::Fifteen),
            18 => Ok(Self::Eighteen),
            21 => Ok(Self::TwentyOne),
            24 => Ok(Self::TwentyFour),
            _ => Err(Error::InvalidMnemonic { word_count }),
        }
    }
}

/// Split a sentence on whitespace and check its word count.
///
/// Runs of whitespace, including leading and trailing whitespace, are
/// ignored.
///
/// # Errors
///
/// Returns [`Error::InvalidMnemonic`] if the count is not a multiple of 3
/// in `12..=24`.
pub fn split_words(sentence: &str) -> Result<(Vec<&str>, WordCount)> {
    let words: Vec<&str> = sentence.split_whitespace().collect();
    let count = WordCount::try_from(words.len())?;
    Ok((words, count))
}

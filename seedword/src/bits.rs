//! Bitstream reconstruction and entropy/checksum splitting.
//!
//! Word indices are folded into a single big unsigned integer, first word
//! most significant, giving `11 * n` bits of entropy followed by the
//! checksum. The integer drops leading zero bits, so the entropy is padded
//! back to its full byte length after the split.

use alloc::vec::Vec;

use num_bigint::BigUint;
use num_traits::ToPrimitive;
use zeroize::Zeroizing;

use crate::phrase::{WordCount, BITS_PER_WORD};
use crate::wordlist::WORDLIST_LEN;
use crate::{Error, Result};

/// Entropy and checksum recovered from a mnemonic bitstream.
#[derive(Clone, PartialEq, Eq)]
pub struct Split {
    /// Entropy bytes, left-padded to the full length for the word count.
    pub entropy: Zeroizing<Vec<u8>>,
    /// Trailing checksum bits, right-aligned.
    pub checksum: u8,
}

impl core::fmt::Debug for Split {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Split")
            .field("entropy_len", &self.entropy.len())
            .field("checksum", &self.checksum)
            .finish()
    }
}

/// Concatenate 11-bit word indices into one integer, first index most
/// significant.
pub fn pack(indices: &[u16]) -> BigUint {
    debug_assert!(indices.iter().all(|&i| usize::from(i) < WORDLIST_LEN));
    indices.iter().fold(BigUint::default(), |acc, &index| {
        (acc << BITS_PER_WORD) | BigUint::from(index)
    })
}

/// Separate the checksum bits from the entropy of a packed bitstream.
///
/// # Errors
///
/// Returns [`Error::InvalidMnemonic`] if `value` is wider than the bitstream
/// of `count` words, which cannot come from [`pack`] with that many words.
pub fn split(value: BigUint, count: WordCount) -> Result<Split> {
    if value.bits() > count.total_bits() as u64 {
        return Err(Error::InvalidMnemonic {
            word_count: count.words(),
        });
    }

    let mask = BigUint::from(count.checksum_mask());
    let checksum = (&value & &mask)
        .to_u8()
        .ok_or(Error::InvalidMnemonic {
            word_count: count.words(),
        })?;

    let entropy_value = value >> count.checksum_bits();
    let entropy = left_pad(&entropy_value.to_bytes_be(), count.entropy_bytes());

    Ok(Split { entropy, checksum })
}

/// Left-pad `bytes` with zeros to exactly `len` bytes.
///
/// `BigUint::to_bytes_be` returns `[0]` for zero and never has leading zero
/// bytes otherwise, so the significant tail is always kept.
fn left_pad(bytes: &[u8], len: usize) -> Zeroizing<Vec<u8>> {
    let mut padded = Zeroizing::new(alloc::vec![0u8; len]);
    let significant = bytes.len().min(len);
    padded[len - significant..].copy_from_slice(&bytes[bytes.len() - significant..]);
    padded
}

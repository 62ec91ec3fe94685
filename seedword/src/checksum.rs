//! Checksum computation and verification.

use crate::hash::sha256;
use crate::phrase::WordCount;
use crate::{Error, Result};

/// Expected checksum for `entropy`: the leading `checksum_bits` bits of its
/// SHA-256 digest, right-aligned.
#[inline]
pub fn compute(entropy: &[u8], count: WordCount) -> u8 {
    sha256(entropy)[0] >> count.checksum_shift()
}

/// Compare an extracted checksum against the one recomputed from `entropy`.
///
/// # Errors
///
/// Returns [`Error::ChecksumIncorrect`] on mismatch.
pub fn verify(entropy: &[u8], count: WordCount, checksum: u8) -> Result<()> {
    if compute(entropy, count) != checksum {
        tracing::debug!(words = count.words(), "mnemonic checksum mismatch");
        return Err(Error::ChecksumIncorrect);
    }
    Ok(())
}

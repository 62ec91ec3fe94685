//! Hash functions used for checksum computation.

use sha2::{Digest, Sha256};

/// Compute SHA-256 hash
#[inline]
pub fn sha256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().into()
}

//! # Hashing
//!
//! BLAKE3 for identity digests and the action-state chain, Keccak-256 for
//! authenticated map nodes.

use blake3::Hasher;
use sha3::{Digest, Keccak256};

/// 256-bit hash output.
pub type Hash = [u8; 32];

/// Stateful BLAKE3 hasher.
pub struct Blake3Hasher {
    inner: Hasher,
}

impl Blake3Hasher {
    /// Create new hasher.
    pub fn new() -> Self {
        Self {
            inner: Hasher::new(),
        }
    }

    /// Update with data.
    pub fn update(&mut self, data: &[u8]) -> &mut Self {
        self.inner.update(data);
        self
    }

    /// Finalize and return hash.
    pub fn finalize(&self) -> Hash {
        let hash = self.inner.finalize();
        *hash.as_bytes()
    }
}

impl Default for Blake3Hasher {
    fn default() -> Self {
        Self::new()
    }
}

/// Hash data with BLAKE3 (one-shot).
pub fn blake3_hash(data: &[u8]) -> Hash {
    *blake3::hash(data).as_bytes()
}

/// BLAKE3 of the concatenation of `inputs`, without building the buffer.
pub fn blake3_hash_many(inputs: &[&[u8]]) -> Hash {
    inputs
        .iter()
        .fold(&mut Blake3Hasher::new(), |hasher, input| hasher.update(input))
        .finalize()
}

/// Keccak-256 of `left || right`.
///
/// Used for every interior node of the authenticated map, so the argument
/// order is significant.
pub fn keccak_pair(left: &Hash, right: &Hash) -> Hash {
    let mut hasher = Keccak256::new();
    hasher.update(left);
    hasher.update(right);
    hasher.finalize().into()
}

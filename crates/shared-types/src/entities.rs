//! # Core Domain Entities
//!
//! ## Clusters
//!
//! - **Map**: `FieldElement` keys and values of the authenticated map
//! - **Identity**: `CallerId`, the public identity presented on every call

use serde::{Deserialize, Serialize};
use std::fmt;

/// A 32-byte hash (Keccak-256 or BLAKE3).
pub type Hash = [u8; 32];

/// Number of bits in a [`FieldElement`].
pub const FIELD_BITS: usize = 256;

// =============================================================================
// CLUSTER A: THE MAP
// =============================================================================

/// A 256-bit map key or value, stored big-endian.
///
/// Agent addresses, the registration sentinels, and decoded message payloads
/// all live in the authenticated map as field elements. Bit `0` is the least
/// significant bit.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct FieldElement(pub [u8; 32]);

impl FieldElement {
    /// Unset slot.
    pub const ZERO: Self = Self([0u8; 32]);

    /// Registered slot with no message yet.
    pub const ONE: Self = Self::from_u64(1);

    /// Build from a `u64`.
    pub const fn from_u64(value: u64) -> Self {
        let be = value.to_be_bytes();
        let mut bytes = [0u8; 32];
        let mut i = 0;
        while i < 8 {
            bytes[24 + i] = be[i];
            i += 1;
        }
        Self(bytes)
    }

    /// Returns the value as `u128` if the upper 128 bits are clear.
    pub fn to_u128(&self) -> Option<u128> {
        if self.0[..16].iter().any(|b| *b != 0) {
            return None;
        }
        let mut low = [0u8; 16];
        low.copy_from_slice(&self.0[16..]);
        Some(u128::from_be_bytes(low))
    }

    /// Raw big-endian bytes.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Returns `true` if this is the zero element.
    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    /// Bit `index`, counting from the least significant bit.
    pub fn bit(&self, index: usize) -> bool {
        debug_assert!(index < FIELD_BITS);
        let byte = self.0[31 - index / 8];
        (byte >> (index % 8)) & 1 == 1
    }

    /// Copy with bit `index` set to `value`.
    pub fn with_bit(mut self, index: usize, value: bool) -> Self {
        debug_assert!(index < FIELD_BITS);
        let mask = 1u8 << (index % 8);
        let byte = &mut self.0[31 - index / 8];
        if value {
            *byte |= mask;
        } else {
            *byte &= !mask;
        }
        self
    }

    /// Copy with the lowest `count` bits cleared.
    ///
    /// Identifies the subtree at height `count` that contains this key.
    pub fn with_low_bits_cleared(mut self, count: usize) -> Self {
        let full_bytes = count.min(FIELD_BITS) / 8;
        for byte in self.0.iter_mut().rev().take(full_bytes) {
            *byte = 0;
        }
        let rest = count % 8;
        if rest != 0 && full_bytes < 32 {
            self.0[31 - full_bytes] &= 0xFFu8 << rest;
        }
        self
    }
}

impl From<u64> for FieldElement {
    fn from(value: u64) -> Self {
        Self::from_u64(value)
    }
}

impl fmt::Debug for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_u128() {
            Some(small) => write!(f, "FieldElement({small})"),
            None => write!(f, "FieldElement(0x{})", hex::encode(self.0)),
        }
    }
}

impl fmt::Display for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

// =============================================================================
// CLUSTER B: IDENTITY
// =============================================================================

/// Public identity presented by a caller.
///
/// Supplied by the execution harness; key management and signing happen
/// outside this workspace.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CallerId(pub [u8; 32]);

impl CallerId {
    /// BLAKE3 digest of the identity, the only form the gate persists.
    pub fn digest(&self) -> Hash {
        shared_crypto::blake3_hash(&self.0)
    }

    /// Parse a 64-character hex string.
    pub fn from_hex(input: &str) -> Option<Self> {
        let bytes = hex::decode(input.trim_start_matches("0x")).ok()?;
        let array: [u8; 32] = bytes.try_into().ok()?;
        Some(Self(array))
    }
}

impl fmt::Debug for CallerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CallerId({}..)", hex::encode(&self.0[..4]))
    }
}

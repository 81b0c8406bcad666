//! # Value Objects
//!
//! Message flags and the bit layout of an encoded message.

use serde::{Deserialize, Serialize};

/// Number of payload bits in an encoded message.
pub const PAYLOAD_BITS: u32 = 64;

/// Number of flag bits appended below the payload.
pub const FLAG_BITS: u32 = 6;

/// Total width of an encoded message.
pub const MESSAGE_BITS: u32 = PAYLOAD_BITS + FLAG_BITS;

/// Mask selecting the flag bits.
pub const FLAG_MASK: u128 = (1 << FLAG_BITS) - 1;

/// Bit masks for flag1..flag6, most significant flag first.
pub const FLAG_MASKS: [u8; 6] = [32, 16, 8, 4, 2, 1];

/// The six message flags.
///
/// `flag1` is reserved and never constrained.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FlagSet {
    /// Reserved (mask 32).
    pub flag1: bool,
    /// Requires `flag3` (mask 16).
    pub flag2: bool,
    /// Mask 8.
    pub flag3: bool,
    /// Excludes `flag5` and `flag6` (mask 4).
    pub flag4: bool,
    /// Mask 2.
    pub flag5: bool,
    /// Mask 1.
    pub flag6: bool,
}

impl FlagSet {
    /// Build from six booleans in flag order.
    pub fn new(flag1: bool, flag2: bool, flag3: bool, flag4: bool, flag5: bool, flag6: bool) -> Self {
        Self {
            flag1,
            flag2,
            flag3,
            flag4,
            flag5,
            flag6,
        }
    }

    /// Flags as an array, `flag1` first.
    pub fn to_array(&self) -> [bool; 6] {
        [
            self.flag1, self.flag2, self.flag3, self.flag4, self.flag5, self.flag6,
        ]
    }

    /// Pack into the low six bits.
    pub fn bits(&self) -> u8 {
        self.to_array()
            .iter()
            .zip(FLAG_MASKS)
            .filter(|(set, _)| **set)
            .fold(0u8, |acc, (_, mask)| acc | mask)
    }

    /// Unpack from the low six bits of `packed`; higher bits are ignored.
    ///
    /// Each flag is true iff `packed & mask == mask`.
    pub fn from_bits(packed: u128) -> Self {
        let set = |mask: u8| packed & u128::from(mask) == u128::from(mask);
        Self::new(set(32), set(16), set(8), set(4), set(2), set(1))
    }
}

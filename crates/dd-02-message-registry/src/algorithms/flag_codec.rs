//! # Flag Codec
//!
//! Packs six flags under a 64-bit payload and checks the flag rules.
//!
//! ## Layout
//!
//! ```text
//!  69                              6  5    0
//! ┌─────────────────────────────────┬──────┐
//! │            payload              │flags │   packed = (payload << 6) XOR flags
//! └─────────────────────────────────┴──────┘
//! ```

use crate::domain::{FlagSet, RegistryError, FLAG_BITS, FLAG_MASK, PAYLOAD_BITS};

/// Largest encodable payload.
const MAX_PAYLOAD: u128 = (1 << PAYLOAD_BITS) - 1;

/// Encode `payload` with `flags` into a 70-bit message.
///
/// # Errors
///
/// `PayloadOverflow` if `payload >= 2^64`.
pub fn encode_message(payload: u128, flags: FlagSet) -> Result<u128, RegistryError> {
    if payload > MAX_PAYLOAD {
        return Err(RegistryError::PayloadOverflow { value: payload });
    }
    Ok((payload << FLAG_BITS) ^ u128::from(flags.bits()))
}

/// Split a 70-bit message into payload and flags.
///
/// # Errors
///
/// `PayloadOverflow` if the bits above the flags do not fit in 64 bits.
pub fn decode_message(packed: u128) -> Result<(u64, FlagSet), RegistryError> {
    let payload = packed >> FLAG_BITS;
    let payload = u64::try_from(payload).map_err(|_| RegistryError::PayloadOverflow { value: payload })?;
    Ok((payload, FlagSet::from_bits(packed & FLAG_MASK)))
}

/// Flag rules: `flag2 ⇒ flag3` and `flag4 ⇒ ¬flag5 ∧ ¬flag6`.
///
/// `flag1` is reserved and accepted in either state.
pub fn validate_flags(flags: &FlagSet) -> bool {
    let two_needs_three = !flags.flag2 || flags.flag3;
    let four_excludes_five_six = !flags.flag4 || (!flags.flag5 && !flags.flag6);
    two_needs_three && four_excludes_five_six
}

//! # Domain Errors
//!
//! Every variant aborts the operation with no state change.

use super::value_objects::FlagSet;
use shared_types::AccessError;
use thiserror::Error;

/// Why a witness was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WitnessFault {
    /// Recomputed root differs from the stored root.
    RootMismatch,
    /// Witness addresses a different slot.
    KeyMismatch,
    /// Witness path has the wrong length.
    Malformed,
    /// Prior value claims the slot was never registered.
    Unregistered,
}

/// Registry error types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// Admin gate rejected the caller.
    #[error(transparent)]
    Access(#[from] AccessError),

    /// The whitelist is full.
    #[error("Capacity exceeded: registry holds at most {max} addresses")]
    CapacityExceeded {
        /// Configured capacity
        max: u64,
    },

    /// The witness does not prove the claimed slot under the stored root.
    ///
    /// Covers "already registered", "wrong address", and "lost a race".
    #[error("Stale or invalid witness: {0:?}")]
    StaleOrInvalidWitness(WitnessFault),

    /// Payload does not fit in 64 bits.
    #[error("Payload overflow: {value} does not fit in 64 bits")]
    PayloadOverflow {
        /// Offending payload
        value: u128,
    },

    /// Flag combination violates the flag rules.
    #[error("Invalid flags: {0:?}")]
    InvalidFlags(FlagSet),
}

//! # Domain Invariants
//!
//! Checks every write must pass before it commits.

use super::errors::{RegistryError, WitnessFault};
use dd_01_authenticated_map::KeyWitness;
use shared_types::{FieldElement, Hash};

/// Default whitelist capacity.
pub const MAX_ADDRESSES: u64 = 100;

/// Invariant: the whitelist never grows past its capacity.
pub fn invariant_capacity(address_count: u64, max: u64) -> Result<(), RegistryError> {
    if address_count >= max {
        return Err(RegistryError::CapacityExceeded { max });
    }
    Ok(())
}

/// Invariant: a write must prove it observed the current state.
///
/// Recomputing the root with `claimed` in the witnessed slot must give
/// `stored_root`, and the witnessed slot must be `address`. On success
/// returns the root after writing `new_value` into the same slot.
pub fn invariant_witness_transition<W: KeyWitness + ?Sized>(
    witness: &W,
    stored_root: &Hash,
    address: &FieldElement,
    claimed: &FieldElement,
    new_value: &FieldElement,
) -> Result<Hash, RegistryError> {
    let malformed = |_| RegistryError::StaleOrInvalidWitness(WitnessFault::Malformed);

    let (root_before, key) = witness.compute_root_and_key(claimed).map_err(malformed)?;
    if root_before != *stored_root {
        return Err(RegistryError::StaleOrInvalidWitness(WitnessFault::RootMismatch));
    }
    if key != *address {
        return Err(RegistryError::StaleOrInvalidWitness(WitnessFault::KeyMismatch));
    }

    let (root_after, _) = witness.compute_root_and_key(new_value).map_err(malformed)?;
    Ok(root_after)
}

//! # Ports Module
//!
//! The single contract the registry consumes from the authenticated map.

use crate::domain::MapError;
use shared_types::{FieldElement, Hash};

/// Proof binding one `(key, value)` slot to a root.
///
/// Given a claimed value for the slot, returns the root the map would have
/// and the key the witness addresses. Callers compare both against their own
/// expectations; the witness itself never says whether it is current.
pub trait KeyWitness {
    /// Recompute `(root, key)` with `value` in the witnessed slot.
    fn compute_root_and_key(&self, value: &FieldElement) -> Result<(Hash, FieldElement), MapError>;
}

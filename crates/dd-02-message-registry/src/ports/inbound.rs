//! # Inbound Ports
//!
//! API trait defining what the message registry can do.

use crate::domain::{RegistryError, RegistryState};
use dd_01_authenticated_map::KeyWitness;
use shared_types::{CallerId, FieldElement, Hash};

/// Message Registry API - inbound port.
///
/// Every call except `set_admin` is gated on the bootstrapped admin.
pub trait MessageRegistryApi: Send + Sync {
    /// Bootstrap the admin identity. Succeeds exactly once.
    fn set_admin(&self, credential: &CallerId) -> Result<(), RegistryError>;

    /// Whitelist `address`.
    ///
    /// `witness` must prove `address` is unset under the current root.
    /// Returns the new root.
    fn register<W: KeyWitness + ?Sized>(
        &self,
        caller: &CallerId,
        address: FieldElement,
        witness: &W,
    ) -> Result<Hash, RegistryError>;

    /// Store or replace the message for `address`.
    ///
    /// `witness` must prove `address ↦ prior_value` under the current root.
    /// `prior_value == 1` marks the first message for the address. Returns
    /// the `messages_received` counter after the write.
    fn store_message<W: KeyWitness + ?Sized>(
        &self,
        caller: &CallerId,
        witness: &W,
        address: FieldElement,
        prior_value: FieldElement,
        encoded_message: u128,
    ) -> Result<u64, RegistryError>;

    /// Snapshot of the persisted state.
    fn state(&self) -> RegistryState;
}

//! # Domain Entities
//!
//! Persisted registry state and the events published after each commit.

use dd_01_authenticated_map::empty_root;
use serde::{Deserialize, Serialize};
use shared_types::{AccessGate, FieldElement, Hash};

/// Slot value of an address that was never registered.
pub const UNSET_SLOT: FieldElement = FieldElement::ZERO;

/// Slot value of a registered address that has no message yet.
pub const REGISTERED_SLOT: FieldElement = FieldElement::ONE;

/// Persisted state of the registry and message store.
///
/// The authenticated map itself lives with the callers; only its root is
/// held here, and it is the single source of truth for both the address
/// whitelist and the stored messages.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryState {
    /// Number of registered addresses.
    pub address_count: u64,
    /// Root of the authenticated map after the last committed write.
    pub map_root: Hash,
    /// Number of addresses that have stored at least one message.
    pub messages_received: u64,
    /// One-time admin identity.
    pub gate: AccessGate,
}

impl Default for RegistryState {
    fn default() -> Self {
        Self {
            address_count: 0,
            map_root: empty_root(),
            messages_received: 0,
            gate: AccessGate::new(),
        }
    }
}

/// Events published by the registry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RegistryEvent {
    /// An address joined the whitelist.
    AddressRegistered {
        /// Registered address.
        address: FieldElement,
        /// Count after registration.
        address_count: u64,
        /// Root after registration.
        map_root: Hash,
    },
    /// A message was stored. Carries the updated counter.
    MessageReceived {
        /// Counter after the store.
        messages_received: u64,
    },
}

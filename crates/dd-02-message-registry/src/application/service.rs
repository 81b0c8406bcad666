//! # Message Registry Service
//!
//! Application service for the registry and message store.
//!
//! ## Commit Boundary
//!
//! Each operation holds the state write lock for its whole duration. All
//! checks run and all new values are computed before the first field is
//! assigned, so a failed call leaves no trace.

use parking_lot::RwLock;
use tracing::{debug, info, warn};

use crate::algorithms::{decode_message, validate_flags};
use crate::config::RegistryConfig;
use crate::domain::{
    invariant_capacity, invariant_witness_transition, RegistryError, RegistryEvent,
    RegistryState, WitnessFault, REGISTERED_SLOT, UNSET_SLOT,
};
use crate::ports::{MessageRegistryApi, RegistryEventPublisher};
use dd_01_authenticated_map::KeyWitness;
use shared_types::{CallerId, FieldElement, Hash};

/// Message Registry Service - orchestrates gated, witness-checked writes.
pub struct MessageRegistryService<P: RegistryEventPublisher> {
    /// Configuration.
    config: RegistryConfig,
    /// Persisted state.
    state: RwLock<RegistryState>,
    /// Event sink.
    publisher: P,
}

impl<P: RegistryEventPublisher> MessageRegistryService<P> {
    /// Create a service with an empty map and no admin.
    pub fn new(config: RegistryConfig, publisher: P) -> Self {
        Self::with_state(config, RegistryState::default(), publisher)
    }

    /// Resume from previously persisted state.
    pub fn with_state(config: RegistryConfig, state: RegistryState, publisher: P) -> Self {
        Self {
            config,
            state: RwLock::new(state),
            publisher,
        }
    }

    /// Current configuration.
    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Current map root.
    pub fn map_root(&self) -> Hash {
        self.state.read().map_root
    }

    /// Validate a registration against `state` and return the post-write root.
    fn check_register<W: KeyWitness + ?Sized>(
        &self,
        state: &RegistryState,
        caller: &CallerId,
        address: &FieldElement,
        witness: &W,
    ) -> Result<Hash, RegistryError> {
        state.gate.authorize(caller)?;
        invariant_capacity(state.address_count, self.config.max_addresses)?;
        invariant_witness_transition(witness, &state.map_root, address, &UNSET_SLOT, &REGISTERED_SLOT)
    }

    /// Validate a message write against `state` and return the post-write
    /// root together with the stored payload.
    fn check_store<W: KeyWitness + ?Sized>(
        &self,
        state: &RegistryState,
        caller: &CallerId,
        witness: &W,
        address: &FieldElement,
        prior_value: &FieldElement,
        encoded_message: u128,
    ) -> Result<(Hash, FieldElement), RegistryError> {
        state.gate.authorize(caller)?;

        let (payload, flags) = decode_message(encoded_message)?;
        if !validate_flags(&flags) {
            return Err(RegistryError::InvalidFlags(flags));
        }
        let payload_value = FieldElement::from_u64(payload);

        // Only registered slots accept messages
        if *prior_value == UNSET_SLOT {
            return Err(RegistryError::StaleOrInvalidWitness(WitnessFault::Unregistered));
        }
        let new_root =
            invariant_witness_transition(witness, &state.map_root, address, prior_value, &payload_value)?;
        Ok((new_root, payload_value))
    }
}

fn log_rejection<T>(operation: &str, address: &FieldElement, result: &Result<T, RegistryError>) {
    if let Err(e) = result {
        warn!(operation, address = %address, error = %e, "Registry write rejected");
    }
}

impl<P: RegistryEventPublisher> MessageRegistryApi for MessageRegistryService<P> {
    fn set_admin(&self, credential: &CallerId) -> Result<(), RegistryError> {
        let mut state = self.state.write();
        state.gate.set_admin(credential)?;
        info!(caller = ?credential, "Registry admin set");
        Ok(())
    }

    fn register<W: KeyWitness + ?Sized>(
        &self,
        caller: &CallerId,
        address: FieldElement,
        witness: &W,
    ) -> Result<Hash, RegistryError> {
        let mut state = self.state.write();

        let result = self.check_register(&state, caller, &address, witness);
        log_rejection("register", &address, &result);
        let new_root = result?;

        state.map_root = new_root;
        state.address_count += 1;

        info!(
            address = %address,
            address_count = state.address_count,
            "Address registered"
        );
        self.publisher.publish(RegistryEvent::AddressRegistered {
            address,
            address_count: state.address_count,
            map_root: new_root,
        });

        Ok(new_root)
    }

    fn store_message<W: KeyWitness + ?Sized>(
        &self,
        caller: &CallerId,
        witness: &W,
        address: FieldElement,
        prior_value: FieldElement,
        encoded_message: u128,
    ) -> Result<u64, RegistryError> {
        let mut state = self.state.write();

        let result = self.check_store(&state, caller, witness, &address, &prior_value, encoded_message);
        log_rejection("store_message", &address, &result);
        let (new_root, payload) = result?;

        let first_message = prior_value == REGISTERED_SLOT;
        state.map_root = new_root;
        if first_message {
            state.messages_received += 1;
        }
        let messages_received = state.messages_received;

        debug!(address = %address, payload = ?payload, "Message slot rewritten");
        info!(
            address = %address,
            first_message,
            messages_received,
            "Message stored"
        );
        self.publisher
            .publish(RegistryEvent::MessageReceived { messages_received });

        Ok(messages_received)
    }

    fn state(&self) -> RegistryState {
        self.state.read().clone()
    }
}

//! # DD-02 Message Registry
//!
//! Capacity-bounded agent registry and per-agent message store, both backed
//! by one authenticated map whose root is the only map state held here.
//!
//! **Subsystem ID:** 2  
//! **Architecture:** Hexagonal (DDD + Ports/Adapters)
//!
//! ## Write Path
//!
//! ```text
//! caller ──register(address, witness)──────────────────────┐
//!                                                          ↓
//! caller ──store_message(witness, address, prior, msg)──→ [AccessGate]
//!                                                          │
//!                                     decode + flag check (store only)
//!                                                          │
//!                               witness reproduces stored root + key?
//!                                                          │
//!                                  commit new root / counters atomically
//!                                                          │
//!                                                          ↓
//!                                                 RegistryEvent published
//! ```
//!
//! Any failed check aborts the call before anything is written.
//!
//! ## Module Structure
//!
//! ```text
//! dd-02-message-registry/
//! ├── domain/       # FlagSet, RegistryState, events, errors, invariants
//! ├── algorithms/   # Flag codec and flag validator
//! ├── ports/        # MessageRegistryApi (inbound), RegistryEventPublisher (outbound)
//! ├── adapters/     # InMemoryEventPublisher
//! ├── application/  # MessageRegistryService
//! └── config.rs     # RegistryConfig
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod adapters;
pub mod algorithms;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;

// Re-exports
pub use adapters::InMemoryEventPublisher;
pub use algorithms::{decode_message, encode_message, validate_flags};
pub use application::MessageRegistryService;
pub use config::RegistryConfig;
pub use domain::{
    FlagSet, RegistryError, RegistryEvent, RegistryState, WitnessFault, MAX_ADDRESSES,
    MESSAGE_BITS, PAYLOAD_BITS,
};
pub use ports::{MessageRegistryApi, RegistryEventPublisher};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

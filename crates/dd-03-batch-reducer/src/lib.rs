//! # DD-03 Batch Reducer
//!
//! Message validation, an append-only action log, and a resumable fold of
//! that log into a single aggregate: the highest valid message number.
//!
//! **Subsystem ID:** 3  
//! **Architecture:** Hexagonal (DDD + Ports/Adapters)
//!
//! ## Log Path
//!
//! ```text
//! dispatch(message, prev) ──→ [AccessGate] ──→ is_valid ──→ ActionLog.append
//!                                                               │
//! run_reduce(continue) ──→ [AccessGate] ──→ entries since cursor (≤ budget)
//!                                                               │
//!                                          fold max over valid entries
//!                                                               │
//!                                       commit aggregate + advance cursor
//! ```
//!
//! Validity is recorded on the log path, never enforced: an invalid message
//! is appended and consumed by the cursor, it simply does not raise the
//! maximum. Only `validate_message`, the direct path, rejects.
//!
//! ## Module Structure
//!
//! ```text
//! dd-03-batch-reducer/
//! ├── domain/       # SecretMessage, validation, ActionLog, ActionState, errors
//! ├── algorithms/   # fold
//! ├── ports/        # BatchMessagesApi (inbound), ReducerEventPublisher (outbound)
//! ├── adapters/     # InMemoryEventPublisher
//! ├── application/  # BatchMessagesService
//! └── config.rs     # ReducerConfig
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
pub use algorithms::{fold_entries, initial_accumulator};
pub use application::BatchMessagesService;
pub use config::ReducerConfig;
pub use domain::{
    checksum_check, is_acceptable, is_valid, range_check, ActionLog, ActionState, LogEntry,
    ReduceOutcome, ReducerError, ReducerEvent, ReducerState, SecretMessage,
};
pub use ports::{BatchMessagesApi, ReducerEventPublisher};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

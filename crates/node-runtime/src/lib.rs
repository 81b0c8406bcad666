//! # Node Runtime Library
//!
//! This library exposes the internal modules of the node runtime for testing.
//! The main entry point is the `main.rs` binary.
//!
//! ## Architectural Patterns
//!
//! - **DDD (Domain-Driven Design)**: Each subsystem owns its domain logic
//! - **Hexagonal Architecture**: Ports define contracts, Adapters implement them
//! - **Witness-Gated Writes**: the registry only commits against the root the
//!   caller proved it observed

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod container;
pub mod demo;

pub use container::{load_config, ConfigError, NodeConfig, SubsystemContainer};
pub use demo::{run_demo, DemoReport};

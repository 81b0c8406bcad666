//! # Adapters Module
//!
//! In-memory implementations of the outbound ports.

pub mod event_log;

pub use event_log::InMemoryEventPublisher;

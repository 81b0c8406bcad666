//! # Shared Crypto - Hashing Primitives
//!
//! ## Components
//!
//! | Function | Algorithm | Use Case |
//! |----------|-----------|----------|
//! | `blake3_hash` | BLAKE3 | Caller identity digests (admin gate) |
//! | `blake3_hash_many` | BLAKE3 | Action-state hash chain |
//! | `keccak_pair` | Keccak-256 | Authenticated map interior nodes |
//!
//! Nothing here stores secrets; callers only ever persist digests.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod hashing;

// Re-exports
pub use hashing::{blake3_hash, blake3_hash_many, keccak_pair, Blake3Hasher, Hash};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

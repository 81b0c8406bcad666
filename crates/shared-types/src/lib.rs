//! # Shared Types Crate
//!
//! Types that both subsystems agree on.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: map keys, map values, and caller identities
//!   are defined once here.
//! - **Digest-Only Identity**: the admin gate never stores a caller identity,
//!   only its BLAKE3 digest.

pub mod entities;
pub mod errors;
pub mod security;

pub use entities::*;
pub use errors::*;
pub use security::*;

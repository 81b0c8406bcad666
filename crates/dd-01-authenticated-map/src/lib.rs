//! # DD-01 Authenticated Map
//!
//! Witness verification for the authenticated key/value map that backs the
//! agent registry.
//!
//! **Subsystem ID:** 1  
//! **Architecture:** Hexagonal (DDD + Ports/Adapters)
//!
//! ## Purpose
//!
//! The registry never holds the map itself, only its root. A mutation proves
//! it observed the current state by presenting a witness: recomputing the root
//! from the witness and the claimed current value must reproduce the stored
//! root, and the recomputed key must be the slot being written. The same
//! witness then yields the post-write root.
//!
//! ## Module Structure
//!
//! ```text
//! dd-01-authenticated-map/
//! ├── domain/     # MapWitness, WitnessNode, empty subtree roots, errors
//! ├── ports/      # KeyWitness (the contract the registry consumes)
//! └── adapters/   # SparseMerkleMap, the in-memory reference map
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod ports;

// Re-exports
pub use adapters::SparseMerkleMap;
pub use domain::{empty_root, MapError, MapWitness, Position, WitnessNode, MAP_DEPTH};
pub use ports::KeyWitness;

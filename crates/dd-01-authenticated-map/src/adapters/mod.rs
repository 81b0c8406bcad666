//! # Adapters Module
//!
//! In-memory implementation of the authenticated map.

pub mod sparse_map;

pub use sparse_map::SparseMerkleMap;

//! # Domain Module
//!
//! Witness types and the shape of an empty map.

pub mod errors;
pub mod witness;

pub use errors::*;
pub use witness::*;

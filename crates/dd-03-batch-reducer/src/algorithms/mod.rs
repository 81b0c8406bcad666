//! # Algorithms Module
//!
//! Pure functions used by the batch reducer.

pub mod reduce;

pub use reduce::*;

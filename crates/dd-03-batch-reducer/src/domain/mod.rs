//! # Domain Module
//!
//! Core domain types for the batch reducer.

pub mod action_log;
pub mod entities;
pub mod errors;
pub mod validation;
pub mod value_objects;

pub use action_log::*;
pub use entities::*;
pub use errors::*;
pub use validation::*;
pub use value_objects::*;

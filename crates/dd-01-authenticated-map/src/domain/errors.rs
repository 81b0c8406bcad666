//! # Domain Errors

use thiserror::Error;

/// Authenticated map error types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MapError {
    /// The witness path does not cover the full map depth.
    #[error("Malformed witness: expected {expected} nodes, got {got}")]
    MalformedWitness {
        /// Map depth
        expected: usize,
        /// Nodes supplied
        got: usize,
    },
}

//! # Error Types
//!
//! Errors shared across subsystems.

use thiserror::Error;

/// Authorization failures raised by [`crate::AccessGate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AccessError {
    /// `set_admin` was called after the admin was already bootstrapped.
    #[error("Admin already set")]
    AdminAlreadySet,

    /// A gated operation ran before any admin was bootstrapped.
    #[error("Admin not set")]
    AdminNotSet,

    /// The caller's identity digest does not match the stored admin digest.
    #[error("Unauthorized caller")]
    Unauthorized,
}

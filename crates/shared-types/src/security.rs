//! # Admin Access Gate
//!
//! One-time admin bootstrap followed by digest comparison on every gated call.
//!
//! ## Security Properties
//!
//! - **First-Write-Wins**: the admin digest can be set exactly once
//! - **Digest-Only Storage**: the clear-text identity is never retained
//! - **No Partial Effect**: `authorize` is a pure check, so callers run it
//!   before computing any state change

use crate::entities::{CallerId, Hash};
use crate::errors::AccessError;
use serde::{Deserialize, Serialize};

/// Sentinel digest meaning "no admin bootstrapped yet".
pub const UNSET_ADMIN: Hash = [0u8; 32];

/// Persisted admin identity.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessGate {
    admin_hash: Hash,
}

impl AccessGate {
    /// Creates a gate with no admin.
    pub fn new() -> Self {
        Self {
            admin_hash: UNSET_ADMIN,
        }
    }

    /// Stored admin digest (`UNSET_ADMIN` when unset).
    pub fn admin_hash(&self) -> Hash {
        self.admin_hash
    }

    /// Returns `true` once `set_admin` has succeeded.
    pub fn is_set(&self) -> bool {
        self.admin_hash != UNSET_ADMIN
    }

    /// Bootstraps the admin identity.
    ///
    /// # Errors
    ///
    /// `AdminAlreadySet` if an admin digest is already stored.
    pub fn set_admin(&mut self, credential: &CallerId) -> Result<(), AccessError> {
        if self.is_set() {
            return Err(AccessError::AdminAlreadySet);
        }
        self.admin_hash = credential.digest();
        Ok(())
    }

    /// Checks that `credential` is the bootstrapped admin.
    ///
    /// # Errors
    ///
    /// - `AdminNotSet` before bootstrap
    /// - `Unauthorized` when the digests differ
    pub fn authorize(&self, credential: &CallerId) -> Result<(), AccessError> {
        if !self.is_set() {
            return Err(AccessError::AdminNotSet);
        }
        if credential.digest() != self.admin_hash {
            return Err(AccessError::Unauthorized);
        }
        Ok(())
    }
}

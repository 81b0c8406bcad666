//! # Registry Configuration

use crate::domain::MAX_ADDRESSES;
use serde::{Deserialize, Serialize};

/// Message registry configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Maximum number of whitelisted addresses.
    pub max_addresses: u64,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            max_addresses: MAX_ADDRESSES,
        }
    }
}

impl RegistryConfig {
    /// Create a config for testing (small capacity).
    pub fn for_testing() -> Self {
        Self { max_addresses: 3 }
    }
}

//! # Node Configuration
//!
//! Unified configuration for both subsystems and the admin bootstrap.
//!
//! ## Environment Overrides
//!
//! | Variable | Field |
//! |----------|-------|
//! | `DD_MAX_ADDRESSES` | `registry.max_addresses` |
//! | `DD_MAX_ACTIONS_PER_REDUCE` | `reducer.max_actions_per_reduce` |
//! | `DD_ADMIN_ID` | `security.admin_id` (64 hex chars) |

use dd_02_message_registry::RegistryConfig;
use dd_03_batch_reducer::ReducerConfig;
use serde::{Deserialize, Serialize};
use shared_types::CallerId;
use thiserror::Error;
use tracing::{info, warn};

/// Complete node configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeConfig {
    /// Message registry configuration.
    pub registry: RegistryConfig,
    /// Batch reducer configuration.
    pub reducer: ReducerConfig,
    /// Admin bootstrap configuration.
    pub security: SecurityConfig,
}

/// Admin bootstrap configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecurityConfig {
    /// Identity bootstrapped as admin on both subsystems at startup.
    pub admin_id: Option<CallerId>,
}

impl NodeConfig {
    /// Validate configuration for production readiness.
    pub fn validate_for_production(&self) -> Result<(), ConfigError> {
        if self.security.admin_id.is_none() {
            return Err(ConfigError::MissingAdmin);
        }
        if self.registry.max_addresses == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        Ok(())
    }
}

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// No admin identity configured.
    #[error("No admin identity configured. Set DD_ADMIN_ID to 64 hex characters.")]
    MissingAdmin,

    /// The registry could never accept an address.
    #[error("Registry capacity is zero")]
    ZeroCapacity,
}

/// Load configuration from the process environment.
pub fn load_config() -> NodeConfig {
    load_config_from(|key| std::env::var(key).ok())
}

/// Load configuration, reading overrides through `lookup`.
///
/// Unparseable values are logged and ignored.
pub fn load_config_from(lookup: impl Fn(&str) -> Option<String>) -> NodeConfig {
    let mut config = NodeConfig::default();

    if let Some(raw) = lookup("DD_MAX_ADDRESSES") {
        match raw.parse() {
            Ok(max) => config.registry.max_addresses = max,
            Err(_) => warn!(value = %raw, "DD_MAX_ADDRESSES must be an unsigned integer"),
        }
    }

    if let Some(raw) = lookup("DD_MAX_ACTIONS_PER_REDUCE") {
        match raw.parse() {
            Ok(budget) => config.reducer.max_actions_per_reduce = budget,
            Err(_) => warn!(value = %raw, "DD_MAX_ACTIONS_PER_REDUCE must be an unsigned integer"),
        }
    }

    if let Some(raw) = lookup("DD_ADMIN_ID") {
        match CallerId::from_hex(&raw) {
            Some(admin) => {
                config.security.admin_id = Some(admin);
                info!("Loaded admin identity from environment");
            }
            None => warn!("DD_ADMIN_ID must be 32 bytes (64 hex chars)"),
        }
    }

    config
}

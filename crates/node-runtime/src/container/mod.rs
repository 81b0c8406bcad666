//! # Subsystem Container
//!
//! Central container holding the subsystem instances, plus the node
//! configuration they are built from.

pub mod config;
pub mod subsystems;

pub use config::{load_config, load_config_from, ConfigError, NodeConfig, SecurityConfig};
pub use subsystems::{ConcreteReducerService, ConcreteRegistryService, SubsystemContainer};

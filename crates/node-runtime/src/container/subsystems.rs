//! # Subsystem Container
//!
//! Holds the registry and reducer services with their event sinks.
//!
//! The two subsystems share nothing but the admin identity: the registry
//! owns the map root, the reducer owns the action log and aggregate.

use std::sync::Arc;

use tracing::{info, instrument};

use dd_02_message_registry::{
    InMemoryEventPublisher as RegistryEvents, MessageRegistryApi, MessageRegistryService,
};
use dd_03_batch_reducer::{
    BatchMessagesApi, BatchMessagesService, InMemoryEventPublisher as ReducerEvents,
};
use shared_types::CallerId;

use crate::container::config::NodeConfig;

/// Registry service wired to the in-memory event sink.
pub type ConcreteRegistryService = MessageRegistryService<Arc<RegistryEvents>>;

/// Reducer service wired to the in-memory event sink.
pub type ConcreteReducerService = BatchMessagesService<Arc<ReducerEvents>>;

/// Central container holding all subsystem instances.
pub struct SubsystemContainer {
    /// Message Registry (Subsystem 2)
    pub registry: Arc<ConcreteRegistryService>,
    /// Events published by the registry.
    pub registry_events: Arc<RegistryEvents>,

    /// Batch Reducer (Subsystem 3)
    pub reducer: Arc<ConcreteReducerService>,
    /// Events published by the reducer.
    pub reducer_events: Arc<ReducerEvents>,

    /// Configuration the container was built from.
    pub config: NodeConfig,
}

impl SubsystemContainer {
    /// Build both subsystems from `config`.
    #[instrument(skip_all)]
    pub fn new(config: NodeConfig) -> Self {
        info!("Initializing subsystem container");

        let registry_events = Arc::new(RegistryEvents::new());
        let registry = Arc::new(MessageRegistryService::new(
            config.registry.clone(),
            registry_events.clone(),
        ));
        info!(max_addresses = config.registry.max_addresses, "  [2] Message Registry initialized");

        let reducer_events = Arc::new(ReducerEvents::new());
        let reducer = Arc::new(BatchMessagesService::new(
            config.reducer.clone(),
            reducer_events.clone(),
        ));
        info!(
            budget = config.reducer.effective_budget(),
            "  [3] Batch Reducer initialized"
        );

        Self {
            registry,
            registry_events,
            reducer,
            reducer_events,
            config,
        }
    }

    /// Bootstrap `admin` on both subsystems.
    pub fn bootstrap_admin(&self, admin: &CallerId) -> anyhow::Result<()> {
        self.registry.set_admin(admin)?;
        self.reducer.set_admin(admin)?;
        info!(admin = ?admin, "Admin bootstrapped on all subsystems");
        Ok(())
    }
}

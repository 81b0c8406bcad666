//! # Outbound Ports
//!
//! Event delivery is owned by the host; the registry only hands events over.

use crate::domain::RegistryEvent;

/// Registry event sink - outbound port.
pub trait RegistryEventPublisher: Send + Sync {
    /// Deliver one event. Called after the corresponding state has committed.
    fn publish(&self, event: RegistryEvent);
}

impl<P: RegistryEventPublisher + ?Sized> RegistryEventPublisher for std::sync::Arc<P> {
    fn publish(&self, event: RegistryEvent) {
        (**self).publish(event)
    }
}

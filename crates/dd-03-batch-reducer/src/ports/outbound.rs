//! # Outbound Ports

use crate::domain::ReducerEvent;

/// Reducer event sink - outbound port.
pub trait ReducerEventPublisher: Send + Sync {
    /// Deliver one event after its state has committed.
    fn publish(&self, event: ReducerEvent);
}

impl<P: ReducerEventPublisher + ?Sized> ReducerEventPublisher for std::sync::Arc<P> {
    fn publish(&self, event: ReducerEvent) {
        (**self).publish(event)
    }
}

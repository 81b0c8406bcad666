//! In-memory reducer event sink.

use crate::domain::ReducerEvent;
use crate::ports::ReducerEventPublisher;
use parking_lot::Mutex;

/// Records published events in order.
#[derive(Debug, Default)]
pub struct InMemoryEventPublisher {
    events: Mutex<Vec<ReducerEvent>>,
}

impl InMemoryEventPublisher {
    /// Create an empty publisher.
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of all events published so far.
    pub fn events(&self) -> Vec<ReducerEvent> {
        self.events.lock().clone()
    }

    /// Aggregates reported by `BatchReduced` events.
    pub fn reduced_aggregates(&self) -> Vec<u64> {
        self.events
            .lock()
            .iter()
            .filter_map(|event| match event {
                ReducerEvent::BatchReduced { message_number, .. } => Some(*message_number),
                _ => None,
            })
            .collect()
    }
}

impl ReducerEventPublisher for InMemoryEventPublisher {
    fn publish(&self, event: ReducerEvent) {
        self.events.lock().push(event);
    }
}

//! In-memory event publisher that records every event in order.

use crate::domain::RegistryEvent;
use crate::ports::RegistryEventPublisher;
use parking_lot::Mutex;

/// Records published events for later inspection.
#[derive(Debug, Default)]
pub struct InMemoryEventPublisher {
    events: Mutex<Vec<RegistryEvent>>,
}

impl InMemoryEventPublisher {
    /// Create an empty publisher.
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of all events published so far.
    pub fn events(&self) -> Vec<RegistryEvent> {
        self.events.lock().clone()
    }

    /// `messages_received` values carried by `MessageReceived` events.
    pub fn message_counts(&self) -> Vec<u64> {
        self.events
            .lock()
            .iter()
            .filter_map(|event| match event {
                RegistryEvent::MessageReceived { messages_received } => Some(*messages_received),
                _ => None,
            })
            .collect()
    }
}

impl RegistryEventPublisher for InMemoryEventPublisher {
    fn publish(&self, event: RegistryEvent) {
        self.events.lock().push(event);
    }
}

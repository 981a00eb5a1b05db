//! Store snapshot broadcast to rendering subscribers
//!
//! After any store mutation (import or clear) the full updated store is
//! handed to every registered subscriber so it can re-render synchronously
//! from that snapshot. Subscribers always get the whole store, never a
//! diff.

use crate::app::models::ImportStore;

/// Callback invoked with the full store after each mutation
pub type SnapshotSubscriber = Box<dyn Fn(&ImportStore)>;

/// Registry of snapshot subscribers
///
/// Registration order is delivery order. The bus holds no store state of
/// its own; publishers pass the snapshot they just persisted.
#[derive(Default)]
pub struct SnapshotBus {
    subscribers: Vec<SnapshotSubscriber>,
}

impl SnapshotBus {
    /// Create an empty bus
    pub fn new() -> Self {
        Self {
            subscribers: Vec::new(),
        }
    }

    /// Register a subscriber for future snapshots
    pub fn subscribe(&mut self, subscriber: impl Fn(&ImportStore) + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    /// Hand the given store snapshot to every subscriber
    pub fn publish(&self, store: &ImportStore) {
        for subscriber in &self.subscribers {
            subscriber(store);
        }
    }

    /// Number of registered subscribers
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}

impl std::fmt::Debug for SnapshotBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SnapshotBus")
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

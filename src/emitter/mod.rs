//! Change notices - subscription side of the store.
//!
//! Every successful mutation publishes a [`StoreChanged`] notice. Notices carry
//! only the collection, the operation and the new version; subscribers pull
//! fresh snapshots from the store themselves.
//!
//! Delivery goes through `event_emitter_rs`, which runs each listener on its
//! own thread, so listeners observe notices asynchronously.

use event_emitter_rs::EventEmitter;

use crate::store::{CollectionKind, StoreChanged};

const ANY_COLLECTION: &str = "changed";

fn event_name(kind: CollectionKind) -> String {
    format!("{}:{}", ANY_COLLECTION, kind.as_str())
}

/// Publishes [`StoreChanged`] notices to registered listeners.
pub struct ChangeNotifier {
    emitter: EventEmitter,
    enabled: bool,
}

impl Default for ChangeNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl ChangeNotifier {
    pub fn new() -> Self {
        Self {
            emitter: EventEmitter::new(),
            enabled: true,
        }
    }

    /// A notifier that accepts listeners but never publishes.
    pub fn disabled() -> Self {
        Self {
            emitter: EventEmitter::new(),
            enabled: false,
        }
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Listen to changes on every collection.
    pub fn on_change<F>(&mut self, listener: F)
    where
        F: Fn(StoreChanged) + Send + Sync + 'static,
    {
        self.emitter.on(ANY_COLLECTION, listener);
    }

    /// Listen to changes on one collection.
    pub fn on_collection_change<F>(&mut self, kind: CollectionKind, listener: F)
    where
        F: Fn(StoreChanged) + Send + Sync + 'static,
    {
        self.emitter.on(&event_name(kind), listener);
    }

    pub(crate) fn publish(&mut self, notice: StoreChanged) {
        if !self.enabled {
            return;
        }
        let specific = event_name(notice.collection);
        self.emitter.emit(&specific, notice.clone());
        self.emitter.emit(ANY_COLLECTION, notice);
    }
}

//! Listener registry for phase-change notifications
//!
//! A single subscription point: listeners are registered against the
//! helper and receive every [`PhaseChange`] in registration order. A
//! missing listener is simply skipped; dispatch never fails.

use slotmap::{new_key_type, SlotMap};
use smallvec::SmallVec;
use tracing::trace;

use crate::phase::PhaseChange;

new_key_type! {
    /// Handle for a registered phase listener
    pub struct ListenerId;
}

/// Callback receiving phase-change notifications
pub type PhaseListener = Box<dyn FnMut(&PhaseChange)>;

/// Registry dispatching phase changes to listeners in registration order
#[derive(Default)]
pub struct PhaseListeners {
    listeners: SlotMap<ListenerId, PhaseListener>,
    /// Slotmap iteration order is unspecified; dispatch follows this list
    order: SmallVec<[ListenerId; 2]>,
}

impl PhaseListeners {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener; the returned id can later remove it
    pub fn add<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&PhaseChange) + 'static,
    {
        let id = self.listeners.insert(Box::new(listener));
        self.order.push(id);
        id
    }

    /// Remove a listener. Returns false if the id was already gone.
    pub fn remove(&mut self, id: ListenerId) -> bool {
        let removed = self.listeners.remove(id).is_some();
        if removed {
            self.order.retain(|k| *k != id);
        }
        removed
    }

    /// Drop all listeners
    pub fn clear(&mut self) {
        self.listeners.clear();
        self.order.clear();
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    /// Dispatch a phase change to every registered listener
    pub fn notify(&mut self, change: &PhaseChange) {
        trace!(
            previous = ?change.previous,
            current = ?change.current,
            offset = change.offset,
            "notifying phase listeners"
        );
        for &id in &self.order {
            if let Some(listener) = self.listeners.get_mut(id) {
                listener(change);
            }
        }
    }
}

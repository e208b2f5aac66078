//! Session-updated broadcast signal.
//!
//! A zero-argument publish/subscribe channel fired after a work session is
//! successfully logged. Display widgets (recent sessions, today's total)
//! subscribe to refresh themselves. The signal is passed around by `Rc`
//! rather than living in a process-wide global, so its lifetime is scoped
//! to the owning application session and unsubscription is deterministic.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Handle identifying a single subscription, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriptionId(u64);

/// Broadcast signal for "session data changed".
#[derive(Default)]
pub struct SessionUpdated {
    listeners: RefCell<Vec<(u64, Rc<dyn Fn()>)>>,
    next_id: Cell<u64>,
}

impl SessionUpdated {
    /// Create a new signal with no listeners.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a callback, returning a handle for later unsubscription.
    pub fn subscribe(&self, callback: impl Fn() + 'static) -> SubscriptionId {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.listeners.borrow_mut().push((id, Rc::new(callback)));
        SubscriptionId(id)
    }

    /// Remove a previously registered callback.
    ///
    /// Unknown or already removed ids are ignored.
    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.listeners.borrow_mut().retain(|(i, _)| *i != id.0);
    }

    /// Notify all current listeners.
    ///
    /// The listener list is snapshotted first so a callback may subscribe
    /// or unsubscribe without invalidating the iteration.
    pub fn emit(&self) {
        let snapshot: Vec<Rc<dyn Fn()>> = self
            .listeners
            .borrow()
            .iter()
            .map(|(_, cb)| Rc::clone(cb))
            .collect();

        for callback in snapshot {
            callback();
        }
    }

    /// Number of live subscriptions.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }
}

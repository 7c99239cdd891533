//! Language change notifications
//!
//! The store owns an ordered observer list instead of relying on a global
//! event bus. `subscribe` hands back a [`Subscription`] that removes exactly
//! the listener it was created for.

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, Weak};
use tracing::debug;
use super::LanguageCode;

/// Name of the event published on every language change
pub const LANGUAGE_CHANGED_EVENT: &str = "languageChanged";

/// Payload delivered to listeners
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageChanged {
    pub language: LanguageCode,
    pub previous: LanguageCode,
}

impl LanguageChanged {
    pub fn name(&self) -> &'static str {
        LANGUAGE_CHANGED_EVENT
    }
}

/// Callback invoked with each change
pub type Listener = Arc<dyn Fn(&LanguageChanged) + Send + Sync>;

/// Identifies a registered listener
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

/// Listeners in registration order
#[derive(Default)]
pub struct ListenerRegistry {
    next_id: u64,
    listeners: Vec<(ListenerId, Listener)>,
}

impl ListenerRegistry {
    pub fn register(&mut self, listener: Listener) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, listener));
        id
    }

    /// Remove a listener; returns false if it was already gone
    pub fn remove(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    /// Copy of the current listeners, in registration order
    pub fn snapshot(&self) -> Vec<Listener> {
        self.listeners.iter().map(|(_, listener)| Arc::clone(listener)).collect()
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

impl fmt::Debug for ListenerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListenerRegistry")
            .field("next_id", &self.next_id)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

pub(crate) type SharedRegistry = Arc<Mutex<ListenerRegistry>>;

/// A poisoned registry only means a listener panicked mid-registration; the
/// list itself is still consistent.
pub(crate) fn lock_registry(registry: &Mutex<ListenerRegistry>) -> MutexGuard<'_, ListenerRegistry> {
    registry.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Disposer for one listener
#[must_use = "dropping a Subscription keeps the listener registered; call unsubscribe() to remove it"]
#[derive(Debug)]
pub struct Subscription {
    id: ListenerId,
    registry: Weak<Mutex<ListenerRegistry>>,
}

impl Subscription {
    pub(crate) fn new(id: ListenerId, registry: &SharedRegistry) -> Self {
        Self {
            id,
            registry: Arc::downgrade(registry),
        }
    }

    pub fn id(&self) -> ListenerId {
        self.id
    }

    /// Deregister the listener
    ///
    /// Returns false when the listener was already removed or the store no
    /// longer exists.
    pub fn unsubscribe(self) -> bool {
        let Some(registry) = self.registry.upgrade() else {
            return false;
        };
        let removed = lock_registry(&registry).remove(self.id);
        debug!(listener = ?self.id, removed = removed, "Listener unsubscribed");
        removed
    }
}

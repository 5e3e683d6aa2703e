use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{debug, info};

use stalker_common::traits::host_traits::ChangeListener;

use crate::Error;

/// Ordered set of change listeners for one host store.
///
/// Hosts that keep their state in-process can embed one of these per store
/// to implement `add_change_listener` / `remove_change_listener`.
#[derive(Clone, Default)]
pub struct ListenerRegistry {
    listeners: Arc<RwLock<Vec<Arc<dyn ChangeListener>>>>,
}

impl ListenerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener. Ids must be unique within the registry.
    pub fn register(&self, listener: Arc<dyn ChangeListener>) -> Result<(), Error> {
        let listener_id = listener.id().to_string();
        let mut listeners = self.listeners.write();

        if listeners.iter().any(|l| l.id() == listener_id) {
            return Err(Error::Listener(format!(
                "Listener with ID '{}' already registered",
                listener_id
            )));
        }

        listeners.push(listener);
        info!("Registered change listener '{}'", listener_id);
        Ok(())
    }

    /// Unregister a listener by id. Returns whether one was removed.
    pub fn unregister(&self, listener_id: &str) -> bool {
        let mut listeners = self.listeners.write();
        let before = listeners.len();
        listeners.retain(|l| l.id() != listener_id);
        let removed = listeners.len() != before;

        if removed {
            info!("Unregistered change listener '{}'", listener_id);
        }
        removed
    }

    /// Call every listener, in registration order.
    ///
    /// The list is copied first so listeners can read back into the store
    /// (or unregister themselves) without deadlocking.
    pub fn notify_all(&self) {
        let listeners = {
            let guard = self.listeners.read();
            guard.clone()
        };
        debug!("Dispatching change to {} listener(s)", listeners.len());
        for listener in listeners {
            listener.on_change();
        }
    }

    pub fn contains(&self, listener_id: &str) -> bool {
        self.listeners.read().iter().any(|l| l.id() == listener_id)
    }

    pub fn len(&self) -> usize {
        self.listeners.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.read().is_empty()
    }

    pub fn clear(&self) {
        self.listeners.write().clear();
    }
}

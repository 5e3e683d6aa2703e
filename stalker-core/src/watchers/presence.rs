// File: stalker-core/src/watchers/presence.rs

use std::sync::Arc;

use parking_lot::Mutex;
use serde_json::Value;
use tracing::{debug, info};

use stalker_common::models::presence::{parse_status_map, PresenceStatus, StatusMap};
use stalker_common::traits::host_traits::{ChangeListener, PresenceStore, SettingsStore};

use crate::notify::Notifier;
use crate::registry::TargetRegistry;
use crate::watchers::gate::{GateDecision, StatusGate};
use crate::watchers::StatusTransition;
use crate::Error;

pub const PRESENCE_LISTENER_ID: &str = "stalker.presence";

/// Watches the presence store for status changes of tracked users.
pub struct PresenceWatcher {
    registry: TargetRegistry,
    store: Arc<dyn PresenceStore>,
    settings: Arc<dyn SettingsStore>,
    notifier: Notifier,
    /// `None` until the first snapshot after activation has been seen.
    last_statuses: Mutex<Option<StatusMap>>,
}

impl PresenceWatcher {
    pub fn new(
        registry: TargetRegistry,
        store: Arc<dyn PresenceStore>,
        settings: Arc<dyn SettingsStore>,
        notifier: Notifier,
    ) -> Self {
        Self {
            registry,
            store,
            settings,
            notifier,
            last_statuses: Mutex::new(None),
        }
    }

    /// Start listening. The next snapshot only seeds state.
    pub fn activate(self: &Arc<Self>) -> Result<(), Error> {
        self.store.add_change_listener(self.clone())?;
        info!("Presence watcher active");
        Ok(())
    }

    /// Stop listening and forget everything seen so far.
    pub fn deactivate(&self) {
        self.store.remove_change_listener(PRESENCE_LISTENER_ID);
        self.reset();
        info!("Presence watcher stopped");
    }

    pub fn reset(&self) {
        *self.last_statuses.lock() = None;
    }

    /// Copy of the last-known status map.
    pub fn last_statuses(&self) -> Option<StatusMap> {
        self.last_statuses.lock().clone()
    }

    /// Process one snapshot of the host's status map. Returns the
    /// transitions that made it through the gate and were delivered.
    pub fn handle_snapshot(&self, raw: Option<&Value>) -> Vec<StatusTransition> {
        let Some(parsed) = raw.and_then(parse_status_map) else {
            debug!("Ignoring malformed presence snapshot");
            return Vec::new();
        };

        let mut last = self.last_statuses.lock();
        let mut effective = parsed.statuses;

        // An unreadable label keeps whatever we knew before.
        for id in parsed.unrecognised {
            if let Some(status) = last.as_ref().and_then(|map| map.get(&id)).copied() {
                debug!("Unrecognised status for {}; keeping {}", id, status);
                effective.insert(id, status);
            }
        }

        for id in self.registry.targets() {
            effective.entry(id).or_insert(PresenceStatus::Offline);
        }

        let Some(previous) = last.as_ref() else {
            debug!("Seeding presence state with {} entries", effective.len());
            *last = Some(effective);
            return Vec::new();
        };

        let transitions = self.diff(previous, &effective);
        *last = Some(effective);
        drop(last);

        if transitions.is_empty() {
            return transitions;
        }

        let gate = StatusGate::new(self.settings.settings().preferences());
        let mut delivered = Vec::new();
        for transition in transitions {
            if gate.apply(&transition) == GateDecision::Suppress {
                debug!(
                    "Suppressed {} -> {} for {}",
                    transition.previous, transition.current, transition.user_id
                );
                continue;
            }
            if self.notifier.deliver(self.notifier.status_notification(&transition)) {
                delivered.push(transition);
            }
        }
        delivered
    }

    /// Status changes of tracked users between two snapshots.
    fn diff(&self, previous: &StatusMap, current: &StatusMap) -> Vec<StatusTransition> {
        current
            .iter()
            .filter(|(id, _)| self.registry.contains(id))
            .filter_map(|(id, status)| {
                let before = previous.get(id).copied().unwrap_or_default();
                (before != *status).then(|| StatusTransition {
                    user_id: id.clone(),
                    previous: before,
                    current: *status,
                })
            })
            .collect()
    }
}

impl ChangeListener for PresenceWatcher {
    fn id(&self) -> &str {
        PRESENCE_LISTENER_ID
    }

    fn on_change(&self) {
        let raw = self.store.statuses();
        self.handle_snapshot(raw.as_ref());
    }
}

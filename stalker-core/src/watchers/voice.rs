// File: stalker-core/src/watchers/voice.rs

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{debug, info};

use stalker_common::models::voice::VoiceState;
use stalker_common::traits::host_traits::{ChangeListener, VoiceStateStore};

use crate::notify::Notifier;
use crate::registry::TargetRegistry;
use crate::Error;

pub const VOICE_LISTENER_ID: &str = "stalker.voice";

/// Watches the voice state store for tracked users joining a call.
pub struct VoiceWatcher {
    registry: TargetRegistry,
    store: Arc<dyn VoiceStateStore>,
    notifier: Notifier,
    /// Voice state of every tracked user that was in a channel on the last pass.
    last_states: Mutex<HashMap<String, VoiceState>>,
}

impl VoiceWatcher {
    pub fn new(registry: TargetRegistry, store: Arc<dyn VoiceStateStore>, notifier: Notifier) -> Self {
        Self {
            registry,
            store,
            notifier,
            last_states: Mutex::new(HashMap::new()),
        }
    }

    /// Run one pass against the current state, so users already in a call
    /// are reported straight away, then start listening.
    pub fn activate(self: &Arc<Self>) -> Result<(), Error> {
        self.handle_pass();
        self.store.add_change_listener(self.clone())?;
        info!("Voice watcher active");
        Ok(())
    }

    /// Stop listening. The last-known states are kept.
    pub fn deactivate(&self) {
        self.store.remove_change_listener(VOICE_LISTENER_ID);
        info!("Voice watcher stopped");
    }

    pub fn last_states(&self) -> HashMap<String, VoiceState> {
        self.last_states.lock().clone()
    }

    /// Rebuild the voice map for the current targets and report every user
    /// that is in a channel now but was not on the previous pass. Returns the
    /// joins that were delivered.
    pub fn handle_pass(&self) -> Vec<VoiceState> {
        let mut fresh = HashMap::new();
        let mut joined = Vec::new();

        {
            let last = self.last_states.lock();
            for id in self.registry.targets() {
                if fresh.contains_key(&id) {
                    continue;
                }
                let Some(state) = self.store.voice_state_for_user(&id) else {
                    continue;
                };
                if !last.contains_key(&id) {
                    joined.push((id.clone(), state.clone()));
                }
                fresh.insert(id, state);
            }
        }

        debug!("Voice pass: {} tracked user(s) in a channel", fresh.len());
        *self.last_states.lock() = fresh;

        joined
            .into_iter()
            .filter_map(|(id, state)| {
                let notification = self.notifier.voice_notification(&id, &state);
                self.notifier.deliver(notification).then_some(state)
            })
            .collect()
    }
}

impl ChangeListener for VoiceWatcher {
    fn id(&self) -> &str {
        VOICE_LISTENER_ID
    }

    fn on_change(&self) {
        self.handle_pass();
    }
}

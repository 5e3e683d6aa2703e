// File: stalker-core/src/plugin.rs

use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{debug, info, warn};

use stalker_common::models::menu::{MenuAction, MenuItem, IGNORE_ITEM_ID, TOGGLE_ITEM_ID};
use stalker_common::models::notification::ClickAction;
use stalker_common::traits::host_traits::{
    ChannelDirectory, Navigator, NotificationSink, PresenceStore, SettingsStore, UserDirectory,
    VoiceStateStore,
};

use crate::notify::Notifier;
use crate::registry::{TargetEdit, TargetRegistry};
use crate::watchers::{PresenceWatcher, VoiceWatcher};
use crate::Error;

/// The host capabilities the plugin is wired to.
#[derive(Clone)]
pub struct Host {
    pub presence: Arc<dyn PresenceStore>,
    pub voice: Arc<dyn VoiceStateStore>,
    pub users: Arc<dyn UserDirectory>,
    pub channels: Arc<dyn ChannelDirectory>,
    pub notifications: Arc<dyn NotificationSink>,
    pub navigator: Arc<dyn Navigator>,
    pub settings: Arc<dyn SettingsStore>,
}

/// Entry point the host talks to: lifecycle, settings changes, the user
/// context menu and notification clicks.
pub struct StalkerPlugin {
    host: Host,
    registry: TargetRegistry,
    presence: Arc<PresenceWatcher>,
    voice: Arc<VoiceWatcher>,
    active: Mutex<bool>,
}

impl StalkerPlugin {
    pub const NAME: &'static str = "Stalker";

    pub fn new(host: Host) -> Self {
        let registry = TargetRegistry::new();
        let notifier = Notifier::new(
            host.users.clone(),
            host.channels.clone(),
            host.notifications.clone(),
        );

        let presence = Arc::new(PresenceWatcher::new(
            registry.clone(),
            host.presence.clone(),
            host.settings.clone(),
            notifier.clone(),
        ));
        let voice = Arc::new(VoiceWatcher::new(registry.clone(), host.voice.clone(), notifier));

        Self {
            host,
            registry,
            presence,
            voice,
            active: Mutex::new(false),
        }
    }

    pub fn registry(&self) -> &TargetRegistry {
        &self.registry
    }

    pub fn presence_watcher(&self) -> &Arc<PresenceWatcher> {
        &self.presence
    }

    pub fn voice_watcher(&self) -> &Arc<VoiceWatcher> {
        &self.voice
    }

    pub fn is_active(&self) -> bool {
        *self.active.lock()
    }

    /// Load targets from settings and start both watchers.
    pub fn activate(&self) -> Result<(), Error> {
        let mut active = self.active.lock();
        if *active {
            warn!("{} is already active", Self::NAME);
            return Ok(());
        }

        self.registry.set_targets(&self.host.settings.settings().targets);
        self.presence.activate()?;
        if let Err(e) = self.voice.activate() {
            self.presence.deactivate();
            return Err(e);
        }

        *active = true;
        info!("{} activated", Self::NAME);
        Ok(())
    }

    pub fn deactivate(&self) {
        let mut active = self.active.lock();
        if !*active {
            debug!("{} is not active; nothing to stop", Self::NAME);
            return;
        }

        self.presence.deactivate();
        self.voice.deactivate();
        *active = false;
        info!("{} deactivated", Self::NAME);
    }

    /// The host calls this after any settings write.
    pub fn on_settings_changed(&self) -> Vec<String> {
        self.registry.set_targets(&self.host.settings.settings().targets)
    }

    /// Add or remove a user from the persisted target list, then reparse.
    pub fn toggle_target(&self, user_id: &str) -> TargetEdit {
        let raw = self.host.settings.settings().targets;
        let (updated, edit) = TargetRegistry::toggled(&raw, user_id);

        self.host.settings.set_targets(&updated);
        self.registry.set_targets(&updated);

        match edit {
            TargetEdit::Added => info!("Started watching {}", user_id),
            TargetEdit::Removed => info!("Stopped watching {}", user_id),
        }
        edit
    }

    /// Insert the Stalk/Unstalk entry into a user context menu group.
    ///
    /// The entry goes in front of the host's last "ignore" entry, or in front
    /// of the final entry when there is none.
    pub fn contribute_user_context(&self, group: &mut Vec<MenuItem>, user_id: Option<&str>) {
        if !self.host.settings.settings().stalk_context {
            return;
        }
        let Some(user_id) = user_id else {
            return;
        };

        let label = if self.registry.contains(user_id) {
            "Unstalk"
        } else {
            "Stalk"
        };

        let index = group
            .iter()
            .rposition(|item| item.id == IGNORE_ITEM_ID)
            .unwrap_or_else(|| group.len().saturating_sub(1));

        group.insert(
            index,
            MenuItem {
                id: TOGGLE_ITEM_ID.to_string(),
                label: label.to_string(),
                action: Some(MenuAction::ToggleTarget {
                    user_id: user_id.to_string(),
                }),
            },
        );
    }

    pub fn handle_menu_action(&self, action: &MenuAction) -> TargetEdit {
        match action {
            MenuAction::ToggleTarget { user_id } => self.toggle_target(user_id),
        }
    }

    pub fn handle_click(&self, action: &ClickAction) {
        let navigator = &self.host.navigator;
        match action {
            ClickAction::OpenDirectMessage { user_id } => {
                match self.host.channels.dm_channel_for_user(user_id) {
                    Some(dm_id) => navigator.transition_to(&format!("/channels/@me/{}", dm_id)),
                    None => {
                        debug!("No DM channel with {} yet; asking host to open one", user_id);
                        navigator.open_private_channel(user_id);
                    }
                }
            }
            ClickAction::JoinVoice { channel_id } => navigator.select_voice_channel(channel_id),
        }
    }
}

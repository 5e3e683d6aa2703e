// File: stalker-common/src/traits/host_traits.rs
//
// Capabilities the host client provides. Everything here is synchronous:
// the host dispatches store changes serially and handlers run to completion.

use std::sync::Arc;

use serde_json::Value;

use crate::error::Error;
use crate::models::directory::{ChannelInfo, GuildInfo, UserProfile};
use crate::models::notification::Notification;
use crate::models::settings::StalkerSettings;
use crate::models::voice::VoiceState;

/// Something a host store calls back when its state changes.
pub trait ChangeListener: Send + Sync {
    /// Unique identifier used to remove the listener again.
    fn id(&self) -> &str;

    /// The store changed; read whatever state is needed from it.
    fn on_change(&self);
}

/// The host's presence store.
pub trait PresenceStore: Send + Sync {
    /// Raw status map (user id -> status label). `None` when the store has
    /// no state yet.
    fn statuses(&self) -> Option<Value>;

    fn add_change_listener(&self, listener: Arc<dyn ChangeListener>) -> Result<(), Error>;

    /// Returns false if nothing was registered under `listener_id`.
    fn remove_change_listener(&self, listener_id: &str) -> bool;
}

/// The host's voice state store.
pub trait VoiceStateStore: Send + Sync {
    fn voice_state_for_user(&self, user_id: &str) -> Option<VoiceState>;

    fn add_change_listener(&self, listener: Arc<dyn ChangeListener>) -> Result<(), Error>;

    fn remove_change_listener(&self, listener_id: &str) -> bool;
}

pub trait UserDirectory: Send + Sync {
    fn user(&self, user_id: &str) -> Option<UserProfile>;
}

pub trait ChannelDirectory: Send + Sync {
    fn channel(&self, channel_id: &str) -> Option<ChannelInfo>;

    fn guild(&self, guild_id: &str) -> Option<GuildInfo>;

    /// Id of an existing direct-message channel with this user, if any.
    fn dm_channel_for_user(&self, user_id: &str) -> Option<String>;
}

pub trait NotificationSink: Send + Sync {
    fn show(&self, notification: Notification);
}

/// Navigation and call actions the host can perform on request.
pub trait Navigator: Send + Sync {
    fn transition_to(&self, path: &str);

    /// Open (creating if needed) a direct-message channel with the user.
    fn open_private_channel(&self, user_id: &str);

    fn select_voice_channel(&self, channel_id: &str);
}

/// Persistence for the add-on's settings.
pub trait SettingsStore: Send + Sync {
    /// Current settings. Read on every decision, so edits apply immediately.
    fn settings(&self) -> StalkerSettings;

    /// Persist a new raw target list.
    fn set_targets(&self, raw: &str);
}

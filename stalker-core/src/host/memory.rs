// File: stalker-core/src/host/memory.rs

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::{Mutex, RwLock};
use serde_json::{Map, Value};
use tracing::debug;

use stalker_common::models::directory::{ChannelInfo, GuildInfo, UserProfile};
use stalker_common::models::notification::Notification;
use stalker_common::models::presence::PresenceStatus;
use stalker_common::models::voice::VoiceState;
use stalker_common::traits::host_traits::{
    ChangeListener, ChannelDirectory, Navigator, NotificationSink, PresenceStore, UserDirectory,
    VoiceStateStore,
};

use crate::listeners::ListenerRegistry;
use crate::Error;

/// A navigation or call request the plugin made of the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationRequest {
    TransitionTo(String),
    OpenPrivateChannel(String),
    SelectVoiceChannel(String),
}

/// Every host capability backed by in-process maps.
///
/// Mutators that change store state (`set_statuses`, `join_voice`, ...)
/// notify the matching store's listeners synchronously, after releasing
/// their own locks.
#[derive(Default)]
pub struct MemoryHost {
    statuses: RwLock<Option<Value>>,
    voice_states: RwLock<HashMap<String, VoiceState>>,
    users: RwLock<HashMap<String, UserProfile>>,
    channels: RwLock<HashMap<String, ChannelInfo>>,
    guilds: RwLock<HashMap<String, GuildInfo>>,
    dm_channels: RwLock<HashMap<String, String>>,

    presence_listeners: ListenerRegistry,
    voice_listeners: ListenerRegistry,

    shown: Mutex<Vec<Notification>>,
    navigation: Mutex<Vec<NavigationRequest>>,
}

impl MemoryHost {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    // --- directory setup -------------------------------------------------

    pub fn add_user(&self, user: UserProfile) {
        self.users.write().insert(user.id.clone(), user);
    }

    pub fn add_channel(&self, channel: ChannelInfo) {
        self.channels.write().insert(channel.id.clone(), channel);
    }

    pub fn add_guild(&self, guild: GuildInfo) {
        self.guilds.write().insert(guild.id.clone(), guild);
    }

    pub fn add_dm_channel(&self, user_id: &str, channel_id: &str) {
        self.dm_channels
            .write()
            .insert(user_id.to_string(), channel_id.to_string());
    }

    // --- store state -----------------------------------------------------

    /// Replace the whole status map and notify presence listeners.
    pub fn set_statuses<'a, I>(&self, statuses: I)
    where
        I: IntoIterator<Item = (&'a str, PresenceStatus)>,
    {
        let map: Map<String, Value> = statuses
            .into_iter()
            .map(|(id, status)| (id.to_string(), Value::String(status.to_string())))
            .collect();
        self.set_raw_statuses(Some(Value::Object(map)));
    }

    /// An empty (but well-formed) status map: nobody is online.
    pub fn clear_statuses(&self) {
        self.set_raw_statuses(Some(Value::Object(Map::new())));
    }

    /// Replace the raw status value as-is (malformed values included).
    pub fn set_raw_statuses(&self, raw: Option<Value>) {
        *self.statuses.write() = raw;
        self.presence_listeners.notify_all();
    }

    pub fn join_voice(&self, user_id: &str, channel_id: &str) {
        self.voice_states
            .write()
            .insert(user_id.to_string(), VoiceState::new(user_id, channel_id));
        self.voice_listeners.notify_all();
    }

    pub fn leave_voice(&self, user_id: &str) {
        self.voice_states.write().remove(user_id);
        self.voice_listeners.notify_all();
    }

    /// Fire the voice listeners without changing anything.
    pub fn touch_voice(&self) {
        self.voice_listeners.notify_all();
    }

    // --- observation -----------------------------------------------------

    pub fn shown(&self) -> Vec<Notification> {
        self.shown.lock().clone()
    }

    /// Drain the notifications shown so far.
    pub fn take_shown(&self) -> Vec<Notification> {
        std::mem::take(&mut *self.shown.lock())
    }

    pub fn navigation(&self) -> Vec<NavigationRequest> {
        self.navigation.lock().clone()
    }

    pub fn presence_listener_count(&self) -> usize {
        self.presence_listeners.len()
    }

    pub fn voice_listener_count(&self) -> usize {
        self.voice_listeners.len()
    }
}

impl PresenceStore for MemoryHost {
    fn statuses(&self) -> Option<Value> {
        self.statuses.read().clone()
    }

    fn add_change_listener(&self, listener: Arc<dyn ChangeListener>) -> Result<(), Error> {
        self.presence_listeners.register(listener)
    }

    fn remove_change_listener(&self, listener_id: &str) -> bool {
        self.presence_listeners.unregister(listener_id)
    }
}

impl VoiceStateStore for MemoryHost {
    fn voice_state_for_user(&self, user_id: &str) -> Option<VoiceState> {
        self.voice_states.read().get(user_id).cloned()
    }

    fn add_change_listener(&self, listener: Arc<dyn ChangeListener>) -> Result<(), Error> {
        self.voice_listeners.register(listener)
    }

    fn remove_change_listener(&self, listener_id: &str) -> bool {
        self.voice_listeners.unregister(listener_id)
    }
}

impl UserDirectory for MemoryHost {
    fn user(&self, user_id: &str) -> Option<UserProfile> {
        self.users.read().get(user_id).cloned()
    }
}

impl ChannelDirectory for MemoryHost {
    fn channel(&self, channel_id: &str) -> Option<ChannelInfo> {
        self.channels.read().get(channel_id).cloned()
    }

    fn guild(&self, guild_id: &str) -> Option<GuildInfo> {
        self.guilds.read().get(guild_id).cloned()
    }

    fn dm_channel_for_user(&self, user_id: &str) -> Option<String> {
        self.dm_channels.read().get(user_id).cloned()
    }
}

impl NotificationSink for MemoryHost {
    fn show(&self, notification: Notification) {
        debug!("MemoryHost showing: {}", notification.body);
        self.shown.lock().push(notification);
    }
}

impl Navigator for MemoryHost {
    fn transition_to(&self, path: &str) {
        self.navigation
            .lock()
            .push(NavigationRequest::TransitionTo(path.to_string()));
    }

    fn open_private_channel(&self, user_id: &str) {
        self.navigation
            .lock()
            .push(NavigationRequest::OpenPrivateChannel(user_id.to_string()));
    }

    fn select_voice_channel(&self, channel_id: &str) {
        self.navigation
            .lock()
            .push(NavigationRequest::SelectVoiceChannel(channel_id.to_string()));
    }
}

// File: stalker-core/src/notify/mod.rs

pub mod bus;

use std::sync::Arc;

use tracing::{info, warn};

use stalker_common::models::notification::{ClickAction, Notification, NOTIFICATION_TITLE};
use stalker_common::models::presence::PresenceStatus;
use stalker_common::models::voice::VoiceState;
use stalker_common::traits::host_traits::{ChannelDirectory, NotificationSink, UserDirectory};

use crate::watchers::StatusTransition;
use crate::Error;

pub use bus::NotificationBus;

/// `"<name> is now online"`, `"<name> is now in dnd"`.
pub fn status_body(username: &str, status: PresenceStatus) -> String {
    let preposition = if status == PresenceStatus::Dnd { "in " } else { "" };
    format!("{} is now {}{}", username, preposition, status)
}

pub fn voice_body(username: &str, channel_label: &str) -> String {
    format!("{} is in VC: {}\nClick to join them.", username, channel_label)
}

/// Builds notifications from directory lookups and hands them to the sink.
#[derive(Clone)]
pub struct Notifier {
    users: Arc<dyn UserDirectory>,
    channels: Arc<dyn ChannelDirectory>,
    sink: Arc<dyn NotificationSink>,
}

impl Notifier {
    pub fn new(
        users: Arc<dyn UserDirectory>,
        channels: Arc<dyn ChannelDirectory>,
        sink: Arc<dyn NotificationSink>,
    ) -> Self {
        Self {
            users,
            channels,
            sink,
        }
    }

    pub fn status_notification(&self, transition: &StatusTransition) -> Result<Notification, Error> {
        let user = self
            .users
            .user(&transition.user_id)
            .ok_or_else(|| Error::NotFound(format!("user {}", transition.user_id)))?;

        Ok(Notification {
            title: NOTIFICATION_TITLE.to_string(),
            body: status_body(&user.username, transition.current),
            color: user.accent_hex(),
            icon: user.avatar_url.clone(),
            on_click: ClickAction::OpenDirectMessage { user_id: user.id },
        })
    }

    pub fn voice_notification(&self, user_id: &str, state: &VoiceState) -> Result<Notification, Error> {
        let user = self
            .users
            .user(user_id)
            .ok_or_else(|| Error::NotFound(format!("user {}", user_id)))?;
        let label = self.channel_label(&state.channel_id)?;

        Ok(Notification {
            title: NOTIFICATION_TITLE.to_string(),
            body: voice_body(&user.username, &label),
            color: user.accent_hex(),
            icon: user.avatar_url.clone(),
            on_click: ClickAction::JoinVoice {
                channel_id: state.channel_id.clone(),
            },
        })
    }

    /// Channel name, suffixed with `from <guild>` for guild voice and stage
    /// channels.
    pub fn channel_label(&self, channel_id: &str) -> Result<String, Error> {
        let channel = self
            .channels
            .channel(channel_id)
            .ok_or_else(|| Error::NotFound(format!("channel {}", channel_id)))?;

        if !channel.is_guild_voice() {
            return Ok(channel.name);
        }

        match channel.guild_id.as_deref().and_then(|id| self.channels.guild(id)) {
            Some(guild) => Ok(format!("{} from {}", channel.name, guild.name)),
            None => {
                warn!("Guild for voice channel {} is not known; using bare channel name", channel_id);
                Ok(channel.name)
            }
        }
    }

    /// Show the notification, or log why it could not be built.
    /// Returns whether anything reached the sink.
    pub fn deliver(&self, notification: Result<Notification, Error>) -> bool {
        match notification {
            Ok(notification) => {
                info!("Notifying: {}", notification.body.replace('\n', " "));
                self.sink.show(notification);
                true
            }
            Err(e) => {
                warn!("Skipping notification: {}", e);
                false
            }
        }
    }
}

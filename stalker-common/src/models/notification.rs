use serde::{Deserialize, Serialize};

/// Title shown on every notification the add-on raises.
pub const NOTIFICATION_TITLE: &str = "Stalker";

/// What happens when the user clicks a notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClickAction {
    /// Jump to the direct-message channel with this user.
    OpenDirectMessage { user_id: String },
    /// Connect to this voice channel.
    JoinVoice { channel_id: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub title: String,
    pub body: String,
    pub color: Option<String>,
    pub icon: Option<String>,
    pub on_click: ClickAction,
}

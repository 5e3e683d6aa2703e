// File: stalker-common/src/models/directory.rs

use serde::{Deserialize, Serialize};
use twilight_model::channel::ChannelType;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub accent_color: Option<u32>,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

impl UserProfile {
    /// Accent colour as a CSS hex string (`#ff8800`), unpadded like the
    /// client renders it.
    pub fn accent_hex(&self) -> Option<String> {
        self.accent_color.map(|color| format!("#{:x}", color))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelInfo {
    pub id: String,
    pub name: String,
    /// Gateway channel type, serialized as its numeric code.
    pub kind: ChannelType,
    #[serde(default)]
    pub guild_id: Option<String>,
}

impl ChannelInfo {
    /// Voice and stage channels that belong to a guild.
    pub fn is_guild_voice(&self) -> bool {
        matches!(self.kind, ChannelType::GuildVoice | ChannelType::GuildStageVoice)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuildInfo {
    pub id: String,
    pub name: String,
}

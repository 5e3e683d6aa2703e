// File: stalker-core/tests/test_utils/mod.rs

#![allow(dead_code)]

use std::sync::Arc;

use twilight_model::channel::ChannelType;

use stalker_common::models::directory::{ChannelInfo, GuildInfo, UserProfile};
use stalker_common::models::settings::StalkerSettings;
use stalker_core::host::{MemoryHost, MemorySettings};
use stalker_core::{Host, StalkerPlugin};

/// Everything a test needs to drive the plugin through a fake host.
pub struct Harness {
    pub host: Arc<MemoryHost>,
    pub settings: Arc<MemorySettings>,
    pub plugin: StalkerPlugin,
}

pub fn user(id: &str, username: &str) -> UserProfile {
    UserProfile {
        id: id.to_string(),
        username: username.to_string(),
        accent_color: Some(0xff8800),
        avatar_url: Some(format!("https://cdn.example/avatars/{}.png", id)),
    }
}

pub fn voice_channel(id: &str, name: &str, guild_id: &str) -> ChannelInfo {
    ChannelInfo {
        id: id.to_string(),
        name: name.to_string(),
        kind: ChannelType::GuildVoice,
        guild_id: Some(guild_id.to_string()),
    }
}

pub fn group_call(id: &str, name: &str) -> ChannelInfo {
    ChannelInfo {
        id: id.to_string(),
        name: name.to_string(),
        kind: ChannelType::Group,
        guild_id: None,
    }
}

/// A host that knows users A ("100") and B ("200"), a guild voice channel
/// "C1" in guild "G1", and a group call "C2".
pub fn harness(settings: StalkerSettings) -> Harness {
    let host = MemoryHost::new();
    host.add_user(user("100", "alice"));
    host.add_user(user("200", "bob"));
    host.add_channel(voice_channel("C1", "General", "G1"));
    host.add_channel(group_call("C2", "Late night"));
    host.add_guild(GuildInfo {
        id: "G1".to_string(),
        name: "Cats".to_string(),
    });

    let settings = Arc::new(MemorySettings::new(settings));
    let plugin = StalkerPlugin::new(Host::from_memory(&host, &settings));

    Harness {
        host,
        settings,
        plugin,
    }
}

pub fn settings_with_targets(targets: &str) -> StalkerSettings {
    StalkerSettings {
        targets: targets.to_string(),
        ..Default::default()
    }
}

pub fn bodies(harness: &Harness) -> Vec<String> {
    harness.host.take_shown().into_iter().map(|n| n.body).collect()
}

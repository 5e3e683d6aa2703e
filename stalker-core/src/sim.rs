// File: stalker-core/src/sim.rs
//
// Replays a scripted sequence of host events against a `MemoryHost` so the
// watchers can be exercised without a real client.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use serde::Deserialize;
use serde_json::Value;
use tracing::info;

use stalker_common::models::directory::{ChannelInfo, GuildInfo, UserProfile};
use stalker_common::models::notification::Notification;
use stalker_common::models::settings::StalkerSettings;

use crate::host::{MemoryHost, MemorySettings};
use crate::plugin::{Host, StalkerPlugin};
use crate::Error;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scenario {
    #[serde(default)]
    pub settings: StalkerSettings,
    #[serde(default)]
    pub users: Vec<UserProfile>,
    #[serde(default)]
    pub channels: Vec<ChannelInfo>,
    #[serde(default)]
    pub guilds: Vec<GuildInfo>,
    /// user id -> existing DM channel id
    #[serde(default)]
    pub dm_channels: HashMap<String, String>,
    pub steps: Vec<Step>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "step", rename_all = "snake_case")]
pub enum Step {
    Activate,
    Deactivate,
    /// Replace the presence store's status map (any JSON, to allow
    /// malformed snapshots).
    Presence { statuses: Value },
    Join { user_id: String, channel_id: String },
    Leave { user_id: String },
    /// Context-menu toggle for a user.
    Toggle { user_id: String },
    /// Replace the settings wholesale, as a settings page save would.
    Settings { settings: StalkerSettings },
}

/// Notifications raised while executing one step.
#[derive(Debug, Clone)]
pub struct StepOutcome {
    pub index: usize,
    pub step: Step,
    pub notifications: Vec<Notification>,
}

impl Scenario {
    pub fn from_json(raw: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, Error> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }
}

/// Run every step in order against a fresh in-memory host.
pub fn run(scenario: &Scenario) -> Result<Vec<StepOutcome>, Error> {
    let host = MemoryHost::new();
    for user in &scenario.users {
        host.add_user(user.clone());
    }
    for channel in &scenario.channels {
        host.add_channel(channel.clone());
    }
    for guild in &scenario.guilds {
        host.add_guild(guild.clone());
    }
    for (user_id, channel_id) in &scenario.dm_channels {
        host.add_dm_channel(user_id, channel_id);
    }

    let settings = Arc::new(MemorySettings::new(scenario.settings.clone()));
    let plugin = StalkerPlugin::new(Host::from_memory(&host, &settings));

    let mut outcomes = Vec::with_capacity(scenario.steps.len());
    for (index, step) in scenario.steps.iter().enumerate() {
        info!("Step {}: {:?}", index, step);
        match step {
            Step::Activate => plugin.activate()?,
            Step::Deactivate => plugin.deactivate(),
            Step::Presence { statuses } => host.set_raw_statuses(Some(statuses.clone())),
            Step::Join { user_id, channel_id } => host.join_voice(user_id, channel_id),
            Step::Leave { user_id } => host.leave_voice(user_id),
            Step::Toggle { user_id } => {
                plugin.toggle_target(user_id);
            }
            Step::Settings { settings: next } => {
                settings.replace(next.clone());
                plugin.on_settings_changed();
            }
        }
        outcomes.push(StepOutcome {
            index,
            step: step.clone(),
            notifications: host.take_shown(),
        });
    }

    Ok(outcomes)
}

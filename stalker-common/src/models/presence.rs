// File: stalker-common/src/models/presence.rs

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use twilight_model::gateway::presence::Status;

use crate::error::Error;

/// The closed set of statuses a watched account can be observed in.
///
/// Anything the gateway reports that is not one of these (including
/// `invisible`, which other users only ever see as offline) collapses
/// into [`PresenceStatus::Offline`].
#[derive(Debug, Serialize, Deserialize, Clone, Copy, Eq, PartialEq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum PresenceStatus {
    Online,
    Idle,
    Dnd,
    #[default]
    Offline,
}

impl PresenceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PresenceStatus::Online => "online",
            PresenceStatus::Idle => "idle",
            PresenceStatus::Dnd => "dnd",
            PresenceStatus::Offline => "offline",
        }
    }
}

impl fmt::Display for PresenceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Status> for PresenceStatus {
    fn from(status: Status) -> Self {
        match status {
            Status::Online => PresenceStatus::Online,
            Status::Idle => PresenceStatus::Idle,
            Status::DoNotDisturb => PresenceStatus::Dnd,
            _ => PresenceStatus::Offline,
        }
    }
}

impl FromStr for PresenceStatus {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let status = Status::deserialize(&Value::String(s.to_lowercase()))
            .map_err(|_| Error::Parse(format!("Unknown presence status: {}", s)))?;
        Ok(status.into())
    }
}

/// Identity key -> status, ordered by key so passes are deterministic.
pub type StatusMap = BTreeMap<String, PresenceStatus>;

/// A host status mapping split into labels we understand and ids whose
/// label we could not read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedStatuses {
    pub statuses: StatusMap,
    /// Ids present in the mapping with a non-string or unknown label.
    pub unrecognised: BTreeSet<String>,
}

/// Interpret the host's raw status mapping.
///
/// Returns `None` when the value is not a JSON object at all. Entries whose
/// value is not a recognisable status label end up in `unrecognised`; the
/// presence watcher keeps their previous status rather than reading them as
/// offline.
pub fn parse_status_map(raw: &Value) -> Option<ParsedStatuses> {
    let object = raw.as_object()?;
    let mut parsed = ParsedStatuses::default();
    for (id, value) in object {
        match Status::deserialize(value) {
            Ok(status) => {
                parsed.statuses.insert(id.clone(), status.into());
            }
            Err(_) => {
                parsed.unrecognised.insert(id.clone());
            }
        }
    }
    Some(parsed)
}

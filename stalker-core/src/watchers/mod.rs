//! Snapshot watchers: each one owns its last-known state, diffs every
//! host snapshot against it, and raises notifications for tracked users.

pub mod gate;
pub mod presence;
pub mod voice;

use stalker_common::models::presence::PresenceStatus;

pub use gate::{GateDecision, StatusGate};
pub use presence::{PresenceWatcher, PRESENCE_LISTENER_ID};
pub use voice::{VoiceWatcher, VOICE_LISTENER_ID};

/// A tracked user's status changed between two observed snapshots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusTransition {
    pub user_id: String,
    pub previous: PresenceStatus,
    pub current: PresenceStatus,
}

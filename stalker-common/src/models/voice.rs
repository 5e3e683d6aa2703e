use serde::{Deserialize, Serialize};

/// A watched account's membership in a voice channel.
///
/// Absence (no `VoiceState` at all) means the account is not in any voice
/// channel the host can see.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoiceState {
    pub channel_id: String,
    pub user_id: String,
}

impl VoiceState {
    pub fn new(user_id: impl Into<String>, channel_id: impl Into<String>) -> Self {
        Self {
            channel_id: channel_id.into(),
            user_id: user_id.into(),
        }
    }
}

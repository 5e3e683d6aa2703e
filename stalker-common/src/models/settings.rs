// File: stalker-common/src/models/settings.rs

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Persisted add-on settings, in the shape the host stores them
/// (camelCase keys, every field optional on the wire).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StalkerSettings {
    /// Add a Stalk/Unstalk entry to the user context menu.
    pub stalk_context: bool,
    /// Notify when a watched user goes offline.
    pub notify_offline: bool,
    /// Notify when a watched user goes online.
    pub notify_online: bool,
    /// Notify when a watched user switches to Do Not Disturb.
    pub notify_dnd: bool,
    /// Notify when a watched user goes idle.
    pub notify_idle: bool,
    /// Notify whenever a watched user comes back from offline, regardless
    /// of the four flags above.
    pub notify_go_online: bool,
    /// Raw, comma separated list of user ids to watch.
    pub targets: String,
}

impl Default for StalkerSettings {
    fn default() -> Self {
        Self {
            stalk_context: true,
            notify_offline: true,
            notify_online: true,
            notify_dnd: true,
            notify_idle: false,
            notify_go_online: true,
            targets: String::new(),
        }
    }
}

impl StalkerSettings {
    pub fn from_json(raw: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| {
            Error::Settings(format!("could not read {}: {}", path.display(), e))
        })?;
        Self::from_json(&raw)
    }

    pub fn preferences(&self) -> NotificationPreferences {
        NotificationPreferences {
            notify_go_online: self.notify_go_online,
            notify_dnd: self.notify_dnd,
            notify_idle: self.notify_idle,
            notify_online: self.notify_online,
            notify_offline: self.notify_offline,
        }
    }
}

/// The per-category flags consulted by the status gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NotificationPreferences {
    pub notify_go_online: bool,
    pub notify_dnd: bool,
    pub notify_idle: bool,
    pub notify_online: bool,
    pub notify_offline: bool,
}

impl NotificationPreferences {
    /// Every flag on.
    pub fn all() -> Self {
        Self {
            notify_go_online: true,
            notify_dnd: true,
            notify_idle: true,
            notify_online: true,
            notify_offline: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_fields_take_defaults() {
        let settings = StalkerSettings::from_json(r#"{ "targets": "1,2", "notifyIdle": true }"#).unwrap();
        assert_eq!(settings.targets, "1,2");
        assert!(settings.notify_idle);
        assert!(settings.stalk_context);
        assert!(settings.notify_go_online);
    }

    #[test]
    fn test_default_preferences_skip_idle() {
        let prefs = StalkerSettings::default().preferences();
        assert!(!prefs.notify_idle);
        assert!(prefs.notify_dnd && prefs.notify_online && prefs.notify_offline);
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "targets": "42", "notifyOffline": false }}"#).unwrap();

        let settings = StalkerSettings::from_file(file.path()).unwrap();
        assert_eq!(settings.targets, "42");
        assert!(!settings.notify_offline);

        let missing = StalkerSettings::from_file("/definitely/not/here.json");
        assert!(matches!(missing, Err(Error::Settings(_))));
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(matches!(StalkerSettings::from_json("{ targets"), Err(Error::Json(_))));
    }
}

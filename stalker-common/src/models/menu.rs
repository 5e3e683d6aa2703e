// File: stalker-common/src/models/menu.rs
//
// Minimal model of a context-menu group as the host hands it to
// contributors. Only ids and labels matter for placement.

use serde::{Deserialize, Serialize};

/// Id of the toggle entry this add-on contributes.
pub const TOGGLE_ITEM_ID: &str = "stalker-toggle";

/// Id of the host's own "Ignore" entry; the toggle is placed in front of it.
pub const IGNORE_ITEM_ID: &str = "ignore";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MenuAction {
    ToggleTarget { user_id: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub action: Option<MenuAction>,
}

impl MenuItem {
    /// An entry owned by the host, which we never act on.
    pub fn host(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            action: None,
        }
    }
}

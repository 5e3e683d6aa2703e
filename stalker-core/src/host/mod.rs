//! In-process implementations of the host capabilities.

pub mod memory;
pub mod settings;

use std::sync::Arc;

pub use memory::{MemoryHost, NavigationRequest};
pub use settings::MemorySettings;

use crate::plugin::Host;

impl Host {
    /// Wire every capability to one `MemoryHost` and a settings store.
    pub fn from_memory(host: &Arc<MemoryHost>, settings: &Arc<MemorySettings>) -> Self {
        Self {
            presence: host.clone(),
            voice: host.clone(),
            users: host.clone(),
            channels: host.clone(),
            notifications: host.clone(),
            navigator: host.clone(),
            settings: settings.clone(),
        }
    }
}

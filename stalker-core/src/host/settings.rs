use parking_lot::RwLock;
use tracing::debug;

use stalker_common::models::settings::StalkerSettings;
use stalker_common::traits::host_traits::SettingsStore;

/// Settings kept in memory. Hosts without their own persistence (and the
/// tests) use this directly.
#[derive(Default)]
pub struct MemorySettings {
    inner: RwLock<StalkerSettings>,
}

impl MemorySettings {
    pub fn new(settings: StalkerSettings) -> Self {
        Self {
            inner: RwLock::new(settings),
        }
    }

    /// Apply an arbitrary edit. The caller is responsible for telling the
    /// plugin (`on_settings_changed`) afterwards, as a host would.
    pub fn update(&self, edit: impl FnOnce(&mut StalkerSettings)) {
        let mut guard = self.inner.write();
        edit(&mut *guard);
    }

    pub fn replace(&self, settings: StalkerSettings) {
        *self.inner.write() = settings;
    }
}

impl SettingsStore for MemorySettings {
    fn settings(&self) -> StalkerSettings {
        self.inner.read().clone()
    }

    fn set_targets(&self, raw: &str) {
        debug!("Persisting targets \"{}\"", raw);
        self.inner.write().targets = raw.to_string();
    }
}

use std::sync::{Mutex, MutexGuard};

use crate::alerts::{AlertCenter, AlertKind};
use crate::config::AppConfig;
use crate::models::tour::{SnapshotStorage, TourStore};

/// Danger notification raised while the static tour list failed to load.
pub const LOAD_FAILED_MESSAGE: &str = "Could not load tours";

/// Composition root: owns the tour store and the alert list for the app's lifetime.
pub struct AppState {
    store: Mutex<TourStore>,
    pub alerts: AlertCenter,
    pub app_name: String,
    /// Why the static document could not be loaded at startup, if it could not.
    pub load_error: Option<String>,
}

impl AppState {
    pub fn new(store: TourStore, app_name: impl Into<String>) -> Self {
        Self {
            store: Mutex::new(store),
            alerts: AlertCenter::new(),
            app_name: app_name.into(),
            load_error: None,
        }
    }

    /// Load the static document, then let a saved snapshot override it.
    /// Failures never abort startup. A load failure is kept so the list page
    /// can report it to whoever opens it.
    pub fn bootstrap(config: &AppConfig, storage: impl SnapshotStorage + 'static) -> Self {
        let mut store = TourStore::new(storage, config.storage_key.clone());

        let load_error = match store.load(&config.seed_file) {
            Ok(_) => None,
            Err(e) => {
                log::error!("{}", e);
                Some(e.to_string())
            }
        };
        match store.restore() {
            Ok(true) => {}
            Ok(false) => log::info!("No saved tours under '{}', using the static list", config.storage_key),
            Err(e) => log::warn!("Ignoring unreadable saved tours: {}", e),
        }

        Self {
            load_error,
            ..Self::new(store, config.app_name.clone())
        }
    }

    pub fn store(&self) -> MutexGuard<'_, TourStore> {
        self.store.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Raise the load-failure alert while the list is still empty because of it.
    /// At most one such alert is on screen at a time.
    pub fn report_load_error(&self) {
        if self.load_error.is_none() || !self.store().is_empty() {
            return;
        }
        self.alerts.show_unless_active(LOAD_FAILED_MESSAGE, AlertKind::Danger);
    }
}

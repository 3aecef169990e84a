use std::path::PathBuf;

use crate::models::tour::store::DEFAULT_STORAGE_KEY;

/// Runtime settings, read from the environment (and `.env` when present).
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: String,
    pub seed_file: PathBuf,
    pub data_dir: PathBuf,
    pub storage_key: String,
    pub app_name: String,
    pub session_key: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:8080".to_string(),
            seed_file: PathBuf::from("static/tours.json"),
            data_dir: PathBuf::from("data"),
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            app_name: "Tour Desk".to_string(),
            session_key: None,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                log::warn!("Ignoring unreadable .env file: {}", e);
            }
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unset or blank values keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();
        Self {
            bind_addr: get("TOURDESK_BIND").unwrap_or(defaults.bind_addr),
            seed_file: get("TOURDESK_SEED_FILE").map(PathBuf::from).unwrap_or(defaults.seed_file),
            data_dir: get("TOURDESK_DATA_DIR").map(PathBuf::from).unwrap_or(defaults.data_dir),
            storage_key: get("TOURDESK_STORAGE_KEY").unwrap_or(defaults.storage_key),
            app_name: get("TOURDESK_APP_NAME").unwrap_or(defaults.app_name),
            session_key: get("SESSION_KEY"),
        }
    }
}

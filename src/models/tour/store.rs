use std::path::Path;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::loader::{self, FetchError};
use super::storage::{SnapshotStorage, StorageError};
use super::types::{NewTour, Tour};

/// Storage key used when the configuration does not name one.
pub const DEFAULT_STORAGE_KEY: &str = "toursData";

const SNAPSHOT_VERSION: u32 = 1;

#[derive(Debug)]
pub enum StoreError {
    Storage(StorageError),
    Fetch(FetchError),
}

impl From<StorageError> for StoreError {
    fn from(err: StorageError) -> Self {
        StoreError::Storage(err)
    }
}

impl From<FetchError> for StoreError {
    fn from(err: FetchError) -> Self {
        StoreError::Fetch(err)
    }
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::Storage(e) => write!(f, "{}", e),
            StoreError::Fetch(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for StoreError {}

/// Persisted form of the store: the whole list plus the id counter.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub version: u32,
    pub saved_at: String,
    pub next_id: u64,
    pub tours: Vec<Tour>,
}

/// Snapshots written before the counter existed are a bare array.
#[derive(Deserialize)]
#[serde(untagged)]
enum StoredValue {
    Snapshot(Snapshot),
    Legacy(Vec<Tour>),
}

/// In-memory ordered tour list, mirrored to snapshot storage on every append.
pub struct TourStore {
    tours: Vec<Tour>,
    next_id: u64,
    storage: Box<dyn SnapshotStorage>,
    key: String,
}

impl TourStore {
    pub fn new(storage: impl SnapshotStorage + 'static, key: impl Into<String>) -> Self {
        Self {
            tours: Vec::new(),
            next_id: 1,
            storage: Box::new(storage),
            key: key.into(),
        }
    }

    pub fn tours(&self) -> &[Tour] {
        &self.tours
    }

    pub fn find(&self, id: u64) -> Option<&Tour> {
        self.tours.iter().find(|t| t.id == id)
    }

    pub fn len(&self) -> usize {
        self.tours.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tours.is_empty()
    }

    /// Identifier the next append will receive.
    pub fn next_id(&self) -> u64 {
        self.next_id
    }

    pub fn storage_key(&self) -> &str {
        &self.key
    }

    /// Replace the list with the static document at `path`.
    /// On failure the list is left empty and the error returned to the caller.
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<usize, StoreError> {
        match loader::load(path) {
            Ok(tours) => {
                self.replace(tours);
                Ok(self.tours.len())
            }
            Err(e) => {
                self.replace(Vec::new());
                Err(e.into())
            }
        }
    }

    /// Override the list with the saved snapshot, if one exists.
    /// Returns `Ok(false)` when storage holds nothing under the key.
    pub fn restore(&mut self) -> Result<bool, StoreError> {
        let Some(raw) = self.storage.get_item(&self.key)? else {
            return Ok(false);
        };
        let value: StoredValue = serde_json::from_str(&raw).map_err(StorageError::from)?;
        match value {
            StoredValue::Snapshot(snapshot) => {
                let counter = snapshot.next_id;
                self.replace(snapshot.tours);
                self.next_id = self.next_id.max(counter);
            }
            StoredValue::Legacy(tours) => self.replace(tours),
        }
        log::info!("Restored {} tours from storage key '{}'", self.tours.len(), self.key);
        Ok(true)
    }

    /// Append a validated tour with the next identifier, then persist the whole list.
    /// The record stays in memory even if persisting fails.
    pub fn append(&mut self, new_tour: NewTour, image_class: &str) -> Result<&Tour, StoreError> {
        let id = self.next_id;
        self.next_id += 1;
        self.tours.push(new_tour.into_tour(id, image_class));
        self.persist()?;
        Ok(&self.tours[self.tours.len() - 1])
    }

    /// Serialize the full list to storage, overwriting the previous snapshot.
    pub fn persist(&self) -> Result<(), StoreError> {
        let snapshot = Snapshot {
            version: SNAPSHOT_VERSION,
            saved_at: Utc::now().to_rfc3339(),
            next_id: self.next_id,
            tours: self.tours.clone(),
        };
        let json = serde_json::to_string(&snapshot).map_err(StorageError::from)?;
        self.storage.set_item(&self.key, &json)?;
        log::debug!("Persisted {} tours under '{}'", self.tours.len(), self.key);
        Ok(())
    }

    fn replace(&mut self, tours: Vec<Tour>) {
        let max_id = tours.iter().map(|t| t.id).max().unwrap_or(0);
        self.tours = tours;
        self.next_id = max_id + 1;
    }
}

impl std::fmt::Debug for TourStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TourStore")
            .field("tours", &self.tours.len())
            .field("next_id", &self.next_id)
            .field("key", &self.key)
            .finish()
    }
}

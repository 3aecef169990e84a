//! Shared test fixtures for the tour store, form and HTTP tests.
//!
//! - `valid_values()` - a form that passes every rule
//! - `sample_tour()` - a stored tour with a given id and status
//! - `memory_store()` / `file_store()` - empty stores over each storage backend
//! - `failing_store()` - a store whose every write fails
//! - `write_seed()` - a static tours document in a temp dir

#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;

use tempfile::TempDir;

use tourdesk::models::tour::{
    FileStorage, MemoryStorage, SnapshotStorage, StorageError, Tour, TourFormValues, TourStatus,
    TourStore,
};

// ============================================================================
// TEST CONSTANTS
// ============================================================================

pub const STORAGE_KEY: &str = "toursData";
pub const VALID_DESCRIPTION: &str = "A walk through the center";

// ============================================================================
// FIXTURES
// ============================================================================

/// The create scenario: every field valid.
pub fn valid_values() -> TourFormValues {
    TourFormValues {
        title: "Tour X".to_string(),
        description: VALID_DESCRIPTION.to_string(),
        price: "100".to_string(),
        category: "History".to_string(),
        duration: "3".to_string(),
        max_group_size: "10".to_string(),
        meeting_point: "Main Plaza".to_string(),
        included_items: "guide, lunch".to_string(),
        status: "active".to_string(),
    }
}

pub fn sample_tour(id: u64, status: TourStatus) -> Tour {
    Tour {
        id,
        title: format!("Sample tour {id}"),
        description: "Sample description long enough".to_string(),
        price: 250.0,
        currency: "MXN".to_string(),
        bookings: 3,
        rating: Some(4.5),
        status,
        image_class: "markets".to_string(),
        category: "Food".to_string(),
        duration: 2,
        max_group_size: 8,
        included_items: vec!["Tastings".to_string(), "Guide".to_string()],
        meeting_point: "Mercado de San Juan".to_string(),
    }
}

// ============================================================================
// STORE SETUP
// ============================================================================

/// Empty store over in-memory storage. The storage handle is returned so tests
/// can inspect or pre-populate what was persisted.
pub fn memory_store() -> (Arc<MemoryStorage>, TourStore) {
    let storage = Arc::new(MemoryStorage::new());
    let store = TourStore::new(storage.clone(), STORAGE_KEY);
    (storage, store)
}

/// Empty store over file storage in a fresh temp dir.
/// Keep the TempDir alive for as long as the store is used.
pub fn file_store() -> (TempDir, TourStore) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let storage = FileStorage::open(dir.path().join("data")).expect("Failed to open storage");
    (dir, TourStore::new(storage, STORAGE_KEY))
}

/// Write `tours` as a static document and return its path.
pub fn write_seed(dir: &TempDir, tours: &[Tour]) -> PathBuf {
    let path = dir.path().join("tours.json");
    let json = serde_json::to_string_pretty(tours).expect("Failed to serialize seed");
    std::fs::write(&path, json).expect("Failed to write seed");
    path
}

/// Storage that reads as empty and refuses every write.
#[derive(Debug, Default)]
pub struct FailingStorage;

impl SnapshotStorage for FailingStorage {
    fn get_item(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Ok(None)
    }

    fn set_item(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Io(std::io::Error::other("disk full")))
    }
}

/// Empty store over `FailingStorage`.
pub fn failing_store() -> TourStore {
    TourStore::new(FailingStorage, STORAGE_KEY)
}

use std::path::Path;

use super::types::Tour;

/// Failure to load the static tours document.
#[derive(Debug)]
pub enum FetchError {
    Io(std::io::Error),
    Parse(serde_json::Error),
}

impl From<std::io::Error> for FetchError {
    fn from(err: std::io::Error) -> Self {
        FetchError::Io(err)
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Parse(err)
    }
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FetchError::Io(e) => write!(f, "Could not read tours document: {}", e),
            FetchError::Parse(e) => write!(f, "Could not parse tours document: {}", e),
        }
    }
}

impl std::error::Error for FetchError {}

/// Parse a tours document: a JSON array of tour records.
pub fn parse_document(json: &str) -> Result<Vec<Tour>, FetchError> {
    Ok(serde_json::from_str(json)?)
}

/// Read the static tours document from disk.
pub fn load(path: impl AsRef<Path>) -> Result<Vec<Tour>, FetchError> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path)?;
    let tours = parse_document(&json)?;
    log::info!("Loaded {} tours from {}", tours.len(), path.display());
    Ok(tours)
}

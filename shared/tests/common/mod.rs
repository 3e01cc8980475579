//! Common test utilities for integration tests
//!
//! Loads CSV fixtures from `tests/data`.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::path::PathBuf;

/// One weight/height pair from a diet fixture
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct DietInput {
    pub weight: f64,
    pub height: f64,
}

/// Path of a file under `tests/data`
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests").join("data").join(name)
}

/// Read every record of a CSV fixture with a header row
pub fn load_csv<T: DeserializeOwned>(name: &str) -> Vec<T> {
    let path = fixture_path(name);
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(&path)
        .unwrap_or_else(|e| panic!("Failed to open fixture {}: {}", path.display(), e));

    reader
        .deserialize()
        .collect::<Result<Vec<T>, _>>()
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

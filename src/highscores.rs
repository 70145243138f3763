//! High score persistence
//!
//! A single best score survives across games. The engine only sees the
//! `ScoreStore` contract; storage is either in-memory or a JSON file.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

use crate::error::StoreError;

/// Get/set a single persisted best score
pub trait ScoreStore {
    /// Persisted high score, 0 if nothing has been saved yet
    fn high_score(&self) -> Result<u32, StoreError>;
    fn set_high_score(&mut self, value: u32) -> Result<(), StoreError>;
}

/// Volatile store, mostly for tests and embedding
#[derive(Debug, Clone, Default)]
pub struct MemoryScoreStore {
    value: u32,
}

impl MemoryScoreStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_high_score(value: u32) -> Self {
        Self { value }
    }
}

impl ScoreStore for MemoryScoreStore {
    fn high_score(&self) -> Result<u32, StoreError> {
        Ok(self.value)
    }

    fn set_high_score(&mut self, value: u32) -> Result<(), StoreError> {
        self.value = value;
        Ok(())
    }
}

/// On-disk record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HighScoreRecord {
    pub high_score: u32,
    /// Unix timestamp (seconds) when achieved
    #[serde(default)]
    pub achieved_at: u64,
}

/// JSON file store. Writes go to a temporary sibling, then rename.
#[derive(Debug, Clone)]
pub struct JsonFileScoreStore {
    path: PathBuf,
}

impl JsonFileScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    /// Load the full record, `None` when no file exists yet
    pub fn load(&self) -> Result<Option<HighScoreRecord>, StoreError> {
        let json = match fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(StoreError::Io {
                    path: self.path.clone(),
                    source,
                });
            }
        };
        let record = serde_json::from_str(&json).map_err(|source| StoreError::Corrupt {
            path: self.path.clone(),
            source,
        })?;
        Ok(Some(record))
    }
}

impl ScoreStore for JsonFileScoreStore {
    fn high_score(&self) -> Result<u32, StoreError> {
        Ok(self.load()?.map(|r| r.high_score).unwrap_or(0))
    }

    fn set_high_score(&mut self, value: u32) -> Result<(), StoreError> {
        let record = HighScoreRecord {
            high_score: value,
            achieved_at: SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_secs())
                .unwrap_or(0),
        };
        let json = serde_json::to_string(&record)
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;

        let tmp = self.tmp_path();
        let io_err = |source: std::io::Error| StoreError::Io {
            path: self.path.clone(),
            source,
        };
        fs::write(&tmp, json).map_err(io_err)?;
        fs::rename(&tmp, &self.path).map_err(io_err)?;

        log::info!("High score saved ({})", value);
        Ok(())
    }
}

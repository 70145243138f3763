//! Error types for the engine, the score store and settings loading

use std::path::PathBuf;

use crate::sim::Phase;

/// Errors returned to hosts driving the round engine
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("A game is already in progress (phase {0:?})")]
    GameInProgress(Phase),

    #[error("Signal index {0} is outside the signal set")]
    UnknownSignal(usize),
}

/// Score store read/write failures (never fatal to gameplay)
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Failed to access high score file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("High score file {path} is corrupt")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Score store unavailable: {0}")]
    Unavailable(String),
}

/// Settings file failures
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("Failed to read settings from {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write settings to {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid settings JSON")]
    Parse(#[from] serde_json::Error),
}

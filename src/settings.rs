//! Game settings
//!
//! Persisted as JSON next to the high score file. Every field has a default,
//! so partial files load fine. Game timing is not a setting; unknown keys
//! such as `timings` are ignored.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::SettingsError;

/// Delays driving playback and transitions.
///
/// Fixed design values (see `consts`); never read from the settings file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timings {
    /// "Watch Pattern" shown before the first playback step
    pub lead_in: Duration,
    /// Pads dark between two played-back signals
    pub signal_gap: Duration,
    /// Pad lit during playback
    pub signal_display: Duration,
    /// "Go!" shown before input opens
    pub go_cue: Duration,
    /// Pad lit after a player tap
    pub tap_flash: Duration,
    /// "Good Job!" shown before the next round
    pub success_delay: Duration,
    /// "Game Over" shown before returning home
    pub game_over_delay: Duration,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            lead_in: LEAD_IN,
            signal_gap: SIGNAL_GAP,
            signal_display: SIGNAL_DISPLAY,
            go_cue: GO_CUE,
            tap_flash: TAP_FLASH,
            success_delay: SUCCESS_DELAY,
            game_over_delay: GAME_OVER_DELAY,
        }
    }
}

impl Timings {
    /// Total playback time for a sequence of `len` signals, up to input opening
    pub fn playback_duration(&self, len: usize) -> Duration {
        let per_step = self.signal_gap + self.signal_display;
        self.lead_in + per_step * len as u32 + self.go_cue
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Fixed RNG seed for reproducible sequences (random if unset)
    pub seed: Option<u64>,
    /// Where the best score is kept
    pub high_score_path: PathBuf,
    /// Rounds the demo player clears before it slips
    pub demo_rounds: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: None,
            high_score_path: PathBuf::from(DEFAULT_HIGH_SCORE_PATH),
            demo_rounds: 5,
        }
    }
}

impl Settings {
    /// Read settings from a JSON file
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let json = fs::read_to_string(path).map_err(|source| SettingsError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(serde_json::from_str(&json)?)
    }

    /// Read settings, falling back to defaults on any failure
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::info!("Using default settings ({})", e);
                Self::default()
            }
        }
    }

    pub fn save(&self, path: &Path) -> Result<(), SettingsError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json).map_err(|source| SettingsError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("Settings saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings: Settings = serde_json::from_str(r#"{ "seed": 7 }"#).unwrap();
        assert_eq!(settings.seed, Some(7));
        assert_eq!(settings.demo_rounds, 5);
        assert_eq!(settings.high_score_path, PathBuf::from(DEFAULT_HIGH_SCORE_PATH));
    }

    #[test]
    fn test_timings_key_is_ignored() {
        let json = r#"{
            "seed": 3,
            "timings": { "lead_in_ms": 18446744073709551615, "signal_gap_ms": 18446744073709551615 }
        }"#;
        let settings: Settings = serde_json::from_str(json).unwrap();
        assert_eq!(
            settings,
            Settings {
                seed: Some(3),
                ..Default::default()
            }
        );
    }

    #[test]
    fn test_default_timings_match_consts() {
        let t = Timings::default();
        assert_eq!(t.lead_in, Duration::from_millis(1000));
        assert_eq!(t.game_over_delay, Duration::from_millis(2000));
        assert_eq!(t.playback_duration(0), Duration::from_millis(1500));
        assert_eq!(t.playback_duration(3), Duration::from_millis(4500));
    }

    #[test]
    fn test_save_and_load() {
        let dir = std::env::temp_dir().join(format!("simon-settings-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("settings.json");

        let settings = Settings {
            seed: Some(99),
            demo_rounds: 2,
            ..Default::default()
        };
        settings.save(&path).unwrap();
        assert_eq!(Settings::load(&path).unwrap(), settings);
    }

    #[test]
    fn test_missing_file_falls_back() {
        let path = Path::new("/definitely/not/here/settings.json");
        assert!(matches!(Settings::load(path), Err(SettingsError::Read { .. })));
        assert_eq!(Settings::load_or_default(path), Settings::default());
    }
}

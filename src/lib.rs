//! Simon - a sequence memory game
//!
//! Core modules:
//! - `sim`: Round engine (sequence growth, playback, input checking, scoring)
//! - `signal`: The closed pad set and random sources
//! - `presenter`: Presentation boundary the engine renders through
//! - `highscores`: Best-score persistence
//! - `settings`: Demo configuration and the fixed timing set

pub mod error;
pub mod highscores;
pub mod presenter;
pub mod settings;
pub mod signal;
pub mod sim;

pub use error::{EngineError, SettingsError, StoreError};
pub use highscores::{JsonFileScoreStore, MemoryScoreStore, ScoreStore};
pub use presenter::{LogPresenter, Presenter, RecordingPresenter};
pub use settings::{Settings, Timings};
pub use signal::{RandomSignals, Signal, SignalSource};
pub use sim::{GameState, InputOutcome, Phase, RoundEngine};

/// Game configuration constants
pub mod consts {
    use std::time::Duration;

    /// Shown while the sequence plays back
    pub const MSG_WATCH: &str = "Watch Pattern";
    /// Shown once playback is done, right before input opens
    pub const MSG_GO: &str = "Go!";
    /// Shown after the whole sequence was repeated
    pub const MSG_SUCCESS: &str = "Good Job!";
    pub const MSG_GAME_OVER: &str = "Game Over";

    /// "Watch Pattern" shown before the first playback step
    pub const LEAD_IN: Duration = Duration::from_millis(1000);
    /// Pads dark between two played-back signals
    pub const SIGNAL_GAP: Duration = Duration::from_millis(500);
    /// Pad lit during playback
    pub const SIGNAL_DISPLAY: Duration = Duration::from_millis(500);
    /// "Go!" shown before input opens
    pub const GO_CUE: Duration = Duration::from_millis(500);
    /// Pad lit after a player tap
    pub const TAP_FLASH: Duration = Duration::from_millis(500);
    /// "Good Job!" shown before the next round
    pub const SUCCESS_DELAY: Duration = Duration::from_millis(1000);
    /// "Game Over" shown before returning home
    pub const GAME_OVER_DELAY: Duration = Duration::from_millis(2000);

    /// Settings file read by the demo binary
    pub const DEFAULT_SETTINGS_PATH: &str = "simon_settings.json";
    /// Default high score file
    pub const DEFAULT_HIGH_SCORE_PATH: &str = "simon_highscore.json";

    /// Fixed step for the demo loop
    pub const DEMO_TICK: Duration = Duration::from_millis(50);
    /// Demo player reaction time between taps
    pub const DEMO_REACTION: Duration = Duration::from_millis(350);
}

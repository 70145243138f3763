//! Presentation boundary
//!
//! The engine never touches views directly. Everything visible goes through
//! a `Presenter`: pad highlights, input gating, the instruction message and
//! the home view.

use crate::signal::Signal;

/// Capability the round engine renders through
pub trait Presenter {
    /// Highlight a single pad
    fn display_signal(&mut self, signal: Signal);
    /// Remove any pad highlight
    fn clear_signal(&mut self);
    fn set_input_enabled(&mut self, enabled: bool);
    fn show_message(&mut self, text: &str);
    fn hide_message(&mut self);
    /// Show the home/start view with the last game's score
    fn show_home(&mut self, final_score: u32);
    fn hide_home(&mut self);
    /// Update the best-score readout
    fn show_high_score(&mut self, high_score: u32);
}

/// Presenter that only writes what it would draw to the log
#[derive(Debug, Default)]
pub struct LogPresenter;

impl Presenter for LogPresenter {
    fn display_signal(&mut self, signal: Signal) {
        log::info!("[pad] {}", signal.as_str());
    }

    fn clear_signal(&mut self) {
        log::debug!("[pad] cleared");
    }

    fn set_input_enabled(&mut self, enabled: bool) {
        log::debug!("[input] {}", if enabled { "enabled" } else { "disabled" });
    }

    fn show_message(&mut self, text: &str) {
        log::info!("[message] {}", text);
    }

    fn hide_message(&mut self) {
        log::debug!("[message] hidden");
    }

    fn show_home(&mut self, final_score: u32) {
        log::info!("[home] score {}", final_score);
    }

    fn hide_home(&mut self) {
        log::debug!("[home] hidden");
    }

    fn show_high_score(&mut self, high_score: u32) {
        log::info!("[home] high score {}", high_score);
    }
}

/// One presenter instruction, as captured by `RecordingPresenter`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PresenterEvent {
    DisplaySignal(Signal),
    ClearSignal,
    InputEnabled(bool),
    ShowMessage(String),
    HideMessage,
    ShowHome(u32),
    HideHome,
    ShowHighScore(u32),
}

/// Presenter that keeps every instruction plus the resulting view state
#[derive(Debug, Clone, Default)]
pub struct RecordingPresenter {
    pub events: Vec<PresenterEvent>,
    /// Currently highlighted pad
    pub lit: Option<Signal>,
    pub input_enabled: bool,
    pub message: Option<String>,
    pub home_visible: bool,
}

impl RecordingPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Signals highlighted so far, in order
    pub fn displayed_signals(&self) -> Vec<Signal> {
        self.events
            .iter()
            .filter_map(|e| match e {
                PresenterEvent::DisplaySignal(s) => Some(*s),
                _ => None,
            })
            .collect()
    }

    pub fn clear_events(&mut self) {
        self.events.clear();
    }
}

impl Presenter for RecordingPresenter {
    fn display_signal(&mut self, signal: Signal) {
        self.lit = Some(signal);
        self.events.push(PresenterEvent::DisplaySignal(signal));
    }

    fn clear_signal(&mut self) {
        self.lit = None;
        self.events.push(PresenterEvent::ClearSignal);
    }

    fn set_input_enabled(&mut self, enabled: bool) {
        self.input_enabled = enabled;
        self.events.push(PresenterEvent::InputEnabled(enabled));
    }

    fn show_message(&mut self, text: &str) {
        self.message = Some(text.to_string());
        self.events.push(PresenterEvent::ShowMessage(text.to_string()));
    }

    fn hide_message(&mut self) {
        self.message = None;
        self.events.push(PresenterEvent::HideMessage);
    }

    fn show_home(&mut self, final_score: u32) {
        self.home_visible = true;
        self.events.push(PresenterEvent::ShowHome(final_score));
    }

    fn hide_home(&mut self) {
        self.home_visible = false;
        self.events.push(PresenterEvent::HideHome);
    }

    fn show_high_score(&mut self, high_score: u32) {
        self.events.push(PresenterEvent::ShowHighScore(high_score));
    }
}

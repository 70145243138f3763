//! Round engine
//!
//! Owns the growing sequence, plays it back, checks player taps and settles
//! the high score. The engine only moves when the host taps (`submit_input`)
//! or lets virtual time pass (`advance`); every delay is a scheduled task.

use std::time::Duration;

use super::schedule::{Scheduler, Task, TaskHandle};
use super::state::{GameState, Phase};
use crate::consts::*;
use crate::error::EngineError;
use crate::highscores::ScoreStore;
use crate::presenter::Presenter;
use crate::settings::Timings;
use crate::signal::{Signal, SignalSource};

/// What a single tap did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputOutcome {
    /// Input is closed in the current phase, nothing changed
    Ignored,
    /// Correct tap, more of the sequence to go
    Accepted { remaining: usize },
    /// Correct tap finishing the sequence
    RoundComplete { score: u32 },
    /// Wrong tap, game ended with the given score
    GameOver { score: u32 },
}

pub struct RoundEngine<P, S, R> {
    state: GameState,
    presenter: P,
    store: S,
    source: R,
    scheduler: Scheduler,
    timings: Timings,
    /// Pending un-highlight of the last tapped pad
    tap_clear: Option<TaskHandle>,
}

impl<P: Presenter, S: ScoreStore, R: SignalSource> RoundEngine<P, S, R> {
    /// Create an idle engine showing the home view
    pub fn new(mut presenter: P, store: S, source: R, timings: Timings) -> Self {
        let high_score = match store.high_score() {
            Ok(score) => score,
            Err(e) => {
                log::warn!("High score not fetched: {}", e);
                0
            }
        };

        presenter.set_input_enabled(false);
        presenter.hide_message();
        presenter.show_home(0);
        presenter.show_high_score(high_score);

        Self {
            state: GameState::new(high_score),
            presenter,
            store,
            source,
            scheduler: Scheduler::new(),
            timings,
            tap_clear: None,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    pub fn high_score(&self) -> u32 {
        self.state.high_score
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn timings(&self) -> &Timings {
        &self.timings
    }

    /// Current virtual time
    pub fn now(&self) -> Duration {
        self.scheduler.now()
    }

    /// Number of scheduled transitions not yet fired
    pub fn pending_tasks(&self) -> usize {
        self.scheduler.len()
    }

    /// Start a fresh game. Only valid from the home view.
    pub fn start_game(&mut self) -> Result<(), EngineError> {
        if self.state.phase.in_game() {
            return Err(EngineError::GameInProgress(self.state.phase));
        }

        self.scheduler.cancel_all();
        self.tap_clear = None;
        self.state.reset_for_new_game();
        self.presenter.hide_home();
        log::info!("Game started");

        self.start_round();
        Ok(())
    }

    /// Handle one player tap
    pub fn submit_input(&mut self, signal: Signal) -> InputOutcome {
        if self.state.phase != Phase::AwaitingInput {
            log::debug!("Ignored {} tap during {:?}", signal.as_str(), self.state.phase);
            return InputOutcome::Ignored;
        }

        self.flash_tap(signal);

        if self.state.expected_signal() != Some(signal) {
            log::info!(
                "Wrong signal {} at position {} of {}",
                signal.as_str(),
                self.state.input_cursor + 1,
                self.state.round()
            );
            self.end_game();
            return InputOutcome::GameOver {
                score: self.state.current_score,
            };
        }

        self.state.input_cursor += 1;
        if self.state.input_done() {
            self.complete_round();
            return InputOutcome::RoundComplete {
                score: self.state.current_score,
            };
        }

        InputOutcome::Accepted {
            remaining: self.state.round() - self.state.input_cursor,
        }
    }

    /// Handle a tap given as a raw pad index
    pub fn submit_index(&mut self, index: usize) -> Result<InputOutcome, EngineError> {
        let signal = Signal::from_index(index)?;
        Ok(self.submit_input(signal))
    }

    /// Let `dt` of virtual time pass, firing every task that falls due
    pub fn advance(&mut self, dt: Duration) {
        let until = self.scheduler.now() + dt;
        while let Some(task) = self.scheduler.pop_due(until) {
            log::trace!("Firing {:?} at {:?}", task, self.scheduler.now());
            self.run_task(task);
        }
        self.scheduler.set_now(until);
    }

    /// Fire tasks until the player is up or the engine is back home
    pub fn settle(&mut self) {
        while !matches!(self.state.phase, Phase::AwaitingInput | Phase::Idle) {
            match self.scheduler.next_due_in() {
                Some(delay) => self.advance(delay),
                None => break,
            }
        }
    }

    fn run_task(&mut self, task: Task) {
        match task {
            Task::PlaybackStep => self.playback_step(),
            Task::ShowSignal => self.show_signal(),
            Task::FinishPlayback => self.finish_playback(),
            Task::ClearTap => {
                self.tap_clear = None;
                self.presenter.clear_signal();
            }
            Task::NextRound => self.start_round(),
            Task::ReturnHome => self.return_home(),
        }
    }

    /// Append one signal and replay the whole sequence
    pub(crate) fn start_round(&mut self) {
        if !matches!(self.state.phase, Phase::Idle | Phase::RoundComplete) {
            self.contract_violation("start_round");
            return;
        }

        if let Some(handle) = self.tap_clear.take() {
            self.scheduler.cancel(handle);
        }
        self.presenter.clear_signal();

        let signal = self.source.next_signal();
        self.state.sequence.push(signal);
        self.state.playback_cursor = 0;
        self.state.input_cursor = 0;
        self.state.phase = Phase::Playback;
        log::debug!("Round {} adds {}", self.state.round(), signal.as_str());

        self.presenter.set_input_enabled(false);
        self.presenter.show_message(MSG_WATCH);
        self.scheduler.schedule(self.timings.lead_in, Task::PlaybackStep);
    }

    /// Darken the pads before the next signal, or cue the player when done
    pub(crate) fn playback_step(&mut self) {
        if self.state.phase != Phase::Playback {
            self.contract_violation("playback_step");
            return;
        }

        self.presenter.hide_message();
        if self.state.playback_done() {
            self.presenter.show_message(MSG_GO);
            self.scheduler.schedule(self.timings.go_cue, Task::FinishPlayback);
        } else {
            self.presenter.clear_signal();
            self.scheduler.schedule(self.timings.signal_gap, Task::ShowSignal);
        }
    }

    fn show_signal(&mut self) {
        let signal = match (self.state.phase, self.state.next_playback_signal()) {
            (Phase::Playback, Some(signal)) => signal,
            _ => {
                self.contract_violation("show_signal");
                return;
            }
        };

        self.presenter.display_signal(signal);
        self.state.playback_cursor += 1;
        self.scheduler
            .schedule(self.timings.signal_display, Task::PlaybackStep);
    }

    fn finish_playback(&mut self) {
        if self.state.phase != Phase::Playback || !self.state.playback_done() {
            self.contract_violation("finish_playback");
            return;
        }

        self.presenter.clear_signal();
        self.state.input_cursor = 0;
        self.state.phase = Phase::AwaitingInput;
        self.presenter.hide_message();
        self.presenter.set_input_enabled(true);
    }

    fn flash_tap(&mut self, signal: Signal) {
        if let Some(handle) = self.tap_clear.take() {
            self.scheduler.cancel(handle);
        }
        self.presenter.display_signal(signal);
        self.tap_clear = Some(self.scheduler.schedule(self.timings.tap_flash, Task::ClearTap));
    }

    fn complete_round(&mut self) {
        self.state.current_score = self.state.round() as u32;
        self.state.phase = Phase::RoundComplete;
        log::info!("Round {} complete", self.state.current_score);

        self.presenter.set_input_enabled(false);
        self.presenter.show_message(MSG_SUCCESS);
        self.scheduler
            .schedule(self.timings.success_delay, Task::NextRound);
    }

    /// Close input, persist an improved score, then head home after a delay
    pub(crate) fn end_game(&mut self) {
        if self.state.phase != Phase::AwaitingInput {
            self.contract_violation("end_game");
            return;
        }

        self.state.phase = Phase::GameOver;
        self.scheduler.cancel_all();
        self.tap_clear = None;
        log::info!("Game over with score {}", self.state.current_score);

        self.presenter.show_message(MSG_GAME_OVER);
        self.presenter.clear_signal();
        self.presenter.set_input_enabled(false);

        self.settle_high_score();
        self.scheduler
            .schedule(self.timings.game_over_delay, Task::ReturnHome);
    }

    fn settle_high_score(&mut self) {
        let score = self.state.current_score;
        let persisted = match self.store.high_score() {
            Ok(value) => value,
            Err(e) => {
                log::warn!("High score not fetched, using last known value: {}", e);
                self.state.high_score
            }
        };

        let mut reread = true;
        if score > persisted {
            log::info!("New high score {} (was {})", score, persisted);
            if let Err(e) = self.store.set_high_score(score) {
                log::warn!("Failed to save high score: {}", e);
                reread = false;
            }
            self.state.high_score = score;
        }

        if reread {
            match self.store.high_score() {
                Ok(value) => self.state.high_score = value,
                Err(e) => log::warn!("High score not fetched: {}", e),
            }
        }
        self.presenter.show_high_score(self.state.high_score);
    }

    fn return_home(&mut self) {
        if self.state.phase != Phase::GameOver {
            self.contract_violation("return_home");
            return;
        }

        self.state.phase = Phase::Idle;
        self.presenter.hide_message();
        self.presenter.show_home(self.state.current_score);
    }

    fn contract_violation(&self, op: &str) {
        log::error!("{} invoked during {:?}", op, self.state.phase);
        debug_assert!(false, "{} invoked during {:?}", op, self.state.phase);
    }
}

//! Idle/demo mode - a simulated player
//!
//! Repeats the sequence back after a short reaction delay, then slips once
//! the sequence grows past its target so the game ends.

use std::time::Duration;

use super::engine::{InputOutcome, RoundEngine};
use super::state::Phase;
use crate::highscores::{JsonFileScoreStore, ScoreStore};
use crate::presenter::{LogPresenter, Presenter};
use crate::settings::{Settings, Timings};
use crate::signal::{RandomSignals, SignalSource};

/// Safety cap on demo ticks
const MAX_DEMO_TICKS: u32 = 1_000_000;

#[derive(Debug, Clone)]
pub struct AutoPlayer {
    /// Rounds to clear before tapping a wrong pad
    pub target_rounds: u32,
    /// Delay between taps
    pub reaction: Duration,
    waited: Duration,
}

impl AutoPlayer {
    pub fn new(target_rounds: u32, reaction: Duration) -> Self {
        Self {
            target_rounds,
            reaction,
            waited: Duration::ZERO,
        }
    }

    /// Called once per tick after the engine advanced by `dt`.
    /// Returns the outcome of the tap made this tick, if any.
    pub fn act<P, S, R>(
        &mut self,
        engine: &mut RoundEngine<P, S, R>,
        dt: Duration,
    ) -> Option<InputOutcome>
    where
        P: Presenter,
        S: ScoreStore,
        R: SignalSource,
    {
        if engine.phase() != Phase::AwaitingInput {
            self.waited = Duration::ZERO;
            return None;
        }

        self.waited += dt;
        if self.waited < self.reaction {
            return None;
        }
        self.waited = Duration::ZERO;

        let state = engine.state();
        let expected = state.expected_signal()?;
        let signal = if state.round() > self.target_rounds as usize {
            expected.following()
        } else {
            expected
        };
        Some(engine.submit_input(signal))
    }
}

/// Engine wired for the demo binary. Timing is always the fixed set; only
/// the seed and high score location come from `settings`.
pub fn demo_engine(
    settings: &Settings,
) -> RoundEngine<LogPresenter, JsonFileScoreStore, RandomSignals> {
    let source = match settings.seed {
        Some(seed) => RandomSignals::new(seed),
        None => RandomSignals::from_entropy(),
    };
    log::info!("Sequence seed: {}", source.seed());

    let store = JsonFileScoreStore::new(&settings.high_score_path);
    log::info!("High score file: {}", store.path().display());
    RoundEngine::new(LogPresenter, store, source, Timings::default())
}

/// Play one full game with `player` at a fixed tick, until the engine is back
/// home. Returns the final score.
pub fn run_demo_game<P, S, R>(
    engine: &mut RoundEngine<P, S, R>,
    player: &mut AutoPlayer,
    tick: Duration,
) -> u32
where
    P: Presenter,
    S: ScoreStore,
    R: SignalSource,
{
    if let Err(e) = engine.start_game() {
        log::warn!("Demo not started: {}", e);
        return engine.state().current_score;
    }

    for _ in 0..MAX_DEMO_TICKS {
        engine.advance(tick);
        if let Some(outcome) = player.act(engine, tick) {
            log::debug!("Demo tap: {:?}", outcome);
        }
        if engine.phase() == Phase::Idle {
            break;
        }
    }

    engine.state().current_score
}

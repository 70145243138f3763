//! Game state and phase tags
//!
//! Plain data. All transitions are driven by `RoundEngine`.

use serde::{Deserialize, Serialize};

use crate::signal::Signal;

/// Current phase of the round state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Home view shown, waiting for start
    Idle,
    /// Sequence being shown to the player
    Playback,
    /// Player repeating the sequence
    AwaitingInput,
    /// Whole sequence repeated, next round pending
    RoundComplete,
    /// Wrong tap, score being settled
    GameOver,
}

impl Phase {
    /// Phases in which a game is running
    pub fn in_game(&self) -> bool {
        !matches!(self, Phase::Idle)
    }
}

/// Complete state of one game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// Signals to repeat, one appended per round
    pub sequence: Vec<Signal>,
    /// Next index to show during playback
    pub playback_cursor: usize,
    /// Next index the player must tap
    pub input_cursor: usize,
    /// Length of the last fully repeated sequence
    pub current_score: u32,
    /// Best score as last read from (or written to) the store
    pub high_score: u32,
    pub phase: Phase,
}

impl GameState {
    pub fn new(high_score: u32) -> Self {
        Self {
            sequence: Vec::new(),
            playback_cursor: 0,
            input_cursor: 0,
            current_score: 0,
            high_score,
            phase: Phase::Idle,
        }
    }

    /// Clear everything owned by a single game. High score carries over.
    pub fn reset_for_new_game(&mut self) {
        self.sequence.clear();
        self.playback_cursor = 0;
        self.input_cursor = 0;
        self.current_score = 0;
    }

    /// Current round number (1-based, 0 before the first round)
    pub fn round(&self) -> usize {
        self.sequence.len()
    }

    /// Signal the player must tap next
    pub fn expected_signal(&self) -> Option<Signal> {
        self.sequence.get(self.input_cursor).copied()
    }

    /// Signal the next playback step will show
    pub fn next_playback_signal(&self) -> Option<Signal> {
        self.sequence.get(self.playback_cursor).copied()
    }

    pub fn playback_done(&self) -> bool {
        self.playback_cursor >= self.sequence.len()
    }

    pub fn input_done(&self) -> bool {
        self.input_cursor >= self.sequence.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_idle() {
        let state = GameState::new(4);
        assert_eq!(state.phase, Phase::Idle);
        assert!(!state.phase.in_game());
        assert_eq!(state.round(), 0);
        assert_eq!(state.high_score, 4);
        assert_eq!(state.expected_signal(), None);
    }

    #[test]
    fn test_reset_keeps_high_score() {
        let mut state = GameState::new(3);
        state.sequence = vec![Signal::Red, Signal::Blue];
        state.input_cursor = 1;
        state.playback_cursor = 2;
        state.current_score = 1;
        state.reset_for_new_game();
        assert!(state.sequence.is_empty());
        assert_eq!(state.input_cursor, 0);
        assert_eq!(state.playback_cursor, 0);
        assert_eq!(state.current_score, 0);
        assert_eq!(state.high_score, 3);
    }

    #[test]
    fn test_cursors() {
        let mut state = GameState::new(0);
        state.sequence = vec![Signal::Green, Signal::Yellow];
        assert_eq!(state.expected_signal(), Some(Signal::Green));
        state.input_cursor = 1;
        assert_eq!(state.expected_signal(), Some(Signal::Yellow));
        assert!(!state.input_done());
        state.input_cursor = 2;
        assert!(state.input_done());

        state.playback_cursor = 1;
        assert_eq!(state.next_playback_signal(), Some(Signal::Yellow));
        assert!(!state.playback_done());
    }
}

//! Round simulation
//!
//! All gameplay logic lives here. Time is virtual and only moves through
//! `RoundEngine::advance`, so every run with a seeded source is reproducible:
//! - No real clocks or threads
//! - Presentation and storage only through traits

pub mod autoplay;
pub mod engine;
pub mod schedule;
pub mod state;

pub use autoplay::{AutoPlayer, demo_engine, run_demo_game};
pub use engine::{InputOutcome, RoundEngine};
pub use schedule::{Scheduler, Task, TaskHandle};
pub use state::{GameState, Phase};

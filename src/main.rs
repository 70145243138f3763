//! Simon demo entry point
//!
//! Runs one self-playing game against the real high score file and logs
//! everything the presenter is asked to show. Seed, score file and demo
//! length come from `simon_settings.json` when present.

use std::path::Path;

use simon::Settings;
use simon::consts::{DEFAULT_SETTINGS_PATH, DEMO_REACTION, DEMO_TICK};
use simon::sim::{AutoPlayer, demo_engine, run_demo_game};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Simon (demo) starting...");

    let settings = Settings::load_or_default(Path::new(DEFAULT_SETTINGS_PATH));
    let mut engine = demo_engine(&settings);
    let mut player = AutoPlayer::new(settings.demo_rounds, DEMO_REACTION);

    let score = run_demo_game(&mut engine, &mut player, DEMO_TICK);
    log::info!(
        "Demo finished: score {}, high score {} ({:?} of game time)",
        score,
        engine.high_score(),
        engine.now()
    );
}

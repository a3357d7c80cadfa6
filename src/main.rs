//! Zombie Shooter entry point
//!
//! There is no window backend in this crate. The native binary loads the
//! settings, stocks a headless media layer and lets the autopilot play a few
//! games, logging what happens (`RUST_LOG=info` to see it).

use std::path::Path;

use anyhow::Context;
use glam::UVec2;

use zombie_shooter::consts::{FIELD_HEIGHT, FIELD_WIDTH, TICKS_PER_SECOND};
use zombie_shooter::headless::HeadlessMedia;
use zombie_shooter::sim::{GamePhase, autopilot};
use zombie_shooter::{Game, Settings};

/// Games the demo plays before exiting
const DEMO_GAMES: u32 = 3;
/// Upper bound on demo length (three simulated minutes)
const DEMO_MAX_TICKS: u64 = 3 * 60 * TICKS_PER_SECOND as u64;

/// Sprite sizes used for the headless run
const PLAYER_SPRITE: UVec2 = UVec2::new(60, 100);
const ENEMY_SPRITE: UVec2 = UVec2::new(160, 150);

fn main() -> anyhow::Result<()> {
    env_logger::init();
    log::info!("Zombie Shooter (headless demo) starting...");

    let settings = Settings::load_from(Path::new(Settings::FILE_NAME));
    let mut media = HeadlessMedia::stocked(
        &settings,
        UVec2::new(FIELD_WIDTH as u32, FIELD_HEIGHT as u32),
        PLAYER_SPRITE,
        ENEMY_SPRITE,
    );
    let mut game = Game::new(&mut media, &settings).context("failed to load game assets")?;

    let mut finished = 0;
    let mut best = 0;
    while finished < DEMO_GAMES && game.state().time_ticks < DEMO_MAX_TICKS {
        let cmd = autopilot(game.state());
        if cmd.fire {
            game.fire(&mut media);
        }
        let was_over = game.state().phase == GamePhase::GameOver;
        game.step(&cmd.input, &mut media);
        if !was_over && game.state().phase == GamePhase::GameOver {
            finished += 1;
            best = best.max(game.state().score);
            log::info!("Demo game {} over with score {}", finished, game.state().score);
        }
    }

    best = best.max(game.state().score);
    if let Ok(snapshot) = serde_json::to_string(game.state()) {
        log::debug!("Final state: {}", snapshot);
    }

    println!(
        "Finished {} game(s) in {} ticks, best score {} (level {} reached), {} frames presented",
        finished,
        game.state().time_ticks,
        best,
        game.state().level,
        media.frames_presented()
    );
    Ok(())
}

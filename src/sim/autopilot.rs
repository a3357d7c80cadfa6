//! Idle/demo mode - a simple AI that plays the game
//!
//! Only produces input. The rules in `tick` stay the single source of truth.

use glam::Vec2;

use super::collision::projectile_hits_enemy;
use super::physics::enemy_step;
use super::state::{GamePhase, GameState};
use super::tick::TickInput;
use crate::consts::{MUZZLE_OFFSET_Y, PLAYER_SPEED, PROJECTILE_SPEED};

/// Distance at which the autopilot hops in panic
const PANIC_DISTANCE: f32 = 80.0;

/// What the autopilot wants to do before the next tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AutopilotCommand {
    pub input: TickInput,
    /// Press the fire button before the tick
    pub fire: bool,
}

/// Decide the next move from the current state
pub fn autopilot(state: &GameState) -> AutopilotCommand {
    match state.phase {
        GamePhase::Intro | GamePhase::GameOver => AutopilotCommand {
            input: TickInput {
                restart: true,
                ..Default::default()
            },
            fire: false,
        },
        GamePhase::RoundPause => AutopilotCommand::default(),
        GamePhase::Playing => {
            // Stand far enough from the right edge for a shot to stay on field
            let home = state.dims.player_max_x() - 2.0 * PROJECTILE_SPEED;
            let x = state.player.pos.x;
            let gap = x - state.enemy.pos.x;
            AutopilotCommand {
                input: TickInput {
                    left: x > home + PLAYER_SPEED / 2.0,
                    right: x < home - PLAYER_SPEED / 2.0,
                    jump: gap > 0.0 && gap < PANIC_DISTANCE,
                    ..Default::default()
                },
                fire: !state.projectile.active && shot_would_land(state),
            }
        }
    }
}

/// Would a shot fired now hit the enemy on the next tick?
fn shot_would_land(state: &GameState) -> bool {
    let muzzle = state.player.pos + Vec2::new(state.dims.player.x, MUZZLE_OFFSET_Y);
    let bullet = muzzle + Vec2::new(PROJECTILE_SPEED, 0.0);
    if bullet.x > state.dims.field.x {
        return false;
    }
    let mut enemy = state.enemy;
    enemy.pos.x += enemy_step(state.level);
    projectile_hits_enemy(bullet, enemy.center(state.dims.enemy), state.dims.enemy)
}

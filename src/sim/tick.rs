//! Fixed timestep simulation tick
//!
//! Advances the game state by one refresh step. Rules run in a fixed order:
//! input, restart, motion, projectile hit, player contact, round timeout,
//! clock.

use super::collision::{player_touches_enemy, projectile_hits_enemy};
use super::physics::{enemy_step, jump_y};
use super::state::{GameEvent, GamePhase, GameState};
use crate::consts::*;

/// Input commands for a single tick (sampled held keys)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Move left
    pub left: bool,
    /// Move right
    pub right: bool,
    /// Start a jump if grounded
    pub jump: bool,
    /// Start a new game from the title or game-over screen
    pub restart: bool,
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput) {
    state.time_ticks += 1;

    if state.phase == GamePhase::Playing {
        apply_movement(state, input);
    }

    if input.restart && state.awaiting_restart() {
        log::info!("Starting new game (previous score {})", state.score);
        state.restart();
    }

    if state.phase == GamePhase::Playing {
        advance_bodies(state);
    }

    check_projectile_hit(state);
    check_player_contact(state);
    check_round_timeout(state);

    state.round_ticks += 1;
}

/// Fire the weapon. Returns false (and changes nothing) when a projectile is
/// already in flight or no round is being played.
pub fn fire(state: &mut GameState) -> bool {
    if state.phase != GamePhase::Playing || state.projectile.active {
        return false;
    }
    state.projectile.active = true;
    state.projectile.pos = state.player.pos + glam::Vec2::new(state.dims.player.x, MUZZLE_OFFSET_Y);
    state.push_event(GameEvent::ShotFired);
    true
}

fn apply_movement(state: &mut GameState, input: &TickInput) {
    let player = &mut state.player;
    if input.left {
        player.pos.x = (player.pos.x - PLAYER_SPEED).max(0.0);
    }
    if input.right {
        player.pos.x = (player.pos.x + PLAYER_SPEED).min(state.dims.player_max_x());
    }
    if input.jump && !player.jumping {
        player.jumping = true;
        state.round_ticks = 0;
    }
}

fn advance_bodies(state: &mut GameState) {
    let dims = state.dims;

    // Enemy scrolls right and re-enters from the left
    state.enemy.pos.x += enemy_step(state.level);
    if state.enemy.pos.x > dims.field.x {
        state.enemy.pos.x = -dims.enemy.x;
    }

    // Jump arc is a function of the round clock, not integrated
    if state.player.jumping {
        let ground = dims.player_ground_y();
        match jump_y(ground, state.round_ticks) {
            Some(y) => state.player.pos.y = y,
            None => {
                state.player.pos.y = ground;
                state.player.jumping = false;
            }
        }
    }

    if state.projectile.active {
        state.projectile.pos.x += PROJECTILE_SPEED;
        if state.projectile.pos.x > dims.field.x {
            state.projectile.active = false;
            state.push_event(GameEvent::ProjectileExpired);
        }
    }
}

fn check_projectile_hit(state: &mut GameState) {
    if !state.projectile.active {
        return;
    }
    let center = state.enemy.center(state.dims.enemy);
    if projectile_hits_enemy(state.projectile.pos, center, state.dims.enemy) {
        let points = state.level * POINTS_PER_LEVEL;
        state.score += points;
        state.level += 1;
        state.enemy.pos.x = -state.dims.enemy.x;
        state.projectile.active = false;
        log::debug!("Enemy shot: +{} (level now {})", points, state.level);
        state.push_event(GameEvent::EnemyShot {
            points,
            level: state.level,
        });
    }
}

fn check_player_contact(state: &mut GameState) {
    if state.phase != GamePhase::Playing
        || !player_touches_enemy(state.player.pos, state.enemy.pos)
    {
        return;
    }
    state.round_ticks = 0;
    state.lives = state.lives.saturating_sub(1);
    if state.lives == 0 {
        state.phase = GamePhase::GameOver;
        log::info!("Game over: score {} at level {}", state.score, state.level);
        state.push_event(GameEvent::GameOver {
            score: state.score,
            level: state.level,
        });
    } else {
        state.phase = GamePhase::RoundPause;
        log::info!("Life lost, {} left", state.lives);
        state.push_event(GameEvent::LifeLost {
            lives_left: state.lives,
        });
    }
}

fn check_round_timeout(state: &mut GameState) {
    if state.phase == GamePhase::RoundPause && state.round_ticks > ROUND_PAUSE_TICKS {
        state.phase = GamePhase::Playing;
        state.reset();
    }
}

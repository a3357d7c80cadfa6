//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only, one `tick` per refresh event
//! - Positions derived from tick counters, never from wall-clock time
//! - No rendering, audio, or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod physics;
pub mod state;
pub mod tick;

pub use autopilot::{AutopilotCommand, autopilot};
pub use collision::{player_touches_enemy, projectile_hits_enemy};
pub use physics::{enemy_step, jump_duration_ticks, jump_height, jump_y};
pub use state::{Dimensions, Enemy, GameEvent, GamePhase, GameState, Player, Projectile};
pub use tick::{TickInput, fire, tick};

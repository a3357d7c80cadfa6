//! Zombie Shooter - a side-scrolling arcade shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (state machine, physics, collisions)
//! - `media`: Platform media layer traits (images, sounds, text, frame surface)
//! - `headless`: In-memory media layer used by tests and the demo binary
//! - `renderer`: Builds a frame from the post-tick game state
//! - `audio`: Maps simulation events to sound triggers
//! - `game`: Event loop driver
//! - `settings`: JSON configuration

pub mod assets;
pub mod audio;
pub mod game;
pub mod headless;
pub mod input;
pub mod media;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use game::{Event, EventSource, Game};
pub use media::ResourceLoadError;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Simulation ticks per second (refresh timer cadence)
    pub const TICKS_PER_SECOND: u32 = 30;
    /// Fixed simulation timestep in seconds
    pub const SIM_DT: f32 = 1.0 / TICKS_PER_SECOND as f32;
    /// Maximum substeps per `advance` call to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Play field dimensions (logical units)
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 600.0;
    /// HUD text inset from the field edges
    pub const MARGIN: f32 = 10.0;

    pub const INITIAL_LIVES: u32 = 3;
    /// Horizontal player movement per tick
    pub const PLAYER_SPEED: f32 = 20.0;

    /// Jump launch velocity (px/s) and gravity (px/s²)
    pub const JUMP_VELOCITY: f32 = 170.0;
    pub const GRAVITY: f32 = 500.0;

    /// Enemy base speed, scaled by sqrt(level)
    pub const ENEMY_BASE_SPEED: f32 = 5.0;

    /// Projectile speed per tick
    pub const PROJECTILE_SPEED: f32 = 40.0;
    /// Muzzle height below the player's top edge
    pub const MUZZLE_OFFSET_Y: f32 = 25.0;
    pub const PROJECTILE_RADIUS: f32 = 3.0;

    /// Player/enemy contact thresholds (fixed, not sprite-relative)
    pub const CONTACT_DX: f32 = 50.0;
    pub const CONTACT_DY: f32 = 200.0;

    /// Points per kill, multiplied by the current level
    pub const POINTS_PER_LEVEL: u32 = 10;

    /// Length of the pause after losing a life
    pub const ROUND_PAUSE_SECONDS: u32 = 3;
    pub const ROUND_PAUSE_TICKS: u32 = ROUND_PAUSE_SECONDS * TICKS_PER_SECOND;
}

//! Game state and core simulation types
//!
//! Session-scoped values (lives, score, level) survive rounds; round-scoped
//! values (positions, jump, projectile, round clock) are rebuilt by `reset`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen before the first game, waiting for space
    Intro,
    /// Active round
    Playing,
    /// Brief pause after losing a life
    RoundPause,
    /// Out of lives, waiting for space
    GameOver,
}

/// Something the simulation wants the outside world to react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A round began (after restart or after a round pause)
    RoundStarted,
    /// Player touched the enemy and still has lives
    LifeLost { lives_left: u32 },
    /// Player touched the enemy on the last life
    GameOver { score: u32, level: u32 },
    /// A projectile left the muzzle
    ShotFired,
    /// The projectile hit the enemy
    EnemyShot { points: u32, level: u32 },
    /// The projectile left the field without hitting anything
    ProjectileExpired,
}

/// Play field and sprite sizes.
///
/// Sprite sizes come from the loaded images; the simulation only ever sees
/// these numbers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub field: Vec2,
    pub player: Vec2,
    pub enemy: Vec2,
}

impl Default for Dimensions {
    fn default() -> Self {
        Self {
            field: Vec2::new(FIELD_WIDTH, FIELD_HEIGHT),
            player: Vec2::new(64.0, 96.0),
            enemy: Vec2::new(64.0, 96.0),
        }
    }
}

impl Dimensions {
    pub fn new(player: Vec2, enemy: Vec2) -> Self {
        Self {
            player,
            enemy,
            ..Self::default()
        }
    }

    /// Top edge of the player sprite when standing on the ground
    pub fn player_ground_y(&self) -> f32 {
        self.field.y - self.player.y
    }

    /// Top edge of the enemy sprite (it never leaves the ground)
    pub fn enemy_ground_y(&self) -> f32 {
        self.field.y - self.enemy.y
    }

    /// Rightmost x the player may occupy
    pub fn player_max_x(&self) -> f32 {
        self.field.x - self.player.x
    }
}

/// The player character. `pos` is the sprite's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    pub jumping: bool,
}

/// The scrolling enemy. `pos` is the sprite's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    pub pos: Vec2,
}

impl Enemy {
    pub fn center(&self, size: Vec2) -> Vec2 {
        self.pos + size / 2.0
    }
}

/// Single-shot weapon state
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Projectile {
    pub active: bool,
    pub pos: Vec2,
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub phase: GamePhase,
    pub lives: u32,
    pub score: u32,
    pub level: u32,
    pub player: Player,
    pub enemy: Enemy,
    pub projectile: Projectile,
    /// Ticks since the last jump start, hit, or round start
    pub round_ticks: u32,
    /// Total ticks simulated
    pub time_ticks: u64,
    pub dims: Dimensions,
    /// Events raised since the last drain
    #[serde(skip)]
    events: Vec<GameEvent>,
}

impl GameState {
    /// Create the title-screen state
    pub fn new(dims: Dimensions) -> Self {
        let mut state = Self {
            phase: GamePhase::Intro,
            lives: INITIAL_LIVES,
            score: 0,
            level: 1,
            player: Player {
                pos: Vec2::ZERO,
                jumping: false,
            },
            enemy: Enemy { pos: Vec2::ZERO },
            projectile: Projectile::default(),
            round_ticks: 0,
            time_ticks: 0,
            dims,
            events: Vec::new(),
        };
        state.reset();
        state
    }

    /// Whether a game has ever been started this session
    pub fn started(&self) -> bool {
        self.phase != GamePhase::Intro
    }

    /// Intro and GameOver both wait for the restart key
    pub fn awaiting_restart(&self) -> bool {
        matches!(self.phase, GamePhase::Intro | GamePhase::GameOver)
    }

    /// Full restart: session values back to initial, new round begins
    pub fn restart(&mut self) {
        self.lives = INITIAL_LIVES;
        self.score = 0;
        self.level = 1;
        self.phase = GamePhase::Playing;
        self.reset();
    }

    /// Rebuild round-scoped fields
    pub fn reset(&mut self) {
        self.enemy.pos = Vec2::new(0.0, self.dims.enemy_ground_y());
        self.projectile = Projectile::default();
        self.player = Player {
            pos: Vec2::new(self.dims.player_max_x(), self.dims.player_ground_y()),
            jumping: false,
        };
        self.round_ticks = 0;
        if self.started() {
            self.push_event(GameEvent::RoundStarted);
        }
    }

    pub(crate) fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Take all events raised since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn pending_events(&self) -> &[GameEvent] {
        &self.events
    }
}

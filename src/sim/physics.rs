//! Pure motion formulas
//!
//! Everything here is a function of its arguments only, so the tick can
//! recompute positions from counters instead of integrating velocities.

use crate::consts::*;

/// Convert a tick count to seconds of simulated time
#[inline]
pub fn ticks_to_secs(ticks: u32) -> f32 {
    ticks as f32 / TICKS_PER_SECOND as f32
}

/// Height above the ground `t` seconds after a jump started.
///
/// Negative once the arc has come back down.
#[inline]
pub fn jump_height(t: f32) -> f32 {
    JUMP_VELOCITY * t - 0.5 * GRAVITY * t * t
}

/// Player top edge `ticks` into a jump, or `None` once the arc would sink
/// below `ground_y` (the jump is over).
pub fn jump_y(ground_y: f32, ticks: u32) -> Option<f32> {
    let y = ground_y - jump_height(ticks_to_secs(ticks));
    if y > ground_y { None } else { Some(y) }
}

/// Horizontal enemy displacement per tick at `level`
#[inline]
pub fn enemy_step(level: u32) -> f32 {
    (ENEMY_BASE_SPEED * (level.max(1) as f32).sqrt()).floor()
}

/// Number of ticks a jump lasts before landing
pub fn jump_duration_ticks() -> u32 {
    // Landing happens when 170t - 250t² < 0, i.e. t > 0.68 s
    (0..).find(|&t| jump_y(0.0, t).is_none()).unwrap_or(0)
}

//! Hit tests between the player, the enemy and the projectile
//!
//! Both tests are coarse: the projectile is treated as a point
//! tested against an enemy-sized box around the enemy center, and player
//! contact uses fixed thresholds between sprite corners.

use glam::Vec2;

use crate::consts::{CONTACT_DX, CONTACT_DY};

/// Point-in-tolerance-box test for the projectile.
///
/// Hit iff the projectile is strictly closer than half the enemy size to the
/// enemy center on both axes. Projectile radius plays no part.
pub fn projectile_hits_enemy(projectile: Vec2, enemy_center: Vec2, enemy_size: Vec2) -> bool {
    let delta = (projectile - enemy_center).abs();
    let half = enemy_size / 2.0;
    delta.x < half.x && delta.y < half.y
}

/// Player/enemy contact on top-left corners with fixed thresholds.
pub fn player_touches_enemy(player: Vec2, enemy: Vec2) -> bool {
    let delta = (player - enemy).abs();
    delta.x < CONTACT_DX && delta.y < CONTACT_DY
}

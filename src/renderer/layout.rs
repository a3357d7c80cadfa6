//! Screen placement helpers

use glam::Vec2;

/// Top-left position that centers an item of `size` in `field`
pub fn centered(field: Vec2, size: Vec2) -> Vec2 {
    ((field - size) / 2.0).floor()
}

/// Top-left position that right-aligns an item `margin` from the right edge
pub fn top_right(field: Vec2, size: Vec2, margin: f32) -> Vec2 {
    Vec2::new(field.x - size.x - margin, margin)
}

//! Collision tests for the ball
//!
//! All tests are evaluated against where the ball will be after one more
//! step (`pos + vel`), which is what decides bounce timing.

use glam::DVec2;

use crate::layout::Bounds;

/// Circle vs axis-aligned rectangle overlap (closest-point clamp)
///
/// Touching counts as a hit.
pub fn circle_rect_collision(center: DVec2, radius: f64, rect_min: DVec2, rect_size: DVec2) -> bool {
    let rect_max = rect_min + rect_size;
    let closest = DVec2::new(
        rect_min.x.max(center.x.min(rect_max.x)),
        rect_min.y.max(center.y.min(rect_max.y)),
    );
    let d = center - closest;
    d.x * d.x + d.y * d.y <= radius * radius
}

/// Next x would leave the side walls
#[inline]
pub fn hits_side_wall(pos: DVec2, vel: DVec2, bounds: &Bounds) -> bool {
    let next_x = pos.x + vel.x;
    next_x > bounds.max.x || next_x < bounds.min.x
}

/// Next y would go above the top wall. There is no bottom wall.
#[inline]
pub fn hits_top_wall(pos: DVec2, vel: DVec2, bounds: &Bounds) -> bool {
    pos.y + vel.y < bounds.min.y
}

/// Ball is falling, currently sits on or above the paddle top, and the next
/// step would put its bottom edge at or below it
#[inline]
pub fn hits_paddle(pos: DVec2, vel: DVec2, radius: f64, paddle_y: f64) -> bool {
    let next_bottom = pos.y + vel.y + radius;
    vel.y > 0.0 && next_bottom >= paddle_y && pos.y + radius <= paddle_y
}

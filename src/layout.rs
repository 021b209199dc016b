//! Playfield geometry and physics tuning
//!
//! Every size here is in pixels, every speed in pixels per simulated frame.
//! A `Layout` is immutable for the duration of a run and is passed by
//! reference into the simulator and the markup builder.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Number of day rows in a contribution calendar
pub const DAYS_PER_WEEK: usize = 7;

/// Geometry and physics constants for one render
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Layout {
    /// Padding around the canvas (acts as the wall inset)
    pub padding: f64,

    /// Paddle width
    pub paddle_width: f64,
    /// Paddle height
    pub paddle_height: f64,
    /// Paddle corner radius
    pub paddle_radius: f64,
    /// Gap between the last brick row and the paddle
    pub paddle_brick_gap: f64,

    /// Ball radius
    pub ball_radius: f64,
    /// Ball speed (constant magnitude)
    pub ball_speed: f64,
    /// Launch angle in radians (negative is upward)
    pub launch_angle: f64,
    /// Distance from the canvas bottom to the ball's launch position
    pub ball_start_offset: f64,

    /// Brick edge length (bricks are square)
    pub brick_size: f64,
    /// Gap between neighbouring bricks
    pub brick_gap: f64,
    /// Brick corner radius
    pub brick_radius: f64,

    /// Keep one snapshot every `animate_step` simulated frames (0 behaves as 1)
    pub animate_step: u32,
    /// Playback duration of one simulated frame, in seconds
    pub seconds_per_frame: f64,
    /// Hard cap on simulated frames
    pub max_frames: u32,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            padding: 15.0,

            paddle_width: 75.0,
            paddle_height: 10.0,
            paddle_radius: 5.0,
            paddle_brick_gap: 100.0,

            ball_radius: 8.0,
            ball_speed: 10.0,
            launch_angle: -std::f64::consts::FRAC_PI_4,
            ball_start_offset: 30.0,

            brick_size: 12.0,
            brick_gap: 3.0,
            brick_radius: 3.0,

            animate_step: 1,
            seconds_per_frame: 1.0 / 30.0,
            max_frames: 30_000,
        }
    }
}

impl Layout {
    /// Distance between the origins of two adjacent bricks
    #[inline]
    pub fn brick_pitch(&self) -> f64 {
        self.brick_size + self.brick_gap
    }

    /// Top-left corner of the brick for a calendar cell
    pub fn brick_origin(&self, column: usize, row: usize) -> (f64, f64) {
        (
            column as f64 * self.brick_pitch() + self.padding,
            row as f64 * self.brick_pitch() + self.padding,
        )
    }

    /// Derive the canvas for a calendar with `columns` weeks
    pub fn arena(&self, columns: usize) -> Arena {
        // Right edge flush with the last brick column
        let width = columns as f64 * self.brick_pitch() + self.padding * 2.0 - self.brick_gap;
        let bricks_height = DAYS_PER_WEEK as f64 * self.brick_pitch() - self.brick_gap;
        let paddle_y = self.padding + bricks_height + self.paddle_brick_gap;
        let height = paddle_y + self.paddle_height + self.padding;
        Arena {
            width,
            height,
            paddle_y,
        }
    }

    /// Wall-inset box the ball centre must stay within
    pub fn ball_bounds(&self, arena: &Arena) -> Bounds {
        let inset = self.padding + self.ball_radius;
        Bounds {
            min: DVec2::splat(inset),
            max: DVec2::new(arena.width - inset, arena.height - inset),
        }
    }

    /// Simulated frames per retained snapshot, never zero
    pub fn snapshot_step(&self) -> u32 {
        self.animate_step.max(1)
    }

    /// Total playback duration for `retained` snapshots
    pub fn duration_secs(&self, retained: usize) -> f64 {
        retained as f64 * self.seconds_per_frame * self.snapshot_step() as f64
    }
}

/// Canvas dimensions for one calendar
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    pub width: f64,
    pub height: f64,
    /// Top edge of the paddle
    pub paddle_y: f64,
}

/// Axis-aligned box
///
/// `min` can exceed `max` on canvases narrower than the wall insets.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: DVec2,
    pub max: DVec2,
}

impl Bounds {
    /// Pull `p` inside the box, lower bound winning when the box is inverted
    pub fn confine(&self, p: DVec2) -> DVec2 {
        DVec2::new(
            self.min.x.max(self.max.x.min(p.x)),
            self.min.y.max(self.max.y.min(p.y)),
        )
    }

    pub fn contains(&self, p: DVec2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }
}

//! Simulation state and core types
//!
//! Everything a run mutates lives in `SimState`; it is built fresh for each
//! run and dropped afterwards.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::calendar::Calendar;
use crate::layout::{Arena, Layout};
use crate::palette::class_index;

/// Brick visibility. Only ever moves from `Active` to `Cleared`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BrickStatus {
    Active,
    Cleared,
}

/// One calendar day as a breakable brick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brick {
    /// Top-left corner
    pub pos: DVec2,
    pub status: BrickStatus,
    /// Palette class index (rendered as `c{n}`)
    pub color_class: usize,
    /// Day had at least one contribution
    pub has_activity: bool,
}

impl Brick {
    pub fn new(pos: DVec2, color_class: usize, has_activity: bool) -> Self {
        Self {
            pos,
            status: BrickStatus::Active,
            color_class,
            has_activity,
        }
    }

    /// One brick per populated day, column by column
    pub fn from_calendar(calendar: &Calendar, layout: &Layout) -> Vec<Brick> {
        calendar
            .populated()
            .map(|(column, row, day)| {
                let (x, y) = layout.brick_origin(column, row);
                Brick::new(DVec2::new(x, y), class_index(&day.color), day.has_activity())
            })
            .collect()
    }

    /// CSS class used in the document
    pub fn class_name(&self) -> String {
        format!("c{}", self.color_class)
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.status == BrickStatus::Active
    }

    /// Whether the ball can break this brick right now.
    /// With ghost bricks on, empty days are decoration the ball passes through.
    #[inline]
    pub fn is_target(&self, ghost_bricks: bool) -> bool {
        self.is_active() && (!ghost_bricks || self.has_activity)
    }
}

/// The ball
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: DVec2,
    pub vel: DVec2,
    pub radius: f64,
}

impl Ball {
    /// Ball at the launch point, heading along the launch angle
    pub fn launch(layout: &Layout, arena: &Arena) -> Self {
        let angle = layout.launch_angle;
        Self {
            pos: DVec2::new(arena.width / 2.0, arena.height - layout.ball_start_offset),
            vel: DVec2::new(
                layout.ball_speed * angle.cos(),
                layout.ball_speed * angle.sin(),
            ),
            radius: layout.ball_radius,
        }
    }
}

/// The paddle. Its y is fixed by the arena, so only x is tracked.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    pub x: f64,
    pub width: f64,
}

impl Paddle {
    /// Paddle centred horizontally
    pub fn centered(layout: &Layout, arena: &Arena) -> Self {
        Self {
            x: (arena.width - layout.paddle_width) / 2.0,
            width: layout.paddle_width,
        }
    }

    /// Centre the paddle under `ball_x`, kept inside the side padding
    pub fn track(&mut self, ball_x: f64, padding: f64, arena_width: f64) {
        let max_x = arena_width - padding - self.width;
        self.x = padding.max(max_x.min(ball_x - self.width / 2.0));
    }
}

/// One recorded frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameState {
    pub ball_x: f64,
    pub ball_y: f64,
    pub paddle_x: f64,
    /// Status of every brick, in brick order
    pub bricks: Vec<BrickStatus>,
}

/// Complete simulation state for one run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimState {
    pub arena: Arena,
    pub ghost_bricks: bool,
    pub ball: Ball,
    pub paddle: Paddle,
    /// Fixed order for the whole run
    pub bricks: Vec<Brick>,
    /// Frames simulated so far
    pub frame: u32,
}

impl SimState {
    /// Fresh state: ball at launch, paddle centred, every brick active
    pub fn new(bricks: &[Brick], arena: Arena, ghost_bricks: bool, layout: &Layout) -> Self {
        Self {
            arena,
            ghost_bricks,
            ball: Ball::launch(layout, &arena),
            paddle: Paddle::centered(layout, &arena),
            bricks: bricks
                .iter()
                .map(|b| Brick {
                    status: BrickStatus::Active,
                    ..b.clone()
                })
                .collect(),
            frame: 0,
        }
    }

    /// Any brick still left to break
    pub fn has_targets(&self) -> bool {
        self.bricks.iter().any(|b| b.is_target(self.ghost_bricks))
    }

    /// Number of bricks cleared so far
    pub fn cleared_count(&self) -> usize {
        self.bricks.iter().filter(|b| !b.is_active()).count()
    }

    pub fn snapshot(&self) -> FrameState {
        FrameState {
            ball_x: self.ball.pos.x,
            ball_y: self.ball.pos.y,
            paddle_x: self.paddle.x,
            bricks: self.bricks.iter().map(|b| b.status).collect(),
        }
    }
}

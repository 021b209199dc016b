//! Frame history to animation timeline
//!
//! Ball and paddle move every frame, so they get one keyframe per recorded
//! frame. Bricks change at most once, so each gets a single threshold
//! transition (or none at all).

use serde::{Deserialize, Serialize};

use crate::layout::Layout;
use crate::sim::{Brick, BrickStatus, FrameState};

/// Uniform-timestep values for one animated scalar
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Keyframes {
    pub values: Vec<f64>,
}

impl Keyframes {
    pub fn from_frames(frames: &[FrameState], value: impl Fn(&FrameState) -> f64) -> Self {
        Self {
            values: frames.iter().map(value).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// `values` attribute: whole pixels joined by `;`
    pub fn to_attr(&self) -> String {
        self.values
            .iter()
            .map(|v| (v.round() as i64).to_string())
            .collect::<Vec<_>>()
            .join(";")
    }
}

/// What a brick looks like after it is hit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BrickEffect {
    /// Opacity drops to zero
    Hide,
    /// Fill switches to the palette's base colour (ghost mode)
    Empty,
}

/// A single step change at normalised time `at`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transition {
    /// In `[0, 1]`
    pub at: f64,
    pub effect: BrickEffect,
}

impl Transition {
    /// Control points `0, t, t, 1`: hold, switch instantly at `t`, hold
    pub fn key_times(&self) -> [f64; 4] {
        [0.0, self.at, self.at, 1.0]
    }

    /// `keyTimes` attribute, `t` rounded to 4 places with ties away from zero
    pub fn key_times_attr(&self) -> String {
        let t = (self.at * 1e4).round() / 1e4;
        format!("0;{t:.4};{t:.4};1")
    }
}

/// Everything the markup needs to animate one run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Timeline {
    /// Seconds; shared by every animation so loops stay in sync
    pub duration: f64,
    pub ball_x: Keyframes,
    pub ball_y: Keyframes,
    pub paddle_x: Keyframes,
    /// One entry per brick, `None` for bricks that never change
    pub bricks: Vec<Option<Transition>>,
}

impl Timeline {
    pub fn frame_count(&self) -> usize {
        self.ball_x.values.len()
    }

    /// Nothing moves (no frames were recorded)
    pub fn is_static(&self) -> bool {
        self.ball_x.is_empty()
    }
}

/// Index of the first frame in which brick `index` is no longer active
pub fn first_cleared(frames: &[FrameState], index: usize) -> Option<usize> {
    frames
        .iter()
        .position(|f| f.bricks.get(index).is_some_and(|s| *s != BrickStatus::Active))
}

/// Normalised time of frame `frame` within `frame_count` frames.
/// A lone frame maps to 0.
pub fn transition_time(frame: usize, frame_count: usize) -> f64 {
    if frame_count <= 1 {
        0.0
    } else {
        frame as f64 / (frame_count - 1) as f64
    }
}

/// Build the timeline for a recorded run
pub fn encode(frames: &[FrameState], bricks: &[Brick], ghost_bricks: bool, layout: &Layout) -> Timeline {
    let effect = if ghost_bricks {
        BrickEffect::Empty
    } else {
        BrickEffect::Hide
    };

    let transitions = (0..bricks.len())
        .map(|i| {
            first_cleared(frames, i).map(|f| Transition {
                at: transition_time(f, frames.len()),
                effect,
            })
        })
        .collect();

    Timeline {
        duration: layout.duration_secs(frames.len()),
        ball_x: Keyframes::from_frames(frames, |f| f.ball_x),
        ball_y: Keyframes::from_frames(frames, |f| f.ball_y),
        paddle_x: Keyframes::from_frames(frames, |f| f.paddle_x),
        bricks: transitions,
    }
}

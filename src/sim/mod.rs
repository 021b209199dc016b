//! Deterministic simulation module
//!
//! The Breakout game itself. This module must be pure and deterministic:
//! - Fixed timestep only (one tick = one frame)
//! - No randomness, no wall clock
//! - Stable iteration order (brick list order)
//! - No markup or I/O dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::circle_rect_collision;
pub use state::{Ball, Brick, BrickStatus, FrameState, Paddle, SimState};
pub use tick::{simulate, tick};

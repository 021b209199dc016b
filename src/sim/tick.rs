//! Fixed timestep simulation tick
//!
//! One call to `tick` is one frame. The order of the steps below decides the
//! exact bounce frames, so it must not be rearranged.

use glam::DVec2;

use super::collision::{circle_rect_collision, hits_paddle, hits_side_wall, hits_top_wall};
use super::state::{Brick, BrickStatus, FrameState, SimState};
use crate::layout::{Arena, Layout};

/// Advance the state by one frame. Returns the index of the brick cleared
/// this frame, if any.
pub fn tick(state: &mut SimState, layout: &Layout) -> Option<usize> {
    let bounds = layout.ball_bounds(&state.arena);
    let ball = &mut state.ball;

    // Paddle follows where the ball is now
    state
        .paddle
        .track(ball.pos.x, layout.padding, state.arena.width);

    ball.pos += ball.vel;

    // Walls are tested with the position one step ahead
    if hits_side_wall(ball.pos, ball.vel, &bounds) {
        ball.vel.x = -ball.vel.x;
    }
    if hits_top_wall(ball.pos, ball.vel, &bounds) {
        ball.vel.y = -ball.vel.y;
    }

    if hits_paddle(ball.pos, ball.vel, ball.radius, state.arena.paddle_y) {
        ball.vel.y = -ball.vel.y.abs();
        // Sit on the paddle instead of sinking into it
        ball.pos.y = state.arena.paddle_y - ball.radius;
    }

    // First hit in brick order wins; at most one brick per frame
    let brick_size = DVec2::splat(layout.brick_size);
    let ghost_bricks = state.ghost_bricks;
    let mut cleared = None;
    for (i, brick) in state.bricks.iter_mut().enumerate() {
        if brick.is_target(ghost_bricks)
            && circle_rect_collision(ball.pos, ball.radius, brick.pos, brick_size)
        {
            ball.vel.y = -ball.vel.y;
            brick.status = BrickStatus::Cleared;
            cleared = Some(i);
            break;
        }
    }

    ball.pos = bounds.confine(ball.pos);
    state.frame += 1;

    cleared
}

/// Run a full game and record the frame history.
///
/// Stops once no breakable brick is left or after `layout.max_frames`
/// frames, whichever comes first. Hitting the cap is not an error; the
/// history simply ends with some bricks still standing.
pub fn simulate(bricks: &[Brick], arena: Arena, ghost_bricks: bool, layout: &Layout) -> Vec<FrameState> {
    let mut state = SimState::new(bricks, arena, ghost_bricks, layout);
    let step = layout.snapshot_step();
    let mut history = Vec::new();

    while state.has_targets() && state.frame < layout.max_frames {
        let recorded = state.frame % step == 0;
        tick(&mut state, layout);
        if recorded {
            history.push(state.snapshot());
        }
    }

    if state.has_targets() {
        log::warn!(
            "Frame cap of {} reached with {} bricks still breakable",
            layout.max_frames,
            state.bricks.iter().filter(|b| b.is_target(ghost_bricks)).count()
        );
    }
    log::debug!(
        "Simulated {} frames, kept {}, cleared {}/{} bricks",
        state.frame,
        history.len(),
        state.cleared_count(),
        state.bricks.len()
    );

    history
}

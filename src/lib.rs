//! Contribution Breakout - a contribution calendar played as Breakout
//!
//! Core modules:
//! - `calendar`: Contribution calendar input (weeks x days, missing days explicit)
//! - `sim`: Deterministic simulation (ball, paddle, bricks, frame history)
//! - `timeline`: Frame history to keyframes and brick transitions
//! - `svg`: Animated SVG assembly
//! - `layout` / `palette` / `settings`: Immutable configuration

pub mod calendar;
pub mod error;
pub mod layout;
pub mod palette;
pub mod settings;
pub mod sim;
pub mod svg;
pub mod timeline;

pub use calendar::{Calendar, CalendarSource, ContributionDay, JsonCalendarSource};
pub use error::{Error, Result};
pub use layout::{Arena, Layout};
pub use palette::{Palette, PaletteChoice};
pub use settings::Options;
pub use timeline::Timeline;

use sim::{Brick, simulate};

/// Everything produced for one calendar
#[derive(Debug, Clone)]
pub struct Render {
    pub arena: Arena,
    pub bricks: Vec<Brick>,
    pub timeline: Timeline,
    /// Unminified document
    pub svg: String,
}

/// Simulate a game over `calendar` and build its document
pub fn render(calendar: &Calendar, options: &Options) -> Render {
    let layout = &options.layout;
    let arena = layout.arena(calendar.columns());
    let bricks = Brick::from_calendar(calendar, layout);

    let frames = simulate(&bricks, arena, options.ghost_bricks, layout);
    let timeline = timeline::encode(&frames, &bricks, options.ghost_bricks, layout);
    let svg = svg::render(&bricks, &timeline, &arena, options);

    log::debug!(
        "Rendered {} bricks over {} frames ({:.1}s, {})",
        bricks.len(),
        timeline.frame_count(),
        timeline.duration,
        options.palette.as_str()
    );

    Render {
        arena,
        bricks,
        timeline,
        svg,
    }
}

/// Minified animated SVG for `calendar`
pub fn generate_svg(calendar: &Calendar, options: &Options) -> String {
    svg::minify(&render(calendar, options).svg)
}

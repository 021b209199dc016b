//! Contribution Breakout command-line entry point
//!
//! Loads a contribution calendar from JSON and writes one minified SVG per
//! requested variant into the output directory. Flags win over inputs, which
//! are read GitHub Actions style (`INPUT_<NAME>`, then `<NAME>`).

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use contrib_breakout::settings::{
    ColorOverrides, bricks_colors_input, ghost_bricks_input, input, variants,
};
use contrib_breakout::{CalendarSource, JsonCalendarSource, Result, generate_svg};

#[derive(Parser)]
#[command(name = "contrib-breakout")]
#[command(about = "Render a contribution calendar as an animated Breakout SVG")]
struct Cli {
    /// Calendar JSON (weeks of days, or a GraphQL contributionCalendar response); `-` for stdin [input: CALENDAR_PATH]
    #[arg(long)]
    calendar: Option<PathBuf>,

    /// Build the light variant
    #[arg(long)]
    light: bool,

    /// Build the dark variant
    #[arg(long)]
    dark: bool,

    /// Make every day breakable [input: ENABLE_GHOST_BRICKS, on unless exactly `true`]
    #[arg(long)]
    no_ghost_bricks: bool,

    /// Paddle colour, builds the custom variant [input: PADDLE_COLOR]
    #[arg(long)]
    paddle_color: Option<String>,

    /// Ball colour, builds the custom variant [input: BALL_COLOR]
    #[arg(long)]
    ball_color: Option<String>,

    /// Five comma-separated brick colours, builds the custom variant [input: BRICKS_COLORS]
    #[arg(long)]
    bricks_colors: Option<String>,

    /// Output directory [input: OUTPUT_PATH, default `output`]
    #[arg(long)]
    output_path: Option<PathBuf>,
}

fn run(cli: Cli) -> Result<()> {
    let calendar_path = cli
        .calendar
        .or_else(|| input("CALENDAR_PATH").map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("-"));
    let calendar = JsonCalendarSource::new(&calendar_path).load()?;

    let output_path = cli
        .output_path
        .or_else(|| input("OUTPUT_PATH").map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("output"));
    let out_dir = if output_path.is_absolute() {
        output_path
    } else {
        std::env::current_dir()?.join(output_path)
    };
    fs::create_dir_all(&out_dir)?;

    let overrides = ColorOverrides {
        bricks: bricks_colors_input(cli.bricks_colors.or_else(|| input("BRICKS_COLORS")).as_deref()),
        paddle: cli.paddle_color.or_else(|| input("PADDLE_COLOR")),
        ball: cli.ball_color.or_else(|| input("BALL_COLOR")),
    };
    let in_actions = std::env::var("GITHUB_ACTIONS").is_ok_and(|v| v == "true");
    let ghost_bricks =
        !cli.no_ghost_bricks && ghost_bricks_input(input("ENABLE_GHOST_BRICKS").as_deref());

    for variant in variants(cli.light, cli.dark, &overrides, ghost_bricks, in_actions) {
        let svg = generate_svg(&calendar, &variant.options);
        let path = out_dir.join(format!("{}.svg", variant.name));
        fs::write(&path, svg)?;
        log::info!("SVG generated: {}", path.display());
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("Failed to generate SVG(s): {}", e);
            ExitCode::FAILURE
        }
    }
}

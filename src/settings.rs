//! Render options
//!
//! Everything the core needs beyond the calendar itself. Built by the
//! command-line adapter, or directly by library users.

use serde::{Deserialize, Serialize};

use crate::layout::Layout;
use crate::palette::{DEFAULT_ACCENT, Palette, PaletteChoice};

/// Options for one rendered document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Brick palette
    pub palette: PaletteChoice,
    /// Only days with contributions are breakable; the rest are decoration
    pub ghost_bricks: bool,
    /// Paddle fill
    pub paddle_color: String,
    /// Ball fill
    pub ball_color: String,
    /// Geometry and physics
    pub layout: Layout,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            palette: PaletteChoice::GithubLight,
            ghost_bricks: true,
            paddle_color: DEFAULT_ACCENT.to_string(),
            ball_color: DEFAULT_ACCENT.to_string(),
            layout: Layout::default(),
        }
    }
}

impl Options {
    /// Default options with the given palette
    pub fn from_palette(palette: PaletteChoice) -> Self {
        Self {
            palette,
            ..Self::default()
        }
    }

    /// Resolved palette colours
    pub fn palette(&self) -> Palette {
        self.palette.palette()
    }
}

/// Colour overrides that make up the `custom` variant
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColorOverrides {
    pub bricks: Option<Palette>,
    pub paddle: Option<String>,
    pub ball: Option<String>,
}

impl ColorOverrides {
    pub fn is_empty(&self) -> bool {
        self.bricks.is_none() && self.paddle.is_none() && self.ball.is_none()
    }
}

/// A named document to produce (`custom`, `light` or `dark`)
#[derive(Debug, Clone, PartialEq)]
pub struct Variant {
    pub name: &'static str,
    pub options: Options,
}

/// Pick which documents to build.
///
/// Colour overrides produce a `custom` variant (light palette unless bricks
/// are overridden). With nothing requested at all, `light` is built, plus
/// `dark` when running inside GitHub Actions.
pub fn variants(
    mut light: bool,
    mut dark: bool,
    overrides: &ColorOverrides,
    ghost_bricks: bool,
    in_github_actions: bool,
) -> Vec<Variant> {
    if !light && !dark && overrides.is_empty() {
        light = true;
        dark = in_github_actions;
    }

    let base = |palette| Options {
        ghost_bricks,
        ..Options::from_palette(palette)
    };

    let mut out = Vec::new();
    if !overrides.is_empty() {
        let palette = overrides
            .bricks
            .clone()
            .map_or(PaletteChoice::GithubLight, PaletteChoice::Custom);
        let mut options = base(palette);
        if let Some(paddle) = &overrides.paddle {
            options.paddle_color = paddle.clone();
        }
        if let Some(ball) = &overrides.ball {
            options.ball_color = ball.clone();
        }
        out.push(Variant {
            name: "custom",
            options,
        });
    }
    if light {
        out.push(Variant {
            name: "light",
            options: base(PaletteChoice::GithubLight),
        });
    }
    if dark {
        out.push(Variant {
            name: "dark",
            options: base(PaletteChoice::GithubDark),
        });
    }
    out
}

/// Look up a named input, GitHub Actions style.
///
/// `INPUT_<NAME>` (dashes become underscores, upper-cased) wins over the bare
/// `<NAME>`. Empty values count as unset.
pub fn input_with(name: &str, lookup: impl Fn(&str) -> Option<String>) -> Option<String> {
    let action_key = format!("INPUT_{}", name.replace('-', "_").to_uppercase());
    lookup(&action_key)
        .filter(|v| !v.is_empty())
        .or_else(|| lookup(name).filter(|v| !v.is_empty()))
}

/// `input_with` over the process environment
pub fn input(name: &str) -> Option<String> {
    input_with(name, |key| std::env::var(key).ok())
}

/// Ghost bricks are on when the input is unset or exactly `true`
pub fn ghost_bricks_input(value: Option<&str>) -> bool {
    value.is_none_or(|v| v == "true")
}

/// Five comma-separated colours; anything else is ignored with a warning
pub fn bricks_colors_input(value: Option<&str>) -> Option<Palette> {
    let value = value?;
    match value.parse() {
        Ok(palette) => Some(palette),
        Err(e) => {
            log::warn!("Ignoring bricks colours {:?}: {}", value, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(variants: &[Variant]) -> Vec<&'static str> {
        variants.iter().map(|v| v.name).collect()
    }

    #[test]
    fn test_defaults() {
        let options = Options::default();
        assert!(options.ghost_bricks);
        assert_eq!(options.paddle_color, "#1F6FEB");
        assert_eq!(options.palette().base(), "#ebedf0");
    }

    #[test]
    fn test_from_palette_keeps_other_defaults() {
        let options = Options::from_palette(PaletteChoice::GithubDark);
        assert_eq!(options.palette().base(), "#151B23");
        assert_eq!(options.ball_color, "#1F6FEB");
    }

    #[test]
    fn test_default_variant_is_light() {
        let none = ColorOverrides::default();
        assert_eq!(names(&variants(false, false, &none, true, false)), vec!["light"]);
        assert_eq!(names(&variants(false, false, &none, true, true)), vec!["light", "dark"]);
        assert_eq!(names(&variants(false, true, &none, true, true)), vec!["dark"]);
    }

    #[test]
    fn test_custom_variant_from_overrides() {
        let overrides = ColorOverrides {
            paddle: Some("#ff0000".to_string()),
            ..Default::default()
        };
        let out = variants(false, false, &overrides, false, true);

        assert_eq!(names(&out), vec!["custom"]);
        let custom = &out[0].options;
        assert_eq!(custom.paddle_color, "#ff0000");
        assert_eq!(custom.ball_color, DEFAULT_ACCENT);
        assert_eq!(custom.palette, PaletteChoice::GithubLight);
        assert!(!custom.ghost_bricks);
    }

    #[test]
    fn test_custom_bricks_palette() {
        let palette: Palette = "#0,#1,#2,#3,#4".parse().unwrap();
        let overrides = ColorOverrides {
            bricks: Some(palette.clone()),
            ..Default::default()
        };
        let out = variants(true, false, &overrides, true, false);

        assert_eq!(names(&out), vec!["custom", "light"]);
        assert_eq!(out[0].options.palette, PaletteChoice::Custom(palette));
    }

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let pairs: Vec<(String, String)> =
            pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key: &str| pairs.iter().find(|(k, _)| k == key).map(|(_, v)| v.clone())
    }

    #[test]
    fn test_action_input_wins_over_bare_name() {
        let lookup = env(&[("INPUT_PADDLE_COLOR", "#111"), ("PADDLE_COLOR", "#222")]);
        assert_eq!(input_with("PADDLE_COLOR", &lookup), Some("#111".to_string()));

        let lookup = env(&[("PADDLE_COLOR", "#222")]);
        assert_eq!(input_with("PADDLE_COLOR", &lookup), Some("#222".to_string()));

        assert_eq!(input_with("PADDLE_COLOR", env(&[])), None);
    }

    #[test]
    fn test_action_input_key_normalisation() {
        let lookup = env(&[("INPUT_BALL_COLOR", "red")]);
        assert_eq!(input_with("ball-color", &lookup), Some("red".to_string()));
    }

    #[test]
    fn test_empty_input_falls_through() {
        let lookup = env(&[("INPUT_OUTPUT_PATH", ""), ("OUTPUT_PATH", "dist")]);
        assert_eq!(input_with("OUTPUT_PATH", &lookup), Some("dist".to_string()));

        let lookup = env(&[("INPUT_OUTPUT_PATH", ""), ("OUTPUT_PATH", "")]);
        assert_eq!(input_with("OUTPUT_PATH", &lookup), None);
    }

    #[test]
    fn test_ghost_bricks_only_literal_true() {
        assert!(ghost_bricks_input(None));
        assert!(ghost_bricks_input(Some("true")));
        assert!(!ghost_bricks_input(Some("false")));
        assert!(!ghost_bricks_input(Some("yes")));
        assert!(!ghost_bricks_input(Some("TRUE")));
    }

    #[test]
    fn test_invalid_bricks_colors_are_ignored() {
        assert_eq!(bricks_colors_input(None), None);
        assert_eq!(bricks_colors_input(Some("#000,#111")), None);
        let palette = bricks_colors_input(Some("#0,#1,#2,#3,#4")).unwrap();
        assert_eq!(palette.color(4), "#4");
    }

    #[test]
    fn test_json_round_trip_with_missing_fields() {
        let options: Options = serde_json::from_str(r#"{"ghost_bricks": false}"#).unwrap();
        assert!(!options.ghost_bricks);
        assert_eq!(options.palette, PaletteChoice::GithubLight);
    }
}

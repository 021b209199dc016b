//! Brick colour palettes
//!
//! The calendar provider always reports the GitHub light-theme greens, so a
//! day's colour class is its index in that palette. The selected palette then
//! decides the actual fill for each class, which is how dark mode and custom
//! palettes remap colours one-to-one.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Number of colour levels in a contribution palette
pub const PALETTE_SIZE: usize = 5;

/// GitHub light-theme contribution greens (what the provider reports)
pub const GITHUB_LIGHT: [&str; PALETTE_SIZE] = ["#ebedf0", "#9be9a8", "#40c463", "#30a14e", "#216e39"];

/// GitHub dark-theme contribution greens
pub const GITHUB_DARK: [&str; PALETTE_SIZE] = ["#151B23", "#033A16", "#196C2E", "#2EA043", "#56D364"];

/// Default paddle and ball colour
pub const DEFAULT_ACCENT: &str = "#1F6FEB";

/// Index of `color` in the light palette, falling back to 0 for unknown colours
pub fn class_index(color: &str) -> usize {
    GITHUB_LIGHT
        .iter()
        .position(|c| c.eq_ignore_ascii_case(color))
        .unwrap_or(0)
}

/// Five fill colours, indexed by colour class
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    colors: [String; PALETTE_SIZE],
}

impl Palette {
    pub fn new(colors: [String; PALETTE_SIZE]) -> Self {
        Self { colors }
    }

    pub fn github_light() -> Self {
        Self::new(GITHUB_LIGHT.map(String::from))
    }

    pub fn github_dark() -> Self {
        Self::new(GITHUB_DARK.map(String::from))
    }

    /// Fill for a colour class (out-of-range classes use the base colour)
    pub fn color(&self, class: usize) -> &str {
        self.colors.get(class).unwrap_or(&self.colors[0])
    }

    /// Background/empty colour
    pub fn base(&self) -> &str {
        &self.colors[0]
    }

    pub fn colors(&self) -> &[String] {
        &self.colors
    }
}

impl FromStr for Palette {
    type Err = Error;

    /// Parse a comma-separated list of exactly five colours
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<String> = s.split(',').map(|p| p.trim().to_string()).collect();
        if parts.iter().any(|p| p.is_empty()) {
            return Err(Error::InvalidPalette(format!("empty colour in {:?}", s)));
        }
        let colors: [String; PALETTE_SIZE] = parts.try_into().map_err(|parts: Vec<String>| {
            Error::InvalidPalette(format!(
                "expected {} colours, got {}",
                PALETTE_SIZE,
                parts.len()
            ))
        })?;
        Ok(Self::new(colors))
    }
}

/// Which palette a render uses
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum PaletteChoice {
    #[default]
    GithubLight,
    GithubDark,
    Custom(Palette),
}

impl PaletteChoice {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaletteChoice::GithubLight => "github_light",
            PaletteChoice::GithubDark => "github_dark",
            PaletteChoice::Custom(_) => "custom",
        }
    }

    pub fn palette(&self) -> Palette {
        match self {
            PaletteChoice::GithubLight => Palette::github_light(),
            PaletteChoice::GithubDark => Palette::github_dark(),
            PaletteChoice::Custom(p) => p.clone(),
        }
    }
}

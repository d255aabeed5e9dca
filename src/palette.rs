//! Built-in documentation theme palettes.
//!
//! Names and hex codes are kept as parallel arrays; the last entry of each
//! theme doubles as that theme's background fill.

use std::fmt;

use color_eyre::eyre::{eyre, Result, WrapErr};
use serde::Serialize;

/// Number of swatches per theme row.
pub const SWATCH_COUNT: usize = 4;

pub const COLOR_NAMES: [&str; SWATCH_COUNT] = ["Primary", "Accent", "Text", "Background"];
pub const LIGHT_HEX: [&str; SWATCH_COUNT] = ["#2a9d8f", "#8C2F39", "#1a1a1a", "#f8f9f9"];
pub const DARK_HEX: [&str; SWATCH_COUNT] = ["#3fb5a3", "#f39c6b", "#E8E8E8", "#121A1C"];

// ── Label ink ───────────────────────────────────────────────────────
pub const LIGHT_INK: &str = "#23242A";
pub const DARK_INK: &str = "#FFFFFF";

/// A 24-bit color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb` (the `#` is optional, digits are case-insensitive).
    pub fn from_hex(hex: &str) -> Result<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(eyre!("invalid hex color {:?}: expected #rrggbb", hex));
        }

        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&digits[range], 16);
        Ok(Self {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// One color sample with its label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Swatch {
    pub name: String,
    /// Hex code exactly as written in the palette constants.
    pub hex: String,
    pub color: Rgb,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeKind {
    Light,
    Dark,
}

impl ThemeKind {
    pub fn title(self) -> &'static str {
        match self {
            ThemeKind::Light => "Light Theme",
            ThemeKind::Dark => "Dark Theme",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Theme {
    pub kind: ThemeKind,
    pub title: String,
    pub swatches: Vec<Swatch>,
    /// Color used for labels and the title drawn over this theme's background.
    pub label_ink: Rgb,
}

impl Theme {
    /// Build a theme by pairing each name with the hex code at the same index.
    pub fn from_parts(
        kind: ThemeKind,
        names: &[&str; SWATCH_COUNT],
        hexes: &[&str; SWATCH_COUNT],
        label_ink: &str,
    ) -> Result<Self> {
        let swatches = names
            .iter()
            .zip(hexes.iter())
            .map(|(name, hex)| {
                let color = Rgb::from_hex(hex)
                    .wrap_err_with(|| format!("{} swatch {:?}", kind.title(), name))?;
                Ok(Swatch {
                    name: name.to_string(),
                    hex: hex.to_string(),
                    color,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let label_ink = Rgb::from_hex(label_ink)
            .wrap_err_with(|| format!("{} label ink", kind.title()))?;

        Ok(Self {
            kind,
            title: kind.title().to_string(),
            swatches,
            label_ink,
        })
    }

    /// The last swatch is reused as the theme's background fill.
    pub fn background(&self) -> Option<&Swatch> {
        self.swatches.last()
    }
}

/// The light and dark themes shown side by side in the chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Palette {
    pub light: Theme,
    pub dark: Theme,
}

impl Palette {
    pub fn builtin() -> Result<Self> {
        Ok(Self {
            light: Theme::from_parts(ThemeKind::Light, &COLOR_NAMES, &LIGHT_HEX, LIGHT_INK)?,
            dark: Theme::from_parts(ThemeKind::Dark, &COLOR_NAMES, &DARK_HEX, DARK_INK)?,
        })
    }

    /// Themes in chart order: top row first.
    pub fn themes(&self) -> [&Theme; 2] {
        [&self.light, &self.dark]
    }
}

//! Plain-output rendering of the palette for `--dump`.

use color_eyre::eyre::{Result, WrapErr};

use crate::palette::{Palette, Theme};

/// Trait for formatting the palette as printable output.
/// Implement this trait to add new output formats.
pub trait PaletteFormatter {
    fn format(&self, palette: &Palette) -> Result<String>;
}

/// Aligned table per theme, for reading in a terminal.
#[derive(Debug, Clone)]
pub struct TextFormatter {
    /// Minimum width for the name column.
    pub min_name_width: usize,
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self { min_name_width: 12 }
    }
}

impl TextFormatter {
    fn format_theme(&self, theme: &Theme, output: &mut String) {
        let background = theme
            .background()
            .map(|s| s.hex.as_str())
            .unwrap_or("none");
        output.push_str(&format!(
            "{} (background {}, labels {})\n",
            theme.title, background, theme.label_ink
        ));

        let name_width = theme
            .swatches
            .iter()
            .map(|s| s.name.len())
            .max()
            .unwrap_or(0)
            .max(self.min_name_width);

        let separator = "─".repeat(name_width + 24);
        output.push_str(&separator);
        output.push('\n');
        output.push_str(&format!(
            "{:<width$} {:<9} {:>13}\n",
            "Name",
            "Hex",
            "RGB",
            width = name_width
        ));
        output.push_str(&separator);
        output.push('\n');

        for swatch in &theme.swatches {
            let rgb = format!("{}, {}, {}", swatch.color.r, swatch.color.g, swatch.color.b);
            output.push_str(&format!(
                "{:<width$} {:<9} {:>13}\n",
                swatch.name,
                swatch.hex,
                rgb,
                width = name_width
            ));
        }
    }
}

impl PaletteFormatter for TextFormatter {
    fn format(&self, palette: &Palette) -> Result<String> {
        let mut output = String::new();
        for (i, theme) in palette.themes().into_iter().enumerate() {
            if i > 0 {
                output.push('\n');
            }
            self.format_theme(theme, &mut output);
        }
        Ok(output)
    }
}

/// JSON document with both themes.
#[derive(Debug, Clone, Default)]
pub struct JsonFormatter {
    pub pretty: bool,
}

impl PaletteFormatter for JsonFormatter {
    fn format(&self, palette: &Palette) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(palette)
        } else {
            serde_json::to_string(palette)
        };
        json.wrap_err("Failed to serialize palette")
    }
}

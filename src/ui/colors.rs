//! Terminal colors for the chart and its chrome.

use ratatui::style::Color;

use swatch_chart::palette::Rgb;

// ── Status bar ──────────────────────────────────────────────────────
pub const STATUS_BG: Color = Color::Rgb(40, 42, 48);
pub const STATUS_FG: Color = Color::Rgb(200, 200, 200);
pub const STATUS_KEY: Color = Color::Rgb(120, 120, 180);

// ── Notices ─────────────────────────────────────────────────────────
pub const NOTICE_FG: Color = Color::Rgb(230, 160, 60);

pub fn rgb(color: Rgb) -> Color {
    Color::Rgb(color.r, color.g, color.b)
}

//! Chart geometry.
//!
//! Everything here is measured in chart units with the origin at the
//! bottom-left corner. `CellMapper` projects those units onto a terminal
//! cell rectangle, whose origin is the top-left.

use ratatui::layout::Rect;

use crate::palette::ThemeKind;

pub const CANVAS_WIDTH: f64 = 12.0;
pub const CANVAS_HEIGHT: f64 = 7.0;
pub const MIDLINE: f64 = 3.5;
pub const BOX_SIZE: f64 = 1.7;

pub const LIGHT_BOX_Y: f64 = 4.5;
pub const DARK_BOX_Y: f64 = 1.0;
pub const LIGHT_TITLE_Y: f64 = 6.6;
pub const DARK_TITLE_Y: f64 = 3.1;

/// Distance from the bottom of a box to the top of its name label.
pub const NAME_OFFSET: f64 = 0.18;
/// Distance from the bottom of a box to the top of its hex label.
pub const HEX_OFFSET: f64 = 0.55;

/// Smallest cell area the chart is drawn into.
pub const MIN_CELLS_WIDE: u16 = 48;
pub const MIN_CELLS_HIGH: u16 = 14;

/// A point in chart units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// An axis-aligned rectangle in chart units; `(x, y)` is its bottom-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl UnitRect {
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn top(&self) -> f64 {
        self.y + self.height
    }
}

/// Left edges of `n` equal boxes spread across `width` with equal gaps,
/// including the gaps before the first box and after the last.
pub fn swatch_x_positions(n: usize, box_size: f64, width: f64) -> Vec<f64> {
    if n == 0 {
        return Vec::new();
    }
    let gap = (width - n as f64 * box_size) / (n as f64 + 1.0);
    (0..n).map(|i| gap + i as f64 * (box_size + gap)).collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartLayout {
    pub width: f64,
    pub height: f64,
    pub midline: f64,
    pub box_size: f64,
    pub x_positions: Vec<f64>,
}

impl ChartLayout {
    /// Geometry of the standard 12 x 7 chart with `n` swatches per row.
    pub fn standard(n: usize) -> Self {
        let layout = Self {
            width: CANVAS_WIDTH,
            height: CANVAS_HEIGHT,
            midline: MIDLINE,
            box_size: BOX_SIZE,
            x_positions: swatch_x_positions(n, BOX_SIZE, CANVAS_WIDTH),
        };
        tracing::debug!(swatches = n, x = ?layout.x_positions, "chart layout");
        layout
    }

    /// Background fills: light on the upper half, dark on the lower half.
    pub fn backgrounds(&self) -> [(ThemeKind, UnitRect); 2] {
        [
            (ThemeKind::Light, self.background(ThemeKind::Light)),
            (ThemeKind::Dark, self.background(ThemeKind::Dark)),
        ]
    }

    pub fn background(&self, row: ThemeKind) -> UnitRect {
        let (y, height) = match row {
            ThemeKind::Light => (self.midline, self.height - self.midline),
            ThemeKind::Dark => (0.0, self.midline),
        };
        UnitRect {
            x: 0.0,
            y,
            width: self.width,
            height,
        }
    }

    fn box_y(row: ThemeKind) -> f64 {
        match row {
            ThemeKind::Light => LIGHT_BOX_Y,
            ThemeKind::Dark => DARK_BOX_Y,
        }
    }

    pub fn swatch_rect(&self, row: ThemeKind, index: usize) -> UnitRect {
        UnitRect {
            x: self.x_positions[index],
            y: Self::box_y(row),
            width: self.box_size,
            height: self.box_size,
        }
    }

    /// Top-center of the name label under swatch `index`.
    pub fn name_anchor(&self, row: ThemeKind, index: usize) -> Point {
        Point {
            x: self.x_positions[index] + self.box_size / 2.0,
            y: Self::box_y(row) - NAME_OFFSET,
        }
    }

    /// Top-center of the hex label under swatch `index`.
    pub fn hex_anchor(&self, row: ThemeKind, index: usize) -> Point {
        Point {
            x: self.x_positions[index] + self.box_size / 2.0,
            y: Self::box_y(row) - HEX_OFFSET,
        }
    }

    /// Center of the row title.
    pub fn title_anchor(&self, row: ThemeKind) -> Point {
        let y = match row {
            ThemeKind::Light => LIGHT_TITLE_Y,
            ThemeKind::Dark => DARK_TITLE_Y,
        };
        Point {
            x: self.width / 2.0,
            y,
        }
    }
}

/// Projects chart units onto a rectangle of terminal cells.
#[derive(Debug, Clone, Copy)]
pub struct CellMapper {
    area: Rect,
    width: f64,
    height: f64,
}

impl CellMapper {
    pub fn new(layout: &ChartLayout, area: Rect) -> Self {
        Self {
            area,
            width: layout.width,
            height: layout.height,
        }
    }

    pub fn area(&self) -> Rect {
        self.area
    }

    fn scale_x(&self, x: f64) -> f64 {
        x / self.width * self.area.width as f64
    }

    fn scale_y(&self, y: f64) -> f64 {
        (self.height - y) / self.height * self.area.height as f64
    }

    fn clamp_col(&self, offset: f64) -> u16 {
        let offset = offset.max(0.0).min(self.area.width as f64) as u16;
        self.area.x + offset
    }

    fn clamp_row(&self, offset: f64) -> u16 {
        let offset = offset.max(0.0).min(self.area.height as f64) as u16;
        self.area.y + offset
    }

    /// Column containing chart coordinate `x`, kept inside the area.
    pub fn col(&self, x: f64) -> u16 {
        self.clamp_col(self.scale_x(x).floor())
            .min(self.area.right().saturating_sub(1))
    }

    /// Row containing chart coordinate `y`, kept inside the area.
    pub fn row(&self, y: f64) -> u16 {
        self.clamp_row(self.scale_y(y).floor())
            .min(self.area.bottom().saturating_sub(1))
    }

    /// Cell rectangle covering `rect`. Edges snap to the nearest cell
    /// boundary and the result is never narrower or shorter than one cell.
    pub fn rect(&self, rect: UnitRect) -> Rect {
        let left = self.clamp_col(self.scale_x(rect.x).round());
        let right = self.clamp_col(self.scale_x(rect.right()).round());
        let top = self.clamp_row(self.scale_y(rect.top()).round());
        let bottom = self.clamp_row(self.scale_y(rect.y).round());

        let left = left.min(self.area.right().saturating_sub(1));
        let top = top.min(self.area.bottom().saturating_sub(1));
        let width = right.saturating_sub(left).max(1);
        let height = bottom.saturating_sub(top).max(1);

        Rect::new(left, top, width, height).intersection(self.area)
    }
}

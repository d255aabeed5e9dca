use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::layout::ChartLayout;
use crate::palette::Palette;

pub struct App {
    pub palette: Palette,
    pub layout: ChartLayout,
    pub should_quit: bool,

    // Last known terminal size, for the status bar.
    pub viewport: (u16, u16),
}

impl App {
    pub fn new(palette: Palette) -> Self {
        let columns = palette.light.swatches.len().max(palette.dark.swatches.len());
        Self {
            palette,
            layout: ChartLayout::standard(columns),
            should_quit: false,
            viewport: (0, 0),
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            _ => {}
        }
    }

    pub fn handle_resize(&mut self, width: u16, height: u16) {
        tracing::debug!(width, height, "terminal resized");
        self.viewport = (width, height);
    }
}

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[allow(dead_code)]
mod helpers;

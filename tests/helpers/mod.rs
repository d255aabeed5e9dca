use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::App;
use crate::palette::{Palette, Rgb, Swatch, Theme, ThemeKind};

/// App over the built-in palette.
pub fn builtin_app() -> App {
    App::new(Palette::builtin().expect("built-in palette parses"))
}

/// A plain key press.
pub fn key(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)
}

/// A key press with Ctrl held.
pub fn ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

pub fn code(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

/// Create a swatch from a name and hex code.
pub fn swatch(name: &str, hex: &str) -> Swatch {
    Swatch {
        name: name.to_string(),
        hex: hex.to_string(),
        color: Rgb::from_hex(hex).expect("valid hex"),
    }
}

/// A theme with the given swatches, titled after its kind.
pub fn theme(kind: ThemeKind, swatches: Vec<Swatch>, ink: Rgb) -> Theme {
    Theme {
        kind,
        title: kind.title().to_string(),
        swatches,
        label_ink: ink,
    }
}

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use swatch_chart::app::App;
use swatch_chart::layout::{CellMapper, MIN_CELLS_HIGH, MIN_CELLS_WIDE};
use swatch_chart::palette::{Swatch, Theme};

use super::colors;

/// Draw the two-row swatch chart into `area`.
///
/// Paint order is backgrounds, then swatch boxes, then labels and titles,
/// so text always lands on top.
pub fn render(f: &mut Frame, app: &App, area: Rect) {
    if area.width < MIN_CELLS_WIDE || area.height < MIN_CELLS_HIGH {
        render_too_small(f, area);
        return;
    }

    let layout = &app.layout;
    let mapper = CellMapper::new(layout, area);
    let buf = f.buffer_mut();

    for theme in app.palette.themes() {
        let bg = theme
            .background()
            .map(|s| colors::rgb(s.color))
            .unwrap_or(Color::Reset);
        fill(buf, mapper.rect(layout.background(theme.kind)), bg);
    }

    for theme in app.palette.themes() {
        for (i, swatch) in visible_swatches(app, theme) {
            fill(buf, mapper.rect(layout.swatch_rect(theme.kind, i)), colors::rgb(swatch.color));
        }
    }

    for theme in app.palette.themes() {
        let ink = Style::default().fg(colors::rgb(theme.label_ink));
        let bold = ink.add_modifier(Modifier::BOLD);

        for (i, swatch) in visible_swatches(app, theme) {
            let name = layout.name_anchor(theme.kind, i);
            let name_row = mapper.row(name.y);
            put_centered(buf, &mapper, name.x, name_row, &swatch.name, bold);

            let hex = layout.hex_anchor(theme.kind, i);
            let hex_row = mapper
                .row(hex.y)
                .max(name_row + 1)
                .min(area.bottom().saturating_sub(1));
            put_centered(buf, &mapper, hex.x, hex_row, &swatch.hex, ink);
        }

        let title = layout.title_anchor(theme.kind);
        put_centered(buf, &mapper, title.x, mapper.row(title.y), &theme.title, bold);
    }
}

fn visible_swatches<'a>(
    app: &App,
    theme: &'a Theme,
) -> impl Iterator<Item = (usize, &'a Swatch)> {
    theme
        .swatches
        .iter()
        .enumerate()
        .take(app.layout.x_positions.len())
}

fn fill(buf: &mut Buffer, rect: Rect, color: Color) {
    buf.set_style(rect, Style::default().bg(color));
}

/// Write `text` on `row`, centered on chart coordinate `x` and kept inside
/// the mapper's area.
fn put_centered(buf: &mut Buffer, mapper: &CellMapper, x: f64, row: u16, text: &str, style: Style) {
    let area = mapper.area();
    let width = Span::raw(text).width() as u16;
    let start = mapper
        .col(x)
        .saturating_sub(width / 2)
        .min(area.right().saturating_sub(width))
        .max(area.x);
    let room = area.right().saturating_sub(start) as usize;
    buf.set_stringn(start, row, text, room, style);
}

fn render_too_small(f: &mut Frame, area: Rect) {
    let notice = Line::from(vec![Span::styled(
        format!(
            "Terminal too small: {}x{} (need {}x{})",
            area.width, area.height, MIN_CELLS_WIDE, MIN_CELLS_HIGH
        ),
        Style::default().fg(colors::NOTICE_FG),
    )]);

    let row = Rect::new(area.x, area.y + area.height / 2, area.width, area.height.min(1));
    f.render_widget(Paragraph::new(notice).alignment(Alignment::Center), row);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;
    use swatch_chart::palette::{Palette, Rgb, ThemeKind};

    fn test_app() -> App {
        App::new(Palette::builtin().unwrap())
    }

    fn draw(app: &App, width: u16, height: u16) -> Terminal<TestBackend> {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| render(f, app, f.area())).unwrap();
        terminal
    }

    /// Position of the first cell where `text` starts.
    fn find_text(backend: &TestBackend, text: &str) -> Option<(u16, u16)> {
        let buf = backend.buffer();
        for y in 0..buf.area.height {
            let row_str: String = (0..buf.area.width)
                .map(|x| buf[(x, y)].symbol().to_string())
                .collect();
            if let Some(col) = row_str.find(text) {
                return Some((col as u16, y));
            }
        }
        None
    }

    fn rgb(hex: &str) -> Color {
        colors::rgb(Rgb::from_hex(hex).unwrap())
    }

    #[test]
    fn backgrounds_split_at_midline() {
        let app = test_app();
        let terminal = draw(&app, 48, 14);
        let buf = terminal.backend().buffer();

        assert_eq!(buf[(0, 0)].bg, rgb("#f8f9f9"));
        assert_eq!(buf[(47, 6)].bg, rgb("#f8f9f9"));
        assert_eq!(buf[(0, 7)].bg, rgb("#121A1C"));
        assert_eq!(buf[(47, 13)].bg, rgb("#121A1C"));
    }

    #[test]
    fn swatch_boxes_take_their_color() {
        let app = test_app();
        let area = Rect::new(0, 0, 96, 28);
        let terminal = draw(&app, area.width, area.height);
        let buf = terminal.backend().buffer();
        let mapper = CellMapper::new(&app.layout, area);

        for theme in app.palette.themes() {
            for (i, swatch) in theme.swatches.iter().enumerate() {
                let cells = mapper.rect(app.layout.swatch_rect(theme.kind, i));
                let center = (cells.x + cells.width / 2, cells.y + cells.height / 2);
                assert_eq!(buf[center].bg, colors::rgb(swatch.color), "{} {}", theme.title, swatch.name);
            }
        }
    }

    #[test]
    fn titles_are_bold_in_theme_ink() {
        let app = test_app();
        let terminal = draw(&app, 48, 14);
        let buf = terminal.backend().buffer();

        let light = find_text(terminal.backend(), "Light Theme").unwrap();
        assert_eq!(light.1, 0);
        assert_eq!(buf[light].fg, rgb("#23242A"));
        assert!(buf[light].modifier.contains(Modifier::BOLD));

        let dark = find_text(terminal.backend(), "Dark Theme").unwrap();
        assert_eq!(dark.1, 7);
        assert_eq!(buf[dark].fg, Color::Rgb(255, 255, 255));
        assert_eq!(buf[dark].bg, rgb("#121A1C"));
    }

    #[test]
    fn titles_are_centered() {
        let app = test_app();
        let terminal = draw(&app, 48, 14);
        let (x, _) = find_text(terminal.backend(), "Light Theme").unwrap();
        let left = x;
        let right = 48 - (x + "Light Theme".len() as u16);
        assert!(left.abs_diff(right) <= 1, "left {left}, right {right}");
    }

    #[test]
    fn every_swatch_is_labelled_name_above_hex() {
        let app = test_app();
        let terminal = draw(&app, 96, 28);
        let buf = terminal.backend().buffer();

        for hex in ["#2a9d8f", "#8C2F39", "#1a1a1a", "#f8f9f9", "#3fb5a3", "#f39c6b", "#E8E8E8", "#121A1C"] {
            let pos = find_text(terminal.backend(), hex).unwrap_or_else(|| panic!("{hex} missing"));
            assert!(!buf[pos].modifier.contains(Modifier::BOLD));
        }

        let accent_hex = find_text(terminal.backend(), "#8C2F39").unwrap();
        let accent_name = find_text(terminal.backend(), "Accent").unwrap();
        assert!(accent_name.1 < accent_hex.1);
        assert!(buf[accent_name].modifier.contains(Modifier::BOLD));
        assert_eq!(buf[accent_name].fg, rgb("#23242A"));
    }

    #[test]
    fn labels_fit_at_minimum_size() {
        let app = test_app();
        let terminal = draw(&app, MIN_CELLS_WIDE, MIN_CELLS_HIGH);
        let buf = terminal.backend().buffer();

        let light_hex = find_text(terminal.backend(), "#2a9d8f").unwrap();
        assert!(light_hex.1 < 7, "light label spilled into dark half");
        let dark_hex = find_text(terminal.backend(), "#3fb5a3").unwrap();
        assert_eq!(dark_hex.1, MIN_CELLS_HIGH - 1);
        assert_eq!(buf[dark_hex].fg, Color::Rgb(255, 255, 255));
    }

    #[test]
    fn chart_respects_offset_area() {
        let app = test_app();
        let backend = TestBackend::new(60, 20);
        let mut terminal = Terminal::new(backend).unwrap();
        let area = Rect::new(6, 3, 50, 15);
        terminal.draw(|f| render(f, &app, area)).unwrap();
        let buf = terminal.backend().buffer();

        assert_eq!(buf[(0, 0)].bg, Color::Reset);
        assert_eq!(buf[(6, 3)].bg, rgb("#f8f9f9"));
        assert_eq!(buf[(55, 17)].bg, rgb("#121A1C"));
        assert_eq!(buf[(56, 17)].bg, Color::Reset);
    }

    #[test]
    fn too_small_shows_notice() {
        let app = test_app();
        let terminal = draw(&app, 40, 8);
        assert!(find_text(terminal.backend(), "Terminal too small").is_some());
        assert!(find_text(terminal.backend(), "Light Theme").is_none());
    }

    #[test]
    fn missing_swatches_leave_background() {
        let mut app = test_app();
        app.palette.dark.swatches.truncate(2);
        let area = Rect::new(0, 0, 48, 14);
        let terminal = draw(&app, area.width, area.height);
        let buf = terminal.backend().buffer();

        let mapper = CellMapper::new(&app.layout, area);
        let cells = mapper.rect(app.layout.swatch_rect(ThemeKind::Dark, 3));
        let center = (cells.x + cells.width / 2, cells.y + cells.height / 2);
        // Background now resolves to the last remaining swatch.
        assert_eq!(buf[center].bg, rgb("#f39c6b"));
    }
}

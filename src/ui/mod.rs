pub mod chart;
pub mod colors;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};

use swatch_chart::app::App;

pub fn render(f: &mut Frame, app: &App) {
    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),        // chart
            Constraint::Length(1),     // status bar
        ])
        .split(f.area());

    chart::render(f, app, outer[0]);
    render_status_bar(f, app, outer[1]);
}

fn render_status_bar(f: &mut Frame, app: &App, area: ratatui::layout::Rect) {
    use ratatui::style::Style;
    use ratatui::text::{Line, Span};
    use ratatui::widgets::Paragraph;

    let key = Style::default().fg(colors::STATUS_KEY);
    let (width, height) = app.viewport;

    let status = Line::from(vec![
        Span::styled(" [q]", key),
        Span::raw("uit "),
        Span::styled("[esc]", key),
        Span::raw(" close  "),
        Span::raw(format!(
            "{} / {} · {} swatches",
            app.palette.light.title,
            app.palette.dark.title,
            app.layout.x_positions.len(),
        )),
        Span::styled(format!("  {}x{}", width, height), key),
    ]);

    f.render_widget(
        Paragraph::new(status).style(Style::default().bg(colors::STATUS_BG).fg(colors::STATUS_FG)),
        area,
    );
}

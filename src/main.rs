mod events;
mod ui;

use std::io;
use std::sync::mpsc;
use std::time::Duration;

use clap::{Parser as ClapParser, ValueEnum};
use color_eyre::eyre::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing_subscriber::EnvFilter;

use events::AppEvent;
use swatch_chart::app::App;
use swatch_chart::layout::{MIN_CELLS_HIGH, MIN_CELLS_WIDE};
use swatch_chart::palette::Palette;
use swatch_chart::report::{JsonFormatter, PaletteFormatter, TextFormatter};

#[derive(ClapParser, Debug)]
#[command(name = "swatch-chart", about = "Show the light and dark theme palettes as a swatch chart")]
struct Cli {
    /// Print the palette to stdout instead of launching the viewer.
    #[arg(long)]
    dump: bool,

    /// Output format for --dump.
    #[arg(long, value_enum, default_value_t = DumpFormat::Text)]
    format: DumpFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum DumpFormat {
    Text,
    Json,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing();
    let cli = Cli::parse();

    let palette = Palette::builtin()?;

    if cli.dump {
        let output = match cli.format {
            DumpFormat::Text => TextFormatter::default().format(&palette)?,
            DumpFormat::Json => JsonFormatter { pretty: true }.format(&palette)?,
        };
        println!("{}", output.trim_end());
        return Ok(());
    }

    let (width, height) = crossterm::terminal::size()?;
    if width < MIN_CELLS_WIDE || height <= MIN_CELLS_HIGH {
        tracing::warn!(width, height, "terminal is smaller than the chart; it will show a notice until resized");
    }

    // Launch TUI.
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(palette);
    app.handle_resize(width, height);

    let result = run_tui(&mut terminal, &mut app);

    // Restore terminal.
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

/// Logs go to stderr; the default `warn` filter keeps the alternate screen clean.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run_tui(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    let (tx, rx) = mpsc::channel::<AppEvent>();

    // Spawn input reader thread.
    events::spawn_input_reader(tx);

    loop {
        terminal.draw(|f| ui::render(f, app))?;

        match rx.recv_timeout(Duration::from_millis(250)) {
            Ok(AppEvent::Key(key)) => app.handle_key(key),
            Ok(AppEvent::Resize(width, height)) => app.handle_resize(width, height),
            Err(mpsc::RecvTimeoutError::Timeout) => {}
            Err(mpsc::RecvTimeoutError::Disconnected) => break,
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

mod app;
mod config;
mod output;
mod render;
mod segment;
mod theme;
mod ui;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use app::App;
use config::AppConfig;
use output::Format;
use render::Props;
use theme::Theme;

#[derive(Parser, Debug)]
#[command(name = "splitlist")]
#[command(version)]
#[command(about = "Split delimited text into a list, one item per segment")]
struct Args {
    /// Text to split (read from stdin when omitted and stdin is not a terminal)
    text: Option<String>,

    /// Separator between items (default: config, then ",")
    #[arg(short, long)]
    delimiter: Option<String>,

    /// Print the list once in this format and exit
    #[arg(short, long, value_enum)]
    format: Option<Format>,

    /// Open the interactive view even when stdout is not a terminal
    #[arg(short, long, conflicts_with = "format")]
    interactive: bool,

    /// Config file (default: <config dir>/splitlist/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Initialize logging; stdout is reserved for list output
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let config = AppConfig::load(args.config.as_deref());

    let text = match args.text {
        Some(text) => text,
        None if !io::stdin().is_terminal() => read_stdin()?,
        None => String::new(),
    };

    let props = resolve_props(text, args.delimiter, &config);

    if let Some(format) = output_format(args.format, args.interactive, io::stdout().is_terminal()) {
        return print_list(&props, format, &config.marker);
    }

    run_tui(props, config, args.config)
}

/// Delimiter precedence: command line, then config, then the comma.
/// An empty delimiter at either level counts as not given.
fn resolve_props(text: String, cli_delimiter: Option<String>, config: &AppConfig) -> Props {
    let delimiter = cli_delimiter
        .filter(|d| !d.is_empty())
        .or_else(|| config.delimiter.clone().filter(|d| !d.is_empty()));

    match delimiter {
        Some(delimiter) => Props::new(text).with_delimiter(delimiter),
        None => Props::new(text),
    }
}

/// Explicit format wins; piped stdout prints plain unless `-i` was given
fn output_format(requested: Option<Format>, interactive: bool, stdout_is_terminal: bool) -> Option<Format> {
    match requested {
        Some(format) => Some(format),
        None if !interactive && !stdout_is_terminal => Some(Format::Plain),
        None => None,
    }
}

/// Read all of stdin, dropping one trailing newline
fn read_stdin() -> Result<String> {
    let mut text = String::new();
    io::stdin()
        .read_to_string(&mut text)
        .context("Failed to read text from stdin")?;
    Ok(strip_trailing_newline(text))
}

/// Drop one trailing `\n` or `\r\n`, nothing else
fn strip_trailing_newline(mut text: String) -> String {
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
    text
}

/// Run `restore` when a terminal setup step fails, then pass the error on
fn or_restore<T, E>(result: Result<T, E>, restore: impl FnOnce()) -> Result<T>
where
    E: Into<anyhow::Error>,
{
    result.map_err(|e| {
        restore();
        e.into()
    })
}

fn leave_raw_mode() {
    if let Err(e) = disable_raw_mode() {
        tracing::warn!("Could not disable raw mode: {}", e);
    }
}

fn print_list(props: &Props, format: Format, marker: &str) -> Result<()> {
    let list = render::render(props);
    tracing::debug!("Printing {} items as {:?}", list.len(), format);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    output::write_list(&mut out, &list, format, marker)
}

fn run_tui(props: Props, config: AppConfig, config_path: Option<PathBuf>) -> Result<()> {
    let theme = Theme::load(config.theme_file.as_deref());

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    or_restore(execute!(stdout, EnterAlternateScreen), leave_raw_mode)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = or_restore(Terminal::new(backend), || {
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        leave_raw_mode();
    })?;

    let mut app = App::new(props, config, config_path);

    // Main loop
    let result = run_app(&mut terminal, &mut app, &theme);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    theme: &Theme,
) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app, theme))?;

        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    match key.code {
                        KeyCode::Esc => return Ok(()),
                        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                            return Ok(())
                        }
                        _ => {
                            if let Err(e) = app.handle_key(key) {
                                app.set_status(format!("Error: {}", e));
                            }
                        }
                    }
                }
            }
        }

        app.tick();
    }
}

//! Blochlab TUI - Interactive Bloch Sphere Visualizer
//!
//! Build a single-qubit gate sequence from the keyboard and watch it animate
//! on the Bloch sphere.

mod app;
mod config;
mod events;
mod ui;

use std::fs::File;
use std::io::stdout;
use std::sync::Mutex;
use std::time::Duration;

use anyhow::{Context, Result};
use app::App;
use clap::Parser;
use config::Config;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> Result<()> {
    let config = Config::parse();
    init_logging(&config)?;
    info!(fpg = config.fpg, spg = config.spg, trace = config.trace, "starting");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app and run
    let mut app = App::new(&config);
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Handle result
    if let Err(err) = result {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }

    Ok(())
}

/// Logs go to `--log-file` when given; the alternate screen owns the terminal.
fn init_logging(config: &Config) -> Result<()> {
    let registry = tracing_subscriber::registry().with(EnvFilter::from_default_env());

    match &config.log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("cannot create log file {}", path.display()))?;
            registry
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_target(false)
                        .with_ansi(false)
                        .with_writer(Mutex::new(file)),
                )
                .init();
        }
        None => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::sink),
            )
            .init(),
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        // Draw UI
        terminal.draw(|f| ui::render(f, app))?;

        // Handle input with timeout for animations
        if event::poll(Duration::from_millis(16))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                app.handle_key(key);
                if app.should_quit() {
                    return Ok(());
                }
            }
        }

        // Update animations/state
        app.tick();
    }
}

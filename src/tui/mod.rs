//! Terminal UI for branching tic-tac-toe.

mod app;
mod input;
mod ui;

pub use app::{App, Focus};

use crate::GameConfig;
use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::path::Path;
use tracing::{debug, error, info, instrument};

/// Runs the interactive game until the user quits.
pub fn run_tui(config: GameConfig) -> Result<()> {
    // Log to a file so output does not interfere with the TUI
    init_file_logging(config.log_file())?;

    info!(?config, "Starting TUI");

    let mut terminal = setup_terminal()?;

    let mut app = App::new(&config);
    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!(
        moves = app.game().history().len() - 1,
        status = %app.game().status(),
        "TUI closed"
    );
    res
}

/// Sends tracing output to `path`, truncating it.
///
/// Returns `false` when a global subscriber was already installed; the
/// file is still created but the existing subscriber keeps receiving events.
fn init_file_logging(path: &Path) -> Result<bool> {
    let log_file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    let installed = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    match installed {
        Ok(()) => Ok(true),
        Err(e) => {
            debug!(error = %e, path = %path.display(), "Tracing subscriber already installed");
            Ok(false)
        }
    }
}

/// Enters raw mode and the alternate screen.
///
/// Raw mode is switched back off if anything after it fails.
fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let enter = || -> Result<Terminal<CrosstermBackend<Stdout>>> {
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        Ok(Terminal::new(CrosstermBackend::new(stdout))?)
    };
    enter().inspect_err(|err| {
        error!(error = ?err, "Terminal setup failed");
        if let Err(e) = disable_raw_mode() {
            error!(error = %e, "Failed to leave raw mode");
        }
    })
}

/// Draw, wait for a key, update; one action per iteration.
#[instrument(skip_all)]
fn run_app<B>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    B: ratatui::backend::Backend,
    B::Error: std::error::Error + Send + Sync + 'static,
{
    while !app.should_quit() {
        terminal.draw(|f| ui::draw(f, app))?;

        if let Event::Key(key) = event::read()? {
            // Ignore release/repeat events reported by some terminals
            if key.kind == KeyEventKind::Press {
                app.handle_key(key);
            }
        }
    }
    Ok(())
}

//! Branching tic-tac-toe - command-line entry point.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use branching_tictactoe::{
    GameConfig, Snapshot, SortOrder, parse_cells, render_text, replay, tui,
};
use clap::Parser;
use cli::{Cli, Command};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play { config, order } => run_play(config, order.sort_order()),
        Command::Replay {
            cells,
            jump,
            order,
            json,
        } => {
            initialize_stderr_tracing();
            run_replay(cells, jump, order.sort_order().unwrap_or_default(), json)
        }
    }
}

/// Run the interactive terminal game
fn run_play(
    config_path: std::path::PathBuf,
    sort_order: Option<SortOrder>,
) -> Result<()> {
    let mut config = GameConfig::load_or_default(&config_path)
        .with_context(|| format!("Loading {}", config_path.display()))?;
    if let Some(order) = sort_order {
        config = config.with_sort_order(order);
    }
    tui::run_tui(config)
}

/// Replay moves and print the result to stdout
#[instrument(skip(cells), fields(moves = cells.len()))]
fn run_replay(
    cells: Vec<String>,
    jump: Option<usize>,
    sort_order: SortOrder,
    json: bool,
) -> Result<()> {
    let cells = parse_cells(&cells)?;
    let game = replay(&cells, jump, sort_order)?;
    info!(status = %game.status(), "Replay finished");

    if json {
        println!("{}", serde_json::to_string_pretty(&Snapshot::from(&game))?);
    } else {
        print!("{}", render_text(&game));
    }
    Ok(())
}

/// Logs go to stderr so stdout carries only the replay output
fn initialize_stderr_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

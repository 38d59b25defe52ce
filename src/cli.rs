//! Command-line interface for branching_tictactoe.

use branching_tictactoe::SortOrder;
use clap::{Args, Parser, Subcommand};

/// Tic-tac-toe with time-travel through the move history
#[derive(Parser, Debug)]
#[command(name = "branching_tictactoe")]
#[command(about = "Tic-tac-toe with a branching move history", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively in the terminal
    Play {
        /// Path to the TOML config file
        #[arg(short, long, default_value = "tictactoe.toml")]
        config: std::path::PathBuf,

        #[command(flatten)]
        order: OrderArgs,
    },

    /// Apply a sequence of moves and print the resulting game
    Replay {
        /// Cells in play order: indices 0-8 (row-major) or labels such as
        /// "top-left"; illegal moves are ignored
        cells: Vec<String>,

        /// Display this history index after replaying
        #[arg(short, long)]
        jump: Option<usize>,

        #[command(flatten)]
        order: OrderArgs,

        /// Print a JSON snapshot instead of text
        #[arg(long)]
        json: bool,
    },
}

/// Move list ordering flag.
#[derive(Args, Debug, Clone, Copy)]
pub struct OrderArgs {
    /// List moves newest first
    #[arg(long)]
    pub descending: bool,
}

impl OrderArgs {
    /// The order requested on the command line, if any.
    pub fn sort_order(self) -> Option<SortOrder> {
        self.descending.then_some(SortOrder::Descending)
    }
}

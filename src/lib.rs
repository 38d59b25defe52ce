//! Branching tic-tac-toe library
//!
//! A 3x3 game whose move history can be revisited and branched: jumping
//! back to an earlier move and playing from there discards the moves that
//! came after it.
//!
//! # Architecture
//!
//! - **Games**: board, win detection and [`GameState`] with time-travel
//! - **Config**: TOML settings for the terminal front end
//! - **Replay**: non-interactive replay of a move sequence
//! - **TUI**: ratatui front end
//!
//! # Example
//!
//! ```
//! use branching_tictactoe::{GameState, Player};
//!
//! let mut game = GameState::new();
//! for cell in [0, 3, 1, 4, 2] {
//!     game.apply_move(cell);
//! }
//! let win = game.winner().expect("top row");
//! assert_eq!(win.player(), Player::X);
//! assert_eq!(win.indices(), [0, 1, 2]);
//!
//! game.jump_to(0);
//! game.apply_move(5);
//! assert_eq!(game.history().len(), 2);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
pub mod games;
mod replay;
pub mod tui;

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig};

// Crate-level exports - Replay
pub use replay::{JumpOutOfRange, Snapshot, UnknownCell, parse_cells, render_text, replay};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, GameState, GameStatus, History, InvalidHistory, MoveDescription, MoveDescriptions,
    MoveError, MoveLabel, Player, Position, SortOrder, Square, WinResult,
    rules::{evaluate, is_draw, is_full},
};

//! Tic-tac-toe with a branching move history.

mod action;
mod history;
mod moves;
mod position;
pub mod rules;
mod state;
mod types;

pub use action::MoveError;
pub use history::{History, InvalidHistory};
pub use moves::{MoveDescription, MoveDescriptions, MoveLabel, SortOrder};
pub use position::Position;
pub use rules::WinResult;
pub use state::{GameState, GameStatus};
pub use types::{Board, Player, Square};

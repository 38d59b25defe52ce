//! Move rejection reasons.

use super::{Player, Position};

/// Why a move was not applied.
///
/// [`GameState::apply_move`](super::GameState::apply_move) swallows these;
/// [`GameState::try_apply_move`](super::GameState::try_apply_move) reports them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The cell index is outside the board.
    #[display("Cell {} is out of bounds (must be 0-8)", _0)]
    OutOfBounds(usize),

    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The current board already has a winner.
    #[display("Game is already over ({} won)", _0)]
    GameOver(Player),
}

impl std::error::Error for MoveError {}

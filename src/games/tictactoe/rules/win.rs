//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The 8 winning triples, in evaluation order.
const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// A completed line: the winning player and the three squares it holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinResult {
    player: Player,
    line: [Position; 3],
}

impl WinResult {
    /// The winning player.
    pub fn player(&self) -> Player {
        self.player
    }

    /// The winning triple.
    pub fn line(&self) -> [Position; 3] {
        self.line
    }

    /// The winning triple as board indices.
    pub fn indices(&self) -> [usize; 3] {
        self.line.map(Position::to_index)
    }

    /// Whether `pos` belongs to the winning triple.
    pub fn contains(&self, pos: Position) -> bool {
        self.line.contains(&pos)
    }
}

/// Evaluates the board for a completed line.
///
/// Rows are checked top to bottom, then columns left to right, then the
/// two diagonals; the first uniform non-empty triple wins. A full board
/// without such a triple yields `None` just like an unfinished one.
#[instrument(level = "trace")]
pub fn evaluate(board: &Board) -> Option<WinResult> {
    LINES.iter().find_map(|&line| {
        let [a, b, c] = line;
        match board.get(a) {
            Square::Occupied(player) if board.get(b) == board.get(a) && board.get(c) == board.get(a) => {
                Some(WinResult { player, line })
            }
            _ => None,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(player: Player, positions: &[Position]) -> Board {
        positions
            .iter()
            .fold(Board::new(), |board, &pos| board.with(pos, Square::Occupied(player)))
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(evaluate(&Board::new()), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board = board_with(
            Player::X,
            &[Position::TopLeft, Position::TopCenter, Position::TopRight],
        );
        let win = evaluate(&board).expect("top row is complete");
        assert_eq!(win.player(), Player::X);
        assert_eq!(win.indices(), [0, 1, 2]);
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board = board_with(
            Player::O,
            &[Position::TopRight, Position::Center, Position::BottomLeft],
        );
        let win = evaluate(&board).expect("anti-diagonal is complete");
        assert_eq!(win.player(), Player::O);
        assert_eq!(win.indices(), [2, 4, 6]);
        assert!(win.contains(Position::Center));
        assert!(!win.contains(Position::TopLeft));
    }

    #[test]
    fn test_every_line_is_detected() {
        for line in LINES {
            let win = evaluate(&board_with(Player::O, &line)).expect("line is complete");
            assert_eq!(win.line(), line);
        }
    }

    #[test]
    fn test_row_takes_priority_over_column_and_diagonal() {
        // Top row, left column and main diagonal all belong to X.
        let board = board_with(
            Player::X,
            &[
                Position::TopLeft,
                Position::TopCenter,
                Position::TopRight,
                Position::MiddleLeft,
                Position::BottomLeft,
                Position::Center,
                Position::BottomRight,
            ],
        );
        assert_eq!(evaluate(&board).map(|w| w.indices()), Some([0, 1, 2]));
    }

    #[test]
    fn test_column_takes_priority_over_diagonal() {
        let board = board_with(
            Player::X,
            &[
                Position::TopLeft,
                Position::MiddleLeft,
                Position::BottomLeft,
                Position::Center,
                Position::BottomRight,
            ],
        );
        assert_eq!(evaluate(&board).map(|w| w.indices()), Some([0, 3, 6]));
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board = Board::new()
            .with(Position::TopLeft, Square::Occupied(Player::X))
            .with(Position::TopCenter, Square::Occupied(Player::O))
            .with(Position::TopRight, Square::Occupied(Player::X));
        assert_eq!(evaluate(&board), None);
    }
}

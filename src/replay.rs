//! Non-interactive replay of a move sequence.

use crate::games::tictactoe::{Board, GameState, GameStatus, MoveDescription, Position, SortOrder};
use derive_more::{Display, Error};
use serde::Serialize;
use tracing::{debug, instrument};

/// Replay request could not be honoured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Cannot jump to move {} (history has {} entries)", target, len)]
pub struct JumpOutOfRange {
    /// Requested history index.
    pub target: usize,
    /// History length after replaying.
    pub len: usize,
}

/// Replay argument is neither a cell number nor a position label.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Unknown cell {:?} (expected 0-8 or a label such as \"top-left\")", _0)]
pub struct UnknownCell(#[error(not(source))] pub String);

/// Turns replay arguments into cell indices.
///
/// Numbers pass through unchanged, so out-of-range ones are still ignored
/// by the board; anything else must be a position label.
#[instrument(skip_all)]
pub fn parse_cells<I, S>(tokens: I) -> Result<Vec<usize>, UnknownCell>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tokens
        .into_iter()
        .map(|token| {
            let token = token.as_ref();
            token
                .trim()
                .parse::<usize>()
                .ok()
                .or_else(|| Position::from_label(token).map(Position::to_index))
                .ok_or_else(|| UnknownCell(token.to_string()))
        })
        .collect()
}

/// Plays `cells` in order from an empty board, then optionally jumps.
///
/// Illegal cells are skipped the same way the board ignores them.
#[instrument]
pub fn replay(
    cells: &[usize],
    jump: Option<usize>,
    sort_order: SortOrder,
) -> Result<GameState, JumpOutOfRange> {
    let mut game = GameState::with_sort_order(sort_order);
    for &cell in cells {
        game.apply_move(cell);
    }
    debug!(len = game.history().len(), "Moves replayed");

    if let Some(target) = jump {
        let len = game.history().len();
        if target >= len {
            return Err(JumpOutOfRange { target, len });
        }
        game.jump_to(target);
    }
    Ok(game)
}

/// Serializable view of a game, as printed by `replay --json`.
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    /// Displayed board.
    pub board: Board,
    /// Status line.
    pub status: GameStatus,
    /// Index of the displayed board.
    pub current_move: usize,
    /// Move list in display order.
    pub moves: Vec<MoveDescription>,
}

impl From<&GameState> for Snapshot {
    fn from(game: &GameState) -> Self {
        Self {
            board: *game.current_board(),
            status: game.status(),
            current_move: game.current_move(),
            moves: game.move_descriptions().collect(),
        }
    }
}

/// Plain text rendering: board, status line, then the move list.
pub fn render_text(game: &GameState) -> String {
    let mut out = game.current_board().display();
    out.push_str("\n\n");
    out.push_str(&game.status().to_string());
    out.push('\n');
    for entry in game.move_descriptions() {
        out.push_str(&format!("{}. {}\n", entry.move_index(), entry));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replay_skips_illegal_cells() {
        let game = replay(&[4, 4, 0], None, SortOrder::Ascending).unwrap();
        assert_eq!(game.history().len(), 3);
    }

    #[test]
    fn test_parse_cells_accepts_numbers_and_labels() {
        let cells = parse_cells(["4", "top-left", "Bottom-right", "12"]).unwrap();
        assert_eq!(cells, vec![4, 0, 8, 12]);
    }

    #[test]
    fn test_parse_cells_rejects_unknown_text() {
        let err = parse_cells(["4", "corner"]).unwrap_err();
        assert_eq!(err, UnknownCell("corner".to_string()));
        assert!(err.to_string().contains("\"corner\""));
    }

    #[test]
    fn test_replay_jump_out_of_range() {
        let err = replay(&[4], Some(5), SortOrder::Ascending).unwrap_err();
        assert_eq!(err, JumpOutOfRange { target: 5, len: 2 });
    }

    #[test]
    fn test_render_text() {
        let game = replay(&[0, 3, 1, 4, 2], Some(5), SortOrder::Descending).unwrap();
        let text = render_text(&game);
        assert!(text.starts_with("X|X|X\n"));
        assert!(text.contains("Winner: X\n5. You are at move #5\n4. Go to move #4\n"));
        assert!(text.ends_with("0. Go to game start\n"));
    }

    #[test]
    fn test_snapshot_json() {
        let game = replay(&[4], None, SortOrder::Ascending).unwrap();
        let json = serde_json::to_value(Snapshot::from(&game)).unwrap();
        assert_eq!(json["current_move"], 1);
        assert_eq!(json["moves"].as_array().map(Vec::len), Some(2));
        assert_eq!(json["status"]["InProgress"]["next"], "O");
    }
}

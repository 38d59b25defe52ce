//! Branching board history.

use super::position::Position;
use super::rules;
use super::types::{Board, Player, Square};
use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Ordered board snapshots, starting from the empty board.
///
/// Backed by a persistent vector: clones share structure, and
/// [`History::branch`] builds a new history instead of editing this one,
/// so a snapshot handed out earlier stays valid.
///
/// Deserialized histories are checked to be a legal game: they start at
/// the empty board and every snapshot adds one mark for the player to
/// move, with no move after a win.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "HistoryRepr")]
pub struct History {
    boards: Vector<Board>,
}

/// Why a deserialized game was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum InvalidHistory {
    /// No snapshots at all.
    #[display("History is empty")]
    Empty,

    /// The first snapshot has marks on it.
    #[display("History does not start from an empty board")]
    NonEmptyStart,

    /// Snapshot at this index is not one legal move after its predecessor.
    #[display("Snapshot {} is not a legal move from the one before it", _0)]
    IllegalStep(usize),

    /// The displayed move is not in the history.
    #[display("Current move {} outside history of {}", current_move, len)]
    CurrentMoveOutOfRange {
        /// Requested displayed move.
        current_move: usize,
        /// History length.
        len: usize,
    },
}

impl std::error::Error for InvalidHistory {}

#[derive(Deserialize)]
struct HistoryRepr {
    boards: Vector<Board>,
}

impl TryFrom<HistoryRepr> for History {
    type Error = InvalidHistory;

    fn try_from(repr: HistoryRepr) -> Result<Self, Self::Error> {
        let first = repr.boards.front().ok_or(InvalidHistory::Empty)?;
        if first.occupied() != 0 {
            return Err(InvalidHistory::NonEmptyStart);
        }

        let mut previous = first;
        for (index, board) in repr.boards.iter().enumerate().skip(1) {
            if !is_legal_step(previous, board, Player::for_move(index - 1)) {
                return Err(InvalidHistory::IllegalStep(index));
            }
            previous = board;
        }

        Ok(Self {
            boards: repr.boards,
        })
    }
}

/// `after` is `before` plus one `player` mark, and `before` was still in play.
fn is_legal_step(before: &Board, after: &Board, player: Player) -> bool {
    if rules::evaluate(before).is_some() {
        return false;
    }
    let mut changed = Position::ALL
        .iter()
        .filter(|&&pos| before.get(pos) != after.get(pos));
    match (changed.next(), changed.next()) {
        (Some(&pos), None) => {
            before.is_empty(pos) && after.get(pos) == Square::Occupied(player)
        }
        _ => false,
    }
}

impl History {
    /// Creates a history holding only the empty board.
    pub fn new() -> Self {
        Self {
            boards: im::vector![Board::new()],
        }
    }

    /// Number of snapshots, including the empty board.
    pub fn len(&self) -> usize {
        self.boards.len()
    }

    /// Never true for a history built through this API.
    pub fn is_empty(&self) -> bool {
        self.boards.is_empty()
    }

    /// Snapshot at `index`.
    pub fn get(&self, index: usize) -> Option<&Board> {
        self.boards.get(index)
    }

    /// Iterates snapshots oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &Board> + '_ {
        self.boards.iter()
    }

    /// Keeps snapshots `0..=at` and appends `board` after them.
    ///
    /// Anything recorded after `at` is dropped from the returned history.
    ///
    /// # Panics
    ///
    /// Panics if `at` is not a valid snapshot index.
    #[must_use]
    #[instrument(skip(self, board), fields(len = self.len()))]
    pub fn branch(&self, at: usize, board: Board) -> Self {
        assert!(at < self.len(), "branch point {at} outside history of {}", self.len());
        let mut boards = self.boards.clone();
        boards.truncate(at + 1);
        boards.push_back(board);
        Self { boards }
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

//! Game state with time-travel.
//!
//! [`GameState`] stores only the board history, the index of the snapshot
//! on display, and the move list order. Everything else (whose turn it is,
//! the board, the winner) is derived from those on every read.

use super::action::MoveError;
use super::history::{History, InvalidHistory};
use super::moves::{MoveDescriptions, SortOrder};
use super::rules::{self, WinResult};
use super::types::{Board, Player, Square};
use super::position::Position;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Derived status of the displayed board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// A line is complete.
    Won(WinResult),
    /// The board is full and nobody won.
    Draw,
    /// Play continues.
    InProgress {
        /// Player to move next.
        next: Player,
    },
}

impl GameStatus {
    /// Whether moves are still accepted on the displayed board.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress { .. })
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::Won(win) => write!(f, "Winner: {}", win.player()),
            GameStatus::Draw => write!(f, "Draw"),
            GameStatus::InProgress { next } => write!(f, "Next player: {}", next),
        }
    }
}

/// Tic-tac-toe game with branching history.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "GameStateRepr")]
pub struct GameState {
    history: History,
    current_move: usize,
    sort_order: SortOrder,
}

#[derive(Deserialize)]
struct GameStateRepr {
    history: History,
    current_move: usize,
    #[serde(default)]
    sort_order: SortOrder,
}

impl TryFrom<GameStateRepr> for GameState {
    type Error = InvalidHistory;

    fn try_from(repr: GameStateRepr) -> Result<Self, Self::Error> {
        let len = repr.history.len();
        if repr.current_move >= len {
            return Err(InvalidHistory::CurrentMoveOutOfRange {
                current_move: repr.current_move,
                len,
            });
        }
        Ok(Self {
            history: repr.history,
            current_move: repr.current_move,
            sort_order: repr.sort_order,
        })
    }
}

impl GameState {
    /// Creates a new game at the empty board, move list ascending.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new game with the given move list order.
    #[instrument]
    pub fn with_sort_order(sort_order: SortOrder) -> Self {
        Self {
            sort_order,
            ..Self::default()
        }
    }

    /// All recorded snapshots.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Index of the snapshot on display.
    pub fn current_move(&self) -> usize {
        self.current_move
    }

    /// Move list order.
    pub fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    /// The snapshot on display.
    pub fn current_board(&self) -> &Board {
        self.history
            .get(self.current_move)
            .unwrap_or_else(|| unreachable!("current move {} outside history", self.current_move))
    }

    /// Player whose mark the next move places.
    pub fn active_player(&self) -> Player {
        Player::for_move(self.current_move)
    }

    /// Completed line on the displayed board, if any.
    pub fn winner(&self) -> Option<WinResult> {
        rules::evaluate(self.current_board())
    }

    /// Derived status of the displayed board.
    pub fn status(&self) -> GameStatus {
        let board = self.current_board();
        if let Some(win) = rules::evaluate(board) {
            GameStatus::Won(win)
        } else if rules::is_full(board) {
            GameStatus::Draw
        } else {
            GameStatus::InProgress {
                next: self.active_player(),
            }
        }
    }

    /// Places the active player's mark at `cell`.
    ///
    /// Illegal moves (out of bounds, occupied square, finished game) leave
    /// the state untouched without reporting anything; see
    /// [`try_apply_move`](Self::try_apply_move) for the reason.
    #[instrument(skip(self), fields(current_move = self.current_move))]
    pub fn apply_move(&mut self, cell: usize) {
        if let Err(e) = self.try_apply_move(cell) {
            debug!(error = %e, "Ignoring move");
        }
    }

    /// Places the active player's mark at `cell`, reporting why it could not.
    ///
    /// On success every snapshot after the displayed one is discarded, the
    /// new board is appended, and the new board becomes the displayed one.
    #[instrument(skip(self), fields(current_move = self.current_move))]
    pub fn try_apply_move(&mut self, cell: usize) -> Result<(), MoveError> {
        let pos = Position::from_index(cell).ok_or(MoveError::OutOfBounds(cell))?;
        let board = self.current_board();

        if let Some(win) = rules::evaluate(board) {
            return Err(MoveError::GameOver(win.player()));
        }
        if !board.is_empty(pos) {
            return Err(MoveError::SquareOccupied(pos));
        }

        let player = self.active_player();
        let next = board.with(pos, Square::Occupied(player));
        let discarded = self.history.len() - self.current_move - 1;

        self.history = self.history.branch(self.current_move, next);
        self.current_move = self.history.len() - 1;

        info!(
            %player,
            position = %pos,
            move_index = self.current_move,
            discarded,
            "Move applied"
        );
        Ok(())
    }

    /// Displays snapshot `move_index` without touching history.
    ///
    /// # Panics
    ///
    /// Panics if `move_index` is not an index into history; the move list
    /// only ever offers valid indices.
    #[instrument(skip(self), fields(len = self.history.len()))]
    pub fn jump_to(&mut self, move_index: usize) {
        assert!(
            move_index < self.history.len(),
            "move {move_index} outside history of {}",
            self.history.len()
        );
        self.current_move = move_index;
        debug!("Jumped");
    }

    /// Flips the move list order.
    #[instrument(skip(self))]
    pub fn toggle_sort_order(&mut self) {
        self.sort_order = self.sort_order.toggle();
        debug!(sort_order = ?self.sort_order, "Sort order toggled");
    }

    /// Move list entries in the current order, produced lazily.
    pub fn move_descriptions(&self) -> MoveDescriptions {
        MoveDescriptions::new(self.history.len(), self.current_move, self.sort_order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(cells: &[usize]) -> GameState {
        let mut game = GameState::new();
        for &cell in cells {
            game.apply_move(cell);
        }
        game
    }

    #[test]
    fn test_new_game() {
        let game = GameState::new();
        assert_eq!(game.history().len(), 1);
        assert_eq!(game.current_move(), 0);
        assert_eq!(game.active_player(), Player::X);
        assert_eq!(game.current_board(), &Board::new());
        assert_eq!(game.status(), GameStatus::InProgress { next: Player::X });
    }

    #[test]
    fn test_moves_alternate() {
        let game = play(&[4, 0]);
        let board = game.current_board();
        assert_eq!(board.get(Position::Center), Square::Occupied(Player::X));
        assert_eq!(board.get(Position::TopLeft), Square::Occupied(Player::O));
        assert_eq!(game.active_player(), Player::X);
    }

    #[test]
    fn test_try_apply_move_reports_reason() {
        let mut game = play(&[4]);
        assert_eq!(
            game.try_apply_move(4),
            Err(MoveError::SquareOccupied(Position::Center))
        );
        assert_eq!(game.try_apply_move(9), Err(MoveError::OutOfBounds(9)));

        let mut won = play(&[0, 3, 1, 4, 2]);
        assert_eq!(won.try_apply_move(8), Err(MoveError::GameOver(Player::X)));
    }

    #[test]
    fn test_out_of_bounds_is_ignored() {
        let mut game = play(&[4]);
        let before = game.clone();
        game.apply_move(42);
        assert_eq!(game, before);
    }

    #[test]
    fn test_jump_back_then_play_branches() {
        let mut game = play(&[4, 0, 1]);
        game.jump_to(1);
        assert_eq!(game.active_player(), Player::O);
        assert_eq!(game.history().len(), 4);

        game.apply_move(8);
        assert_eq!(game.history().len(), 3);
        assert_eq!(game.current_move(), 2);
        assert_eq!(
            game.current_board().get(Position::BottomRight),
            Square::Occupied(Player::O)
        );
        assert!(game.current_board().is_empty(Position::TopLeft));
    }

    #[test]
    fn test_jump_does_not_touch_history() {
        let mut game = play(&[4, 0, 1]);
        let history = game.history().clone();
        game.jump_to(0);
        game.jump_to(3);
        assert_eq!(game.history(), &history);
    }

    #[test]
    #[should_panic(expected = "outside history")]
    fn test_jump_out_of_range_panics() {
        GameState::new().jump_to(1);
    }

    #[test]
    fn test_winner_after_jump_back_is_cleared() {
        let mut game = play(&[0, 3, 1, 4, 2]);
        assert!(game.status().is_over());
        game.jump_to(4);
        assert_eq!(game.winner(), None);
        assert_eq!(game.status(), GameStatus::InProgress { next: Player::X });
    }

    #[test]
    fn test_draw_status() {
        // X O X / X O O / O X X
        let game = play(&[0, 1, 2, 4, 3, 5, 7, 6, 8]);
        assert_eq!(game.status(), GameStatus::Draw);
        assert_eq!(game.status().to_string(), "Draw");
    }

    #[test]
    fn test_status_display() {
        assert_eq!(GameState::new().status().to_string(), "Next player: X");
        assert_eq!(play(&[0, 3, 1, 4, 2]).status().to_string(), "Winner: X");
    }

    #[test]
    fn test_deserialize_round_trip_keeps_position() {
        let mut game = play(&[4, 0, 1]);
        game.jump_to(1);
        let json = serde_json::to_string(&game).unwrap();
        let parsed: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, game);
        assert_eq!(parsed.active_player(), Player::O);
    }

    #[test]
    fn test_deserialize_rejects_current_move_outside_history() {
        let mut json = serde_json::to_value(GameState::new()).unwrap();
        json["current_move"] = serde_json::json!(7);
        let err = serde_json::from_value::<GameState>(json).unwrap_err();
        assert!(err.to_string().contains("Current move 7 outside history of 1"));
    }

    #[test]
    fn test_deserialize_rejects_empty_history() {
        let mut json = serde_json::to_value(GameState::new()).unwrap();
        json["history"]["boards"] = serde_json::json!([]);
        let err = serde_json::from_value::<GameState>(json).unwrap_err();
        assert!(err.to_string().contains("History is empty"));
    }

    #[test]
    fn test_toggle_sort_order_keeps_game() {
        let mut game = play(&[4, 0]);
        let history = game.history().clone();
        game.toggle_sort_order();
        assert_eq!(game.sort_order(), SortOrder::Descending);
        assert_eq!(game.history(), &history);
        assert_eq!(game.current_move(), 2);
    }
}

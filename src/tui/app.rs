//! Application state and key handling.

use super::input::{digit_cell, move_cursor, move_selection};
use crate::GameConfig;
use crate::games::tictactoe::{GameState, Position};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::{debug, info, instrument};

/// Which panel receives arrow keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The 3x3 board.
    #[default]
    Board,
    /// The move list.
    MoveList,
}

impl Focus {
    /// Switches to the other panel.
    pub fn toggle(self) -> Self {
        match self {
            Self::Board => Self::MoveList,
            Self::MoveList => Self::Board,
        }
    }
}

/// Main application state.
#[derive(Debug, Clone)]
pub struct App {
    game: GameState,
    cursor: Position,
    focus: Focus,
    /// History index highlighted in the move list.
    selected_move: usize,
    show_cell_numbers: bool,
    should_quit: bool,
}

impl App {
    /// Creates a new application from configuration.
    #[instrument(skip(config))]
    pub fn new(config: &GameConfig) -> Self {
        Self {
            game: GameState::with_sort_order(*config.sort_order()),
            cursor: Position::Center,
            focus: Focus::default(),
            selected_move: 0,
            show_cell_numbers: *config.show_cell_numbers(),
            should_quit: false,
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Focused panel.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// History index highlighted in the move list.
    pub fn selected_move(&self) -> usize {
        self.selected_move
    }

    /// Whether empty squares show their number.
    pub fn show_cell_numbers(&self) -> bool {
        self.show_cell_numbers
    }

    /// Whether the event loop should stop.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handles one key press.
    #[instrument(skip(self), fields(focus = ?self.focus))]
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.quit();
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.quit(),
            KeyCode::Tab | KeyCode::BackTab => {
                self.focus = self.focus.toggle();
                self.selected_move = self.game.current_move();
                debug!(focus = ?self.focus, "Focus changed");
            }
            KeyCode::Char('s') => self.game.toggle_sort_order(),
            code => match (digit_cell(code), self.focus) {
                (Some(cell), _) => self.play(cell),
                (None, Focus::Board) => self.handle_board_key(code),
                (None, Focus::MoveList) => self.handle_list_key(code),
            },
        }
    }

    fn handle_board_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Enter | KeyCode::Char(' ') => self.play(self.cursor.to_index()),
            code => self.cursor = move_cursor(self.cursor, code),
        }
    }

    fn handle_list_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Enter | KeyCode::Char(' ') => {
                if self.selected_move != self.game.current_move() {
                    self.game.jump_to(self.selected_move);
                }
            }
            code => {
                self.selected_move = move_selection(
                    self.selected_move,
                    self.game.history().len(),
                    self.game.sort_order(),
                    code,
                );
            }
        }
    }

    fn play(&mut self, cell: usize) {
        self.game.apply_move(cell);
        self.selected_move = self.game.current_move();
        if let Some(pos) = Position::from_index(cell) {
            self.cursor = pos;
        }
    }

    fn quit(&mut self) {
        info!("User quit");
        self.should_quit = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Player, SortOrder, Square};

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::from(code));
    }

    fn new_app() -> App {
        App::new(&GameConfig::default())
    }

    #[test]
    fn test_enter_plays_cursor_square() {
        let mut app = new_app();
        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Enter);

        let board = app.game().current_board();
        assert_eq!(board.get(Position::TopCenter), Square::Occupied(Player::X));
        assert_eq!(app.game().current_move(), 1);
    }

    #[test]
    fn test_digits_play_directly() {
        let mut app = new_app();
        press(&mut app, KeyCode::Char('1'));
        press(&mut app, KeyCode::Char('9'));

        let board = app.game().current_board();
        assert_eq!(board.get(Position::TopLeft), Square::Occupied(Player::X));
        assert_eq!(board.get(Position::BottomRight), Square::Occupied(Player::O));
        assert_eq!(app.cursor(), Position::BottomRight);
    }

    #[test]
    fn test_occupied_square_is_ignored() {
        let mut app = new_app();
        press(&mut app, KeyCode::Char('5'));
        press(&mut app, KeyCode::Char('5'));
        assert_eq!(app.game().history().len(), 2);
    }

    #[test]
    fn test_move_list_jump() {
        let mut app = new_app();
        for c in ['5', '1', '2'] {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focus(), Focus::MoveList);
        assert_eq!(app.selected_move(), 3);

        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.game().current_move(), 1);
        assert_eq!(app.game().history().len(), 4);

        // Playing from the past branches the history.
        press(&mut app, KeyCode::Char('9'));
        assert_eq!(app.game().history().len(), 3);
        assert_eq!(app.selected_move(), 2);
    }

    #[test]
    fn test_sort_toggle() {
        let mut app = new_app();
        press(&mut app, KeyCode::Char('s'));
        assert_eq!(app.game().sort_order(), SortOrder::Descending);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = new_app();
        assert!(!app.should_quit());
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit());

        let mut app = new_app();
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit());
    }
}

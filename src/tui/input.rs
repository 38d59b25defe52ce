//! Keyboard navigation helpers.

use crate::games::tictactoe::{Position, SortOrder};
use crossterm::event::KeyCode;

/// Moves the board cursor one square in the arrow's direction.
///
/// The cursor stops at the board edge.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let target = match key {
        KeyCode::Up => row.checked_sub(1).map(|r| (r, col)),
        KeyCode::Down => Some((row + 1, col)),
        KeyCode::Left => col.checked_sub(1).map(|c| (row, c)),
        KeyCode::Right => Some((row, col + 1)),
        _ => None,
    };

    target
        .and_then(|(r, c)| Position::from_row_col(r, c))
        .unwrap_or(cursor)
}

/// Moves a move list selection one entry up or down the list as displayed.
///
/// `selected` is a history index; `len` is the history length.
pub fn move_selection(selected: usize, len: usize, order: SortOrder, key: KeyCode) -> usize {
    let towards_newer = match (key, order) {
        (KeyCode::Down, SortOrder::Ascending) | (KeyCode::Up, SortOrder::Descending) => true,
        (KeyCode::Up, SortOrder::Ascending) | (KeyCode::Down, SortOrder::Descending) => false,
        _ => return selected,
    };

    if towards_newer {
        (selected + 1).min(len.saturating_sub(1))
    } else {
        selected.saturating_sub(1)
    }
}

/// Maps digit keys 1-9 to board cell indices 0-8.
pub fn digit_cell(key: KeyCode) -> Option<usize> {
    match key {
        KeyCode::Char(c) => match c.to_digit(10) {
            Some(d @ 1..=9) => Some(d as usize - 1),
            _ => None,
        },
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_moves_within_board() {
        assert_eq!(move_cursor(Position::Center, KeyCode::Up), Position::TopCenter);
        assert_eq!(move_cursor(Position::Center, KeyCode::Left), Position::MiddleLeft);
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Down), Position::MiddleLeft);
        assert_eq!(move_cursor(Position::BottomCenter, KeyCode::Right), Position::BottomRight);
    }

    #[test]
    fn test_cursor_stops_at_edges() {
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Up), Position::TopLeft);
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Left), Position::TopLeft);
        assert_eq!(move_cursor(Position::BottomRight, KeyCode::Down), Position::BottomRight);
        assert_eq!(move_cursor(Position::MiddleRight, KeyCode::Right), Position::MiddleRight);
        assert_eq!(move_cursor(Position::Center, KeyCode::Enter), Position::Center);
    }

    #[test]
    fn test_selection_follows_display_order() {
        assert_eq!(move_selection(1, 4, SortOrder::Ascending, KeyCode::Down), 2);
        assert_eq!(move_selection(1, 4, SortOrder::Descending, KeyCode::Down), 0);
        assert_eq!(move_selection(3, 4, SortOrder::Descending, KeyCode::Up), 3);
        assert_eq!(move_selection(0, 4, SortOrder::Ascending, KeyCode::Up), 0);
    }

    #[test]
    fn test_digit_cell() {
        assert_eq!(digit_cell(KeyCode::Char('1')), Some(0));
        assert_eq!(digit_cell(KeyCode::Char('9')), Some(8));
        assert_eq!(digit_cell(KeyCode::Char('0')), None);
        assert_eq!(digit_cell(KeyCode::Char('x')), None);
    }
}

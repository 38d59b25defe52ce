//! Move list rendering.

use super::super::app::{App, Focus};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, List, ListItem},
};

/// Renders the move list in the game's current sort order.
///
/// The entry for the displayed move is plain text; the rest are jump
/// targets, marked with `>` when selected.
pub fn render_move_list(f: &mut Frame, area: Rect, app: &App) {
    let game = app.game();
    let focused = app.focus() == Focus::MoveList;
    let current = game.current_move();

    let items: Vec<ListItem> = game
        .move_descriptions()
        .map(|entry| {
            let index = *entry.move_index();
            let selected = focused && index == app.selected_move();
            let marker = if selected { "> " } else { "  " };
            let style = if entry.is_current(current) {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else if selected {
                Style::default().fg(Color::Black).bg(Color::White)
            } else {
                Style::default()
            };
            ListItem::new(Line::styled(format!("{}{}", marker, entry), style))
        })
        .collect();

    let border = if focused { Color::Cyan } else { Color::DarkGray };
    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!("Moves ({})", game.history().len() - 1))
            .border_style(Style::default().fg(border)),
    );
    f.render_widget(list, area);
}

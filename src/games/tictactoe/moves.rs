//! Move list entries and their presentation order.

use serde::{Deserialize, Serialize};
use std::ops::Range;
use tracing::instrument;

/// Presentation order of the move list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Oldest move first.
    #[default]
    Ascending,
    /// Newest move first.
    Descending,
}

impl SortOrder {
    /// Flips between `Ascending` and `Descending`.
    #[instrument]
    pub fn toggle(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Label for the control that switches away from this order.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::Ascending => "Use descending order",
            Self::Descending => "Use ascending order",
        }
    }
}

/// Text shown for one move list entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display, Serialize, Deserialize)]
pub enum MoveLabel {
    /// Entry for the empty board.
    #[display("Go to game start")]
    GameStart,
    /// Entry for the snapshot currently on display.
    #[display("You are at move #{}", _0)]
    Current(usize),
    /// Any other entry.
    #[display("Go to move #{}", _0)]
    GoTo(usize),
}

/// One entry of the move list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_getters::Getters, Serialize, Deserialize)]
pub struct MoveDescription {
    /// History index this entry jumps to.
    move_index: usize,
    /// Text for the entry.
    label: MoveLabel,
}

impl MoveDescription {
    /// Builds the entry for `move_index` while `current_move` is displayed.
    pub fn new(move_index: usize, current_move: usize) -> Self {
        let label = if move_index == 0 {
            MoveLabel::GameStart
        } else if move_index == current_move {
            MoveLabel::Current(move_index)
        } else {
            MoveLabel::GoTo(move_index)
        };
        Self { move_index, label }
    }

    /// Whether this entry is the snapshot currently displayed.
    pub fn is_current(&self, current_move: usize) -> bool {
        self.move_index == current_move
    }
}

impl std::fmt::Display for MoveDescription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label)
    }
}

/// Lazy iterator over move list entries in a given [`SortOrder`].
#[derive(Debug, Clone)]
pub struct MoveDescriptions {
    indices: Range<usize>,
    current_move: usize,
    order: SortOrder,
}

impl MoveDescriptions {
    pub(super) fn new(len: usize, current_move: usize, order: SortOrder) -> Self {
        Self {
            indices: 0..len,
            current_move,
            order,
        }
    }
}

impl Iterator for MoveDescriptions {
    type Item = MoveDescription;

    fn next(&mut self) -> Option<Self::Item> {
        let index = match self.order {
            SortOrder::Ascending => self.indices.next(),
            SortOrder::Descending => self.indices.next_back(),
        }?;
        Some(MoveDescription::new(index, self.current_move))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.indices.size_hint()
    }
}

impl ExactSizeIterator for MoveDescriptions {}

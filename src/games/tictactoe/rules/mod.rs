//! Game rules for tic-tac-toe.
//!
//! Pure functions over a single board snapshot. Rules are kept apart from
//! history so that every derived value can be recomputed on demand.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{WinResult, evaluate};

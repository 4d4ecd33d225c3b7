//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`crate::Board`]. Keeping them apart from board
//! storage lets the model and its tests evaluate arbitrary positions.

mod draw;
mod win;

pub use draw::{is_draw, is_full};
pub use win::{WINNING_LINES, check_winner};

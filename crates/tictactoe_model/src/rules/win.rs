//! Win detection logic for tic-tac-toe.

use crate::{Board, Player, Position};
use tracing::instrument;

/// The 8 winning lines, scanned in this order.
pub const WINNING_LINES: [[Position; 3]; 8] = [
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

/// Checks if there is a winner on the board.
///
/// Returns the mark shared by the first fully matching line in
/// [`WINNING_LINES`] order, `None` if no line is complete.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Player> {
    WINNING_LINES.iter().find_map(|&[a, b, c]| {
        let player = board.get(a).player()?;
        (board.get(b) == board.get(a) && board.get(c) == board.get(a)).then_some(player)
    })
}

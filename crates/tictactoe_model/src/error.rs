//! Errors raised when the model rejects a move.

use crate::{Player, Position};
use derive_more::{Display, Error, From};

/// Message reported when a move targets an occupied square.
pub const SQUARE_OCCUPIED_ERROR_MSG: &str = "Square is already occupied";

/// Message reported when a move arrives after the game was won and the
/// post-win policy rejects it.
pub const GAME_OVER_ERROR_MSG: &str = "Game is already over";

/// The target square already holds a mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("{}", SQUARE_OCCUPIED_ERROR_MSG)]
pub struct OccupiedCellError {
    /// Position the move targeted.
    pub position: Position,
}

/// The game already has a winner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("{}", GAME_OVER_ERROR_MSG)]
pub struct GameOverError {
    /// Player who completed a line.
    pub winner: Player,
}

/// Reasons [`crate::Model::apply_move`] can fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From)]
pub enum MoveError {
    /// Square already marked.
    #[display("{_0}")]
    Occupied(OccupiedCellError),
    /// Winner already decided.
    #[display("{_0}")]
    GameOver(GameOverError),
}

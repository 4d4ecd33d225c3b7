//! Pure tic-tac-toe game logic.
//!
//! The [`Model`] owns a 3x3 [`Board`], tracks whose turn it is and caches
//! the winner after every accepted move. Nothing here performs I/O; the
//! HTTP boundary lives in the `decoupled_tictactoe` crate.
//!
//! # Example
//!
//! ```
//! use tictactoe_model::{Model, Player, Position};
//!
//! let mut model = Model::new();
//! for index in [0, 3, 1, 4, 2] {
//!     let pos = Position::from_index(index).unwrap();
//!     model.apply_move(pos).unwrap();
//! }
//! assert_eq!(model.winner(), Some(Player::X));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod model;
mod position;
pub mod rules;
mod types;

pub use error::{
    GAME_OVER_ERROR_MSG, GameOverError, MoveError, OccupiedCellError, SQUARE_OCCUPIED_ERROR_MSG,
};
pub use model::{Model, PostWinPolicy};
pub use position::Position;
pub use types::{Board, Player, Square};


//! Decoupled tic-tac-toe: a single game served over HTTP.
//!
//! # Architecture
//!
//! - **Model** (`tictactoe_model`): board, turns, win detection
//! - **Controller**: validates requests and drives the model
//! - **View**: renders model state as JSON
//! - **State**: the injectable, mutex-guarded game handle
//!
//! # Example
//!
//! ```no_run
//! use decoupled_tictactoe::{ServerConfig, serve};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = ServerConfig::load(None)?;
//! serve(&config).await?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod controller;
mod error;
mod server;
mod state;
mod view;

pub mod cli;

// Crate-level exports - Configuration
pub use config::{DEFAULT_CONFIG_PATH, ServerConfig};

// Crate-level exports - Request boundary
pub use controller::validate_index;
pub use error::{ApiError, ConfigError, INVALID_MOVE_ERROR_MSG, InvalidMoveError};
pub use server::{create_app, serve};
pub use state::AppState;
pub use view::{BoardResponse, ErrorResponse, HealthResponse, PlayerResponse, WinnerResponse};

// Crate-level exports - Game types
pub use tictactoe_model::{
    Board, GAME_OVER_ERROR_MSG, GameOverError, Model, MoveError, OccupiedCellError, Player,
    Position, PostWinPolicy, SQUARE_OCCUPIED_ERROR_MSG, Square,
};

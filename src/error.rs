//! Errors surfaced at the HTTP boundary.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use derive_more::{Display, Error, From};
use tictactoe_model::MoveError;
use tracing::instrument;

use crate::view;

/// Message reported for any index that is not an integer in 0..=8.
pub const INVALID_MOVE_ERROR_MSG: &str = "Invalid move: index must be an integer between 0 and 8";

/// A move index that could not be parsed or fell off the board.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("{}", INVALID_MOVE_ERROR_MSG)]
pub struct InvalidMoveError {
    /// The index exactly as the client sent it.
    pub raw: String,
}

impl InvalidMoveError {
    /// Creates an invalid-move error for the given raw input.
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }
}

/// Anything a request can fail with.
///
/// Every variant is a client error, so all of them render as
/// `400 {"error": "<message>"}` and differ only in message text.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error, From)]
pub enum ApiError {
    /// Index failed validation.
    #[display("{_0}")]
    InvalidMove(InvalidMoveError),
    /// The model refused the move.
    #[display("{_0}")]
    Move(MoveError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        view::error(self.to_string(), StatusCode::BAD_REQUEST)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

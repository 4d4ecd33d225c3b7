//! JSON rendering of model state.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use tictactoe_model::{Board, Player};

/// Body of `GET /board` and of a successful move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardResponse {
    /// Nine entries in row-major order, each `""`, `"X"` or `"O"`.
    pub squares: Vec<String>,
}

/// Body of `GET /winner`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinnerResponse {
    /// `null` until a line is complete.
    pub winner: Option<Player>,
}

/// Body of `GET /player`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerResponse {
    /// Player whose mark the next accepted move places.
    pub player: Player,
}

/// Body of `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `"ok"`.
    pub status: String,
}

/// Body of every 4xx response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable reason.
    pub error: String,
}

/// Renders a board.
pub fn board_state(board: &Board) -> Json<BoardResponse> {
    Json(BoardResponse {
        squares: board
            .squares()
            .iter()
            .map(|square| square.symbol().to_string())
            .collect(),
    })
}

/// Renders the winner.
pub fn winner(winner: Option<Player>) -> Json<WinnerResponse> {
    Json(WinnerResponse { winner })
}

/// Renders the current player.
pub fn player(player: Player) -> Json<PlayerResponse> {
    Json(PlayerResponse { player })
}

/// Renders the health check.
pub fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

/// Renders an error message with the given status.
pub fn error(message: impl Into<String>, status: StatusCode) -> Response {
    (
        status,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
        .into_response()
}

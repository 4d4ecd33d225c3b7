//! Request handlers: validate input, call the model, render the result.

use axum::Json;
use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::http::Uri;
use tictactoe_model::Position;
use tracing::{debug, error, info, instrument};

use crate::error::{ApiError, InvalidMoveError};
use crate::state::AppState;
use crate::view::{self, BoardResponse, HealthResponse, PlayerResponse, WinnerResponse};

/// Parses a raw move index.
///
/// Surrounding whitespace is ignored. Anything that is not an integer in
/// `0..=8` is an [`InvalidMoveError`].
#[instrument]
pub fn validate_index(raw: &str) -> Result<Position, InvalidMoveError> {
    raw.trim()
        .parse::<i64>()
        .ok()
        .and_then(|index| usize::try_from(index).ok())
        .and_then(Position::from_index)
        .ok_or_else(|| InvalidMoveError::new(raw))
}

/// `GET /board`
#[instrument(skip(state))]
pub async fn get_board_state(State(state): State<AppState>) -> Json<BoardResponse> {
    let board = state.board().await;
    debug!(board = %board.display(), "Board requested");
    view::board_state(&board)
}

/// `GET /winner`
#[instrument(skip(state))]
pub async fn get_winner(State(state): State<AppState>) -> Json<WinnerResponse> {
    let winner = state.winner().await;
    debug!(?winner, "Winner requested");
    view::winner(winner)
}

/// `GET /player`
#[instrument(skip(state))]
pub async fn get_current_player(State(state): State<AppState>) -> Json<PlayerResponse> {
    let player = state.current_player().await;
    debug!(%player, "Current player requested");
    view::player(player)
}

/// `GET /health`
pub async fn health() -> Json<HealthResponse> {
    view::health()
}

/// `POST /move/{index}` and `PUT /move/{index}`
///
/// Responds with the board after the move. Invalid indices and refused
/// moves come back as 400 with the error message.
#[instrument(skip(state, index))]
pub async fn make_move(
    State(state): State<AppState>,
    uri: Uri,
    index: Result<Path<String>, PathRejection>,
) -> Result<Json<BoardResponse>, ApiError> {
    // Undecodable segments (e.g. `%FF`) are invalid moves like any other.
    let parsed = match index {
        Ok(Path(index)) => validate_index(&index),
        Err(rejection) => {
            debug!(%rejection, "Index segment rejected");
            Err(InvalidMoveError::new(raw_segment(&uri)))
        }
    };
    let pos = parsed.map_err(|e| {
        error!(raw_index = %e.raw, error = %e, "Error making move");
        e
    })?;

    let board = state.apply_move(pos).await.map_err(|e| {
        error!(index = pos.to_index(), error = %e, "Error making move");
        e
    })?;

    info!(index = pos.to_index(), position = pos.label(), "Move accepted");
    Ok(view::board_state(&board))
}

/// Last path segment, still percent-encoded.
fn raw_segment(uri: &Uri) -> &str {
    uri.path().rsplit('/').next().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::INVALID_MOVE_ERROR_MSG;

    #[test]
    fn test_valid_indices() {
        for i in 0..9 {
            let pos = validate_index(&i.to_string()).unwrap();
            assert_eq!(pos.to_index(), i);
        }
    }

    #[test]
    fn test_whitespace_and_sign_accepted() {
        assert_eq!(validate_index(" 4 ").unwrap(), Position::Center);
        assert_eq!(validate_index("+8").unwrap(), Position::BottomRight);
    }

    #[test]
    fn test_rejects_non_integer() {
        for raw in ["abc", "", "4.0", "1e1", "four", "0_4", "\u{ff14}"] {
            let err = validate_index(raw).unwrap_err();
            assert_eq!(err.raw, raw);
            assert_eq!(err.to_string(), INVALID_MOVE_ERROR_MSG);
        }
    }

    #[test]
    fn test_raw_segment_keeps_encoding() {
        let uri: Uri = "/move/%FF".parse().unwrap();
        assert_eq!(raw_segment(&uri), "%FF");
    }

    #[test]
    fn test_rejects_out_of_range() {
        for raw in ["9", "-1", "100", "99999999999999999999999"] {
            let err = validate_index(raw).unwrap_err();
            assert_eq!(err.to_string(), INVALID_MOVE_ERROR_MSG);
        }
    }
}

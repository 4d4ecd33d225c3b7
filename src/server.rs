//! Router construction and the serve loop.

use anyhow::Result;
use axum::Router;
use axum::body::Body;
use axum::http::Request;
use axum::routing::{get, post};
use tower::ServiceBuilder;
use tracing::{error, info, instrument};

use crate::config::ServerConfig;
use crate::controller::{get_board_state, get_current_player, get_winner, health, make_move};
use crate::state::AppState;

/// Builds the application router around the given game state.
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/board", get(get_board_state))
        .route("/winner", get(get_winner))
        .route("/player", get(get_current_player))
        .route("/move/{index}", post(make_move).put(make_move))
        .route("/health", get(health))
        .layer(ServiceBuilder::new().map_request(log_request))
        .with_state(state)
}

fn log_request(req: Request<Body>) -> Request<Body> {
    info!(method = %req.method(), uri = %req.uri(), "Incoming HTTP request");
    req
}

/// Binds to the configured address and serves until Ctrl+C.
#[instrument(skip(config), fields(host = %config.host(), port = *config.port()))]
pub async fn serve(config: &ServerConfig) -> Result<()> {
    let state = AppState::new(*config.post_win_policy());
    let app = create_app(state);

    let listener = tokio::net::TcpListener::bind((config.host().as_str(), *config.port())).await?;
    info!(addr = %listener.local_addr()?, "Server ready");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down gracefully");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received, stopping server"),
        Err(e) => error!(error = %e, "Failed to listen for Ctrl+C"),
    }
}

//! Shared application state.

use std::sync::Arc;

use tictactoe_model::{Board, Model, MoveError, Player, Position, PostWinPolicy};
use tokio::sync::Mutex;
use tracing::{info, instrument};

/// Handle to the one game this server hosts.
///
/// Cloning is cheap and every clone refers to the same game. Moves take
/// the lock for the whole validate-apply-snapshot sequence, so concurrent
/// requests are applied one at a time.
#[derive(Debug, Clone)]
pub struct AppState {
    model: Arc<Mutex<Model>>,
}

impl AppState {
    /// Creates state around a fresh game.
    #[instrument]
    pub fn new(policy: PostWinPolicy) -> Self {
        info!(%policy, "Creating game state");
        Self::with_model(Model::with_policy(policy))
    }

    /// Creates state around an existing model.
    pub fn with_model(model: Model) -> Self {
        Self {
            model: Arc::new(Mutex::new(model)),
        }
    }

    /// Copy of the current board.
    pub async fn board(&self) -> Board {
        self.model.lock().await.board_snapshot()
    }

    /// Cached winner.
    pub async fn winner(&self) -> Option<Player> {
        self.model.lock().await.winner()
    }

    /// Player to move.
    pub async fn current_player(&self) -> Player {
        self.model.lock().await.current_player()
    }

    /// Applies a move and returns the resulting board.
    #[instrument(skip(self))]
    pub async fn apply_move(&self, pos: Position) -> Result<Board, MoveError> {
        let mut model = self.model.lock().await;
        model.apply_move(pos)?;
        if model.is_draw() {
            info!("Board full with no winner");
        }
        Ok(model.board_snapshot())
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(PostWinPolicy::default())
    }
}

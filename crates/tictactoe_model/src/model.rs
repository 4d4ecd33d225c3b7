//! The game model: board, turn order and cached winner.

use crate::error::{GameOverError, MoveError, OccupiedCellError};
use crate::rules;
use crate::{Board, Player, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// What the model does with a move that arrives after a winner exists.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum PostWinPolicy {
    /// Keep accepting moves on empty squares. The winner stays cached.
    #[default]
    Continue,
    /// Refuse every move once a winner is known.
    Reject,
}

/// Complete game state for a single game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Model {
    board: Board,
    current_player: Player,
    winner: Option<Player>,
    policy: PostWinPolicy,
}

impl Model {
    /// Creates a new game: empty board, X to move.
    pub fn new() -> Self {
        Self::with_policy(PostWinPolicy::default())
    }

    /// Creates a new game with an explicit post-win policy.
    #[instrument]
    pub fn with_policy(policy: PostWinPolicy) -> Self {
        debug!("Creating new game");
        Self {
            board: Board::new(),
            current_player: Player::X,
            winner: None,
            policy,
        }
    }

    /// Returns whose turn it is.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the cached winner, if any.
    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    /// Returns the post-win policy in effect.
    pub fn policy(&self) -> PostWinPolicy {
        self.policy
    }

    /// Returns a copy of the board.
    pub fn board_snapshot(&self) -> Board {
        self.board.clone()
    }

    /// True when every square is marked.
    pub fn is_full(&self) -> bool {
        rules::is_full(&self.board)
    }

    /// True when the board is full and nobody won.
    pub fn is_draw(&self) -> bool {
        rules::is_draw(&self.board)
    }

    /// Places the current player's mark at `pos`.
    ///
    /// On success the turn passes to the opponent and the winner is
    /// recomputed from scratch. On failure the model is untouched.
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn apply_move(&mut self, pos: Position) -> Result<(), MoveError> {
        if let (PostWinPolicy::Reject, Some(winner)) = (self.policy, self.winner) {
            debug!(%winner, "Move refused, game already won");
            return Err(GameOverError { winner }.into());
        }

        if !self.board.is_empty(pos) {
            debug!(%pos, "Move refused, square occupied");
            return Err(OccupiedCellError { position: pos }.into());
        }

        let player = self.current_player;
        self.board.set(pos, Square::Occupied(player));
        self.current_player = player.opponent();
        self.winner = rules::check_winner(&self.board);

        if let Some(winner) = self.winner {
            info!(%winner, "Line completed");
        }
        debug!(board = %self.board.display(), "Move applied");
        Ok(())
    }
}

impl Default for Model {
    fn default() -> Self {
        Self::new()
    }
}

//! Session errors.

use gambit_core::{BoardError, MoveError};

use crate::registry::GameId;

/// Errors returned by [`GameRegistry`](crate::GameRegistry) operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    /// No game is registered under this id.
    #[error("unknown game {id}")]
    UnknownGame {
        /// The id that was looked up.
        id: GameId,
    },

    /// The registry already holds its configured maximum.
    #[error("game limit of {limit} reached")]
    TooManyGames {
        /// The configured maximum.
        limit: usize,
    },

    /// The configured starting state is not a valid board.
    #[error("invalid starting state: {0}")]
    InvalidStartingState(#[from] BoardError),

    /// The engine rejected a move.
    #[error(transparent)]
    Move(#[from] MoveError),

    /// Move text could not be parsed into a move.
    #[error("invalid move text: {text}")]
    InvalidMoveText {
        /// The text that failed to parse.
        text: String,
    },
}

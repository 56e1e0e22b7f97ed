//! Error types for board and engine operations

use thiserror::Error;

use crate::board::Pos;

/// Errors returned by board mutations and move requests.
///
/// None of these leave the board modified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("move {0} is outside the board")]
    OutOfBounds(Pos),

    #[error("cell {0} is already occupied")]
    Occupied(Pos),

    #[error("no moves to undo")]
    EmptyHistory,

    #[error("no legal move available")]
    NoLegalMove,
}

impl GameError {
    /// True for the two ways a move can be rejected
    pub fn is_invalid_move(&self) -> bool {
        matches!(self, GameError::OutOfBounds(_) | GameError::Occupied(_))
    }
}

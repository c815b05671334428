//! Error type for board construction, coordinates, and moves.

use thiserror::Error;

use crate::topology::MAX_FACTOR;

/// Errors reported by the board. None of them leave the board modified.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("invalid coordinate: {0}")]
    InvalidCoordinate(String),

    #[error("illegal move: {0}")]
    IllegalMove(String),

    #[error("invalid board factor {0}: expected 1 to {}", MAX_FACTOR)]
    InvalidFactor(usize),

    #[error("invalid setup: {0}")]
    InvalidSetup(String),
}

impl BoardError {
    pub(crate) fn coordinate(reason: impl Into<String>) -> Self {
        BoardError::InvalidCoordinate(reason.into())
    }

    pub(crate) fn illegal(reason: impl Into<String>) -> Self {
        BoardError::IllegalMove(reason.into())
    }
}

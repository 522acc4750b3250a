//! Engine-wide error taxonomy.
//!
//! All errors are raised synchronously and are caller-recoverable: a failed
//! action leaves the game untouched, so the caller can retry with corrected
//! input. Boundary layers (CLI, service wrappers) convert these into
//! structured failure output using [`EngineError::code`].

use thiserror::Error;

/// Entities a lookup can miss.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum NotFoundKind {
    Puzzle,
    Category,
    Team,
    Game,
}

/// Central engine error type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Action attempted outside its valid game/turn state.
    #[error("illegal state: {0}")]
    IllegalState(String),
    /// Malformed letter, guess, or name input.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("letter '{0}' has already been guessed")]
    AlreadyGuessed(char),
    #[error("round {0} is already completed")]
    AlreadyCompleted(u32),
    #[error("insufficient funds: need ${needed}, have ${available}")]
    InsufficientFunds { needed: u32, available: u32 },
    #[error("invalid amount: {0}")]
    InvalidAmount(i64),
    #[error("not found ({kind:?}): {detail}")]
    NotFound { kind: NotFoundKind, detail: String },
    /// Puzzle catalog could not be read or written.
    #[error("storage error: {0}")]
    Storage(String),
}

impl EngineError {
    pub fn illegal_state(detail: impl Into<String>) -> Self {
        Self::IllegalState(detail.into())
    }

    pub fn invalid_input(detail: impl Into<String>) -> Self {
        Self::InvalidInput(detail.into())
    }

    pub fn not_found(kind: NotFoundKind, detail: impl Into<String>) -> Self {
        Self::NotFound {
            kind,
            detail: detail.into(),
        }
    }

    /// Stable machine-readable code for boundary layers.
    pub fn code(&self) -> &'static str {
        match self {
            EngineError::IllegalState(_) => "ILLEGAL_STATE",
            EngineError::InvalidInput(_) => "INVALID_INPUT",
            EngineError::AlreadyGuessed(_) => "ALREADY_GUESSED",
            EngineError::AlreadyCompleted(_) => "ALREADY_COMPLETED",
            EngineError::InsufficientFunds { .. } => "INSUFFICIENT_FUNDS",
            EngineError::InvalidAmount(_) => "INVALID_AMOUNT",
            EngineError::NotFound { .. } => "NOT_FOUND",
            EngineError::Storage(_) => "STORAGE",
        }
    }
}

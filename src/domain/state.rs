//! Game- and turn-level state enums.

use serde::{Deserialize, Serialize};

/// Game-level lifecycle. Progression is monotonic except for the
/// `RoundCompleted` / `InProgress` alternation between rounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GameState {
    Setup,
    InProgress,
    RoundCompleted,
    GameCompleted,
}

/// Turn-level cycle within `InProgress`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TurnState {
    WaitingForSpin,
    WaitingForLetterGuess,
    WaitingForSolveAttempt,
    TurnEnded,
}

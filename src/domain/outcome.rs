//! Per-action result records returned to the boundary layer.
//!
//! Each action has its own outcome struct carrying only the fields relevant
//! to that action, instead of a single catch-all record with optional keys.

use serde::{Deserialize, Serialize};

use crate::domain::team::TeamId;
use crate::domain::wheel::WheelResult;

/// Next input the caller must collect when the turn continues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionRequired {
    GuessConsonant,
    SpinAgain,
}

/// Result of feeding a wheel-spin outcome into the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpinOutcome {
    pub wheel: WheelResult,
    pub team_id: TeamId,
    pub team: String,
    pub turn_continues: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action_required: Option<ActionRequired>,
    pub message: String,
}

/// Result of a consonant guess.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuessOutcome {
    pub letter: char,
    pub in_puzzle: bool,
    pub team_id: TeamId,
    pub team: String,
    pub money_earned: u32,
    pub turn_continues: bool,
    pub puzzle_solved: bool,
    pub message: String,
}

/// Result of a vowel purchase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseOutcome {
    pub vowel: char,
    pub cost: u32,
    pub in_puzzle: bool,
    pub team_id: TeamId,
    pub team: String,
    pub turn_continues: bool,
    pub puzzle_solved: bool,
    pub message: String,
}

/// Result of a whole-phrase solve attempt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolveOutcome {
    pub guess: String,
    pub correct: bool,
    pub team_id: TeamId,
    pub team: String,
    pub solution: String,
    pub turn_continues: bool,
    pub message: String,
}

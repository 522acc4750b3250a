//! One puzzle-solving contest within a game.

use crate::domain::puzzle::Puzzle;
use crate::domain::team::{Team, TeamId};
use crate::error::EngineError;

/// Binds one puzzle to a 1-based round number and records completion.
/// The winning team is referenced by id, never by embedded pointer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    puzzle: Puzzle,
    round_number: u32,
    is_completed: bool,
    winning_team_id: Option<TeamId>,
}

impl Round {
    pub fn new(puzzle: Puzzle, round_number: u32) -> Result<Self, EngineError> {
        if round_number < 1 {
            return Err(EngineError::invalid_input("round number must be at least 1"));
        }
        Ok(Self {
            puzzle,
            round_number,
            is_completed: false,
            winning_team_id: None,
        })
    }

    pub fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    pub(crate) fn puzzle_mut(&mut self) -> &mut Puzzle {
        &mut self.puzzle
    }

    pub fn round_number(&self) -> u32 {
        self.round_number
    }

    pub fn is_completed(&self) -> bool {
        self.is_completed
    }

    pub fn winning_team_id(&self) -> Option<TeamId> {
        self.winning_team_id
    }

    /// Complete the round with the given winner. This is the single path by
    /// which round money becomes total money.
    pub fn complete(&mut self, winner: &mut Team) -> Result<(), EngineError> {
        if self.is_completed {
            return Err(EngineError::AlreadyCompleted(self.round_number));
        }
        self.is_completed = true;
        self.winning_team_id = Some(winner.id());
        winner.win_round();
        Ok(())
    }

    /// Clear all guessed letters. Refused once the round is completed.
    pub fn reset_puzzle(&mut self) -> Result<(), EngineError> {
        if self.is_completed {
            return Err(EngineError::illegal_state(
                "cannot reset the puzzle of a completed round",
            ));
        }
        self.puzzle.reset();
        Ok(())
    }
}

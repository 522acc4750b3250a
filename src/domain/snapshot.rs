//! Read-only status projection over a game.
//!
//! Snapshots never mutate state and are safe to capture in any game state,
//! including `Setup` (where the puzzle block is omitted).

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::game::Game;
use crate::domain::state::{GameState, TurnState};
use crate::domain::team::TeamId;
use crate::domain::wheel::WheelResult;

/// Public info about a single team.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamStatus {
    pub team_id: TeamId,
    pub name: String,
    pub members: Vec<String>,
    pub current_round_money: u32,
    pub total_money: u32,
    pub has_free_spin: bool,
    pub is_current_turn: bool,
}

/// Public view of the current puzzle board. Never exposes the solution.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleStatus {
    pub category: String,
    pub display: String,
    pub guessed_letters: Vec<char>,
    pub available_consonants: Vec<char>,
    pub available_vowels: Vec<char>,
}

/// Top-level game snapshot.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameStatus {
    pub game_id: Uuid,
    pub game_state: GameState,
    pub turn_state: TurnState,
    /// 1-based for presentation.
    pub current_round: u32,
    pub total_rounds: u32,
    pub teams: Vec<TeamStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_puzzle: Option<PuzzleStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_wheel_result: Option<WheelResult>,
}

impl GameStatus {
    pub fn of(game: &Game) -> Self {
        let teams = game
            .teams()
            .iter()
            .enumerate()
            .map(|(i, team)| TeamStatus {
                team_id: team.id(),
                name: team.name().to_string(),
                members: team.members().to_vec(),
                current_round_money: team.current_round_money(),
                total_money: team.total_money(),
                has_free_spin: team.has_free_spin(),
                is_current_turn: i == game.current_team_index(),
            })
            .collect();

        let current_puzzle = if game.game_state() == GameState::Setup {
            None
        } else {
            let puzzle = game.rounds()[game.current_round_index()].puzzle();
            Some(PuzzleStatus {
                category: puzzle.category().to_string(),
                display: puzzle.display(),
                guessed_letters: puzzle.guessed_letters().iter().copied().collect(),
                available_consonants: puzzle.available_consonants(),
                available_vowels: puzzle.available_vowels(),
            })
        };

        Self {
            game_id: game.id(),
            game_state: game.game_state(),
            turn_state: game.turn_state(),
            current_round: game.current_round_index() as u32 + 1,
            total_rounds: game.total_rounds(),
            teams,
            current_puzzle,
            last_wheel_result: game.last_wheel_result(),
        }
    }
}

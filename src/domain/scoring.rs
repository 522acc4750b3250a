//! Scoring projections: leaderboard, standings, and summaries.
//!
//! Everything here is a read-only view over `&Game`; no function in this
//! module mutates game state.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::game::Game;
use crate::domain::state::GameState;
use crate::domain::team::TeamId;
use crate::error::{EngineError, NotFoundKind};

/// One row of the total-money leaderboard.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub position: usize,
    pub team_id: TeamId,
    pub team_name: String,
    pub members: Vec<String>,
    pub total_money: u32,
    pub current_round_money: u32,
    pub has_free_spin: bool,
}

/// One row of the current-round standings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundStanding {
    pub position: usize,
    pub team_id: TeamId,
    pub team_name: String,
    pub current_round_money: u32,
    pub total_money: u32,
}

/// Detailed statistics for one team.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamStats {
    pub team_id: TeamId,
    pub team_name: String,
    pub members: Vec<String>,
    pub total_money: u32,
    pub current_round_money: u32,
    pub rounds_won: u32,
    pub has_free_spin: bool,
    pub member_count: usize,
}

/// Winner record of one completed round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundWinner {
    pub round_number: u32,
    pub team_id: TeamId,
    pub team_name: String,
    pub puzzle_category: String,
    pub puzzle_solution: String,
}

/// High-level scoring summary of the whole game.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameSummary {
    pub game_id: Uuid,
    pub total_teams: usize,
    pub total_rounds: u32,
    pub completed_rounds: u32,
    pub current_round: u32,
    pub total_money_in_play: u32,
    pub highest_total_money: u32,
    pub highest_round_money: u32,
    pub game_state: GameState,
    pub leader: Option<LeaderboardEntry>,
    pub round_winners: Vec<RoundWinner>,
}

/// Teams sorted by banked total money, highest first.
pub fn leaderboard(game: &Game) -> Vec<LeaderboardEntry> {
    let mut teams: Vec<_> = game.teams().iter().collect();
    teams.sort_by(|a, b| b.total_money().cmp(&a.total_money()));
    teams
        .into_iter()
        .enumerate()
        .map(|(i, team)| LeaderboardEntry {
            position: i + 1,
            team_id: team.id(),
            team_name: team.name().to_string(),
            members: team.members().to_vec(),
            total_money: team.total_money(),
            current_round_money: team.current_round_money(),
            has_free_spin: team.has_free_spin(),
        })
        .collect()
}

/// Teams sorted by at-risk round money, highest first.
pub fn round_standings(game: &Game) -> Vec<RoundStanding> {
    let mut teams: Vec<_> = game.teams().iter().collect();
    teams.sort_by(|a, b| b.current_round_money().cmp(&a.current_round_money()));
    teams
        .into_iter()
        .enumerate()
        .map(|(i, team)| RoundStanding {
            position: i + 1,
            team_id: team.id(),
            team_name: team.name().to_string(),
            current_round_money: team.current_round_money(),
            total_money: team.total_money(),
        })
        .collect()
}

/// Statistics for a single team, including rounds won.
pub fn team_stats(game: &Game, team_id: TeamId) -> Result<TeamStats, EngineError> {
    let team = game
        .teams()
        .iter()
        .find(|t| t.id() == team_id)
        .ok_or_else(|| EngineError::not_found(NotFoundKind::Team, format!("team {team_id}")))?;
    let rounds_won = game
        .rounds()
        .iter()
        .filter(|r| r.is_completed() && r.winning_team_id() == Some(team_id))
        .count() as u32;
    Ok(TeamStats {
        team_id: team.id(),
        team_name: team.name().to_string(),
        members: team.members().to_vec(),
        total_money: team.total_money(),
        current_round_money: team.current_round_money(),
        rounds_won,
        has_free_spin: team.has_free_spin(),
        member_count: team.member_count(),
    })
}

/// Comprehensive scoring summary.
pub fn game_summary(game: &Game) -> GameSummary {
    let teams = game.teams();
    let total_money_in_play = teams
        .iter()
        .map(|t| t.total_money() + t.current_round_money())
        .sum();
    let highest_total_money = teams.iter().map(|t| t.total_money()).max().unwrap_or(0);
    let highest_round_money = teams
        .iter()
        .map(|t| t.current_round_money())
        .max()
        .unwrap_or(0);
    let completed_rounds = game.rounds().iter().filter(|r| r.is_completed()).count() as u32;

    let round_winners = game
        .rounds()
        .iter()
        .filter_map(|round| {
            let winner_id = round.winning_team_id()?;
            let team = teams.iter().find(|t| t.id() == winner_id)?;
            Some(RoundWinner {
                round_number: round.round_number(),
                team_id: winner_id,
                team_name: team.name().to_string(),
                puzzle_category: round.puzzle().category().to_string(),
                puzzle_solution: round.puzzle().solution().to_string(),
            })
        })
        .collect();

    GameSummary {
        game_id: game.id(),
        total_teams: teams.len(),
        total_rounds: game.total_rounds(),
        completed_rounds,
        current_round: game.current_round_index() as u32 + 1,
        total_money_in_play,
        highest_total_money,
        highest_round_money,
        game_state: game.game_state(),
        leader: leaderboard(game).into_iter().next(),
        round_winners,
    }
}

//! Live-game registry and setup orchestration.
//!
//! The registry hands out one puzzle per round from the catalog at game
//! setup and keeps each live game behind a single mutex. Nearly every
//! action reads and writes overlapping state (current team, turn state,
//! puzzle), so one serialization point per game id is the only locking
//! granularity that makes sense.

use std::sync::Arc;

use dashmap::DashMap;
use parking_lot::Mutex;
use tracing::info;
use uuid::Uuid;

use crate::domain::game::Game;
use crate::domain::round::Round;
use crate::domain::team::Team;
use crate::error::{EngineError, NotFoundKind};
use crate::services::puzzles::PuzzleCatalog;

/// Team description supplied by the caller at game creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamSpec {
    pub name: String,
    pub members: Vec<String>,
}

/// Creates games from the puzzle catalog and tracks them by id.
pub struct GameService {
    catalog: Mutex<PuzzleCatalog>,
    games: DashMap<Uuid, Arc<Mutex<Game>>>,
}

impl GameService {
    pub fn new(catalog: PuzzleCatalog) -> Self {
        Self {
            catalog: Mutex::new(catalog),
            games: DashMap::new(),
        }
    }

    /// Create a game in `Setup`: build the teams, draw one random puzzle
    /// per round, and register the game. The caller starts it separately.
    pub fn create_game(
        &self,
        teams: Vec<TeamSpec>,
        total_rounds: u32,
        vowel_cost: u32,
    ) -> Result<Uuid, EngineError> {
        let teams = teams
            .into_iter()
            .map(|spec| Team::new(&spec.name, spec.members))
            .collect::<Result<Vec<_>, _>>()?;
        let mut game = Game::with_vowel_cost(teams, total_rounds, vowel_cost)?;

        let catalog = self.catalog.lock();
        for round_number in 1..=total_rounds {
            let puzzle = catalog.random_puzzle(None)?;
            game.add_round(Round::new(puzzle, round_number)?)?;
        }
        drop(catalog);

        let game_id = game.id();
        info!(
            game_id = %game_id,
            teams = game.teams().len(),
            rounds = total_rounds,
            "Game created"
        );
        self.games.insert(game_id, Arc::new(Mutex::new(game)));
        Ok(game_id)
    }

    /// Handle to a live game, for callers that manage locking themselves.
    pub fn game(&self, game_id: Uuid) -> Result<Arc<Mutex<Game>>, EngineError> {
        self.games
            .get(&game_id)
            .map(|entry| Arc::clone(entry.value()))
            .ok_or_else(|| {
                EngineError::not_found(NotFoundKind::Game, format!("no game {game_id}"))
            })
    }

    /// Run one action against a game under its mutex.
    pub fn with_game<T>(
        &self,
        game_id: Uuid,
        f: impl FnOnce(&mut Game) -> Result<T, EngineError>,
    ) -> Result<T, EngineError> {
        let game = self.game(game_id)?;
        let mut guard = game.lock();
        f(&mut guard)
    }

    pub fn remove_game(&self, game_id: Uuid) -> Result<(), EngineError> {
        self.games.remove(&game_id).map(|_| ()).ok_or_else(|| {
            EngineError::not_found(NotFoundKind::Game, format!("no game {game_id}"))
        })
    }

    /// Run a read or mutation against the shared puzzle catalog.
    pub fn with_catalog<T>(&self, f: impl FnOnce(&mut PuzzleCatalog) -> T) -> T {
        f(&mut self.catalog.lock())
    }
}

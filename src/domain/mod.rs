//! Domain layer: pure game-state types and transitions, no I/O.

pub mod game;
pub mod outcome;
pub mod puzzle;
pub mod round;
pub mod rules;
pub mod scoring;
pub mod snapshot;
pub mod state;
pub mod team;
pub mod wheel;

#[cfg(test)]
mod tests_integration;
#[cfg(test)]
mod tests_props;
#[cfg(test)]
mod tests_puzzle;
#[cfg(test)]
mod tests_team_round;

// Re-exports for ergonomics
pub use game::Game;
pub use outcome::{ActionRequired, GuessOutcome, PurchaseOutcome, SolveOutcome, SpinOutcome};
pub use puzzle::Puzzle;
pub use round::Round;
pub use snapshot::GameStatus;
pub use state::{GameState, TurnState};
pub use team::{Team, TeamId};
pub use wheel::WheelResult;

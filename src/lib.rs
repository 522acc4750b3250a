#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod config;
pub mod domain;
pub mod error;
pub mod services;

#[cfg(test)]
pub mod test_bootstrap;

// Re-exports for public API
pub use config::EngineConfig;
pub use domain::game::Game;
pub use domain::outcome::{
    ActionRequired, GuessOutcome, PurchaseOutcome, SolveOutcome, SpinOutcome,
};
pub use domain::puzzle::Puzzle;
pub use domain::round::Round;
pub use domain::snapshot::GameStatus;
pub use domain::state::{GameState, TurnState};
pub use domain::team::{Team, TeamId};
pub use domain::wheel::WheelResult;
pub use error::{EngineError, NotFoundKind};
pub use services::games::{GameService, TeamSpec};
pub use services::puzzles::PuzzleCatalog;

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_bootstrap::logging::init();
}

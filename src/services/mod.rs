//! Orchestration around the pure domain: puzzle storage and live games.

pub mod games;
pub mod puzzles;

//! Environment-driven engine configuration.

use std::env;
use std::path::PathBuf;

use crate::domain::rules::{DEFAULT_TOTAL_ROUNDS, VOWEL_COST};
use crate::error::EngineError;

/// Runtime configuration for the operator console.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Directory holding `puzzles.json`.
    pub data_dir: PathBuf,
    pub total_rounds: u32,
    pub vowel_cost: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            total_rounds: DEFAULT_TOTAL_ROUNDS,
            vowel_cost: VOWEL_COST,
        }
    }
}

impl EngineConfig {
    /// Read configuration from the environment, with defaults:
    /// `FORTUNE_DATA_DIR` (default `data`), `FORTUNE_ROUNDS` (default 3),
    /// `FORTUNE_VOWEL_COST` (default 250).
    pub fn from_env() -> Result<Self, EngineError> {
        let defaults = Self::default();
        let data_dir = env::var("FORTUNE_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.data_dir);
        let total_rounds = positive_var("FORTUNE_ROUNDS", defaults.total_rounds)?;
        let vowel_cost = positive_var("FORTUNE_VOWEL_COST", defaults.vowel_cost)?;
        Ok(Self {
            data_dir,
            total_rounds,
            vowel_cost,
        })
    }
}

fn positive_var(name: &str, default: u32) -> Result<u32, EngineError> {
    match env::var(name) {
        Ok(raw) => {
            let value: u32 = raw.parse().map_err(|_| {
                EngineError::invalid_input(format!("{name} must be a positive integer"))
            })?;
            if value < 1 {
                return Err(EngineError::invalid_input(format!(
                    "{name} must be at least 1"
                )));
            }
            Ok(value)
        }
        Err(_) => Ok(default),
    }
}

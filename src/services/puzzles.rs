//! Flat-file puzzle catalog.
//!
//! Puzzles are stored as a JSON list of (solution, category) pairs. Loading
//! falls back to a built-in default pack when the file is missing or
//! unreadable; mutations are written straight back to disk.

use std::fs;
use std::path::{Path, PathBuf};

use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::domain::puzzle::Puzzle;
use crate::error::{EngineError, NotFoundKind};

const CATALOG_FILE: &str = "puzzles.json";

/// One stored catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleEntry {
    pub solution: String,
    pub category: String,
}

/// Puzzle provider backed by a flat JSON file.
#[derive(Debug, Clone)]
pub struct PuzzleCatalog {
    path: PathBuf,
    entries: Vec<PuzzleEntry>,
}

impl PuzzleCatalog {
    /// Open the catalog in `data_dir`, falling back to the built-in pack
    /// when nothing readable is on disk.
    pub fn open(data_dir: impl AsRef<Path>) -> Self {
        let path = data_dir.as_ref().join(CATALOG_FILE);
        match fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str::<Vec<PuzzleEntry>>(&raw) {
                Ok(entries) => {
                    info!(count = entries.len(), path = %path.display(), "Loaded puzzle catalog");
                    return Self { path, entries };
                }
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "Malformed puzzle catalog; using built-in pack");
                }
            },
            Err(e) if e.kind() != std::io::ErrorKind::NotFound => {
                warn!(path = %path.display(), error = %e, "Unreadable puzzle catalog; using built-in pack");
            }
            Err(_) => {}
        }
        Self {
            path,
            entries: default_pack(),
        }
    }

    /// Write the catalog back to disk, creating the data directory if needed.
    pub fn save(&self) -> Result<(), EngineError> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir).map_err(|e| EngineError::Storage(e.to_string()))?;
        }
        let raw = serde_json::to_string_pretty(&self.entries)
            .map_err(|e| EngineError::Storage(e.to_string()))?;
        fs::write(&self.path, raw).map_err(|e| EngineError::Storage(e.to_string()))?;
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Uniformly random puzzle, optionally restricted to one category.
    pub fn random_puzzle(&self, category: Option<&str>) -> Result<Puzzle, EngineError> {
        let pool: Vec<&PuzzleEntry> = match category {
            Some(wanted) => self
                .entries
                .iter()
                .filter(|e| e.category.eq_ignore_ascii_case(wanted.trim()))
                .collect(),
            None => self.entries.iter().collect(),
        };
        let entry = pool.choose(&mut rand::rng()).ok_or_else(|| match category {
            Some(wanted) => EngineError::not_found(
                NotFoundKind::Category,
                format!("no puzzles in category '{wanted}'"),
            ),
            None => EngineError::not_found(NotFoundKind::Puzzle, "catalog is empty"),
        })?;
        Puzzle::new(&entry.solution, &entry.category)
    }

    /// All puzzles of one category, skipping unbuildable entries.
    pub fn puzzles_in_category(&self, category: &str) -> Vec<Puzzle> {
        self.entries
            .iter()
            .filter(|e| e.category.eq_ignore_ascii_case(category.trim()))
            .filter_map(|e| Puzzle::new(&e.solution, &e.category).ok())
            .collect()
    }

    /// Add a puzzle and persist. Duplicate solutions are rejected.
    pub fn add_puzzle(&mut self, solution: &str, category: &str) -> Result<(), EngineError> {
        validate_solution(solution)?;
        validate_category(category)?;
        let solution = solution.trim().to_uppercase();
        let category = category.trim().to_uppercase();
        if self
            .entries
            .iter()
            .any(|e| e.solution.eq_ignore_ascii_case(&solution))
        {
            return Err(EngineError::invalid_input(
                "a puzzle with this solution already exists",
            ));
        }
        self.entries.push(PuzzleEntry { solution, category });
        self.save()
    }

    /// Remove a puzzle by solution and persist.
    pub fn remove_puzzle(&mut self, solution: &str) -> Result<(), EngineError> {
        let pos = self
            .entries
            .iter()
            .position(|e| e.solution.eq_ignore_ascii_case(solution.trim()))
            .ok_or_else(|| {
                EngineError::not_found(NotFoundKind::Puzzle, format!("no puzzle '{solution}'"))
            })?;
        self.entries.remove(pos);
        self.save()
    }

    /// Distinct categories, sorted.
    pub fn categories(&self) -> Vec<String> {
        let mut categories: Vec<String> =
            self.entries.iter().map(|e| e.category.clone()).collect();
        categories.sort();
        categories.dedup();
        categories
    }

    pub fn count_in_category(&self, category: &str) -> usize {
        self.entries
            .iter()
            .filter(|e| e.category.eq_ignore_ascii_case(category.trim()))
            .count()
    }
}

fn validate_solution(solution: &str) -> Result<(), EngineError> {
    let solution = solution.trim();
    if solution.len() < 3 || solution.len() > 100 {
        return Err(EngineError::invalid_input(
            "puzzle solution must be 3 to 100 characters",
        ));
    }
    if !solution.chars().any(|c| c.is_alphabetic()) {
        return Err(EngineError::invalid_input(
            "puzzle solution must contain at least one letter",
        ));
    }
    Ok(())
}

fn validate_category(category: &str) -> Result<(), EngineError> {
    let category = category.trim();
    if category.len() < 3 || category.len() > 50 {
        return Err(EngineError::invalid_input(
            "puzzle category must be 3 to 50 characters",
        ));
    }
    Ok(())
}

fn default_pack() -> Vec<PuzzleEntry> {
    [
        ("WHEEL OF FORTUNE", "TV SHOW"),
        ("THE QUICK BROWN FOX", "PHRASE"),
        ("PIZZA AND SODA", "FOOD & DRINK"),
        ("HAPPY BIRTHDAY", "PHRASE"),
        ("NEW YORK CITY", "PLACE"),
        ("STAR WARS", "MOVIE TITLE"),
        ("BASKETBALL PLAYER", "OCCUPATION"),
        ("CHOCOLATE CHIP COOKIES", "FOOD & DRINK"),
        ("GOOD MORNING AMERICA", "TV SHOW"),
        ("ROCK AND ROLL", "PHRASE"),
        ("THANKSGIVING DINNER", "EVENT"),
        ("SUPER BOWL SUNDAY", "EVENT"),
        ("COFFEE AND DONUTS", "FOOD & DRINK"),
        ("PIECE OF CAKE", "PHRASE"),
        ("BREAKING NEWS", "PHRASE"),
        ("HOLLYWOOD MOVIES", "THING"),
        ("SUMMER VACATION", "EVENT"),
        ("WINTER WONDERLAND", "PHRASE"),
        ("FRESH AS A DAISY", "PHRASE"),
        ("KITCHEN SINK", "AROUND THE HOUSE"),
    ]
    .into_iter()
    .map(|(solution, category)| PuzzleEntry {
        solution: solution.to_string(),
        category: category.to_string(),
    })
    .collect()
}

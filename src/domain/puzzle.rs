//! A phrase-and-category pair with per-letter guess tracking.

use std::collections::BTreeSet;

use crate::domain::rules::{CONSONANTS, VOWELS};
use crate::error::EngineError;

/// A single puzzle: an uppercase solution phrase, its category, and the set
/// of letters guessed so far. Solution and category never change after
/// construction; only the guessed-letter set mutates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    solution: String,
    category: String,
    guessed_letters: BTreeSet<char>,
}

impl Puzzle {
    /// Create a puzzle, normalizing solution and category to trimmed
    /// uppercase. Either being empty is an error.
    pub fn new(solution: &str, category: &str) -> Result<Self, EngineError> {
        let solution = solution.trim().to_uppercase();
        let category = category.trim().to_uppercase();
        if solution.is_empty() {
            return Err(EngineError::invalid_input("puzzle solution cannot be empty"));
        }
        if category.is_empty() {
            return Err(EngineError::invalid_input("puzzle category cannot be empty"));
        }
        Ok(Self {
            solution,
            category,
            guessed_letters: BTreeSet::new(),
        })
    }

    pub fn solution(&self) -> &str {
        &self.solution
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn guessed_letters(&self) -> &BTreeSet<char> {
        &self.guessed_letters
    }

    /// Masked board: unguessed letters render as `_`; spaces, punctuation,
    /// and digits pass through unchanged.
    pub fn display(&self) -> String {
        self.solution
            .chars()
            .map(|c| {
                if c.is_alphabetic() && !self.guessed_letters.contains(&c) {
                    '_'
                } else {
                    c
                }
            })
            .collect()
    }

    /// Guess a single letter. Returns whether the letter occurs in the
    /// solution. The letter is recorded as guessed on both hit and miss.
    pub fn guess_letter(&mut self, letter: char) -> Result<bool, EngineError> {
        let letter = normalize_letter(letter)?;
        if self.guessed_letters.contains(&letter) {
            return Err(EngineError::AlreadyGuessed(letter));
        }
        self.guessed_letters.insert(letter);
        Ok(self.solution.contains(letter))
    }

    pub fn is_guessed(&self, letter: char) -> bool {
        self.guessed_letters
            .contains(&letter.to_ascii_uppercase())
    }

    /// How many times `letter` appears in the solution (case-insensitive).
    pub fn count_occurrences(&self, letter: char) -> usize {
        let letter = letter.to_ascii_uppercase();
        self.solution.chars().filter(|&c| c == letter).count()
    }

    /// Consonants not yet guessed.
    pub fn available_consonants(&self) -> Vec<char> {
        CONSONANTS
            .iter()
            .copied()
            .filter(|c| !self.guessed_letters.contains(c))
            .collect()
    }

    /// Vowels not yet guessed.
    pub fn available_vowels(&self) -> Vec<char> {
        VOWELS
            .iter()
            .copied()
            .filter(|c| !self.guessed_letters.contains(c))
            .collect()
    }

    /// True once every alphabetic character of the solution has been guessed.
    pub fn is_solved(&self) -> bool {
        self.solution
            .chars()
            .filter(|c| c.is_alphabetic())
            .all(|c| self.guessed_letters.contains(&c))
    }

    /// Whole-phrase solve attempt: trimmed, case-insensitive equality.
    /// No mutation and no attempt limit.
    pub fn attempt_solve(&self, guess: &str) -> bool {
        guess.trim().to_uppercase() == self.solution
    }

    /// Unique alphabetic letters of the solution still to be guessed.
    pub fn remaining_letters(&self) -> usize {
        self.unique_letters()
            .difference(&self.guessed_letters)
            .count()
    }

    /// Share of the solution's unique letters already revealed, in percent.
    pub fn revealed_percentage(&self) -> f64 {
        let unique = self.unique_letters();
        if unique.is_empty() {
            return 100.0;
        }
        let revealed = unique.intersection(&self.guessed_letters).count();
        (revealed as f64 / unique.len() as f64) * 100.0
    }

    /// Clear all guessed letters.
    pub fn reset(&mut self) {
        self.guessed_letters.clear();
    }

    fn unique_letters(&self) -> BTreeSet<char> {
        self.solution.chars().filter(|c| c.is_alphabetic()).collect()
    }
}

fn normalize_letter(letter: char) -> Result<char, EngineError> {
    if !letter.is_ascii_alphabetic() {
        return Err(EngineError::invalid_input(format!(
            "'{letter}' is not a letter"
        )));
    }
    Ok(letter.to_ascii_uppercase())
}

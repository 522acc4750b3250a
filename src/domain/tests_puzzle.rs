#![cfg(test)]

use crate::domain::puzzle::Puzzle;
use crate::error::EngineError;

fn hello_world() -> Puzzle {
    Puzzle::new("HELLO WORLD", "PHRASE").unwrap()
}

#[test]
fn construction_normalizes_and_validates() {
    let puzzle = Puzzle::new("  hello world ", "phrase").unwrap();
    assert_eq!(puzzle.solution(), "HELLO WORLD");
    assert_eq!(puzzle.category(), "PHRASE");

    assert!(Puzzle::new("   ", "PHRASE").is_err());
    assert!(Puzzle::new("HELLO", "  ").is_err());
}

#[test]
fn display_masks_letters_and_passes_punctuation() {
    let puzzle = hello_world();
    assert_eq!(puzzle.display(), "_____ _____");

    let punctuated = Puzzle::new("IT'S A TRAP! NO. 7", "QUOTATION").unwrap();
    assert_eq!(punctuated.display(), "__'_ _ ____! __. 7");
}

#[test]
fn guess_letter_reveals_every_occurrence() {
    let mut puzzle = hello_world();
    assert!(puzzle.guess_letter('L').unwrap());
    assert_eq!(puzzle.count_occurrences('L'), 3);
    assert_eq!(puzzle.display(), "__LL_ ___L_");
    assert!(puzzle.attempt_solve("hello world"));
}

#[test]
fn guessing_is_case_insensitive() {
    let mut puzzle = hello_world();
    assert!(puzzle.guess_letter('h').unwrap());
    assert_eq!(puzzle.display(), "H____ _____");
    assert!(puzzle.is_guessed('H'));
    assert!(puzzle.is_guessed('h'));
}

#[test]
fn re_guess_fails_and_leaves_state_unchanged() {
    let mut puzzle = hello_world();
    puzzle.guess_letter('L').unwrap();
    let before = puzzle.clone();

    let err = puzzle.guess_letter('l').unwrap_err();
    assert_eq!(err, EngineError::AlreadyGuessed('L'));
    assert_eq!(puzzle, before);
}

#[test]
fn non_letters_are_rejected() {
    let mut puzzle = hello_world();
    assert!(matches!(
        puzzle.guess_letter('3'),
        Err(EngineError::InvalidInput(_))
    ));
    assert!(matches!(
        puzzle.guess_letter(' '),
        Err(EngineError::InvalidInput(_))
    ));
    assert!(puzzle.guessed_letters().is_empty());
}

#[test]
fn misses_are_recorded_too() {
    let mut puzzle = hello_world();
    assert!(!puzzle.guess_letter('Z').unwrap());
    assert!(puzzle.is_guessed('Z'));
    assert!(!puzzle.available_consonants().contains(&'Z'));
}

#[test]
fn available_sets_shrink_as_letters_are_guessed() {
    let mut puzzle = hello_world();
    assert_eq!(puzzle.available_consonants().len(), 21);
    assert_eq!(puzzle.available_vowels().len(), 5);

    puzzle.guess_letter('L').unwrap();
    puzzle.guess_letter('E').unwrap();
    assert_eq!(puzzle.available_consonants().len(), 20);
    assert_eq!(puzzle.available_vowels().len(), 4);
    assert!(!puzzle.available_vowels().contains(&'E'));
}

#[test]
fn solved_only_when_every_letter_is_revealed() {
    let mut puzzle = hello_world();
    for letter in ['H', 'E', 'L', 'O', 'W', 'R'] {
        assert!(!puzzle.is_solved());
        puzzle.guess_letter(letter).unwrap();
    }
    // D still missing
    assert!(!puzzle.is_solved());
    puzzle.guess_letter('D').unwrap();
    assert!(puzzle.is_solved());
    assert_eq!(puzzle.display(), "HELLO WORLD");
}

#[test]
fn attempt_solve_trims_and_ignores_case() {
    let puzzle = hello_world();
    assert!(puzzle.attempt_solve("  Hello World  "));
    assert!(!puzzle.attempt_solve("HELLO, WORLD"));
    assert!(!puzzle.attempt_solve(""));
}

#[test]
fn remaining_and_revealed_track_unique_letters() {
    let mut puzzle = hello_world();
    // Unique letters: H E L O W R D = 7
    assert_eq!(puzzle.remaining_letters(), 7);
    assert_eq!(puzzle.revealed_percentage(), 0.0);

    puzzle.guess_letter('L').unwrap();
    puzzle.guess_letter('Z').unwrap(); // miss does not count as revealed
    assert_eq!(puzzle.remaining_letters(), 6);
    let expected = (1.0 / 7.0) * 100.0;
    assert!((puzzle.revealed_percentage() - expected).abs() < 1e-9);
}

#[test]
fn reset_clears_guesses() {
    let mut puzzle = hello_world();
    puzzle.guess_letter('L').unwrap();
    puzzle.reset();
    assert!(puzzle.guessed_letters().is_empty());
    assert_eq!(puzzle.display(), "_____ _____");
}

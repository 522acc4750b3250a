#![cfg(test)]

//! Property tests for the puzzle and the money rule (pure domain).

use proptest::prelude::*;

use crate::domain::game::Game;
use crate::domain::puzzle::Puzzle;
use crate::domain::round::Round;
use crate::domain::team::Team;
use crate::domain::wheel::WheelResult;
use crate::error::EngineError;

fn money_segment() -> impl Strategy<Value = WheelResult> {
    proptest::sample::select(WheelResult::MONEY_SEGMENTS.to_vec())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    /// Display is positionally faithful: same length as the solution, and
    /// every non-alphabetic character shows through unchanged.
    #[test]
    fn prop_display_preserves_shape(
        solution in "[A-Z0-9 ,'!.-]{0,28}[A-Z][A-Z0-9 ,'!.-]{0,28}",
    ) {
        let puzzle = Puzzle::new(&solution, "PHRASE").unwrap();
        let display = puzzle.display();
        prop_assert_eq!(display.chars().count(), puzzle.solution().chars().count());
        for (shown, actual) in display.chars().zip(puzzle.solution().chars()) {
            if actual.is_alphabetic() {
                prop_assert_eq!(shown, '_');
            } else {
                prop_assert_eq!(shown, actual);
            }
        }
    }

    /// Re-guessing any letter fails with AlreadyGuessed and changes nothing.
    #[test]
    fn prop_second_guess_always_rejected(
        solution in "[A-Z]{1,12}",
        letter in proptest::char::range('A', 'Z'),
    ) {
        let mut puzzle = Puzzle::new(&solution, "PHRASE").unwrap();
        puzzle.guess_letter(letter).unwrap();
        let before = puzzle.clone();
        let err = puzzle.guess_letter(letter).unwrap_err();
        prop_assert_eq!(err, EngineError::AlreadyGuessed(letter));
        prop_assert_eq!(puzzle, before);
    }

    /// The puzzle is solved exactly when no unique letter remains unguessed.
    #[test]
    fn prop_solved_iff_no_remaining_letters(
        solution in "[A-Z]{1,10}( [A-Z]{1,10}){0,2}",
    ) {
        let mut puzzle = Puzzle::new(&solution, "PHRASE").unwrap();
        let letters: Vec<char> = {
            let mut unique: Vec<char> =
                puzzle.solution().chars().filter(|c| c.is_alphabetic()).collect();
            unique.sort_unstable();
            unique.dedup();
            unique
        };
        for &letter in &letters {
            prop_assert!(!puzzle.is_solved());
            prop_assert!(puzzle.guess_letter(letter).unwrap());
            prop_assert_eq!(puzzle.is_solved(), puzzle.remaining_letters() == 0);
        }
        prop_assert!(puzzle.is_solved());
        prop_assert_eq!(puzzle.display(), puzzle.solution());
    }

    /// Money from a consonant hit is always occurrences x wheel value.
    #[test]
    fn prop_consonant_hit_pays_occurrences_times_value(
        solution in "[BCDFGHJKLMNPQRSTVWXZ]{1,12}",
        segment in money_segment(),
    ) {
        let teams = vec![
            Team::new("Team Alpha", vec!["A".into()]).unwrap(),
            Team::new("Team Beta", vec!["B".into()]).unwrap(),
        ];
        let mut game = Game::new(teams, 1).unwrap();
        let puzzle = Puzzle::new(&solution, "PHRASE").unwrap();
        game.add_round(Round::new(puzzle, 1).unwrap()).unwrap();
        game.start_game().unwrap();

        let letter = solution.chars().next().unwrap();
        let occurrences = solution.chars().filter(|&c| c == letter).count() as u32;
        let value = segment.money_value().unwrap();

        game.input_wheel_result(segment).unwrap();
        let outcome = game.guess_letter(letter).unwrap();
        prop_assert!(outcome.in_puzzle);
        prop_assert_eq!(outcome.money_earned, occurrences * value);
        if outcome.puzzle_solved {
            // Single-letter solutions complete the round, banking the money.
            prop_assert_eq!(game.teams()[0].total_money(), occurrences * value);
        } else {
            prop_assert_eq!(game.teams()[0].current_round_money(), occurrences * value);
        }
    }
}

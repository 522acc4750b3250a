#![cfg(test)]

use crate::domain::puzzle::Puzzle;
use crate::domain::round::Round;
use crate::domain::team::Team;
use crate::error::EngineError;

fn team(name: &str) -> Team {
    Team::new(name, vec!["Alice".into(), "Bob".into()]).unwrap()
}

#[test]
fn team_construction_validates_names_and_members() {
    assert!(Team::new("", vec!["Alice".into()]).is_err());
    assert!(Team::new("Team Alpha", vec![]).is_err());
    assert!(Team::new("Team <script>", vec!["Alice".into()]).is_err());
    assert!(Team::new("Team Alpha", vec!["Alice42".into()]).is_err());

    let team = Team::new("  Team Alpha ", vec![" Alice ".into()]).unwrap();
    assert_eq!(team.name(), "Team Alpha");
    assert_eq!(team.members(), ["Alice"]);
}

#[test]
fn member_management_keeps_at_least_one() {
    let mut team = team("Team Alpha");
    team.add_member("Carol").unwrap();
    assert_eq!(team.member_count(), 3);
    assert!(team.add_member("Carol").is_err());
    assert!(team.remove_member("Dave").is_err());

    team.remove_member("Alice").unwrap();
    team.remove_member("Bob").unwrap();
    let err = team.remove_member("Carol").unwrap_err();
    assert!(matches!(err, EngineError::IllegalState(_)));
    assert_eq!(team.member_count(), 1);
}

#[test]
fn add_money_rejects_negative_amounts() {
    let mut team = team("Team Alpha");
    team.add_money(500).unwrap();
    assert_eq!(team.current_round_money(), 500);

    let err = team.add_money(-1).unwrap_err();
    assert_eq!(err, EngineError::InvalidAmount(-1));
    assert_eq!(team.current_round_money(), 500);
}

#[test]
fn win_round_banks_the_round_money() {
    let mut team = team("Team Alpha");
    team.add_money(750).unwrap();
    team.win_round();
    assert_eq!(team.total_money(), 750);
    assert_eq!(team.current_round_money(), 0);

    // A second win with nothing at risk banks nothing.
    team.win_round();
    assert_eq!(team.total_money(), 750);
}

#[test]
fn bankrupt_only_clears_round_money() {
    let mut team = team("Team Alpha");
    team.add_money(300).unwrap();
    team.win_round();
    team.add_money(200).unwrap();
    team.lose_round_money();
    assert_eq!(team.current_round_money(), 0);
    assert_eq!(team.total_money(), 300);
}

#[test]
fn vowel_purchase_requires_funds() {
    let mut team = team("Team Alpha");
    team.add_money(300).unwrap();
    assert!(team.can_buy_vowel(250));
    team.buy_vowel(250).unwrap();
    assert_eq!(team.current_round_money(), 50);

    let err = team.buy_vowel(250).unwrap_err();
    assert_eq!(
        err,
        EngineError::InsufficientFunds {
            needed: 250,
            available: 50
        }
    );
    assert_eq!(team.current_round_money(), 50);
}

#[test]
fn free_spin_sets_and_clears() {
    let mut team = team("Team Alpha");
    assert!(team.use_free_spin().is_err());
    team.give_free_spin();
    assert!(team.has_free_spin());
    team.use_free_spin().unwrap();
    assert!(!team.has_free_spin());
}

#[test]
fn round_numbers_are_one_based() {
    let puzzle = Puzzle::new("TEST", "PHRASE").unwrap();
    assert!(Round::new(puzzle.clone(), 0).is_err());
    let round = Round::new(puzzle, 1).unwrap();
    assert_eq!(round.round_number(), 1);
    assert!(!round.is_completed());
    assert_eq!(round.winning_team_id(), None);
}

#[test]
fn completing_a_round_banks_the_winner_once() {
    let puzzle = Puzzle::new("TEST", "PHRASE").unwrap();
    let mut round = Round::new(puzzle, 1).unwrap();
    let mut winner = team("Team Alpha");
    winner.add_money(600).unwrap();

    round.complete(&mut winner).unwrap();
    assert!(round.is_completed());
    assert_eq!(round.winning_team_id(), Some(winner.id()));
    assert_eq!(winner.total_money(), 600);
    assert_eq!(winner.current_round_money(), 0);

    let err = round.complete(&mut winner).unwrap_err();
    assert_eq!(err, EngineError::AlreadyCompleted(1));
    assert_eq!(winner.total_money(), 600);
}

#[test]
fn reset_puzzle_refused_after_completion() {
    let puzzle = Puzzle::new("TEST", "PHRASE").unwrap();
    let mut round = Round::new(puzzle, 1).unwrap();
    round.puzzle_mut().guess_letter('T').unwrap();
    round.reset_puzzle().unwrap();
    assert!(round.puzzle().guessed_letters().is_empty());

    let mut winner = team("Team Alpha");
    round.complete(&mut winner).unwrap();
    assert!(round.reset_puzzle().is_err());
}

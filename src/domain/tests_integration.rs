#![cfg(test)]

//! Full-game walkthrough across two rounds, exercising every action type.

use crate::domain::game::Game;
use crate::domain::puzzle::Puzzle;
use crate::domain::round::Round;
use crate::domain::scoring;
use crate::domain::state::{GameState, TurnState};
use crate::domain::team::Team;
use crate::domain::wheel::WheelResult;

fn two_team_game(solutions: &[&str]) -> Game {
    let teams = vec![
        Team::new("Team Alpha", vec!["Alice".into(), "Bob".into()]).unwrap(),
        Team::new("Team Beta", vec!["Charlie".into(), "Diana".into()]).unwrap(),
    ];
    let mut game = Game::new(teams, solutions.len() as u32).unwrap();
    for (i, solution) in solutions.iter().enumerate() {
        let puzzle = Puzzle::new(solution, "PHRASE").unwrap();
        game.add_round(Round::new(puzzle, i as u32 + 1).unwrap()).unwrap();
    }
    game.start_game().unwrap();
    game
}

#[test]
fn two_round_game_happy_path() {
    let mut game = two_team_game(&["HELLO WORLD", "ROCK AND ROLL"]);

    // --- Round 1 ---
    // Alpha: free spin, then $500 x 3 Ls.
    let spin = game.input_wheel_result(WheelResult::FreeSpin).unwrap();
    assert!(spin.turn_continues);
    game.input_wheel_result(WheelResult::Money500).unwrap();
    let guess = game.guess_letter('L').unwrap();
    assert_eq!(guess.money_earned, 1500);

    // Alpha keeps going: buys a vowel that hits.
    let vowel = game.buy_vowel('O').unwrap();
    assert!(vowel.in_puzzle);
    assert_eq!(game.teams()[0].current_round_money(), 1250);

    // Alpha misses a consonant; Beta takes over.
    game.input_wheel_result(WheelResult::Money300).unwrap();
    let miss = game.guess_letter('Z').unwrap();
    assert!(!miss.turn_continues);
    assert_eq!(game.current_team_index(), 1);

    // Beta goes bankrupt after earning something.
    game.input_wheel_result(WheelResult::Money1000).unwrap();
    game.guess_letter('H').unwrap(); // $1000
    assert_eq!(game.teams()[1].current_round_money(), 1000);
    game.input_wheel_result(WheelResult::Bankrupt).unwrap();
    assert_eq!(game.teams()[1].current_round_money(), 0);
    assert_eq!(game.current_team_index(), 0);

    // Alpha solves round 1 and banks $1250.
    let solve = game.attempt_solve("hello world").unwrap();
    assert!(solve.correct);
    assert_eq!(game.game_state(), GameState::RoundCompleted);
    assert_eq!(game.teams()[0].total_money(), 1250);

    let stats = scoring::team_stats(&game, game.teams()[0].id()).unwrap();
    assert_eq!(stats.rounds_won, 1);

    // --- Round 2 ---
    game.continue_to_next_round().unwrap();
    assert_eq!(game.game_state(), GameState::InProgress);
    assert_eq!(game.turn_state(), TurnState::WaitingForSpin);
    assert_eq!(game.current_team_index(), 0);

    // Alpha misses; Beta clears the consonants and solves.
    game.input_wheel_result(WheelResult::Money100).unwrap();
    game.guess_letter('T').unwrap(); // no T in ROCK AND ROLL
    assert_eq!(game.current_team_index(), 1);

    game.input_wheel_result(WheelResult::Money500).unwrap();
    let guess = game.guess_letter('R').unwrap(); // 2 Rs
    assert_eq!(guess.money_earned, 1000);
    game.input_wheel_result(WheelResult::Money1000).unwrap();
    let guess = game.guess_letter('L').unwrap(); // 2 Ls
    assert_eq!(guess.money_earned, 2000);
    let solve = game.attempt_solve("ROCK AND ROLL").unwrap();
    assert!(solve.correct);

    // Final tallies.
    assert_eq!(game.game_state(), GameState::GameCompleted);
    assert_eq!(game.teams()[0].total_money(), 1250);
    assert_eq!(game.teams()[1].total_money(), 3000);
    assert_eq!(game.winner().unwrap().name(), "Team Beta");

    let summary = scoring::game_summary(&game);
    assert_eq!(summary.completed_rounds, 2);
    assert_eq!(summary.total_money_in_play, 4250);
    assert_eq!(summary.leader.as_ref().unwrap().team_name, "Team Beta");
    assert_eq!(summary.round_winners.len(), 2);
    assert_eq!(summary.round_winners[0].team_name, "Team Alpha");
    assert_eq!(summary.round_winners[1].puzzle_solution, "ROCK AND ROLL");
}

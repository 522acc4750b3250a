//! The game state machine.
//!
//! `Game` owns its teams and rounds by index-addressable sequence and
//! exposes the five player actions: spin result, consonant guess, vowel
//! purchase, solve attempt, and round continuation. Every action validates
//! against the current game/turn state before mutating anything.

use tracing::{debug, info};
use uuid::Uuid;

use crate::domain::outcome::{
    ActionRequired, GuessOutcome, PurchaseOutcome, SolveOutcome, SpinOutcome,
};
use crate::domain::round::Round;
use crate::domain::rules::{self, MAX_TEAMS, MIN_TEAMS, VOWEL_COST};
use crate::domain::snapshot::GameStatus;
use crate::domain::state::{GameState, TurnState};
use crate::domain::team::Team;
use crate::domain::wheel::WheelResult;
use crate::error::EngineError;

#[derive(Debug, Clone)]
pub struct Game {
    id: Uuid,
    teams: Vec<Team>,
    rounds: Vec<Round>,
    total_rounds: u32,
    current_round_index: usize,
    current_team_index: usize,
    game_state: GameState,
    turn_state: TurnState,
    vowel_cost: u32,
    last_wheel_result: Option<WheelResult>,
}

impl Game {
    /// Create a game in `Setup` with the default vowel cost.
    pub fn new(teams: Vec<Team>, total_rounds: u32) -> Result<Self, EngineError> {
        Self::with_vowel_cost(teams, total_rounds, VOWEL_COST)
    }

    pub fn with_vowel_cost(
        teams: Vec<Team>,
        total_rounds: u32,
        vowel_cost: u32,
    ) -> Result<Self, EngineError> {
        if teams.len() < MIN_TEAMS {
            return Err(EngineError::invalid_input(format!(
                "game needs at least {MIN_TEAMS} teams"
            )));
        }
        if teams.len() > MAX_TEAMS {
            return Err(EngineError::invalid_input(format!(
                "game allows at most {MAX_TEAMS} teams"
            )));
        }
        if total_rounds < 1 {
            return Err(EngineError::invalid_input(
                "game must have at least one round",
            ));
        }
        if vowel_cost < 1 {
            return Err(EngineError::InvalidAmount(0));
        }
        Ok(Self {
            id: Uuid::new_v4(),
            teams,
            rounds: Vec::with_capacity(total_rounds as usize),
            total_rounds,
            current_round_index: 0,
            current_team_index: 0,
            game_state: GameState::Setup,
            turn_state: TurnState::WaitingForSpin,
            vowel_cost,
            last_wheel_result: None,
        })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    pub fn rounds(&self) -> &[Round] {
        &self.rounds
    }

    pub fn total_rounds(&self) -> u32 {
        self.total_rounds
    }

    pub fn current_round_index(&self) -> usize {
        self.current_round_index
    }

    pub fn current_team_index(&self) -> usize {
        self.current_team_index
    }

    pub fn game_state(&self) -> GameState {
        self.game_state
    }

    pub fn turn_state(&self) -> TurnState {
        self.turn_state
    }

    pub fn vowel_cost(&self) -> u32 {
        self.vowel_cost
    }

    pub fn last_wheel_result(&self) -> Option<WheelResult> {
        self.last_wheel_result
    }

    /// Add the next round during setup. Rounds must arrive in order: the
    /// round number has to match the next free slot.
    pub fn add_round(&mut self, round: Round) -> Result<(), EngineError> {
        if self.game_state != GameState::Setup {
            return Err(EngineError::illegal_state(
                "cannot add rounds after the game has started",
            ));
        }
        if self.rounds.len() as u32 >= self.total_rounds {
            return Err(EngineError::illegal_state(format!(
                "game already has all {} rounds",
                self.total_rounds
            )));
        }
        let expected = self.rounds.len() as u32 + 1;
        if round.round_number() != expected {
            return Err(EngineError::invalid_input(format!(
                "expected round number {expected}, got {}",
                round.round_number()
            )));
        }
        self.rounds.push(round);
        Ok(())
    }

    /// Leave `Setup`. Requires exactly `total_rounds` rounds to be present.
    pub fn start_game(&mut self) -> Result<(), EngineError> {
        if self.game_state != GameState::Setup {
            return Err(EngineError::illegal_state("game has already started"));
        }
        if self.rounds.len() as u32 != self.total_rounds {
            return Err(EngineError::illegal_state(format!(
                "game must have exactly {} rounds to start, has {}",
                self.total_rounds,
                self.rounds.len()
            )));
        }
        self.game_state = GameState::InProgress;
        self.turn_state = TurnState::WaitingForSpin;
        self.current_round_index = 0;
        self.current_team_index = 0;
        info!(game_id = %self.id, teams = self.teams.len(), rounds = self.total_rounds, "Game started");
        Ok(())
    }

    pub fn current_team(&self) -> Result<&Team, EngineError> {
        if self.game_state == GameState::Setup {
            return Err(EngineError::illegal_state("game has not started yet"));
        }
        Ok(&self.teams[self.current_team_index])
    }

    pub fn current_round(&self) -> Result<&Round, EngineError> {
        if self.game_state == GameState::Setup {
            return Err(EngineError::illegal_state("game has not started yet"));
        }
        Ok(&self.rounds[self.current_round_index])
    }

    /// Feed in the outcome of a physical wheel spin.
    ///
    /// Valid only while waiting for a spin. Money segments hand the turn to
    /// the consonant-guess step; bankrupt and lose-a-turn end the turn; a
    /// free spin keeps the same team spinning.
    pub fn input_wheel_result(&mut self, wheel: WheelResult) -> Result<SpinOutcome, EngineError> {
        self.require_in_progress()?;
        if self.turn_state != TurnState::WaitingForSpin {
            return Err(EngineError::illegal_state(format!(
                "not waiting for a wheel spin (turn state: {:?})",
                self.turn_state
            )));
        }

        self.last_wheel_result = Some(wheel);
        let team_id = self.teams[self.current_team_index].id();
        let team = self.teams[self.current_team_index].name().to_string();
        debug!(game_id = %self.id, %team, result = %wheel, "Wheel result entered");

        let outcome = if let Some(value) = wheel.money_value() {
            self.turn_state = TurnState::WaitingForLetterGuess;
            SpinOutcome {
                wheel,
                team_id,
                turn_continues: true,
                action_required: Some(ActionRequired::GuessConsonant),
                message: format!("{team} spun ${value}! Guess a consonant."),
                team,
            }
        } else {
            match wheel {
                WheelResult::Bankrupt => {
                    self.teams[self.current_team_index].lose_round_money();
                    self.end_turn();
                    SpinOutcome {
                        wheel,
                        team_id,
                        turn_continues: false,
                        action_required: None,
                        message: format!("{team} hit BANKRUPT! All round money is lost."),
                        team,
                    }
                }
                WheelResult::LoseATurn => {
                    self.end_turn();
                    SpinOutcome {
                        wheel,
                        team_id,
                        turn_continues: false,
                        action_required: None,
                        message: format!("{team} lost their turn!"),
                        team,
                    }
                }
                WheelResult::FreeSpin => {
                    self.teams[self.current_team_index].give_free_spin();
                    // Same team spins again; turn state stays WaitingForSpin.
                    SpinOutcome {
                        wheel,
                        team_id,
                        turn_continues: true,
                        action_required: Some(ActionRequired::SpinAgain),
                        message: format!("{team} earned a FREE SPIN! Spin again."),
                        team,
                    }
                }
                _ => unreachable!("money segments are handled above"),
            }
        };
        Ok(outcome)
    }

    /// Guess a consonant after a money spin.
    ///
    /// On a hit the team earns occurrences x wheel value and keeps the turn
    /// (back to waiting for a spin), completing the round if the puzzle is
    /// now fully revealed. On a miss the turn passes.
    pub fn guess_letter(&mut self, letter: char) -> Result<GuessOutcome, EngineError> {
        self.require_in_progress()?;
        if self.turn_state != TurnState::WaitingForLetterGuess {
            return Err(EngineError::illegal_state(format!(
                "not waiting for a letter guess (turn state: {:?})",
                self.turn_state
            )));
        }
        let value = self
            .last_wheel_result
            .and_then(WheelResult::money_value)
            .ok_or_else(|| {
                EngineError::illegal_state("no money wheel result recorded for this guess")
            })?;
        if !rules::is_consonant(letter) {
            return Err(EngineError::invalid_input(
                "only consonants can be guessed after a money spin; vowels must be bought",
            ));
        }

        let team_id = self.teams[self.current_team_index].id();
        let team = self.teams[self.current_team_index].name().to_string();
        let hit = self.rounds[self.current_round_index]
            .puzzle_mut()
            .guess_letter(letter)?;
        let letter = letter.to_ascii_uppercase();

        let mut outcome = GuessOutcome {
            letter,
            in_puzzle: hit,
            team_id,
            team: team.clone(),
            money_earned: 0,
            turn_continues: hit,
            puzzle_solved: false,
            message: String::new(),
        };

        if hit {
            let occurrences =
                self.rounds[self.current_round_index].puzzle().count_occurrences(letter);
            let earned = occurrences as u32 * value;
            self.teams[self.current_team_index].add_money(i64::from(earned))?;
            outcome.money_earned = earned;
            info!(game_id = %self.id, %team, %letter, occurrences, earned, "Consonant hit");

            if self.rounds[self.current_round_index].puzzle().is_solved() {
                self.complete_current_round()?;
                outcome.puzzle_solved = true;
                outcome.turn_continues = false;
                outcome.message =
                    format!("{team} revealed the last letter and solved the puzzle!");
            } else {
                self.turn_state = TurnState::WaitingForSpin;
                outcome.message = format!(
                    "{team} found {occurrences} x {letter} for ${earned}. Spin again or solve."
                );
            }
        } else {
            self.end_turn();
            outcome.message = format!("No {letter} in the puzzle. {team}'s turn ends.");
        }
        Ok(outcome)
    }

    /// Buy a vowel. A free action whenever a turn is in progress: it is not
    /// gated by the turn state, and the turn state is left unchanged unless
    /// the purchase solves the puzzle. The cost is deducted even on a miss.
    pub fn buy_vowel(&mut self, vowel: char) -> Result<PurchaseOutcome, EngineError> {
        self.require_in_progress()?;
        if !rules::is_vowel(vowel) {
            return Err(EngineError::invalid_input(format!(
                "'{vowel}' is not a vowel"
            )));
        }
        let vowel = vowel.to_ascii_uppercase();
        let cost = self.vowel_cost;
        // Validate everything before deducting: a failed purchase must not
        // touch the ledger.
        if self.rounds[self.current_round_index].puzzle().is_guessed(vowel) {
            return Err(EngineError::AlreadyGuessed(vowel));
        }
        {
            let team = &self.teams[self.current_team_index];
            if !team.can_buy_vowel(cost) {
                return Err(EngineError::InsufficientFunds {
                    needed: cost,
                    available: team.current_round_money(),
                });
            }
        }

        let team_id = self.teams[self.current_team_index].id();
        let team = self.teams[self.current_team_index].name().to_string();
        self.teams[self.current_team_index].buy_vowel(cost)?;
        let hit = self.rounds[self.current_round_index]
            .puzzle_mut()
            .guess_letter(vowel)?;
        info!(game_id = %self.id, %team, %vowel, cost, hit, "Vowel bought");

        let mut outcome = PurchaseOutcome {
            vowel,
            cost,
            in_puzzle: hit,
            team_id,
            team: team.clone(),
            turn_continues: true,
            puzzle_solved: false,
            message: if hit {
                format!("{team} bought {vowel} for ${cost} and it is in the puzzle!")
            } else {
                format!("{team} bought {vowel} for ${cost}, but it is not in the puzzle.")
            },
        };

        if self.rounds[self.current_round_index].puzzle().is_solved() {
            self.complete_current_round()?;
            outcome.puzzle_solved = true;
            outcome.turn_continues = false;
            outcome.message = format!("{team} bought {vowel} and solved the puzzle!");
        }
        Ok(outcome)
    }

    /// Attempt to solve the whole puzzle. A free action whenever a turn is
    /// in progress. Correct solves complete the round; a wrong solve only
    /// costs the turn.
    pub fn attempt_solve(&mut self, guess: &str) -> Result<SolveOutcome, EngineError> {
        self.require_in_progress()?;
        let team_id = self.teams[self.current_team_index].id();
        let team = self.teams[self.current_team_index].name().to_string();
        let puzzle = self.rounds[self.current_round_index].puzzle();
        let correct = puzzle.attempt_solve(guess);
        let solution = puzzle.solution().to_string();
        info!(game_id = %self.id, %team, correct, "Solve attempt");

        if correct {
            self.complete_current_round()?;
        } else {
            self.end_turn();
        }
        Ok(SolveOutcome {
            guess: guess.to_string(),
            correct,
            team_id,
            team: team.clone(),
            solution: solution.clone(),
            turn_continues: false,
            message: if correct {
                format!("{team} solved it: {solution}!")
            } else {
                format!("Not quite. {team}'s turn ends.")
            },
        })
    }

    /// Leave `RoundCompleted` for the next round. Every team's round money
    /// starts the new round at zero.
    pub fn continue_to_next_round(&mut self) -> Result<(), EngineError> {
        if self.game_state != GameState::RoundCompleted {
            return Err(EngineError::illegal_state(
                "game is not between rounds",
            ));
        }
        self.game_state = GameState::InProgress;
        for team in &mut self.teams {
            team.lose_round_money();
        }
        info!(game_id = %self.id, round = self.rounds[self.current_round_index].round_number(), "Round started");
        Ok(())
    }

    /// Read-only snapshot of the whole game. Safe in any state.
    pub fn status(&self) -> GameStatus {
        GameStatus::of(self)
    }

    /// The team with the highest total money, once the game is completed.
    pub fn winner(&self) -> Option<&Team> {
        if self.game_state != GameState::GameCompleted {
            return None;
        }
        self.teams.iter().max_by_key(|t| t.total_money())
    }

    fn require_in_progress(&self) -> Result<(), EngineError> {
        match self.game_state {
            GameState::InProgress => Ok(()),
            GameState::Setup => Err(EngineError::illegal_state("game has not started yet")),
            GameState::RoundCompleted => Err(EngineError::illegal_state(
                "round is completed; continue to the next round first",
            )),
            GameState::GameCompleted => {
                Err(EngineError::illegal_state("game is already completed"))
            }
        }
    }

    /// Shared winning path for guesses, purchases, and solves. The current
    /// team wins the round; on the final round the game terminates with the
    /// turn cursor frozen, otherwise the next round opens with team 0.
    fn complete_current_round(&mut self) -> Result<(), EngineError> {
        let round = &mut self.rounds[self.current_round_index];
        let winner = &mut self.teams[self.current_team_index];
        round.complete(winner)?;
        info!(
            game_id = %self.id,
            round = round.round_number(),
            winner = winner.name(),
            "Round completed"
        );

        self.last_wheel_result = None;
        if self.current_round_index + 1 >= self.rounds.len() {
            self.game_state = GameState::GameCompleted;
            info!(game_id = %self.id, "Game completed");
        } else {
            self.current_round_index += 1;
            self.game_state = GameState::RoundCompleted;
            self.turn_state = TurnState::WaitingForSpin;
            // The first team always opens a round, regardless of who won.
            self.current_team_index = 0;
        }
        Ok(())
    }

    fn end_turn(&mut self) {
        self.turn_state = TurnState::TurnEnded;
        self.current_team_index = (self.current_team_index + 1) % self.teams.len();
        self.turn_state = TurnState::WaitingForSpin;
        self.last_wheel_result = None;
    }
}

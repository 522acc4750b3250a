//! Interactive operator console for the game engine.
//!
//! The physical wheel is not simulated: the operator spins the real wheel
//! and keys the result in here. The console is a thin presentation loop
//! over the engine; it never touches game state directly.

use std::io::{self, BufRead, Write};

use fortune_engine::domain::scoring;
use fortune_engine::{
    ActionRequired, EngineConfig, EngineError, GameService, GameState, GameStatus, PuzzleCatalog,
    TeamSpec, TurnState, WheelResult,
};
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    if let Err(e) = run() {
        eprintln!("❌ {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), EngineError> {
    let config = EngineConfig::from_env()?;
    println!("{}", "=".repeat(60));
    println!("🎡 WHEEL OF FORTUNE - OPERATOR CONSOLE 🎡");
    println!("{}", "=".repeat(60));

    let catalog = PuzzleCatalog::open(&config.data_dir);
    println!(
        "Loaded {} puzzles across {} categories.",
        catalog.len(),
        catalog.categories().len()
    );
    let service = GameService::new(catalog);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let teams = match prompt(&mut lines, "Use sample teams? (y/n): ")? {
        ref answer if answer.eq_ignore_ascii_case("y") => sample_teams(),
        _ => prompt_teams(&mut lines)?,
    };

    let game_id = service.create_game(teams, config.total_rounds, config.vowel_cost)?;
    service.with_game(game_id, |game| game.start_game())?;
    println!("✅ Game started with {} rounds.\n", config.total_rounds);

    play_loop(&service, game_id, &mut lines)
}

fn play_loop(
    service: &GameService,
    game_id: Uuid,
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> Result<(), EngineError> {
    loop {
        let status = service.with_game(game_id, |game| Ok(game.status()))?;
        match status.game_state {
            GameState::GameCompleted => {
                render_final(service, game_id)?;
                return Ok(());
            }
            GameState::RoundCompleted => {
                println!("\n🏁 Round complete! Press Enter for the next round.");
                let _ = read_line(lines)?;
                service.with_game(game_id, |game| game.continue_to_next_round())?;
                continue;
            }
            _ => {}
        }

        render_board(&status);
        let choice = if status.turn_state == TurnState::WaitingForLetterGuess {
            prompt(lines, "[g]uess consonant, [v]owel, [s]olve, [l]eaderboard, [q]uit: ")?
        } else {
            prompt(lines, "[w]heel result, [v]owel, [s]olve, [l]eaderboard, [q]uit: ")?
        };

        let result = match choice.to_ascii_lowercase().as_str() {
            "w" => enter_wheel_result(service, game_id, lines),
            "g" => enter_letter(service, game_id, lines, "Consonant: ", |game, letter| {
                game.guess_letter(letter).map(|o| o.message)
            }),
            "v" => enter_letter(service, game_id, lines, "Vowel: ", |game, letter| {
                game.buy_vowel(letter).map(|o| o.message)
            }),
            "s" => {
                let guess = prompt(lines, "Solution: ")?;
                service.with_game(game_id, |game| {
                    game.attempt_solve(&guess).map(|o| o.message)
                })
            }
            "l" => {
                render_leaderboard(service, game_id)?;
                continue;
            }
            "q" => {
                println!("Goodbye!");
                return Ok(());
            }
            _ => {
                println!("Unknown option.");
                continue;
            }
        };

        match result {
            Ok(message) => println!("➡️  {message}"),
            Err(e) => println!("✖ {e}"),
        }
    }
}

fn enter_wheel_result(
    service: &GameService,
    game_id: Uuid,
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> Result<String, EngineError> {
    println!("Wheel segments:");
    let all: Vec<WheelResult> = WheelResult::MONEY_SEGMENTS
        .into_iter()
        .chain(WheelResult::SPECIAL_SEGMENTS)
        .collect();
    for (i, segment) in all.iter().enumerate() {
        println!("  {:2}. {segment}", i + 1);
    }
    let raw = prompt(lines, "Segment number: ")?;
    let wheel = raw
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|n| all.get(n).copied())
        .ok_or_else(|| EngineError::invalid_input("not a valid segment number"))?;

    service.with_game(game_id, |game| {
        let outcome = game.input_wheel_result(wheel)?;
        let hint = match outcome.action_required {
            Some(ActionRequired::GuessConsonant) => " (guess a consonant)",
            Some(ActionRequired::SpinAgain) => " (spin again)",
            None => "",
        };
        Ok(format!("{}{hint}", outcome.message))
    })
}

fn enter_letter(
    service: &GameService,
    game_id: Uuid,
    lines: &mut impl Iterator<Item = io::Result<String>>,
    label: &str,
    action: impl FnOnce(&mut fortune_engine::Game, char) -> Result<String, EngineError>,
) -> Result<String, EngineError> {
    let raw = prompt(lines, label)?;
    let mut chars = raw.chars();
    let letter = match (chars.next(), chars.next()) {
        (Some(letter), None) => letter,
        _ => return Err(EngineError::invalid_input("enter exactly one letter")),
    };
    service.with_game(game_id, |game| action(game, letter))
}

fn render_board(status: &GameStatus) {
    println!("\n{}", "-".repeat(60));
    println!(
        "Round {}/{}  |  state: {:?} / {:?}",
        status.current_round, status.total_rounds, status.game_state, status.turn_state
    );
    if let Some(puzzle) = &status.current_puzzle {
        println!("Category: {}", puzzle.category);
        println!("Board:    {}", spaced(&puzzle.display));
        println!(
            "Guessed:  {}",
            puzzle.guessed_letters.iter().collect::<String>()
        );
    }
    for team in &status.teams {
        let marker = if team.is_current_turn { "▶" } else { " " };
        let free = if team.has_free_spin { " [free spin]" } else { "" };
        println!(
            "{marker} {}: ${} this round (${} total){free}",
            team.name, team.current_round_money, team.total_money
        );
    }
}

fn render_leaderboard(service: &GameService, game_id: Uuid) -> Result<(), EngineError> {
    let board = service.with_game(game_id, |game| Ok(scoring::leaderboard(game)))?;
    println!("\n🏆 Leaderboard");
    for entry in board {
        println!(
            "  {}. {}: ${} banked, ${} at risk",
            entry.position, entry.team_name, entry.total_money, entry.current_round_money
        );
    }
    Ok(())
}

fn render_final(service: &GameService, game_id: Uuid) -> Result<(), EngineError> {
    let summary = service.with_game(game_id, |game| Ok(scoring::game_summary(game)))?;
    println!("\n🎉 GAME OVER");
    for winner in &summary.round_winners {
        println!(
            "  Round {}: {} ({}: {})",
            winner.round_number, winner.team_name, winner.puzzle_category, winner.puzzle_solution
        );
    }
    render_leaderboard(service, game_id)?;
    if let Some(leader) = summary.leader {
        println!("\n🥇 {} wins with ${}!", leader.team_name, leader.total_money);
    }
    Ok(())
}

fn sample_teams() -> Vec<TeamSpec> {
    vec![
        TeamSpec {
            name: "Team Alpha".into(),
            members: vec!["Alice".into(), "Bob".into()],
        },
        TeamSpec {
            name: "Team Beta".into(),
            members: vec!["Charlie".into(), "Diana".into()],
        },
        TeamSpec {
            name: "Team Gamma".into(),
            members: vec!["Eve".into(), "Frank".into()],
        },
    ]
}

fn prompt_teams(
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> Result<Vec<TeamSpec>, EngineError> {
    let count: usize = loop {
        let raw = prompt(lines, "How many teams? (2-6): ")?;
        match raw.parse() {
            Ok(n) if (2..=6).contains(&n) => break n,
            _ => println!("Please enter a number between 2 and 6."),
        }
    };
    let mut teams = Vec::with_capacity(count);
    for i in 1..=count {
        let name = prompt(lines, &format!("Team {i} name: "))?;
        let mut members = Vec::new();
        loop {
            let member = prompt(lines, "  Member name (empty to finish): ")?;
            if member.is_empty() {
                if members.is_empty() {
                    println!("  A team needs at least one member.");
                    continue;
                }
                break;
            }
            members.push(member);
        }
        teams.push(TeamSpec { name, members });
    }
    Ok(teams)
}

fn prompt(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    label: &str,
) -> Result<String, EngineError> {
    print!("{label}");
    io::stdout().flush().ok();
    read_line(lines)
}

fn read_line(
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> Result<String, EngineError> {
    match lines.next() {
        Some(Ok(line)) => Ok(line.trim().to_string()),
        Some(Err(e)) => Err(EngineError::Storage(e.to_string())),
        None => Err(EngineError::invalid_input("input closed")),
    }
}

fn spaced(display: &str) -> String {
    display
        .chars()
        .map(|c| format!("{c} "))
        .collect::<String>()
        .trim_end()
        .to_string()
}

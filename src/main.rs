use anyhow::{anyhow, Result};

use std::io::{stdin, stdout, BufRead, Write};
use std::path::Path;
use std::time::Duration;

use connect4_minimax::{
    arena,
    board::Player,
    config::{Config, CONFIG_PATH},
    error::GameError,
    game::Game,
    outcome::Outcome,
    search::WIN_SCORE,
    HEIGHT, WIDTH,
};

mod display;

fn main() -> Result<()> {
    env_logger::init();
    let config = Config::load_or_default(Path::new(CONFIG_PATH))?;

    let stdin = stdin();
    let mut input = stdin.lock();

    println!("Welcome to Connect 4\n");

    if ask(&mut input, "Play a game or run an AI arena? p/a: ", 'p', 'a')? {
        play(&mut input, &config)
    } else {
        run_arena(&config)
    }
}

/// Reads one line, `None` once the input is closed
fn read_input<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut buffer = String::new();
    if input.read_line(&mut buffer)? == 0 {
        return Ok(None);
    }
    Ok(Some(buffer))
}

/// Repeats `prompt` until the answer starts with `yes` or `no`
fn ask<R: BufRead>(input: &mut R, prompt: &str, yes: char, no: char) -> Result<bool> {
    loop {
        print!("{}", prompt);
        stdout().flush()?;
        let buffer = read_input(input)?.ok_or_else(|| anyhow!("input closed"))?;
        match buffer.to_lowercase().chars().next() {
            Some(letter) if letter == yes => return Ok(true),
            Some(letter) if letter == no => return Ok(false),
            _ => println!("Unknown answer given"),
        }
    }
}

fn run_arena(config: &Config) -> Result<()> {
    let arena = &config.arena;
    println!(
        "Playing {} games between depth {} and depth {}",
        arena.games, arena.depth_one, arena.depth_two
    );
    let report = arena::run(arena, &config.search)?;
    println!(
        "Depth {} won {}, depth {} won {}, {} draws",
        arena.depth_one,
        report.engine_one_wins,
        arena.depth_two,
        report.engine_two_wins,
        report.draws
    );
    Ok(())
}

fn play<R: BufRead>(input: &mut R, config: &Config) -> Result<()> {
    let mut game = Game::new(config.search.clone());

    let ai_players = (
        ask(input, "Is player 1 AI controlled? y/n: ", 'y', 'n')?,
        ask(input, "Is player 2 AI controlled? y/n: ", 'y', 'n')?,
    );

    // plies left in a full game bound the distance of any forced result
    let decisive = WIN_SCORE - (WIDTH * HEIGHT) as i32;

    // game loop
    loop {
        display::draw(game.board())?;

        match game.current_outcome() {
            Outcome::Ongoing => {
                let player = game.to_move();
                let player_one = player == Player::One;

                // AI player
                if (player_one && ai_players.0) || (!player_one && ai_players.1) {
                    println!("AI is thinking...");
                    stdout().flush()?;

                    // slow down play if both players are AI
                    if ai_players == (true, true) {
                        std::thread::sleep(Duration::from_millis(config.ai_delay_ms));
                    }

                    let ai_move = game.request_default_ai_move()?;
                    if ai_move.score >= decisive {
                        println!("{} can force a win.", player);
                    } else if ai_move.score <= -decisive {
                        println!("{} cannot avoid a loss.", player);
                    }
                    println!("Best move: {}", ai_move.column + 1);

                // human player
                } else {
                    print!("Move input > ");
                    stdout().flush()?;
                    // end of input ends the game
                    let input_str = match read_input(input)? {
                        Some(line) => line,
                        None => {
                            println!();
                            return Ok(());
                        }
                    };

                    let column = match input_str.trim().parse::<usize>() {
                        Err(_) => {
                            println!("Invalid number: {}", input_str.trim());
                            continue;
                        }
                        Ok(column) => column,
                    };

                    let result = match column.checked_sub(1) {
                        Some(column) => game.apply_human_move(column),
                        None => Err(GameError::InvalidColumn { column }),
                    };
                    match result {
                        Ok(_) => {}
                        Err(GameError::InvalidColumn { .. }) => {
                            println!(
                                "Invalid move, column {} out of range. \
                                 Columns must be between 1 and {}",
                                column, WIDTH
                            );
                        }
                        Err(GameError::ColumnFull { .. }) => {
                            println!("Invalid move, column {} full", column);
                        }
                        Err(err) => return Err(err.into()),
                    }
                }
            }

            // end states
            Outcome::PlayerOneWin => {
                println!("Player 1 wins!");
                break;
            }
            Outcome::PlayerTwoWin => {
                println!("Player 2 wins!");
                break;
            }
            Outcome::Draw => {
                println!("Draw!");
                break;
            }
        }
    }
    Ok(())
}

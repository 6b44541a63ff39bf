//! Self-play matches between two search depths

use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::board::Player;
use crate::error::GameError;
use crate::game::Game;
use crate::outcome::Outcome;
use crate::search::SearchConfig;
use crate::WIDTH;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    /// The number of games to play
    pub games: usize,
    /// Search depth of the first engine
    pub depth_one: u32,
    /// Search depth of the second engine
    pub depth_two: u32,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        ArenaConfig {
            games: WIDTH * WIDTH,
            depth_one: 5,
            depth_two: 3,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ArenaReport {
    pub games: usize,
    pub engine_one_wins: usize,
    pub engine_two_wins: usize,
    pub draws: usize,
}

#[derive(Copy, Clone)]
enum GameResult {
    EngineOne,
    EngineTwo,
    Draw,
}

/// The two opening columns of game `index`
///
/// The engines are deterministic, so each game needs its own opening to
/// produce a distinct game.
pub fn opening(index: usize) -> [usize; 2] {
    [index % WIDTH, (index / WIDTH) % WIDTH]
}

/// Plays the configured number of games in parallel, showing a progress bar
pub fn run(arena: &ArenaConfig, search: &SearchConfig) -> Result<ArenaReport, GameError> {
    let progress = ProgressBar::new(arena.games as u64);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("Playing games: {bar:40.cyan/blue} {pos}/{len} ~{eta} remaining")
            .progress_chars("█▓▒░  "),
    );
    let report = run_with_progress(arena, search, &progress)?;
    progress.finish();
    Ok(report)
}

/// Plays the configured number of games in parallel, reporting each finished
/// game to `progress`
pub fn run_with_progress(
    arena: &ArenaConfig,
    search: &SearchConfig,
    progress: &ProgressBar,
) -> Result<ArenaReport, GameError> {
    let results = (0..arena.games)
        .into_par_iter()
        .map_with(progress.clone(), |progress, index| {
            let result = play_game(index, arena, search);
            progress.inc(1);
            result
        })
        .collect::<Result<Vec<_>, _>>()?;

    let mut report = ArenaReport {
        games: results.len(),
        ..ArenaReport::default()
    };
    for result in results {
        match result {
            GameResult::EngineOne => report.engine_one_wins += 1,
            GameResult::EngineTwo => report.engine_two_wins += 1,
            GameResult::Draw => report.draws += 1,
        }
    }

    info!(
        "arena finished: depth {} won {}, depth {} won {}, {} draws",
        arena.depth_one,
        report.engine_one_wins,
        arena.depth_two,
        report.engine_two_wins,
        report.draws
    );
    Ok(report)
}

/// Plays one game, the engines taking turns to move first
fn play_game(
    index: usize,
    arena: &ArenaConfig,
    search: &SearchConfig,
) -> Result<GameResult, GameError> {
    let engine_one = if index % 2 == 0 { Player::One } else { Player::Two };
    let mut game = Game::new(search.clone());

    for &column in opening(index).iter() {
        game.apply_human_move(column)?;
    }

    loop {
        match game.current_outcome() {
            Outcome::Ongoing => {
                let depth = if game.to_move() == engine_one {
                    arena.depth_one
                } else {
                    arena.depth_two
                };
                game.request_ai_move(depth)?;
            }
            Outcome::Draw => return Ok(GameResult::Draw),
            won => {
                return Ok(if won.winner() == Some(engine_one) {
                    GameResult::EngineOne
                } else {
                    GameResult::EngineTwo
                })
            }
        }
    }
}

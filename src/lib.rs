//! An engine for playing the board game 'Connect 4'
//!
//! The AI looks a fixed number of moves ahead with a minimax search and
//! alpha-beta pruning, scoring the positions at the edge of its horizon
//! with a hand-written heuristic.
//!
//! # Basic Usage
//!
//! ```
//! use connect4_minimax::{board::{Board, Player}, search::{Searcher, WIN_SCORE}};
//!
//!# use std::error::Error;
//!# fn main() -> Result<(), Box<dyn Error>> {
//! let mut board = Board::from_moves("112233")?;
//! let mut searcher = Searcher::default();
//! let result = searcher.choose_move(&mut board, Player::One, 1)?;
//!
//! assert!((result.column, result.score) == (3, WIN_SCORE));
//!# Ok(())
//!# }
//! ```

use static_assertions::*;
pub use anyhow;

pub mod board;

pub mod outcome;

pub mod moves;

pub mod heuristic;

pub mod search;

pub mod game;

pub mod arena;

pub mod config;

pub mod error;


/// The width of the game board in tiles
pub const WIDTH: usize = 7;

/// The height of the game board in tiles
pub const HEIGHT: usize = 6;

// the board must fit at least one line of four in every direction
const_assert!(WIDTH >= 4 && HEIGHT >= 4);

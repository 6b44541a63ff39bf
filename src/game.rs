//! Turn sequencing between a human and the search engine

use log::{debug, info};

use crate::board::{Board, Player};
use crate::error::GameError;
use crate::outcome::{outcome, Outcome};
use crate::search::{SearchConfig, Searcher};
use crate::WIDTH;

/// A move played by the AI
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct AiMove {
    pub column: usize,
    pub row: usize,
    pub outcome: Outcome,
    /// The minimax score of the move, from the mover's point of view
    pub score: i32,
}

/// A game in progress
///
/// Owns the board and decides whose tile is placed next. Moves are refused
/// once the game has ended.
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    to_move: Player,
    searcher: Searcher,
}

impl Game {
    pub fn new(config: SearchConfig) -> Self {
        Self {
            board: Board::new(),
            to_move: Player::One,
            searcher: Searcher::new(config),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn to_move(&self) -> Player {
        self.to_move
    }

    pub fn current_outcome(&self) -> Outcome {
        outcome(&self.board)
    }

    pub fn empty_cell_count(&self) -> usize {
        self.board.empty_cell_count()
    }

    /// Clears the board for a new game, `Player::One` to move
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.to_move = Player::One;
    }

    /// Plays a zero-indexed column for the side to move
    pub fn apply_human_move(&mut self, column: usize) -> Result<(usize, Outcome), GameError> {
        self.ensure_ongoing()?;
        if column >= WIDTH {
            return Err(GameError::InvalidColumn { column });
        }
        if !self.board.is_column_playable(column) {
            return Err(GameError::ColumnFull { column });
        }

        let row = self.play(column)?;
        Ok((row, self.current_outcome()))
    }

    /// Searches for and plays the best move of the side to move
    pub fn request_ai_move(&mut self, depth_limit: u32) -> Result<AiMove, GameError> {
        self.ensure_ongoing()?;
        let result = self
            .searcher
            .choose_move(&mut self.board, self.to_move, depth_limit)?;

        let row = self.play(result.column)?;
        Ok(AiMove {
            column: result.column,
            row,
            outcome: self.current_outcome(),
            score: result.score,
        })
    }

    /// Plays the AI move at the configured search depth
    pub fn request_default_ai_move(&mut self) -> Result<AiMove, GameError> {
        let depth = self.searcher.config().depth;
        self.request_ai_move(depth)
    }

    fn play(&mut self, column: usize) -> Result<usize, GameError> {
        let row = self.board.apply(column, self.to_move)?;
        info!("{} plays column {} (row {})", self.to_move, column, row);
        debug!("board after move:\n{}", self.board);
        self.to_move = self.to_move.other();
        Ok(row)
    }

    fn ensure_ongoing(&self) -> Result<(), GameError> {
        match self.current_outcome() {
            Outcome::Ongoing => Ok(()),
            done => Err(GameError::GameOver(done)),
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}

//! Depth-limited minimax search with alpha-beta pruning
//!
//! The search walks a single board in place: every candidate move is applied
//! through [`Board::speculate`] and retracted when the guard goes out of scope,
//! so no board is copied per node and the board is restored on every exit path,
//! including pruned branches and propagated errors.

use log::{debug, trace};
use serde::{Deserialize, Serialize};
use static_assertions::const_assert;

use crate::board::{Board, Player};
use crate::error::GameError;
use crate::heuristic::{self, MAX_HEURISTIC_SCORE};
use crate::moves::{legal_moves, MoveOrder};
use crate::outcome::{outcome, Outcome};
use crate::{HEIGHT, WIDTH};

/// Score of a position won by the maximizing player
pub const WIN_SCORE: i32 = 999;
/// Score of a drawn position
pub const DRAW_SCORE: i32 = 0;
/// Initial bound of the alpha-beta window, outside any reachable score
pub const SCORE_INFINITY: i32 = WIN_SCORE + 1;

const MAX_PLIES: u32 = (WIDTH * HEIGHT) as u32;

// a win must outrank any heuristic estimate, even after depth adjustment
const_assert!(WIN_SCORE - MAX_PLIES as i32 > MAX_HEURISTIC_SCORE);

/// How terminal wins are scored
#[derive(Copy, Clone, Eq, PartialEq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WinScoring {
    /// Every win scores `WIN_SCORE`, however far away it is
    Flat,
    /// Wins found with more search depth remaining score higher, so faster
    /// wins and slower losses are preferred
    DepthAdjusted,
}

impl Default for WinScoring {
    fn default() -> Self {
        WinScoring::Flat
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Depth limit of the AI's search, in plies
    pub depth: u32,
    pub move_order: MoveOrder,
    pub win_scoring: WinScoring,
    /// Disabling pruning gives a plain exhaustive minimax
    pub pruning: bool,
    /// Once this many nodes have been visited, remaining nodes are evaluated
    /// with the heuristic as if the depth limit had been reached. The count
    /// restarts with every `Searcher::choose_move`
    pub node_limit: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            depth: 5,
            move_order: MoveOrder::default(),
            win_scoring: WinScoring::default(),
            pruning: true,
            node_limit: None,
        }
    }
}

/// The move picked by a search and its minimax score
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SearchResult {
    pub column: usize,
    pub score: i32,
    /// The number of nodes visited (for diagnostics only)
    pub node_count: u64,
}

/// Minimax agent with alpha-beta pruning
///
/// Holds no state between searches other than its configuration; every
/// call to [`Searcher::choose_move`] is a fresh tree walk.
#[derive(Clone, Debug)]
pub struct Searcher {
    config: SearchConfig,
    node_count: u64,
}

impl Searcher {
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            node_count: 0,
        }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// The number of nodes visited by the last search
    pub fn node_count(&self) -> u64 {
        self.node_count
    }

    /// Finds the best column for `maximizing` to play on `board`
    ///
    /// Each legal move is scored by a full-window minimax search; the move
    /// with the strictly greatest score wins, so ties keep the first move in
    /// generator order. A `depth_limit` of 0 is treated as 1.
    ///
    /// The board is left exactly as it was passed in.
    pub fn choose_move(
        &mut self,
        board: &mut Board,
        maximizing: Player,
        depth_limit: u32,
    ) -> Result<SearchResult, GameError> {
        self.node_count = 0;
        let depth = depth_limit.max(1);

        let mut best: Option<(usize, i32)> = None;
        let moves = legal_moves(board, self.config.move_order);
        for column in moves.iter() {
            let score = {
                let mut child = board.speculate(column, maximizing)?;
                self.minimax(
                    &mut child,
                    maximizing,
                    false,
                    depth - 1,
                    -SCORE_INFINITY,
                    SCORE_INFINITY,
                )?
            };
            trace!("column {}: score {}", column, score);

            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((column, score));
            }
        }

        let (column, score) = best.ok_or(GameError::NoLegalMoves)?;
        debug!(
            "{} chooses column {} (score {}, depth {}, {} nodes)",
            maximizing, column, score, depth, self.node_count
        );
        Ok(SearchResult {
            column,
            score,
            node_count: self.node_count,
        })
    }

    /// Scores `board` for `maximizer`, with `depth` plies left to search
    ///
    /// `is_maximizing` tells whether `maximizer` is the side to move. The
    /// returned score never exceeds `WIN_SCORE` in magnitude.
    ///
    /// Visited nodes are added to `node_count`, which only `choose_move`
    /// resets, so direct calls share one `node_limit` budget until the next
    /// `choose_move`.
    pub fn minimax(
        &mut self,
        board: &mut Board,
        maximizer: Player,
        is_maximizing: bool,
        depth: u32,
        mut alpha: i32,
        mut beta: i32,
    ) -> Result<i32, GameError> {
        self.node_count += 1;

        match outcome(board) {
            Outcome::Ongoing => {}
            Outcome::Draw => return Ok(DRAW_SCORE),
            won => {
                let score = self.win_score(depth);
                return Ok(if won.winner() == Some(maximizer) {
                    score
                } else {
                    -score
                });
            }
        }

        if depth == 0 || self.budget_exhausted() {
            return Ok(heuristic::score(board, maximizer));
        }

        let mover = if is_maximizing {
            maximizer
        } else {
            maximizer.other()
        };
        let mut best = if is_maximizing {
            -SCORE_INFINITY
        } else {
            SCORE_INFINITY
        };

        // an ongoing board always has at least one playable column
        let moves = legal_moves(board, self.config.move_order);
        for column in moves.iter() {
            let value = {
                let mut child = board.speculate(column, mover)?;
                self.minimax(&mut child, maximizer, !is_maximizing, depth - 1, alpha, beta)?
            };

            if is_maximizing {
                best = best.max(value);
                alpha = alpha.max(best);
            } else {
                best = best.min(value);
                beta = beta.min(best);
            }
            // the opponent will never allow this branch
            if self.config.pruning && beta <= alpha {
                break;
            }
        }

        Ok(best)
    }

    fn win_score(&self, depth_remaining: u32) -> i32 {
        match self.config.win_scoring {
            WinScoring::Flat => WIN_SCORE,
            WinScoring::DepthAdjusted => {
                WIN_SCORE - (MAX_PLIES - depth_remaining.min(MAX_PLIES)) as i32
            }
        }
    }

    fn budget_exhausted(&self) -> bool {
        self.config
            .node_limit
            .map_or(false, |limit| self.node_count >= limit)
    }
}

impl Default for Searcher {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}

//! Static evaluation of non-terminal positions

use crate::board::{Board, Cell, Player, NUM_WINDOWS, WINDOWS, WINDOW_LENGTH};
use crate::{HEIGHT, WIDTH};

/// Bonus for each of the perspective player's tiles in the center column
pub const CENTER_BONUS: i32 = 2;
/// Window holding three own tiles and one empty cell
pub const THREE_OPEN_BONUS: i32 = 5;
/// Window holding two own tiles and two empty cells
pub const TWO_OPEN_BONUS: i32 = 2;
/// Window holding three opponent tiles and one empty cell
pub const THREE_OPEN_PENALTY: i32 = -4;

/// Upper bound on the magnitude of any `score`: every center cell owned and
/// every window worth the largest bonus
pub const MAX_HEURISTIC_SCORE: i32 =
    CENTER_BONUS * HEIGHT as i32 + THREE_OPEN_BONUS * NUM_WINDOWS as i32;

const CENTER_COLUMN: usize = WIDTH / 2;

fn score_window(own: usize, opponent: usize, empty: usize) -> i32 {
    let mut score = 0;
    if own == 3 && empty == 1 {
        score += THREE_OPEN_BONUS;
    } else if own == 2 && empty == 2 {
        score += TWO_OPEN_BONUS;
    }
    if opponent == 3 && empty == 1 {
        score += THREE_OPEN_PENALTY;
    }
    score
}

/// Scores the board from `perspective`'s point of view, positive favouring them
///
/// Only meaningful for ongoing positions; terminal positions are scored by
/// the search itself.
pub fn score(board: &Board, perspective: Player) -> i32 {
    let own_cell = perspective.cell();

    let center = (0..HEIGHT)
        .filter(|&row| board.get(row, CENTER_COLUMN) == own_cell)
        .count() as i32;
    let mut score = center * CENTER_BONUS;

    for window in WINDOWS.iter() {
        let (mut own, mut opponent, mut empty) = (0, 0, 0);
        for &(row, column) in window.iter() {
            match board.get(row, column) {
                Cell::Empty => empty += 1,
                c if c == own_cell => own += 1,
                _ => opponent += 1,
            }
        }
        debug_assert_eq!(own + opponent + empty, WINDOW_LENGTH);
        score += score_window(own, opponent, empty);
    }

    score
}

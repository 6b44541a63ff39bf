//! Terminal state detection

use std::fmt;

use crate::board::{Board, Player, WINDOWS};

#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Outcome {
    Ongoing,
    PlayerOneWin,
    PlayerTwoWin,
    Draw,
}

impl Outcome {
    pub fn win_for(player: Player) -> Self {
        match player {
            Player::One => Outcome::PlayerOneWin,
            Player::Two => Outcome::PlayerTwoWin,
        }
    }

    pub fn winner(self) -> Option<Player> {
        match self {
            Outcome::PlayerOneWin => Some(Player::One),
            Outcome::PlayerTwoWin => Some(Player::Two),
            _ => None,
        }
    }

    pub fn is_terminal(self) -> bool {
        self != Outcome::Ongoing
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Outcome::Ongoing => write!(f, "ongoing"),
            Outcome::PlayerOneWin => write!(f, "player 1 wins"),
            Outcome::PlayerTwoWin => write!(f, "player 2 wins"),
            Outcome::Draw => write!(f, "draw"),
        }
    }
}

/// Classifies the board by scanning every length-4 window once
///
/// The first complete window decides the winner; a legal game can never
/// hold complete windows for both players.
pub fn outcome(board: &Board) -> Outcome {
    for window in WINDOWS.iter() {
        let (row, column) = window[0];
        let first = board.get(row, column);
        if let Some(player) = first.owner() {
            if window[1..].iter().all(|&(r, c)| board.get(r, c) == first) {
                return Outcome::win_for(player);
            }
        }
    }

    if board.empty_cell_count() == 0 {
        Outcome::Draw
    } else {
        Outcome::Ongoing
    }
}

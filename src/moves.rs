//! Legal move generation

use serde::{Deserialize, Serialize};

use crate::{board::Board, WIDTH};

/// The order in which columns are tried by the search
///
/// Ordering only affects how much alpha-beta can prune, never the result.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MoveOrder {
    LeftToRight,
    CenterFirst,
}

impl Default for MoveOrder {
    fn default() -> Self {
        MoveOrder::LeftToRight
    }
}

/// Returns the columns ordered from the middle outwards, as
/// the middle columns are often better moves
pub const fn center_first() -> [usize; WIDTH] {
    let mut move_order = [0; WIDTH];
    let mut i = 0;
    while i < WIDTH {
        move_order[i] = (WIDTH / 2) + (i % 2) * (i / 2 + 1) - (1 - i % 2) * (i / 2);
        i += 1;
    }
    move_order
}

const LEFT_TO_RIGHT: [usize; WIDTH] = {
    let mut order = [0; WIDTH];
    let mut i = 0;
    while i < WIDTH {
        order[i] = i;
        i += 1;
    }
    order
};

const CENTER_FIRST: [usize; WIDTH] = center_first();

impl MoveOrder {
    pub fn columns(self) -> &'static [usize; WIDTH] {
        match self {
            MoveOrder::LeftToRight => &LEFT_TO_RIGHT,
            MoveOrder::CenterFirst => &CENTER_FIRST,
        }
    }
}

/// Up to `WIDTH` playable columns, without allocating
#[derive(Copy, Clone, Debug)]
pub struct MoveList {
    size: usize,
    columns: [usize; WIDTH],
}

impl MoveList {
    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.columns[..self.size]
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.as_slice().iter().copied()
    }
}

/// Every column that can still take a tile, in the given order
pub fn legal_moves(board: &Board, order: MoveOrder) -> MoveList {
    let mut moves = MoveList {
        size: 0,
        columns: [0; WIDTH],
    };
    for &column in order.columns().iter() {
        if board.is_column_playable(column) {
            moves.columns[moves.size] = column;
            moves.size += 1;
        }
    }
    moves
}

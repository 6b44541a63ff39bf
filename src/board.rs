use anyhow::anyhow;

use std::fmt;
use std::ops::{Deref, DerefMut};

use crate::{error::GameError, outcome::outcome, HEIGHT, WIDTH};

/// The number of aligned tiles needed to win
pub const WINDOW_LENGTH: usize = 4;

/// The number of length-4 windows on the board, over all four line orientations
pub const NUM_WINDOWS: usize = HEIGHT * (WIDTH - 3)
    + (HEIGHT - 3) * WIDTH
    + 2 * (HEIGHT - 3) * (WIDTH - 3);

/// Every length-4 window as `(row, column)` coordinates, in scan order:
/// horizontal (rows top-to-bottom, then left-to-right), vertical,
/// ascending diagonals, descending diagonals
pub const WINDOWS: [[(usize, usize); WINDOW_LENGTH]; NUM_WINDOWS] = windows();

const fn windows() -> [[(usize, usize); WINDOW_LENGTH]; NUM_WINDOWS] {
    let mut windows = [[(0, 0); WINDOW_LENGTH]; NUM_WINDOWS];
    let mut n = 0;

    // horizontal
    let mut row = 0;
    while row < HEIGHT {
        let mut column = 0;
        while column + WINDOW_LENGTH <= WIDTH {
            let mut i = 0;
            while i < WINDOW_LENGTH {
                windows[n][i] = (row, column + i);
                i += 1;
            }
            n += 1;
            column += 1;
        }
        row += 1;
    }

    // vertical
    let mut column = 0;
    while column < WIDTH {
        let mut row = 0;
        while row + WINDOW_LENGTH <= HEIGHT {
            let mut i = 0;
            while i < WINDOW_LENGTH {
                windows[n][i] = (row + i, column);
                i += 1;
            }
            n += 1;
            row += 1;
        }
        column += 1;
    }

    // diagonal /, starting from the lower end
    let mut row = WINDOW_LENGTH - 1;
    while row < HEIGHT {
        let mut column = 0;
        while column + WINDOW_LENGTH <= WIDTH {
            let mut i = 0;
            while i < WINDOW_LENGTH {
                windows[n][i] = (row - i, column + i);
                i += 1;
            }
            n += 1;
            column += 1;
        }
        row += 1;
    }

    // diagonal \, starting from the upper end
    let mut row = 0;
    while row + WINDOW_LENGTH <= HEIGHT {
        let mut column = 0;
        while column + WINDOW_LENGTH <= WIDTH {
            let mut i = 0;
            while i < WINDOW_LENGTH {
                windows[n][i] = (row + i, column + i);
                i += 1;
            }
            n += 1;
            column += 1;
        }
        row += 1;
    }

    windows
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Player {
    One,
    Two,
}

impl Player {
    pub fn other(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// The cell value holding a tile of this player
    pub fn cell(self) -> Cell {
        match self {
            Player::One => Cell::PlayerOne,
            Player::Two => Cell::PlayerTwo,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Player::One => write!(f, "Player 1"),
            Player::Two => write!(f, "Player 2"),
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Cell {
    PlayerOne,
    PlayerTwo,
    Empty,
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    pub fn owner(self) -> Option<Player> {
        match self {
            Cell::PlayerOne => Some(Player::One),
            Cell::PlayerTwo => Some(Player::Two),
            Cell::Empty => None,
        }
    }
}

/// The game grid
///
/// Row 0 is the top of the board and row `HEIGHT - 1` the bottom. Tiles always
/// fall to the lowest empty cell of a column, so a cell above an empty cell is
/// always empty.
#[derive(Clone, Eq, PartialEq, Debug, Hash)]
pub struct Board {
    cells: [[Cell; WIDTH]; HEIGHT],
    empty_cells: usize,
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [[Cell::Empty; WIDTH]; HEIGHT],
            empty_cells: WIDTH * HEIGHT,
        }
    }

    /// Builds a board from a string of one-indexed column digits,
    /// with players alternating from `Player::One`
    pub fn from_moves<S: AsRef<str>>(moves: S) -> anyhow::Result<Self> {
        let mut board = Self::new();
        let mut player = Player::One;

        for column_char in moves.as_ref().chars() {
            match column_char.to_digit(10).map(|c| c as usize) {
                Some(column @ 1..=WIDTH) => {
                    // abort if the position is already won
                    if outcome(&board).winner().is_some() {
                        return Err(anyhow!("Invalid position, game is over"));
                    }
                    board.apply(column - 1, player)?;
                    player = player.other();
                }
                _ => return Err(anyhow!("could not parse '{}' as a valid move", column_char)),
            }
        }
        Ok(board)
    }

    pub fn get(&self, row: usize, column: usize) -> Cell {
        self.cells[row][column]
    }

    pub fn is_column_playable(&self, column: usize) -> bool {
        column < WIDTH && self.cells[0][column].is_empty()
    }

    pub fn empty_cell_count(&self) -> usize {
        self.empty_cells
    }

    /// Drops a tile of `player` into `column`, returning the row it landed in
    pub fn apply(&mut self, column: usize, player: Player) -> Result<usize, GameError> {
        if column >= WIDTH {
            return Err(GameError::InvalidColumn { column });
        }
        let row = (0..HEIGHT)
            .rev()
            .find(|&row| self.cells[row][column].is_empty())
            .ok_or(GameError::ColumnFull { column })?;

        self.cells[row][column] = player.cell();
        self.empty_cells -= 1;
        Ok(row)
    }

    /// Removes the tile at `(row, column)`, which must be the position
    /// returned by the matching `apply`
    pub fn retract(&mut self, row: usize, column: usize) {
        debug_assert!(!self.cells[row][column].is_empty(), "retracting an empty cell");
        debug_assert!(
            row == 0 || self.cells[row - 1][column].is_empty(),
            "retracting a tile from under another tile"
        );
        self.cells[row][column] = Cell::Empty;
        self.empty_cells += 1;
    }

    /// Applies a move for as long as the returned guard lives
    ///
    /// The move is retracted when the guard is dropped, on every exit path
    pub fn speculate(
        &mut self,
        column: usize,
        player: Player,
    ) -> Result<Speculation<'_>, GameError> {
        let row = self.apply(column, player)?;
        Ok(Speculation {
            board: self,
            row,
            column,
        })
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.cells.iter() {
            for cell in row.iter() {
                let c = match cell {
                    Cell::PlayerOne => 'X',
                    Cell::PlayerTwo => 'O',
                    Cell::Empty => '.',
                };
                write!(f, "{}", c)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// A speculatively applied move, retracted on drop
pub struct Speculation<'a> {
    board: &'a mut Board,
    row: usize,
    column: usize,
}

impl Speculation<'_> {
    pub fn row(&self) -> usize {
        self.row
    }
}

impl Deref for Speculation<'_> {
    type Target = Board;

    fn deref(&self) -> &Self::Target {
        &*self.board
    }
}

impl DerefMut for Speculation<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut *self.board
    }
}

impl Drop for Speculation<'_> {
    fn drop(&mut self) {
        self.board.retract(self.row, self.column);
    }
}

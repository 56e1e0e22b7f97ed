//! Board representation for Renju

pub mod board;


// Re-exports
pub use board::{Board, Snapshot};

use std::fmt;

/// Default board size (16x16)
pub const BOARD_SIZE: usize = 16;

/// Length of a winning row
pub const WIN_LENGTH: usize = 5;

/// Line axes: anti-diagonal, vertical, diagonal, horizontal.
/// Each axis is walked both ways, so four cover every line.
pub const DIRECTIONS: [(i32, i32); 4] = [(1, -1), (1, 0), (1, 1), (0, 1)];

/// Label of column `col` on a board with `size` lines: a letter while the
/// alphabet lasts, the column number beyond that
pub fn column_label(col: usize, size: usize) -> String {
    match u8::try_from(col) {
        Ok(c) if size <= 26 && c < 26 => char::from(b'A' + c).to_string(),
        _ => col.to_string(),
    }
}

/// Cell contents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Stone {
    #[default]
    Empty,
    Black,
    White,
}

impl Stone {
    /// Get opponent color
    #[inline]
    pub fn opponent(self) -> Stone {
        match self {
            Stone::Black => Stone::White,
            Stone::White => Stone::Black,
            Stone::Empty => Stone::Empty,
        }
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self == Stone::Empty
    }
}

/// Side to move. Black always opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    Black,
    White,
}

impl Player {
    #[inline]
    pub fn opponent(self) -> Player {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }

    /// Stone this player places
    #[inline]
    pub fn stone(self) -> Stone {
        match self {
            Player::Black => Stone::Black,
            Player::White => Stone::White,
        }
    }

    /// Slot in per-player arrays (clocks)
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Player::Black => 0,
            Player::White => 1,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::Black => write!(f, "Black"),
            Player::White => write!(f, "White"),
        }
    }
}

/// Game outcome derived from the move history
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Outcome {
    #[default]
    Gaming,
    BlackWins,
    WhiteWins,
    Draw,
}

impl Outcome {
    /// Outcome for a five made by `stone`
    #[inline]
    pub fn win_for(stone: Stone) -> Outcome {
        match stone {
            Stone::Black => Outcome::BlackWins,
            Stone::White => Outcome::WhiteWins,
            Stone::Empty => Outcome::Gaming,
        }
    }

    #[inline]
    pub fn is_win(self) -> bool {
        matches!(self, Outcome::BlackWins | Outcome::WhiteWins)
    }

    #[inline]
    pub fn is_over(self) -> bool {
        self != Outcome::Gaming
    }

    pub fn winner(self) -> Option<Player> {
        match self {
            Outcome::BlackWins => Some(Player::Black),
            Outcome::WhiteWins => Some(Player::White),
            Outcome::Gaming | Outcome::Draw => None,
        }
    }
}

/// Board coordinate, 0-indexed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    #[inline]
    pub fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Step `n` cells along `(dr, dc)`; `None` if a coordinate goes negative
    /// or past `u8`. Callers still have to bound-check against the board.
    #[inline]
    pub fn offset(self, dr: i32, dc: i32, n: i32) -> Option<Pos> {
        let r = i32::from(self.row) + dr * n;
        let c = i32::from(self.col) + dc * n;
        let row = u8::try_from(r).ok()?;
        let col = u8::try_from(c).ok()?;
        Some(Pos::new(row, col))
    }
}

impl From<(u8, u8)> for Pos {
    fn from((row, col): (u8, u8)) -> Self {
        Pos::new(row, col)
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

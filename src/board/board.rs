//! Board structure with move history

use super::{Outcome, Player, Pos, Stone, BOARD_SIZE, WIN_LENGTH};
use crate::error::GameError;
use crate::rules::longest_line_through;

/// Game board: square grid, side to move, move stack and outcome.
///
/// Cells are stored row-major in one contiguous vector. The outcome is
/// recomputed from the last move only, so `apply`/`undo` cost one line
/// walk each.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Stone>,
    whose_move: Player,
    history: Vec<Pos>,
    outcome: Outcome,
}

/// Read-only copy of the board for rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub size: usize,
    pub cells: Vec<Stone>,
    pub whose_move: Player,
    pub outcome: Outcome,
    pub last_move: Option<Pos>,
}

impl Snapshot {
    #[inline]
    pub fn get(&self, pos: Pos) -> Stone {
        self.cells[pos.row as usize * self.size + pos.col as usize]
    }
}

impl Board {
    /// Empty board of the given dimension, Black to move.
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero or does not fit a `u8` coordinate.
    pub fn new(size: usize) -> Self {
        assert!(
            size > 0 && size <= u8::MAX as usize + 1,
            "board size must be in 1..=256, got {size}"
        );
        Self {
            size,
            cells: vec![Stone::Empty; size * size],
            whose_move: Player::Black,
            history: Vec::with_capacity(size * size),
            outcome: Outcome::Gaming,
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn whose_move(&self) -> Player {
        self.whose_move
    }

    #[inline]
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Applied moves, oldest first
    #[inline]
    pub fn history(&self) -> &[Pos] {
        &self.history
    }

    #[inline]
    pub fn last_move(&self) -> Option<Pos> {
        self.history.last().copied()
    }

    #[inline]
    pub fn move_count(&self) -> usize {
        self.history.len()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.history.len() == self.cells.len()
    }

    /// Signed-coordinate bounds check
    #[inline]
    pub fn in_bounds(&self, row: i32, col: i32) -> bool {
        let n = self.size as i32;
        (0..n).contains(&row) && (0..n).contains(&col)
    }

    #[inline]
    pub fn contains(&self, pos: Pos) -> bool {
        (pos.row as usize) < self.size && (pos.col as usize) < self.size
    }

    #[inline]
    fn index(&self, pos: Pos) -> usize {
        pos.row as usize * self.size + pos.col as usize
    }

    /// Get stone at position. `pos` must be on the board.
    #[inline]
    pub fn get(&self, pos: Pos) -> Stone {
        self.cells[self.index(pos)]
    }

    /// Like `get`, but `None` off the board
    #[inline]
    pub fn try_get(&self, pos: Pos) -> Option<Stone> {
        self.contains(pos).then(|| self.get(pos))
    }

    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.get(pos).is_empty()
    }

    /// Empty cells in row-major order
    pub fn empty_cells(&self) -> impl Iterator<Item = Pos> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, s)| s.is_empty())
            .map(move |(i, _)| Pos::new((i / size) as u8, (i % size) as u8))
    }

    /// Play the side to move at `pos`.
    ///
    /// Fails without touching the board if `pos` is off the board or
    /// occupied. Moves after a decided game are accepted; the outcome is
    /// always that of the newest move.
    pub fn apply(&mut self, pos: Pos) -> Result<(), GameError> {
        if !self.contains(pos) {
            return Err(GameError::OutOfBounds(pos));
        }
        let idx = self.index(pos);
        if !self.cells[idx].is_empty() {
            return Err(GameError::Occupied(pos));
        }

        self.history.push(pos);
        self.cells[idx] = self.whose_move.stone();
        self.whose_move = self.whose_move.opponent();
        self.update_outcome();
        Ok(())
    }

    /// Non-failing `apply` for interactive callers
    pub fn try_apply(&mut self, pos: Pos) -> bool {
        self.apply(pos).is_ok()
    }

    /// Take back the most recent move
    pub fn undo(&mut self) -> Result<Pos, GameError> {
        let pos = self.history.pop().ok_or(GameError::EmptyHistory)?;
        let idx = self.index(pos);
        self.cells[idx] = Stone::Empty;
        self.whose_move = self.whose_move.opponent();
        self.update_outcome();
        Ok(pos)
    }

    /// Reset to the initial empty position
    pub fn clear(&mut self) {
        self.cells.fill(Stone::Empty);
        self.history.clear();
        self.whose_move = Player::Black;
        self.outcome = Outcome::Gaming;
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            size: self.size,
            cells: self.cells.clone(),
            whose_move: self.whose_move,
            outcome: self.outcome,
            last_move: self.last_move(),
        }
    }

    /// Endpoints of the winning row, if the last move won
    pub fn winning_line(&self) -> Option<(Pos, Pos)> {
        crate::rules::find_winning_line(self)
    }

    /// Outcome from the last move alone
    fn update_outcome(&mut self) {
        let Some(last) = self.last_move() else {
            self.outcome = Outcome::Gaming;
            return;
        };

        self.outcome = if longest_line_through(self, last).length >= WIN_LENGTH {
            Outcome::win_for(self.get(last))
        } else if self.is_full() {
            Outcome::Draw
        } else {
            Outcome::Gaming
        };
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(BOARD_SIZE)
    }
}

//! Line scanning and win detection
//!
//! A game is won by five or more stones of one color in a row along any of
//! the four axes. Overlines count; there is no Renju overline restriction.

use crate::board::{Board, Pos, DIRECTIONS, WIN_LENGTH};

/// Longest same-colored run through an anchor cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line {
    /// Number of stones in the run, anchor included
    pub length: usize,
    /// Run endpoints: the far end along the axis, then the far end against it
    pub ends: (Pos, Pos),
}

/// Walk from `anchor` while cells match its color; returns the last
/// matching cell and the number of steps taken.
#[inline]
fn walk(board: &Board, anchor: Pos, dr: i32, dc: i32) -> (Pos, usize) {
    let color = board.get(anchor);
    let mut end = anchor;
    let mut steps = 0;
    while let Some(next) = end.offset(dr, dc, 1) {
        if board.try_get(next) != Some(color) {
            break;
        }
        end = next;
        steps += 1;
    }
    (end, steps)
}

/// Find the longest run of the anchor's color through `anchor`.
///
/// Axes are tried in [`DIRECTIONS`] order and a later axis only replaces
/// the current best when strictly longer. `anchor` must hold a stone.
pub fn longest_line_through(board: &Board, anchor: Pos) -> Line {
    debug_assert!(!board.is_empty(anchor), "line scan from empty cell {anchor}");

    let mut best = Line {
        length: 1,
        ends: (anchor, anchor),
    };
    for &(dr, dc) in &DIRECTIONS {
        let (forward, ahead) = walk(board, anchor, dr, dc);
        let (backward, behind) = walk(board, anchor, -dr, -dc);
        let length = 1 + ahead + behind;
        if length > best.length {
            best = Line {
                length,
                ends: (forward, backward),
            };
        }
    }
    best
}

/// Fast five-in-a-row check at a specific position.
#[inline]
pub fn has_five_at_pos(board: &Board, pos: Pos) -> bool {
    !board.is_empty(pos) && longest_line_through(board, pos).length >= WIN_LENGTH
}

/// Endpoints of the winning row through the last move.
///
/// `None` unless the board outcome is a win.
pub fn find_winning_line(board: &Board) -> Option<(Pos, Pos)> {
    if !board.outcome().is_win() {
        return None;
    }
    let last = board.last_move()?;
    Some(longest_line_through(board, last).ends)
}

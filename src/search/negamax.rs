//! Depth-limited negamax search
//!
//! Every empty cell is a candidate, tried in row-major order. The board is
//! mutated in place with `apply` and restored with `undo` before the next
//! candidate, so the caller gets its board back exactly as it was.
//!
//! # Example
//!
//! ```
//! use renju::board::{Board, Pos};
//! use renju::search::Searcher;
//!
//! let mut board = Board::new(9);
//! board.apply(Pos::new(4, 4)).unwrap();
//!
//! let mut searcher = Searcher::new(1);
//! let result = searcher.search(&mut board, 0);
//! assert!(result.best_move.is_some());
//! assert_eq!(board.move_count(), 1);
//! ```

use crate::board::{Board, Outcome, Pos};
use crate::eval::{evaluate, INF};

/// Search result: score from the side to move and the move achieving it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// Best move found; `None` at the horizon or with no empty cell
    pub best_move: Option<Pos>,
    pub score: i64,
    /// Nodes visited by this call, the node itself included
    pub nodes: u64,
}

/// Negamax searcher with a fixed horizon
#[derive(Debug, Clone)]
pub struct Searcher {
    max_depth: u8,
    nodes: u64,
}

impl Searcher {
    /// Searcher that evaluates positions `max_depth` plies below the root.
    /// A depth of 0 evaluates the root itself.
    #[must_use]
    pub fn new(max_depth: u8) -> Self {
        Self {
            max_depth,
            nodes: 0,
        }
    }

    #[inline]
    pub fn max_depth(&self) -> u8 {
        self.max_depth
    }

    /// Total nodes visited since construction
    #[inline]
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Search `board` with `depth` plies already played below the root.
    ///
    /// A candidate that wins on the spot returns `INF` immediately; one
    /// that fills the board without a winner scores 0. Ties keep the first
    /// candidate in row-major order.
    pub fn search(&mut self, board: &mut Board, depth: u8) -> SearchResult {
        let start_nodes = self.nodes;
        let (score, best_move) = self.negamax(board, depth);
        SearchResult {
            best_move,
            score,
            nodes: self.nodes - start_nodes,
        }
    }

    fn negamax(&mut self, board: &mut Board, depth: u8) -> (i64, Option<Pos>) {
        self.nodes += 1;

        if depth >= self.max_depth {
            return (evaluate(board), None);
        }

        let mut best_score = -INF - 1;
        let mut best_move = None;

        let candidates: Vec<Pos> = board.empty_cells().collect();
        for pos in candidates {
            if board.apply(pos).is_err() {
                unreachable!("empty cell {pos} rejected");
            }

            let score = match board.outcome() {
                Outcome::BlackWins | Outcome::WhiteWins => {
                    self.restore(board);
                    return (INF, Some(pos));
                }
                Outcome::Draw => 0,
                Outcome::Gaming => -self.negamax(board, depth + 1).0,
            };
            self.restore(board);

            if score > best_score || best_move.is_none() {
                best_score = score;
                best_move = Some(pos);
            }
        }

        (best_score, best_move)
    }

    /// Take back a probe move
    #[inline]
    fn restore(&self, board: &mut Board) {
        if board.undo().is_err() {
            unreachable!("probe move missing from history");
        }
    }
}

impl Default for Searcher {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_MAX_DEPTH)
    }
}

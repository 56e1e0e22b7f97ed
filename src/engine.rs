//! Computer player built on the negamax searcher
//!
//! The engine borrows the board mutably for the length of a search and
//! hands it back unchanged; only [`AIEngine::apply_computer_move`] keeps a
//! move on the board.
//!
//! # Example
//!
//! ```
//! use renju::{AIEngine, Board, Pos};
//!
//! let mut engine = AIEngine::new();
//! let mut board = Board::new(9);
//! board.apply(Pos::new(4, 4)).unwrap();
//!
//! let reply = engine.apply_computer_move(&mut board).unwrap();
//! assert_eq!(board.last_move(), Some(reply));
//! ```

use std::time::Instant;

use tracing::debug;

use crate::board::{Board, Pos};
use crate::config::EngineConfig;
use crate::error::GameError;
use crate::search::{SearchResult, Searcher};

/// Result of a move search with statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveResult {
    pub best_move: Pos,
    /// Score of the position for the side that moves
    pub score: i64,
    pub nodes: u64,
    pub time_ms: u64,
}

impl MoveResult {
    #[inline]
    fn from_search(result: SearchResult, best_move: Pos, time_ms: u64) -> Self {
        Self {
            best_move,
            score: result.score,
            nodes: result.nodes,
            time_ms,
        }
    }
}

/// Main AI engine for Renju.
#[derive(Debug, Clone)]
pub struct AIEngine {
    searcher: Searcher,
}

impl AIEngine {
    /// Engine with the default search depth
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    #[must_use]
    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            searcher: Searcher::new(config.max_depth),
        }
    }

    #[inline]
    pub fn max_depth(&self) -> u8 {
        self.searcher.max_depth()
    }

    /// Pick a move for the side to move without keeping it on the board.
    pub fn choose_move(&mut self, board: &mut Board) -> Result<Pos, GameError> {
        self.get_move_with_stats(board).map(|r| r.best_move)
    }

    /// Pick a move and report score, node count and time taken.
    ///
    /// Fails with [`GameError::NoLegalMove`] when the game is already
    /// decided or no cell is empty.
    pub fn get_move_with_stats(&mut self, board: &mut Board) -> Result<MoveResult, GameError> {
        if board.outcome().is_over() || board.is_full() {
            return Err(GameError::NoLegalMove);
        }

        let start = Instant::now();
        let result = self.searcher.search(board, 0);
        let best_move = result.best_move.ok_or(GameError::NoLegalMove)?;
        let time_ms = start.elapsed().as_millis() as u64;

        debug!(
            player = %board.whose_move(),
            %best_move,
            score = result.score,
            nodes = result.nodes,
            time_ms,
            "search finished"
        );
        Ok(MoveResult::from_search(result, best_move, time_ms))
    }

    /// Choose a move and play it.
    pub fn apply_computer_move(&mut self, board: &mut Board) -> Result<Pos, GameError> {
        let pos = self.choose_move(board)?;
        board.apply(pos)?;
        Ok(pos)
    }
}

impl Default for AIEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Outcome, Player};
    use crate::eval::INF;

    #[test]
    fn test_engine_default() {
        let engine = AIEngine::default();
        assert_eq!(engine.max_depth(), 1);
    }

    #[test]
    fn test_engine_finds_winning_move() {
        let mut board = Board::new(15);
        for (r, c) in [(0, 0), (10, 4), (1, 0), (10, 7), (2, 0), (10, 10), (3, 0), (12, 12)] {
            board.apply(Pos::new(r, c)).unwrap();
        }
        let mut engine = AIEngine::new();
        let result = engine.get_move_with_stats(&mut board).unwrap();
        assert_eq!(result.best_move, Pos::new(4, 0));
        assert_eq!(result.score, INF);

        engine.apply_computer_move(&mut board).unwrap();
        assert_eq!(board.outcome(), Outcome::BlackWins);
    }

    #[test]
    fn test_choose_move_leaves_board_untouched() {
        let mut board = Board::new(9);
        board.apply(Pos::new(4, 4)).unwrap();
        let before = board.clone();

        let mut engine = AIEngine::new();
        let pos = engine.choose_move(&mut board).unwrap();
        assert_eq!(board, before);
        assert!(board.is_empty(pos));
    }

    #[test]
    fn test_full_board_has_no_legal_move() {
        let mut board = Board::new(3);
        for row in 0..3 {
            for col in 0..3 {
                board.apply(Pos::new(row, col)).unwrap();
            }
        }
        let before = board.clone();
        let mut engine = AIEngine::new();
        assert_eq!(engine.choose_move(&mut board), Err(GameError::NoLegalMove));
        assert_eq!(engine.apply_computer_move(&mut board), Err(GameError::NoLegalMove));
        assert_eq!(board, before);
    }

    #[test]
    fn test_decided_board_has_no_legal_move() {
        let mut board = Board::new(9);
        for i in 0..5 {
            board.apply(Pos::new(i, 0)).unwrap();
            if i < 4 {
                board.apply(Pos::new(i, 8)).unwrap();
            }
        }
        assert_eq!(board.outcome(), Outcome::BlackWins);
        let mut engine = AIEngine::new();
        assert_eq!(engine.choose_move(&mut board), Err(GameError::NoLegalMove));
    }

    #[test]
    fn test_engine_alternating_colors() {
        let mut engine = AIEngine::new();
        let mut board = Board::new(9);

        for ply in 0..5 {
            let expected = if ply % 2 == 0 { Player::Black } else { Player::White };
            assert_eq!(board.whose_move(), expected);
            engine.apply_computer_move(&mut board).unwrap();
        }
        assert_eq!(board.move_count(), 5);
    }

    #[test]
    fn test_engine_multiple_searches() {
        let mut engine = AIEngine::new();
        let mut board = Board::new(9);

        let first = engine.choose_move(&mut board);
        let second = engine.choose_move(&mut board);
        assert_eq!(first, second);
    }
}

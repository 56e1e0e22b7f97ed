//! Heuristic evaluation function for Renju board positions
//!
//! The score is the sum over every five-cell window on the board. Windows
//! holding both colors are dead and score nothing; single-color windows
//! score by [`window_weight`], added for the side to move and subtracted
//! for its opponent. Overlapping windows on the same line each count.

use crate::board::{Board, Pos, Stone, DIRECTIONS, WIN_LENGTH};

use super::patterns::{window_weight, INF};

/// Evaluate the board from the perspective of the side to move.
///
/// A board whose outcome is already a win returns [`INF`].
#[must_use]
pub fn evaluate(board: &Board) -> i64 {
    if board.outcome().is_win() {
        return INF;
    }

    let me = board.whose_move().stone();
    let size = board.size() as i32;
    let reach = WIN_LENGTH as i32 - 1;
    let mut score = 0;

    for row in 0..size {
        for col in 0..size {
            for &(dr, dc) in &DIRECTIONS {
                if !board.in_bounds(row + dr * reach, col + dc * reach) {
                    continue;
                }
                let (black, white) = count_window(board, row, col, dr, dc);
                score += window_score(black, white, me);
            }
        }
    }

    score
}

/// Stone counts (black, white) in the window starting at `(row, col)`.
/// The whole window must be on the board.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn count_window(board: &Board, row: i32, col: i32, dr: i32, dc: i32) -> (usize, usize) {
    let mut black = 0;
    let mut white = 0;
    for i in 0..WIN_LENGTH as i32 {
        let pos = Pos::new((row + dr * i) as u8, (col + dc * i) as u8);
        match board.get(pos) {
            Stone::Black => black += 1,
            Stone::White => white += 1,
            Stone::Empty => {}
        }
    }
    (black, white)
}

/// Signed contribution of one window for the side `me`
#[inline]
fn window_score(black: usize, white: usize, me: Stone) -> i64 {
    let (mine, theirs) = match me {
        Stone::White => (white, black),
        _ => (black, white),
    };
    match (mine, theirs) {
        (0, 0) => 0,
        (m, 0) => window_weight(m),
        (0, t) => -window_weight(t),
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Outcome;

    fn board_with(size: usize, moves: &[(u8, u8)]) -> Board {
        let mut board = Board::new(size);
        for &m in moves {
            board.apply(m.into()).unwrap();
        }
        board
    }

    #[test]
    fn test_empty_board_is_zero() {
        assert_eq!(evaluate(&Board::new(15)), 0);
        assert_eq!(evaluate(&Board::new(16)), 0);
    }

    #[test]
    fn test_board_smaller_than_window() {
        let board = board_with(3, &[(1, 1), (0, 0)]);
        assert_eq!(evaluate(&board), 0);
    }

    #[test]
    fn test_single_stones_score_nothing() {
        let board = board_with(15, &[(7, 7), (0, 0)]);
        assert_eq!(evaluate(&board), 0);
    }

    #[test]
    fn test_two_in_a_row_for_side_to_move() {
        // Black pair on row 7 lies in four horizontal windows (start cols 4..=7)
        let board = board_with(15, &[(7, 7), (0, 0), (7, 8), (0, 14)]);
        assert_eq!(board.whose_move().stone(), Stone::Black);
        assert_eq!(evaluate(&board), 400);
    }

    #[test]
    fn test_score_flips_with_side_to_move() {
        let mut board = board_with(15, &[(7, 7), (0, 0), (7, 8), (0, 14)]);
        let black_view = evaluate(&board);
        // A far-off Black stone shares no window with anything
        board.apply(Pos::new(14, 7)).unwrap();
        assert_eq!(board.whose_move().stone(), Stone::White);
        assert_eq!(evaluate(&board), -black_view);
    }

    #[test]
    fn test_three_in_a_row_weight() {
        // Horizontal windows covering cols 6..=8 start at cols 4..=6
        let board = board_with(15, &[(7, 6), (0, 0), (7, 7), (0, 14), (7, 8)]);
        // White to move: 3 windows of three, 2 windows of two (start 3 and 7)
        assert_eq!(evaluate(&board), -(3 * 200 + 2 * 100));
    }

    #[test]
    fn test_mixed_window_is_dead() {
        // Black pair at cols 6..=7; White at col 8 kills windows starting 4..=6
        let board = board_with(15, &[(7, 6), (0, 0), (7, 7), (7, 8)]);
        assert_eq!(evaluate(&board), 100);
    }

    #[test]
    fn test_decided_board_returns_infinity() {
        let mut board = Board::new(15);
        for i in 0..5 {
            board.apply(Pos::new(i, 0)).unwrap();
            if i < 4 {
                board.apply(Pos::new(i, 1)).unwrap();
            }
        }
        assert_eq!(board.outcome(), Outcome::BlackWins);
        assert_eq!(evaluate(&board), INF);
    }

    #[test]
    fn test_four_dominates() {
        let board = board_with(
            15,
            &[(7, 3), (0, 0), (7, 4), (0, 14), (7, 5), (14, 0), (7, 6), (14, 14)],
        );
        assert!(evaluate(&board) > 4_000_000);
    }
}

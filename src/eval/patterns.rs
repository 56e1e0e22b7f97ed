//! Window weights for Renju evaluation
//!
//! A window is five consecutive cells along one axis. Only windows holding
//! stones of a single color score, by how many stones they hold.

use crate::board::WIN_LENGTH;

/// Score of a decided position; also the search's infinity.
pub const INF: i64 = 10_000_000_000;

/// Weight of a single-color window, indexed by its stone count.
///
/// Four in a window is one move from five, hence the jump.
pub const WINDOW_WEIGHTS: [i64; WIN_LENGTH] = [0, 0, 100, 200, 4_000_000];

/// Weight for a window holding `count` stones of one color
#[inline]
pub fn window_weight(count: usize) -> i64 {
    WINDOW_WEIGHTS.get(count).copied().unwrap_or(INF)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weight_hierarchy() {
        assert_eq!(window_weight(0), 0);
        assert_eq!(window_weight(1), 0);
        assert!(window_weight(3) > window_weight(2));
        assert!(window_weight(4) > 10_000 * window_weight(3));
        assert!(INF > window_weight(4));
    }

    #[test]
    fn test_full_window_is_decided() {
        assert_eq!(window_weight(WIN_LENGTH), INF);
    }
}

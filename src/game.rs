//! Play session: board plus move timing
//!
//! Each player starts with the same clock. Playing a move charges the time
//! since the previous event to the mover; undoing refunds it. Running out
//! of time loses, which the session reports through [`Game::outcome`]
//! without touching the board's own outcome.

use std::time::{Duration, Instant};

use tracing::info;

use crate::board::{Board, Outcome, Player, Pos};
use crate::config::GameConfig;
use crate::engine::{AIEngine, MoveResult};
use crate::error::GameError;

/// A game in progress
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    /// Thinking time of each ply, parallel to the board history
    durations: Vec<Duration>,
    /// Seconds left per player as of `last_event`; negative once flagged
    clocks: [f64; 2],
    time_limit: Duration,
    last_event: Instant,
    flagged: Option<Player>,
}

impl Game {
    pub fn new(config: &GameConfig) -> Self {
        Self::with_board(Board::new(config.board_size), config.time_limit)
    }

    fn with_board(board: Board, time_limit: Duration) -> Self {
        Self {
            board,
            durations: Vec::new(),
            clocks: [time_limit.as_secs_f64(); 2],
            time_limit,
            last_event: Instant::now(),
            flagged: None,
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn durations(&self) -> &[Duration] {
        &self.durations
    }

    #[inline]
    pub fn time_limit(&self) -> Duration {
        self.time_limit
    }

    /// Board outcome, overridden by a loss on time
    pub fn outcome(&self) -> Outcome {
        match self.flagged {
            Some(Player::Black) => Outcome::WhiteWins,
            Some(Player::White) => Outcome::BlackWins,
            None => self.board.outcome(),
        }
    }

    /// Player who ran out of time, if any
    #[inline]
    pub fn flagged(&self) -> Option<Player> {
        self.flagged
    }

    /// Play at `pos`, charging the time since the last event to the mover.
    pub fn apply_move(&mut self, pos: Pos) -> Result<(), GameError> {
        let duration = self.last_event.elapsed();
        self.apply_move_timed(pos, duration)?;
        self.last_event = Instant::now();
        Ok(())
    }

    /// Play at `pos` with an explicit thinking time.
    pub fn apply_move_timed(&mut self, pos: Pos, duration: Duration) -> Result<(), GameError> {
        let mover = self.board.whose_move();
        self.board.apply(pos)?;
        self.durations.push(duration);
        self.clocks[mover.index()] -= duration.as_secs_f64();
        Ok(())
    }

    /// Let `engine` pick a move for the side to move and play it, charging
    /// the search time to the mover like any other move.
    pub fn computer_move(&mut self, engine: &mut AIEngine) -> Result<MoveResult, GameError> {
        let result = engine.get_move_with_stats(&mut self.board)?;
        self.apply_move(result.best_move)?;
        Ok(result)
    }

    /// Non-failing `apply_move` for clicks and typed input
    pub fn try_apply_move(&mut self, pos: Pos) -> bool {
        self.apply_move(pos).is_ok()
    }

    /// Take back one ply and refund its time.
    ///
    /// With nothing to undo the clocks are reset and `EmptyHistory` is
    /// returned.
    pub fn undo_move(&mut self) -> Result<Pos, GameError> {
        let pos = match self.board.undo() {
            Ok(pos) => pos,
            Err(err) => {
                self.clocks = [self.time_limit.as_secs_f64(); 2];
                self.last_event = Instant::now();
                return Err(err);
            }
        };
        let refund = self.durations.pop().unwrap_or_default();
        self.clocks[self.board.whose_move().index()] += refund.as_secs_f64();
        self.last_event = Instant::now();
        self.flagged = None;
        Ok(pos)
    }

    /// Take back until it is `human`'s turn again: one ply, or two if the
    /// computer had already answered. Returns how many plies were undone.
    pub fn undo_turn(&mut self, human: Player) -> usize {
        let mut undone = 0;
        if self.undo_move().is_ok() {
            undone += 1;
            if self.board.whose_move() != human && self.undo_move().is_ok() {
                undone += 1;
            }
        }
        undone
    }

    /// Seconds left for (Black, White), counting the running move
    pub fn remaining_times(&self) -> (f64, f64) {
        let mut clocks = self.clocks;
        if self.flagged.is_none() && !self.board.outcome().is_over() {
            clocks[self.board.whose_move().index()] -= self.last_event.elapsed().as_secs_f64();
        }
        (clocks[0], clocks[1])
    }

    /// Flag a player whose clock has run out. Returns the new flag, if any.
    pub fn check_time(&mut self) -> Option<Player> {
        if self.flagged.is_some() || self.board.outcome().is_over() {
            return None;
        }
        let (black, white) = self.remaining_times();
        let flagged = if black < 0.0 {
            Player::Black
        } else if white < 0.0 {
            Player::White
        } else {
            return None;
        };
        info!(player = %flagged, "out of time");
        self.flagged = Some(flagged);
        Some(flagged)
    }

    /// Restart the clock for the side to move, e.g. after loading
    pub fn resume_clock(&mut self) {
        self.last_event = Instant::now();
    }

    /// Start over with an empty board and full clocks
    pub fn restart(&mut self) {
        let size = self.board.size();
        *self = Self::with_board(Board::new(size), self.time_limit);
        info!(size, "new game");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(size: usize) -> GameConfig {
        GameConfig {
            board_size: size,
            ..GameConfig::default()
        }
    }

    fn secs(s: u64) -> Duration {
        Duration::from_secs(s)
    }

    #[test]
    fn test_timed_moves_charge_the_mover() {
        let mut game = Game::new(&config(9));
        game.apply_move_timed(Pos::new(4, 4), secs(10)).unwrap();
        game.apply_move_timed(Pos::new(3, 3), secs(25)).unwrap();
        assert_eq!(game.clocks, [50.0, 35.0]);
        assert_eq!(game.durations(), &[secs(10), secs(25)]);
    }

    #[test]
    fn test_rejected_move_keeps_clocks() {
        let mut game = Game::new(&config(9));
        game.apply_move_timed(Pos::new(4, 4), secs(10)).unwrap();
        let err = game.apply_move_timed(Pos::new(4, 4), secs(5)).unwrap_err();
        assert_eq!(err, GameError::Occupied(Pos::new(4, 4)));
        assert_eq!(game.clocks, [50.0, 60.0]);
        assert_eq!(game.durations().len(), 1);
        assert!(!game.try_apply_move(Pos::new(9, 0)));
    }

    #[test]
    fn test_undo_refunds_time() {
        let mut game = Game::new(&config(9));
        game.apply_move_timed(Pos::new(4, 4), secs(10)).unwrap();
        game.apply_move_timed(Pos::new(3, 3), secs(25)).unwrap();
        assert_eq!(game.undo_move(), Ok(Pos::new(3, 3)));
        assert_eq!(game.clocks, [50.0, 60.0]);
        assert_eq!(game.board().whose_move(), Player::White);
    }

    #[test]
    fn test_undo_on_empty_resets_clocks() {
        let mut game = Game::new(&config(9));
        game.clocks = [1.0, 2.0];
        assert_eq!(game.undo_move(), Err(GameError::EmptyHistory));
        assert_eq!(game.clocks, [60.0, 60.0]);
    }

    #[test]
    fn test_undo_turn_returns_to_human() {
        let mut game = Game::new(&config(9));
        game.apply_move_timed(Pos::new(4, 4), secs(1)).unwrap();
        game.apply_move_timed(Pos::new(3, 3), secs(1)).unwrap();
        assert_eq!(game.undo_turn(Player::Black), 2);
        assert_eq!(game.board().move_count(), 0);

        // Computer has not answered yet: only the human's ply goes
        game.apply_move_timed(Pos::new(4, 4), secs(1)).unwrap();
        game.apply_move_timed(Pos::new(3, 3), secs(1)).unwrap();
        game.apply_move_timed(Pos::new(2, 2), secs(1)).unwrap();
        assert_eq!(game.undo_turn(Player::White), 2);
        assert_eq!(game.board().whose_move(), Player::White);
        assert_eq!(game.undo_turn(Player::Black), 1);
        assert_eq!(game.undo_turn(Player::Black), 0);
    }

    #[test]
    fn test_flag_fall() {
        let mut game = Game::new(&config(9));
        game.apply_move_timed(Pos::new(4, 4), secs(61)).unwrap();
        assert_eq!(game.check_time(), Some(Player::Black));
        assert_eq!(game.outcome(), Outcome::WhiteWins);
        assert_eq!(game.board().outcome(), Outcome::Gaming);
        // Already flagged
        assert_eq!(game.check_time(), None);
    }

    #[test]
    fn test_clock_within_limit() {
        let mut game = Game::new(&config(9));
        game.apply_move_timed(Pos::new(4, 4), secs(30)).unwrap();
        assert_eq!(game.check_time(), None);
        let (black, white) = game.remaining_times();
        assert_eq!(black, 30.0);
        assert!(white <= 60.0 && white > 59.0);
    }

    #[test]
    fn test_computer_move_is_logged() {
        let mut game = Game::new(&config(9));
        let mut engine = AIEngine::new();
        game.apply_move(Pos::new(4, 4)).unwrap();
        let result = game.computer_move(&mut engine).unwrap();

        assert_eq!(game.board().last_move(), Some(result.best_move));
        assert_eq!(game.durations().len(), game.board().move_count());
        assert_eq!(game.board().whose_move(), Player::Black);
    }

    #[test]
    fn test_computer_move_on_decided_game() {
        let mut game = Game::new(&config(9));
        for i in 0..5u8 {
            game.apply_move_timed(Pos::new(i, 0), secs(1)).unwrap();
            if i < 4 {
                game.apply_move_timed(Pos::new(i, 8), secs(1)).unwrap();
            }
        }
        let before = game.board().clone();
        let err = game.computer_move(&mut AIEngine::new()).unwrap_err();
        assert_eq!(err, GameError::NoLegalMove);
        assert_eq!(game.board(), &before);
        assert_eq!(game.durations().len(), 9);
    }

    #[test]
    fn test_save_refuses_unlogged_moves() {
        let mut game = Game::new(&config(9));
        game.apply_move_timed(Pos::new(4, 4), secs(1)).unwrap();
        // A move that reached the board without a logged duration
        game.board.apply(Pos::new(3, 3)).unwrap();

        let mut out = Vec::new();
        let err = crate::save::save_game(&game, &mut out).unwrap_err();
        assert!(matches!(
            err,
            crate::save::SaveError::Unlogged { moves: 2, durations: 1 }
        ));
        assert!(out.is_empty());
    }

    #[test]
    fn test_restart() {
        let mut game = Game::new(&config(9));
        game.apply_move_timed(Pos::new(4, 4), secs(61)).unwrap();
        game.check_time();
        game.restart();
        assert_eq!(game.board(), &Board::new(9));
        assert_eq!(game.flagged(), None);
        assert!(game.durations().is_empty());
        assert_eq!(game.clocks, [60.0, 60.0]);
    }
}

//! Game state management for the GUI

use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

use tracing::warn;

use crate::config::GameConfig;
use crate::save::{load_from_path, save_to_path};
use crate::{find_winning_line, AIEngine, Game, GameError, MoveResult, Outcome, Player, Pos};

/// AI computation state
pub enum AiState {
    Idle,
    Thinking {
        receiver: Receiver<Result<MoveResult, GameError>>,
        start_time: Instant,
    },
}

/// Main game state
pub struct GameState {
    pub game: Game,
    /// Color the person plays
    pub human: Player,
    pub last_ai_result: Option<MoveResult>,
    pub ai_state: AiState,
    pub message: Option<String>,
    config: GameConfig,
}

impl GameState {
    pub fn new(config: GameConfig) -> Self {
        Self {
            game: Game::new(&config),
            human: config.human,
            last_ai_result: None,
            ai_state: AiState::Idle,
            message: None,
            config,
        }
    }

    /// New game, keeping board size and clocks from the config
    pub fn reset(&mut self) {
        self.game.restart();
        self.last_ai_result = None;
        self.ai_state = AiState::Idle;
        self.message = None;
    }

    /// New game with the person playing `human`
    pub fn reset_as(&mut self, human: Player) {
        self.human = human;
        self.reset();
    }

    pub fn outcome(&self) -> Outcome {
        self.game.outcome()
    }

    pub fn is_game_over(&self) -> bool {
        self.game.outcome().is_over()
    }

    pub fn is_human_turn(&self) -> bool {
        self.game.board().whose_move() == self.human
    }

    pub fn is_ai_turn(&self) -> bool {
        !self.is_human_turn()
    }

    pub fn is_ai_thinking(&self) -> bool {
        matches!(self.ai_state, AiState::Thinking { .. })
    }

    /// Endpoints of the five to highlight, if the board holds one
    pub fn winning_line(&self) -> Option<(Pos, Pos)> {
        find_winning_line(self.game.board())
    }

    /// Handle a left click on the board.
    ///
    /// A click on a finished game starts a new one.
    pub fn try_place_stone(&mut self, pos: Pos) -> Result<(), String> {
        if self.is_game_over() {
            self.reset();
            return Ok(());
        }

        if self.is_ai_thinking() {
            return Err("AI is thinking".to_string());
        }

        if !self.is_human_turn() {
            return Err("Not your turn".to_string());
        }

        self.game.apply_move(pos).map_err(|e| {
            warn!(%pos, error = %e, "rejected move");
            format!("Invalid move: {e}")
        })?;
        self.message = None;
        Ok(())
    }

    /// Flag a player whose clock ran out
    pub fn tick(&mut self) {
        if let Some(player) = self.game.check_time() {
            self.ai_state = AiState::Idle;
            self.message = Some(format!("{player} ran out of time"));
        }
    }

    /// Start AI thinking on a copy of the board
    pub fn start_ai_thinking(&mut self) {
        if !self.is_ai_turn() || self.is_ai_thinking() || self.is_game_over() {
            return;
        }

        let mut board = self.game.board().clone();
        let engine_config = self.config.engine;

        let (tx, rx) = channel();

        thread::spawn(move || {
            let mut engine = AIEngine::with_config(engine_config);
            let result = engine.get_move_with_stats(&mut board);
            let _ = tx.send(result);
        });

        self.ai_state = AiState::Thinking {
            receiver: rx,
            start_time: Instant::now(),
        };
    }

    /// Check if AI has finished thinking
    pub fn check_ai_result(&mut self) {
        let result = match &self.ai_state {
            AiState::Thinking { receiver, .. } => match receiver.try_recv() {
                Ok(result) => result,
                Err(TryRecvError::Empty) => return,
                Err(TryRecvError::Disconnected) => {
                    self.ai_state = AiState::Idle;
                    self.message = Some("AI error".to_string());
                    return;
                }
            },
            AiState::Idle => return,
        };
        self.ai_state = AiState::Idle;

        match result {
            Ok(move_result) => {
                self.last_ai_result = Some(move_result);
                if let Err(e) = self.game.apply_move(move_result.best_move) {
                    self.message = Some(format!("AI move rejected: {e}"));
                }
            }
            Err(e) => self.message = Some(format!("AI could not move: {e}")),
        }
    }

    /// Get AI thinking elapsed time
    pub fn ai_thinking_elapsed(&self) -> Option<Duration> {
        match &self.ai_state {
            AiState::Thinking { start_time, .. } => Some(start_time.elapsed()),
            AiState::Idle => None,
        }
    }

    /// Take back to the person's previous turn
    pub fn undo(&mut self) {
        if self.is_ai_thinking() {
            return;
        }
        let undone = self.game.undo_turn(self.human);
        self.message = (undone == 0).then(|| "Nothing to undo".to_string());
    }

    pub fn save(&mut self) {
        let path = &self.config.save_path;
        self.message = Some(match save_to_path(&self.game, path) {
            Ok(()) => format!("Saved to {}", path.display()),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "save failed");
                format!("Save failed: {e}")
            }
        });
    }

    pub fn load(&mut self) {
        let path = self.config.save_path.clone();
        match load_from_path(&path, &self.config) {
            Ok(game) => {
                self.game = game;
                self.ai_state = AiState::Idle;
                self.last_ai_result = None;
                self.message = Some(format!("Loaded {}", path.display()));
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "load failed");
                self.message = Some(format!("Load failed: {e}"));
            }
        }
    }

    /// Seconds left for (Black, White)
    pub fn remaining_times(&self) -> (f64, f64) {
        self.game.remaining_times()
    }

    pub fn time_limit(&self) -> Duration {
        self.game.time_limit()
    }

    pub fn move_count(&self) -> usize {
        self.game.board().move_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Stone;

    fn state(human: Player) -> GameState {
        GameState::new(GameConfig {
            board_size: 9,
            human,
            save_path: std::env::temp_dir().join(format!("renju-ui-{}.txt", std::process::id())),
            ..GameConfig::default()
        })
    }

    fn wait_for_ai(state: &mut GameState) {
        for _ in 0..500 {
            state.check_ai_result();
            if !state.is_ai_thinking() {
                return;
            }
            thread::sleep(Duration::from_millis(10));
        }
        panic!("AI did not answer");
    }

    #[test]
    fn test_human_move_then_ai_reply() {
        let mut state = state(Player::Black);
        assert!(state.is_human_turn());
        state.try_place_stone(Pos::new(4, 4)).unwrap();
        assert!(state.is_ai_turn());

        state.start_ai_thinking();
        assert!(state.is_ai_thinking());
        assert!(state.try_place_stone(Pos::new(0, 0)).is_err());
        wait_for_ai(&mut state);

        assert_eq!(state.move_count(), 2);
        assert!(state.last_ai_result.is_some());
        assert!(state.is_human_turn());
    }

    #[test]
    fn test_rejects_occupied_cell() {
        let mut state = state(Player::Black);
        state.try_place_stone(Pos::new(4, 4)).unwrap();
        state.start_ai_thinking();
        wait_for_ai(&mut state);
        let err = state.try_place_stone(Pos::new(4, 4)).unwrap_err();
        assert!(err.contains("Invalid move"));
        assert_eq!(state.move_count(), 2);
    }

    #[test]
    fn test_computer_opens_when_human_is_white() {
        let mut state = state(Player::White);
        assert!(state.is_ai_turn());
        state.start_ai_thinking();
        wait_for_ai(&mut state);
        assert_eq!(state.game.board().get(state.game.board().history()[0]), Stone::Black);
    }

    #[test]
    fn test_undo_takes_back_a_turn() {
        let mut state = state(Player::Black);
        state.try_place_stone(Pos::new(4, 4)).unwrap();
        state.start_ai_thinking();
        wait_for_ai(&mut state);
        state.undo();
        assert_eq!(state.move_count(), 0);
        state.undo();
        assert_eq!(state.message.as_deref(), Some("Nothing to undo"));
    }

    #[test]
    fn test_click_on_finished_game_restarts() {
        let mut state = state(Player::Black);
        for i in 0..5u8 {
            state.game.apply_move(Pos::new(i, 0)).unwrap();
            if i < 4 {
                state.game.apply_move(Pos::new(i, 8)).unwrap();
            }
        }
        assert_eq!(state.outcome(), Outcome::BlackWins);
        assert_eq!(state.winning_line(), Some((Pos::new(4, 0), Pos::new(0, 0))));

        state.try_place_stone(Pos::new(7, 7)).unwrap();
        assert_eq!(state.move_count(), 0);
        assert_eq!(state.outcome(), Outcome::Gaming);
    }

    #[test]
    fn test_save_and_load() {
        let mut state = state(Player::Black);
        state.try_place_stone(Pos::new(4, 4)).unwrap();
        state.save();
        state.reset();
        state.load();
        std::fs::remove_file(&state.config.save_path).unwrap();
        assert_eq!(state.game.board().history(), &[Pos::new(4, 4)]);
    }
}

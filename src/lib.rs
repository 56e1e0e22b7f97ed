//! Gomoku engine with a shallow negamax computer player
//!
//! Free-style rules on an N×N board (16×16 by default):
//! - Black opens, players alternate
//! - Five or more in a row along any axis wins (overlines allowed)
//! - A full board with no five is a draw
//!
//! # Architecture
//!
//! - [`board`]: grid state machine with move history and undo
//! - [`rules`]: line scanning and win detection
//! - [`eval`]: static evaluation over five-cell windows
//! - [`search`]: depth-limited negamax
//! - [`engine`]: computer player facade with search statistics
//! - [`game`]: play session with per-player clocks
//! - [`save`]: move log persistence
//! - [`terminal`]: line-oriented front end
//! - [`ui`]: desktop front end
//!
//! # Quick Start
//!
//! ```
//! use renju::{AIEngine, Board, Outcome, Pos};
//!
//! let mut board = Board::new(9);
//! let mut engine = AIEngine::new();
//!
//! // Human plays the center, computer answers as White
//! board.apply(Pos::new(4, 4)).unwrap();
//! let reply = engine.apply_computer_move(&mut board).unwrap();
//! println!("computer plays {reply}");
//!
//! assert_eq!(board.move_count(), 2);
//! assert_eq!(board.outcome(), Outcome::Gaming);
//! ```
//!
//! Searches mutate the board in place and always undo their probes, so a
//! board handed to [`AIEngine::choose_move`] comes back unchanged.

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod game;
pub mod rules;
pub mod save;
pub mod search;
pub mod terminal;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{column_label, Board, Outcome, Player, Pos, Snapshot, Stone, BOARD_SIZE, WIN_LENGTH};
pub use config::{ConfigError, EngineConfig, GameConfig};
pub use engine::{AIEngine, MoveResult};
pub use error::GameError;
pub use game::Game;
pub use rules::find_winning_line;
pub use save::SaveError;

//! Desktop front end
//!
//! Native GUI using egui/eframe. The computer searches on a worker thread
//! with its own copy of the board.

mod app;
mod board_view;
mod game_state;
mod theme;

pub use app::RenjuApp;
pub use game_state::GameState;

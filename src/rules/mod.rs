//! Game rules for Renju-style five in a row
//!
//! Only the line rule is implemented: five or more in a row wins.

pub mod win;

// Re-exports for convenient access
pub use win::{find_winning_line, has_five_at_pos, longest_line_through, Line};

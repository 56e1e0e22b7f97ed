//! Evaluation module for Renju positions
//!
//! Contains:
//! - Window weight table
//! - Static evaluation over all five-cell windows

pub mod heuristic;
pub mod patterns;

pub use heuristic::evaluate;
pub use patterns::{window_weight, INF, WINDOW_WEIGHTS};

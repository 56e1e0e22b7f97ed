//! Search module for Renju AI
//!
//! Contains the depth-limited negamax searcher. Positions at the horizon
//! are scored by [`crate::eval::evaluate`].

pub mod negamax;

pub use negamax::{SearchResult, Searcher};

//! Evaluation module for K-in-a-row positions
//!
//! Scores positions by partial-line potential over every scanner line.

pub mod heuristic;
pub mod patterns;

pub use heuristic::{evaluate, evaluate_line};
pub use patterns::{line_potential, loss_score, win_score, PatternScore};

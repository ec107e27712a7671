//! Search module
//!
//! Contains:
//! - Minimax with alpha-beta pruning over a shared, restored board
//! - Parallel root split with one board copy per worker
//! - Time-boxed iterative deepening

pub mod alphabeta;

pub use alphabeta::{SearchResult, SearchStats, Searcher};

//! K-in-a-row engine for small boards (Ta-Te-Ti 5x5)
//!
//! Finds the strongest move for a player on an N x N board where K marks in
//! a straight line win, and classifies boards as won, drawn or ongoing:
//! - Default 5x5 board
//! - 4 or 5 in a row to win (horizontal, vertical, both diagonals)
//! - Depth-bounded minimax with alpha-beta pruning
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Flat cell-array board and coordinates
//! - [`rules`]: Line enumeration, win/draw detection, turn inference
//! - [`eval`]: Partial-line heuristic
//! - [`search`]: Minimax with alpha-beta, parallel root split, iterative deepening
//! - [`engine`]: Entry point tying configuration, rules and search together
//! - [`protocol`]: Board/player decoding and JSON responses for front ends
//! - [`config`]: Board size, win length and search limits
//! - [`ui`]: egui desktop client
//!
//! # Quick Start
//!
//! ```
//! use tateti::{Board, Engine, Outcome, Pos, Stone};
//!
//! let mut engine = Engine::new(); // 5x5, four in a row, depth 4
//! let mut board = Board::from_codes(5, &[
//!     2, 1, 1, 1, 2,
//!     1, 2, 0, 1, 2,
//!     2, 1, 0, 2, 1,
//!     1, 1, 2, 2, 2,
//!     2, 1, 1, 2, 0,
//! ]).unwrap();
//!
//! assert_eq!(engine.check_winner(&board), None);
//! let player = engine.detect_player(&board);
//! assert_eq!(player, Stone::X);
//!
//! let idx = engine.best_move(&mut board, player).unwrap();
//! board.place_stone(board.pos_of(idx), player);
//! assert_eq!(board.pos_of(idx), Pos::new(1, 2));
//! assert_eq!(engine.check_winner(&board), Some(Outcome::Win(Stone::X)));
//! ```

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod protocol;
pub mod rules;
pub mod search;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Pos, Stone, DEFAULT_BOARD_SIZE};
pub use config::{EngineConfig, Variant};
pub use engine::{Engine, MoveResult, SearchType};
pub use error::{BoardError, ConfigError};
pub use rules::Outcome;

//! Game rules for K-in-a-row
//!
//! - Line enumeration over the board
//! - Win / draw / ongoing detection
//! - Inferred turn order

pub mod lines;
pub mod win;

// Re-exports for convenient access
pub use lines::{expected_line_count, Direction, LineScanner, LineStart};
pub use win::{check_winner, detect_player, find_winning_line, Outcome, WinningLine};

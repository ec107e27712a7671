//! Terminal state detection
//!
//! A line wins when its first cell is occupied and every other cell matches
//! it. Lines are checked in scanner order and the first winning line decides,
//! which gives a fixed answer even for malformed boards where both players
//! hold a complete line.

use crate::board::{Board, Stone};

use super::lines::{LineScanner, LineStart};

/// Verdict for a finished game. `None` from [`check_winner`] means play continues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Win(Stone),
    Draw,
}

impl Outcome {
    /// Wire value: 0 for a draw, otherwise the winner's code
    #[inline]
    pub fn code(self) -> u8 {
        match self {
            Outcome::Win(stone) => stone.code(),
            Outcome::Draw => 0,
        }
    }
}

/// The first complete line found on the board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WinningLine {
    pub winner: Stone,
    pub start: LineStart,
    pub cells: Vec<usize>,
}

#[inline]
fn line_owner(board: &Board, line: &[usize]) -> Option<Stone> {
    let first = board.get_index(line[0]);
    if first == Stone::Empty {
        return None;
    }
    line[1..]
        .iter()
        .all(|&i| board.get_index(i) == first)
        .then_some(first)
}

/// Find the first complete line in scan order.
pub fn find_winning_line(board: &Board, scanner: &LineScanner) -> Option<WinningLine> {
    scanner.lines().find_map(|(start, line)| {
        line_owner(board, line).map(|winner| WinningLine {
            winner,
            start: *start,
            cells: line.to_vec(),
        })
    })
}

/// Decide win / draw / ongoing.
#[must_use]
pub fn check_winner(board: &Board, scanner: &LineScanner) -> Option<Outcome> {
    debug_assert_eq!(board.size(), scanner.size());

    if let Some(winner) = scanner.iter().find_map(|line| line_owner(board, line)) {
        return Some(Outcome::Win(winner));
    }
    if board.is_full() {
        Some(Outcome::Draw)
    } else {
        None
    }
}

/// Inferred turn: X moves when it has placed no more marks than O.
///
/// A convenience for callers that omit the player, not an enforced rule.
#[must_use]
pub fn detect_player(board: &Board) -> Stone {
    if board.count(Stone::X) <= board.count(Stone::O) {
        Stone::X
    } else {
        Stone::O
    }
}

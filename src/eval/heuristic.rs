//! Heuristic evaluation of non-terminal positions
//!
//! Every line produced by the [`LineScanner`] contributes independently:
//! - contested lines (both players present) are worth nothing
//! - a completed line is worth `±PatternScore::WIN`
//! - otherwise `own² - opponent²`, favoring concentrated partial lines
//!
//! The result is not antisymmetric: a contested line scores 0 for both sides.

use crate::board::{Board, Stone};
use crate::rules::LineScanner;

use super::patterns::{line_potential, PatternScore};

/// Score one line of cells from the perspective of `color`.
#[must_use]
pub fn evaluate_line(cells: impl IntoIterator<Item = Stone>, win_length: usize, color: Stone) -> i32 {
    let opponent = color.opponent();
    let (mut own, mut other) = (0usize, 0usize);
    for cell in cells {
        if cell == color {
            own += 1;
        } else if cell == opponent {
            other += 1;
        }
    }

    if own > 0 && other > 0 {
        return 0;
    }
    if own == win_length {
        return PatternScore::WIN;
    }
    if other == win_length {
        return -PatternScore::WIN;
    }
    line_potential(own, other)
}

/// Evaluate the board from the perspective of the given color.
///
/// Positive values favor `color`. Only called at depth-bound and draw nodes,
/// so completed lines normally never reach here.
#[must_use]
pub fn evaluate(board: &Board, scanner: &LineScanner, color: Stone) -> i32 {
    let win_length = scanner.win_length();
    scanner
        .iter()
        .map(|line| evaluate_line(LineScanner::cells(board, line), win_length, color))
        .sum()
}

//! Enumeration of every K-length straight line on the board
//!
//! Lines are produced in a fixed order so that winner detection and the
//! heuristic stay deterministic:
//! 1. Horizontal, origin rows `0..N`, origin cols `0..=N-K`
//! 2. Vertical, origin cols `0..N`, origin rows `0..=N-K`
//! 3. Diagonal SE, origin rows/cols `0..=N-K`
//! 4. Diagonal SW, origin rows `0..=N-K`, origin cols `K-1..N`
//!
//! The index table is built once per (size, win length) and reused for
//! every node of a search.

use crate::board::{Board, Pos, Stone};

/// Line directions in scan order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Horizontal,
    Vertical,
    DiagonalSE,
    DiagonalSW,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::DiagonalSE,
        Direction::DiagonalSW,
    ];

    /// (row, col) step between consecutive cells
    #[inline]
    pub fn step(self) -> (i32, i32) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
            Direction::DiagonalSE => (1, 1),
            Direction::DiagonalSW => (1, -1),
        }
    }
}

/// Where a line starts and which way it runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineStart {
    pub origin: Pos,
    pub direction: Direction,
}

/// Precomputed table of all lines for one board size and win length.
#[derive(Debug, Clone)]
pub struct LineScanner {
    size: usize,
    win_length: usize,
    starts: Vec<LineStart>,
    /// `starts.len() * win_length` cell indices, one window per line
    indices: Vec<usize>,
}

impl LineScanner {
    /// Build the table. Panics if `win_length` is 0 or larger than `size`.
    pub fn new(size: usize, win_length: usize) -> Self {
        assert!(
            win_length >= 1 && win_length <= size,
            "win length {win_length} does not fit a {size}x{size} board"
        );

        let span = size - win_length; // last valid origin on the constrained axis
        let mut starts = Vec::with_capacity(expected_line_count(size, win_length));

        for row in 0..size {
            for col in 0..=span {
                starts.push(LineStart {
                    origin: Pos::new(row as u8, col as u8),
                    direction: Direction::Horizontal,
                });
            }
        }
        for col in 0..size {
            for row in 0..=span {
                starts.push(LineStart {
                    origin: Pos::new(row as u8, col as u8),
                    direction: Direction::Vertical,
                });
            }
        }
        for row in 0..=span {
            for col in 0..=span {
                starts.push(LineStart {
                    origin: Pos::new(row as u8, col as u8),
                    direction: Direction::DiagonalSE,
                });
            }
        }
        for row in 0..=span {
            for col in (win_length - 1)..size {
                starts.push(LineStart {
                    origin: Pos::new(row as u8, col as u8),
                    direction: Direction::DiagonalSW,
                });
            }
        }

        let mut indices = Vec::with_capacity(starts.len() * win_length);
        for start in &starts {
            let (dr, dc) = start.direction.step();
            for k in 0..win_length as i32 {
                let r = start.origin.row as i32 + dr * k;
                let c = start.origin.col as i32 + dc * k;
                debug_assert!(Pos::is_valid(r, c, size));
                indices.push(r as usize * size + c as usize);
            }
        }

        Self {
            size,
            win_length,
            starts,
            indices,
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn win_length(&self) -> usize {
        self.win_length
    }

    /// Number of lines
    #[inline]
    pub fn len(&self) -> usize {
        self.starts.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.starts.is_empty()
    }

    /// Cell indices of every line, in scan order
    #[inline]
    pub fn iter(&self) -> std::slice::ChunksExact<'_, usize> {
        self.indices.chunks_exact(self.win_length)
    }

    /// Lines together with their origin and direction
    pub fn lines(&self) -> impl Iterator<Item = (&LineStart, &[usize])> + '_ {
        self.starts.iter().zip(self.iter())
    }

    /// Cell values along one line
    #[inline]
    pub fn cells<'a>(board: &'a Board, line: &'a [usize]) -> impl Iterator<Item = Stone> + 'a {
        line.iter().map(move |&i| board.get_index(i))
    }
}

/// `2·N·(N-K+1) + 2·(N-K+1)²`
pub fn expected_line_count(size: usize, win_length: usize) -> usize {
    if win_length == 0 || win_length > size {
        return 0;
    }
    let offsets = size - win_length + 1;
    2 * size * offsets + 2 * offsets * offsets
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_count_four_in_row() {
        let scanner = LineScanner::new(5, 4);
        assert_eq!(scanner.len(), 28);
        assert_eq!(expected_line_count(5, 4), 28);
    }

    #[test]
    fn test_line_count_five_in_row() {
        let scanner = LineScanner::new(5, 5);
        assert_eq!(scanner.len(), 12);
    }

    #[test]
    fn test_every_line_has_win_length_cells() {
        let scanner = LineScanner::new(5, 4);
        assert!(scanner.iter().all(|line| line.len() == 4));
        assert!(scanner.iter().flatten().all(|&i| i < 25));
    }

    #[test]
    fn test_scan_order() {
        let scanner = LineScanner::new(5, 4);
        let lines: Vec<_> = scanner.lines().collect();

        // Horizontal first, row 0
        assert_eq!(lines[0].0.direction, Direction::Horizontal);
        assert_eq!(lines[0].1, &[0, 1, 2, 3]);
        assert_eq!(lines[1].1, &[1, 2, 3, 4]);

        // Vertical block starts after 10 horizontals
        assert_eq!(lines[10].0.direction, Direction::Vertical);
        assert_eq!(lines[10].1, &[0, 5, 10, 15]);

        // Diagonal SE block
        assert_eq!(lines[20].0.direction, Direction::DiagonalSE);
        assert_eq!(lines[20].1, &[0, 6, 12, 18]);

        // Diagonal SW block, first origin is (0, K-1)
        assert_eq!(lines[24].0.direction, Direction::DiagonalSW);
        assert_eq!(lines[24].0.origin, Pos::new(0, 3));
        assert_eq!(lines[24].1, &[3, 7, 11, 15]);
        assert_eq!(lines[27].1, &[9, 13, 17, 21]);
    }

    #[test]
    fn test_full_length_lines() {
        let scanner = LineScanner::new(5, 5);
        let sw: Vec<_> = scanner
            .lines()
            .filter(|(start, _)| start.direction == Direction::DiagonalSW)
            .map(|(_, line)| line.to_vec())
            .collect();
        assert_eq!(sw, vec![vec![4, 8, 12, 16, 20]]);
    }

    #[test]
    fn test_cells_reads_board() {
        let mut board = Board::new();
        board.place_stone(Pos::new(0, 1), Stone::X);
        let scanner = LineScanner::new(5, 4);
        let first = scanner.iter().next().unwrap();
        let cells: Vec<_> = LineScanner::cells(&board, first).collect();
        assert_eq!(cells, vec![Stone::Empty, Stone::X, Stone::Empty, Stone::Empty]);
    }
}

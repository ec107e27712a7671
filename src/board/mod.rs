//! Board representation for the K-in-a-row game

pub mod board;

#[cfg(test)]
mod tests;

// Re-exports
pub use board::Board;

/// Default board size (5x5)
pub const DEFAULT_BOARD_SIZE: usize = 5;
pub const DEFAULT_TOTAL_CELLS: usize = DEFAULT_BOARD_SIZE * DEFAULT_BOARD_SIZE; // 25

/// Largest board the engine accepts
pub const MAX_BOARD_SIZE: usize = 19;

/// Cell contents, doubling as player identity for X and O.
///
/// Wire encoding: 0 = empty, 1 = X, 2 = O.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stone {
    Empty,
    X,
    O,
}

impl Stone {
    /// Get opponent color
    #[inline]
    pub fn opponent(self) -> Stone {
        match self {
            Stone::X => Stone::O,
            Stone::O => Stone::X,
            Stone::Empty => Stone::Empty,
        }
    }

    /// Numeric code used at the serialization boundary
    #[inline]
    pub fn code(self) -> u8 {
        match self {
            Stone::Empty => 0,
            Stone::X => 1,
            Stone::O => 2,
        }
    }

    /// Inverse of [`Stone::code`]. Returns `None` for anything outside {0, 1, 2}.
    #[inline]
    pub fn from_code(code: i64) -> Option<Stone> {
        match code {
            0 => Some(Stone::Empty),
            1 => Some(Stone::X),
            2 => Some(Stone::O),
            _ => None,
        }
    }

    /// Single-character symbol used when printing boards
    #[inline]
    pub fn symbol(self) -> char {
        match self {
            Stone::Empty => ' ',
            Stone::X => 'X',
            Stone::O => 'O',
        }
    }

    #[inline]
    pub fn is_player(self) -> bool {
        self != Stone::Empty
    }
}

/// Position on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    #[inline]
    pub fn new(row: u8, col: u8) -> Self {
        debug_assert!((row as usize) < MAX_BOARD_SIZE && (col as usize) < MAX_BOARD_SIZE);
        Self { row, col }
    }

    /// Flat index on a board of side `size` (row-major)
    #[inline]
    pub fn to_index(self, size: usize) -> usize {
        self.row as usize * size + self.col as usize
    }

    #[inline]
    pub fn from_index(idx: usize, size: usize) -> Self {
        Self {
            row: (idx / size) as u8,
            col: (idx % size) as u8,
        }
    }

    #[inline]
    pub fn is_valid(row: i32, col: i32, size: usize) -> bool {
        row >= 0 && row < size as i32 && col >= 0 && col < size as i32
    }
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.row, self.col).cmp(&(other.row, other.col))
    }
}

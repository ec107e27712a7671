//! Flat cell-array board

use std::fmt;

use super::{Pos, Stone, DEFAULT_BOARD_SIZE};
use crate::error::BoardError;

/// Game board stored as `size * size` cells, row-major.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    size: usize,
    cells: Vec<Stone>,
}

impl Board {
    /// Empty 5x5 board
    pub fn new() -> Self {
        Self::with_size(DEFAULT_BOARD_SIZE)
    }

    /// Empty board of side `size`
    pub fn with_size(size: usize) -> Self {
        Self {
            size,
            cells: vec![Stone::Empty; size * size],
        }
    }

    /// Build a board from already-decoded cells.
    pub fn from_cells(size: usize, cells: Vec<Stone>) -> Result<Self, BoardError> {
        if cells.len() != size * size {
            return Err(BoardError::InvalidLength {
                expected: size * size,
                actual: cells.len(),
            });
        }
        Ok(Self { size, cells })
    }

    /// Build a board from wire codes (0 = empty, 1 = X, 2 = O).
    pub fn from_codes(size: usize, codes: &[i64]) -> Result<Self, BoardError> {
        if codes.len() != size * size {
            return Err(BoardError::InvalidLength {
                expected: size * size,
                actual: codes.len(),
            });
        }
        let cells = codes
            .iter()
            .enumerate()
            .map(|(index, &value)| {
                Stone::from_code(value).ok_or(BoardError::InvalidCell {
                    index,
                    value: value.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { size, cells })
    }

    /// Wire codes for every cell, row-major
    pub fn codes(&self) -> Vec<u8> {
        self.cells.iter().map(|s| s.code()).collect()
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of cells (`size * size`)
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn cells(&self) -> &[Stone] {
        &self.cells
    }

    /// Get stone at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Stone {
        self.cells[pos.to_index(self.size)]
    }

    /// Get stone at (row, col). Both must be below `size`.
    #[inline]
    pub fn cell_at(&self, row: usize, col: usize) -> Stone {
        debug_assert!(row < self.size && col < self.size);
        self.cells[row * self.size + col]
    }

    #[inline]
    pub fn get_index(&self, idx: usize) -> Stone {
        self.cells[idx]
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.get(pos) == Stone::Empty
    }

    #[inline]
    pub fn index_of(&self, pos: Pos) -> usize {
        pos.to_index(self.size)
    }

    #[inline]
    pub fn pos_of(&self, idx: usize) -> Pos {
        Pos::from_index(idx, self.size)
    }

    /// Place a stone
    #[inline]
    pub fn place_stone(&mut self, pos: Pos, stone: Stone) {
        let idx = pos.to_index(self.size);
        self.cells[idx] = stone;
    }

    #[inline]
    pub fn set_index(&mut self, idx: usize, stone: Stone) {
        self.cells[idx] = stone;
    }

    /// Remove a stone
    #[inline]
    pub fn remove_stone(&mut self, pos: Pos) {
        self.place_stone(pos, Stone::Empty);
    }

    /// Place `stone` at `idx`, run `f`, then put the previous contents back.
    ///
    /// Search code goes through this so every placement has its undo.
    #[inline]
    pub fn with_stone<R>(&mut self, idx: usize, stone: Stone, f: impl FnOnce(&mut Board) -> R) -> R {
        let previous = std::mem::replace(&mut self.cells[idx], stone);
        let result = f(self);
        self.cells[idx] = previous;
        result
    }

    /// Indices of empty cells in ascending order
    pub fn empty_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, s)| **s == Stone::Empty)
            .map(|(i, _)| i)
    }

    /// Number of cells holding `stone`
    #[inline]
    pub fn count(&self, stone: Stone) -> usize {
        self.cells.iter().filter(|&&s| s == stone).count()
    }

    /// Total stones on board
    #[inline]
    pub fn stone_count(&self) -> usize {
        self.cells.len() - self.count(Stone::Empty)
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        !self.cells.contains(&Stone::Empty)
    }

    /// Check if board is empty
    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.cells.iter().all(|&s| s == Stone::Empty)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// ASCII grid: ` X | O |  ` rows separated by `---+---+---`.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let separator = format!("{}---", "---+".repeat(self.size.saturating_sub(1)));
        for (r, row) in self.cells.chunks(self.size).enumerate() {
            let symbols: Vec<String> = row.iter().map(|s| s.symbol().to_string()).collect();
            writeln!(f, " {}", symbols.join(" | "))?;
            if r + 1 < self.size {
                writeln!(f, "{separator}")?;
            }
        }
        Ok(())
    }
}

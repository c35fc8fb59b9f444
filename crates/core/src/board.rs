//! Board module - manages the game grid
//!
//! The board is an NxN grid where each cell can be empty or hold one tile.
//! Uses a flat vector in row-major order; row 0 is the bottom row.
//! Coordinates: (col, row) where col grows to the east and row grows to the north.
//!
//! Reads and writes go through a viewing perspective. With perspective `side`,
//! logical north is physical `side`, so one northward sweep serves all four
//! tilt directions. The perspective only remaps coordinates; storage is never
//! rotated or copied.

use crate::error::{CoreError, CoreResult};
use crate::types::{Cell, Side, Tile, MAX_BOARD_SIZE};

/// The game board - `size` columns x `size` rows using flat vector storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    /// Flat vector of cells, row-major order (row * size + col), physical coordinates
    cells: Vec<Cell>,
    perspective: Side,
}

impl Board {
    /// Create a new empty board
    pub fn new(size: usize) -> CoreResult<Self> {
        if size == 0 || size > MAX_BOARD_SIZE {
            return Err(CoreError::InvalidSize(size));
        }
        Ok(Self {
            size,
            cells: vec![None; size * size],
            perspective: Side::North,
        })
    }

    /// Create a board from tile values, rows listed top to bottom (0 = empty).
    pub fn from_grid<R: AsRef<[u32]>>(rows: &[R]) -> CoreResult<Self> {
        let size = rows.len();
        let mut board = Self::new(size)?;
        for (i, values) in rows.iter().enumerate() {
            let values = values.as_ref();
            if values.len() != size {
                return Err(CoreError::InvalidSize(values.len()));
            }
            let row = size - 1 - i;
            for (col, &value) in values.iter().enumerate() {
                if value == 0 {
                    continue;
                }
                if value < 2 || !value.is_power_of_two() {
                    return Err(CoreError::InvalidTileValue(value));
                }
                board.place(Tile::new(value, col, row))?;
            }
        }
        Ok(board)
    }

    /// Get side length of the board
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn perspective(&self) -> Side {
        self.perspective
    }

    /// View the board so that `side` reads as north.
    pub fn set_perspective(&mut self, side: Side) {
        self.perspective = side;
    }

    /// Map logical (col, row) under the current perspective to physical (col, row).
    #[inline(always)]
    fn physical(&self, col: usize, row: usize) -> (usize, usize) {
        let last = self.size - 1;
        match self.perspective {
            Side::North => (col, row),
            Side::South => (last - col, last - row),
            Side::East => (row, last - col),
            Side::West => (last - row, col),
        }
    }

    /// Calculate flat index from logical (col, row) coordinates
    #[inline(always)]
    fn index(&self, col: usize, row: usize) -> CoreResult<usize> {
        if col >= self.size || row >= self.size {
            return Err(CoreError::OutOfBounds {
                col,
                row,
                size: self.size,
            });
        }
        let (pc, pr) = self.physical(col, row);
        Ok(pr * self.size + pc)
    }

    /// Get the tile at logical (col, row), or None if the cell is empty
    pub fn tile(&self, col: usize, row: usize) -> CoreResult<Cell> {
        let idx = self.index(col, row)?;
        Ok(self.cells[idx])
    }

    /// Put `tile` on the empty cell named by its own coordinates.
    ///
    /// Coordinates are read under the current perspective.
    pub fn place(&mut self, tile: Tile) -> CoreResult<()> {
        let (col, row) = (tile.col(), tile.row());
        let idx = self.index(col, row)?;
        if self.cells[idx].is_some() {
            return Err(CoreError::CellOccupied { col, row });
        }
        let (pc, pr) = self.physical(col, row);
        self.cells[idx] = Some(tile.at(pc, pr));
        Ok(())
    }

    /// Move the tile at (from_col, from_row) to (col, row) and clear the source.
    ///
    /// If the destination holds a tile of equal value, both are replaced by a
    /// new tile of double value, which is returned. Plain moves return None.
    pub fn move_tile(
        &mut self,
        col: usize,
        row: usize,
        from_col: usize,
        from_row: usize,
    ) -> CoreResult<Option<Tile>> {
        let src = self.index(from_col, from_row)?;
        let dst = self.index(col, row)?;
        let tile = self.cells[src].ok_or(CoreError::CellEmpty {
            col: from_col,
            row: from_row,
        })?;
        if src == dst {
            return Ok(None);
        }

        let (pc, pr) = self.physical(col, row);
        let merged = match self.cells[dst] {
            None => {
                self.cells[dst] = Some(tile.at(pc, pr));
                None
            }
            Some(existing) => {
                let merged = existing
                    .merge(tile, pc, pr)
                    .ok_or(CoreError::MergeMismatch {
                        col,
                        row,
                        from: tile.value(),
                        into: existing.value(),
                    })?;
                self.cells[dst] = Some(merged);
                Some(merged)
            }
        };
        self.cells[src] = None;
        Ok(merged)
    }

    /// Clear the entire board and reset the perspective
    pub fn clear(&mut self) {
        self.cells.fill(None);
        self.perspective = Side::North;
    }

    /// All tiles in canonical storage order
    pub fn tiles(&self) -> impl Iterator<Item = Tile> + '_ {
        self.cells.iter().filter_map(|cell| *cell)
    }

    /// Canonical coordinates of every empty cell, bottom row first
    pub fn empty_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_none())
            .map(move |(idx, _)| (idx % size, idx / size))
    }

    /// Canonical tile values, row-major with row 0 at the bottom
    pub fn values(&self) -> Vec<Vec<Option<u32>>> {
        self.cells
            .chunks(self.size)
            .map(|row| row.iter().map(|cell| cell.map(|t| t.value())).collect())
            .collect()
    }

    /// Sum of all tile values
    pub fn total_value(&self) -> u64 {
        self.tiles().map(|t| t.value() as u64).sum()
    }

    pub fn max_value(&self) -> Option<u32> {
        self.tiles().map(|t| t.value()).max()
    }

    /// Check if at least one cell is empty
    pub fn empty_space_exists(&self) -> bool {
        self.cells.iter().any(|cell| cell.is_none())
    }

    /// Check if any tile has reached `max_piece`
    pub fn max_tile_exists(&self, max_piece: u32) -> bool {
        self.tiles().any(|t| t.value() == max_piece)
    }

    /// Check if any tilt could change the board: an empty cell exists, or two
    /// orthogonally adjacent tiles can merge.
    pub fn at_least_one_move_exists(&self) -> bool {
        if self.empty_space_exists() {
            return true;
        }
        let n = self.size;
        let mergeable = |a: usize, b: usize| match (self.cells[a], self.cells[b]) {
            (Some(a), Some(b)) => a.can_merge(&b),
            _ => false,
        };
        for row in 0..n {
            for col in 0..n {
                let here = row * n + col;
                if col + 1 < n && mergeable(here, here + 1) {
                    return true;
                }
                if row + 1 < n && mergeable(here, here + n) {
                    return true;
                }
            }
        }
        false
    }
}

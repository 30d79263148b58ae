//! Board module - owns the stage grid
//!
//! The board is a 10x14 grid where each cell is empty or holds one tile.
//! Uses a flat array for cache locality and zero-allocation lookups.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..13
//! (top to bottom); gravity pulls toward increasing y.
//!
//! Invariants: at most one tile per cell, and a stored tile's own `x`/`y`
//! always equal the coordinates of the cell holding it.

use tilepop_types::{Tile, BOARD_HEIGHT, BOARD_WIDTH};

/// Total number of cells on the board
pub(crate) const BOARD_SIZE: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

/// The stage board - 10 columns x 14 rows using flat array storage
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Option<Tile>; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    pub(crate) fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * (BOARD_WIDTH as usize) + (x as usize))
    }

    /// Get width of the board
    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    /// Get height of the board
    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Get cell at position (x, y).
    /// Returns `None` if out of bounds, `Some(None)` for an empty cell.
    pub fn get(&self, x: i8, y: i8) -> Option<Option<Tile>> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Get the tile at position (x, y), flattening out-of-bounds and empty
    pub fn tile_at(&self, x: i8, y: i8) -> Option<Tile> {
        self.get(x, y).flatten()
    }

    /// Check if position is within bounds and empty
    pub fn is_empty_at(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(None))
    }

    /// Check if position is within bounds and filled
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Check if position is out of bounds
    pub fn is_out_of_bounds(&self, x: i8, y: i8) -> bool {
        x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8
    }

    /// Place a tile at its own coordinates.
    /// Returns false if the cell is out of bounds or already occupied.
    pub fn insert(&mut self, tile: Tile) -> bool {
        match Self::index(tile.x, tile.y) {
            Some(idx) if self.cells[idx].is_none() => {
                self.cells[idx] = Some(tile);
                true
            }
            _ => false,
        }
    }

    /// Remove and return the tile at (x, y), if any
    pub fn remove_at(&mut self, x: i8, y: i8) -> Option<Tile> {
        Self::index(x, y).and_then(|idx| self.cells[idx].take())
    }

    /// Number of tiles currently on the board
    pub fn tile_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Iterate over all present tiles in row-major order
    pub fn tiles(&self) -> impl Iterator<Item = Tile> + '_ {
        self.cells.iter().filter_map(|cell| *cell)
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = None;
        }
    }

    /// Build a board from a list of tiles, each placed at its own coordinates.
    /// Out-of-bounds or colliding tiles are silently skipped.
    pub fn from_tiles(tiles: impl IntoIterator<Item = Tile>) -> Self {
        let mut board = Self::new();
        for tile in tiles {
            board.insert(tile);
        }
        board
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

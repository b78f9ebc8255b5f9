//! Output field of per-cell candidate sets
//!
//! The field is a fixed `width × height` grid where each cell holds the set
//! of tile ids still possible there. Boundaries are open: a neighbor lookup
//! that leaves the grid resolves to the all-tiles sentinel, which behaves as
//! an unconstrained virtual neighbor.

use crate::algorithm::bitset::TileBitset;
use crate::spatial::direction::Direction;

/// Grid of candidate sets, stored row-major (`index = y * width + x`)
#[derive(Clone, Debug)]
pub struct Field {
    cells: Vec<TileBitset>,
    all_tiles: TileBitset,
    width: usize,
    height: usize,
}

impl Field {
    /// Dimensions without cells; the engine's state until initialization
    pub fn unseeded(width: usize, height: usize) -> Self {
        Self {
            cells: Vec::new(),
            all_tiles: TileBitset::new(0),
            width,
            height,
        }
    }

    /// Build a field with every tile possible in every cell
    pub fn new(width: usize, height: usize, tile_count: usize) -> Self {
        Self {
            cells: vec![TileBitset::all(tile_count); width * height],
            all_tiles: TileBitset::all(tile_count),
            width,
            height,
        }
    }

    /// Field width
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Field height
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Number of cells (zero until initialized)
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Test whether the field has no cells yet
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Linear cell id from coordinates
    pub const fn index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    /// Candidate set of one cell
    ///
    /// # Panics
    ///
    /// Panics if `id` is out of bounds.
    pub fn cell(&self, id: usize) -> &TileBitset {
        &self.cells[id]
    }

    /// Mutable candidate set of one cell
    ///
    /// Narrowing a cell by hand before collapsing constrains what the engine
    /// may place there.
    ///
    /// # Panics
    ///
    /// Panics if `id` is out of bounds.
    pub fn cell_mut(&mut self, id: usize) -> &mut TileBitset {
        &mut self.cells[id]
    }

    /// All cells in row-major order
    pub fn cells(&self) -> &[TileBitset] {
        &self.cells
    }

    /// Candidate set of the neighbor in `dir`, or the all-tiles sentinel
    /// when that neighbor falls outside the field
    pub fn neighbor(&self, x: usize, y: usize, dir: Direction) -> &TileBitset {
        match dir.step(x, y, self.width, self.height) {
            Some((nx, ny)) => &self.cells[self.index(nx, ny)],
            None => &self.all_tiles,
        }
    }

    /// Sum of candidate counts over all cells
    pub fn total_candidates(&self) -> usize {
        self.cells.iter().map(TileBitset::count).sum()
    }
}

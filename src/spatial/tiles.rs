//! Tile extraction and adjacency rule learning
//!
//! Slides a window across the exemplar to collect the tile vocabulary, then
//! derives which tiles may sit beside which in each direction from their
//! one-row or one-column overlaps. The result is a seed record that fully
//! determines an engine run.

use crate::algorithm::bitset::TileBitset;
use crate::spatial::direction::Direction;

/// Per-tile adjacency rules, one candidate set per direction
///
/// `up` holds the tiles allowed directly above a cell occupied by this tile,
/// and so on. Learned rules are symmetric across reversed directions: if `i`
/// accepts `j` above, `j` accepts `i` below.
#[derive(Clone, Debug)]
pub struct NeighborRules {
    /// Tiles allowed directly above
    pub up: TileBitset,
    /// Tiles allowed directly below
    pub down: TileBitset,
    /// Tiles allowed directly to the left
    pub left: TileBitset,
    /// Tiles allowed directly to the right
    pub right: TileBitset,
}

impl NeighborRules {
    /// Create empty rule sets spanning `tile_count` tiles
    pub fn new(tile_count: usize) -> Self {
        Self {
            up: TileBitset::new(tile_count),
            down: TileBitset::new(tile_count),
            left: TileBitset::new(tile_count),
            right: TileBitset::new(tile_count),
        }
    }

    /// The rule set for one direction
    pub const fn get(&self, dir: Direction) -> &TileBitset {
        match dir {
            Direction::Up => &self.up,
            Direction::Down => &self.down,
            Direction::Left => &self.left,
            Direction::Right => &self.right,
        }
    }

    /// The mutable rule set for one direction
    pub fn get_mut(&mut self, dir: Direction) -> &mut TileBitset {
        match dir {
            Direction::Up => &mut self.up,
            Direction::Down => &mut self.down,
            Direction::Left => &mut self.left,
            Direction::Right => &mut self.right,
        }
    }
}

/// Initial engine state: tile vocabulary, weights, adjacency rules, RNG seed
///
/// Produced by [`TileExtractor::into_seed`] or assembled by hand. Feeding a
/// retained seed back into a fresh engine reproduces the original run.
#[derive(Clone, Debug)]
pub struct WaveSeed<T> {
    /// Representative output value per tile id (the block's top-left cell)
    pub tiles: Vec<T>,
    /// Occurrence count of each tile block in the exemplar
    pub weights: Vec<u32>,
    /// Allowed-neighbor sets per tile id
    pub neighbors: Vec<NeighborRules>,
    /// RNG seed; zero requests a nondeterministic one at init
    pub rnd_seed: u64,
}

impl<T> Default for WaveSeed<T> {
    fn default() -> Self {
        Self {
            tiles: Vec::new(),
            weights: Vec::new(),
            neighbors: Vec::new(),
            rnd_seed: 0,
        }
    }
}

/// Sliding-window tile extractor with weight accumulation
///
/// Holds the deduplicated `tile_width × tile_height` blocks in first-seen
/// order together with their occurrence counts.
pub struct TileExtractor<T> {
    blocks: Vec<Vec<T>>,
    weights: Vec<u32>,
    tile_width: usize,
    tile_height: usize,
}

impl<T: Clone + PartialEq> TileExtractor<T> {
    /// Slide the window over a row-major exemplar pattern
    ///
    /// Every origin with the window fully inside the pattern produces one
    /// block; there is no wrap-around, and the inclusive origin bounds mean
    /// the last full row and column of windows are included. Equal blocks
    /// share an id and accumulate weight. The scan runs outer column, inner
    /// row, so id assignment is deterministic.
    ///
    /// # Panics
    ///
    /// Panics if the pattern buffer is shorter than
    /// `pattern_width * pattern_height`, if either window dimension is zero,
    /// or if the window exceeds the pattern bounds.
    pub fn extract(
        pattern: &[T],
        pattern_width: usize,
        pattern_height: usize,
        tile_width: usize,
        tile_height: usize,
    ) -> Self {
        assert!(
            pattern_width * pattern_height <= pattern.len(),
            "pattern buffer shorter than its declared dimensions"
        );
        assert!(
            tile_width >= 1 && tile_height >= 1,
            "window dimensions must be nonzero"
        );
        assert!(
            tile_width <= pattern_width && tile_height <= pattern_height,
            "window exceeds pattern bounds"
        );

        let mut blocks: Vec<Vec<T>> = Vec::new();
        let mut weights: Vec<u32> = Vec::new();

        for x in 0..=pattern_width - tile_width {
            for y in 0..=pattern_height - tile_height {
                let mut block = Vec::with_capacity(tile_width * tile_height);
                for row in 0..tile_height {
                    let start = (y + row) * pattern_width + x;
                    block.extend_from_slice(&pattern[start..start + tile_width]);
                }

                match blocks.iter().position(|seen| *seen == block) {
                    Some(id) => {
                        if let Some(weight) = weights.get_mut(id) {
                            *weight += 1;
                        }
                    }
                    None => {
                        blocks.push(block);
                        weights.push(1);
                    }
                }
            }
        }

        Self {
            blocks,
            weights,
            tile_width,
            tile_height,
        }
    }

    /// Number of distinct tiles
    pub fn tile_count(&self) -> usize {
        self.blocks.len()
    }

    /// Occurrence counts, indexed by tile id
    pub fn weights(&self) -> &[u32] {
        &self.weights
    }

    /// Deduplicated blocks in id order
    pub fn blocks(&self) -> &[Vec<T>] {
        &self.blocks
    }

    /// Learn which tiles may adjoin which in each direction
    ///
    /// Two blocks are compatible in a direction when sliding one of them a
    /// single cell that way leaves the overlap equal element for element.
    /// Rules are written symmetrically: `i` accepting `j` in `d` also
    /// records `j` accepting `i` in the reverse of `d`.
    pub fn learn_neighbors(&self) -> Vec<NeighborRules> {
        let count = self.blocks.len();
        let mut rules: Vec<NeighborRules> =
            (0..count).map(|_| NeighborRules::new(count)).collect();

        for i in 0..count {
            for dir in Direction::ALL {
                for j in i..count {
                    if blocks_adjacent(
                        &self.blocks[i],
                        &self.blocks[j],
                        dir,
                        self.tile_width,
                        self.tile_height,
                    ) {
                        rules[i].get_mut(dir).set(j, true);
                        rules[j].get_mut(dir.reverse()).set(i, true);
                    }
                }
            }
        }

        rules
    }

    /// Consume the extractor into an engine seed
    ///
    /// Each tile's representative output value is its block's top-left cell.
    pub fn into_seed(self, rnd_seed: u64) -> WaveSeed<T> {
        let neighbors = self.learn_neighbors();
        let tiles = self
            .blocks
            .iter()
            .map(|block| block[0].clone())
            .collect();

        WaveSeed {
            tiles,
            weights: self.weights,
            neighbors,
            rnd_seed,
        }
    }
}

/// Test whether `b` may sit one cell away from `a` in direction `dir`
///
/// Vertical checks compare all rows but one of the two blocks; horizontal
/// checks compare all columns but one, row by row. A 1×1 window makes every
/// overlap empty, so every tile pair is compatible in every direction.
fn blocks_adjacent<T: PartialEq>(
    a: &[T],
    b: &[T],
    dir: Direction,
    width: usize,
    height: usize,
) -> bool {
    match dir {
        Direction::Up => a[..width * (height - 1)] == b[width..],
        Direction::Down => a[width..] == b[..width * (height - 1)],
        Direction::Left => (0..height).all(|row| {
            let start = row * width;
            a[start..start + width - 1] == b[start + 1..start + width]
        }),
        Direction::Right => (0..height).all(|row| {
            let start = row * width;
            a[start + 1..start + width] == b[start..start + width - 1]
        }),
    }
}

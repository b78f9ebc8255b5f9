//! Entropy-driven cell selection and weighted tile choice

use crate::algorithm::bitset::TileBitset;
use crate::spatial::grid::Field;
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Seeded random selector for reproducible stochastic choices
pub struct RandomSelector {
    rng: StdRng,
}

impl RandomSelector {
    /// Create a deterministic selector from a 64-bit seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Uniform draw of an index below `len`
    ///
    /// # Panics
    ///
    /// Panics if `len` is zero.
    pub fn pick_index(&mut self, len: usize) -> usize {
        self.rng.random_range(0..len)
    }
}

/// Locate the next observation point
///
/// Scans every cell, accumulating the field's total candidate count, and
/// collects the cells sharing the lowest count above one. One of those is
/// drawn uniformly, so ties break by chance rather than by position. `None`
/// means no cell has more than one candidate left.
pub fn lowest_entropy_cell(
    field: &Field,
    tile_count: usize,
    selector: &mut RandomSelector,
) -> (Option<usize>, usize) {
    let mut lowest = tile_count;
    let mut undecided: Vec<usize> = Vec::new();
    let mut total = 0;

    for (id, cell) in field.cells().iter().enumerate() {
        let count = cell.count();
        total += count;

        if count > 1 && count <= lowest {
            if count < lowest {
                undecided.clear();
                lowest = count;
            }
            undecided.push(id);
        }
    }

    if undecided.is_empty() {
        return (None, total);
    }

    let pick = selector.pick_index(undecided.len());
    (Some(undecided[pick]), total)
}

/// Fill the weighted selection pool for one cell
///
/// Each tile id still possible in the cell is appended once per unit of its
/// weight, so the later uniform draw is biased by exemplar frequency. An
/// empty cell falls back to the full tile table, keeping the draw total
/// after a contradiction.
pub fn fill_weighted_pool(pool: &mut Vec<usize>, cell: &TileBitset, weights: &[u32]) {
    pool.clear();

    if cell.is_empty() {
        for (id, &weight) in weights.iter().enumerate() {
            pool.extend(std::iter::repeat(id).take(weight as usize));
        }
    } else {
        for id in cell.iter_ones() {
            let weight = weights.get(id).copied().unwrap_or(0) as usize;
            pool.extend(std::iter::repeat(id).take(weight));
        }
    }
}

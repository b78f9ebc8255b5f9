//! Engine façade driving the observe and propagate loop

use crate::{
    algorithm::bitset::TileBitset,
    algorithm::propagation::Wavefront,
    algorithm::selection::{RandomSelector, fill_weighted_pool, lowest_entropy_cell},
    spatial::direction::Direction,
    spatial::grid::Field,
    spatial::tiles::{TileExtractor, WaveSeed},
};
use rand::Rng;

/// Wave function collapse engine over a `width × height` field
///
/// Construct with the output dimensions, initialize from an exemplar pattern
/// or a retained seed, then drive [`Wave::collapse`] until the field is
/// solved. The tile table and adjacency rules are immutable after
/// initialization; the field resets to all-candidates on each init. All
/// allocations happen at init, and per-step scratch (the wavefront, the
/// weighted pool, the four per-direction sets) is reused across steps.
///
/// Runs are deterministic for a given seed record: the same pattern, window,
/// dimensions, and nonzero RNG seed reproduce the same field byte for byte.
pub struct Wave<T> {
    seed: WaveSeed<T>,
    field: Field,
    selector: RandomSelector,
    wavefront: Wavefront,
    /// Per-direction allowed-tile accumulators for the candidate filter
    allowed: [TileBitset; 4],
    /// Weighted selection pool, rebuilt in place per observation
    pool: Vec<usize>,
    uncertainty_current: usize,
}

impl<T: Clone + PartialEq> Wave<T> {
    /// Create an engine with the given output dimensions
    ///
    /// The engine is inert until one of the `init_*` methods runs.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            seed: WaveSeed::default(),
            field: Field::unseeded(width, height),
            selector: RandomSelector::new(0),
            wavefront: Wavefront::new(),
            allowed: std::array::from_fn(|_| TileBitset::new(0)),
            pool: Vec::new(),
            uncertainty_current: 0,
        }
    }

    /// (Re)initialize from a prepared seed record
    ///
    /// # Panics
    ///
    /// Panics if the tile table is empty, if weights or neighbor rules
    /// differ in length from the tiles, or if any rule set does not span the
    /// tile table.
    pub fn init_from_seed(&mut self, seed: WaveSeed<T>) {
        assert!(!seed.tiles.is_empty(), "seed holds no tiles");
        assert_eq!(
            seed.tiles.len(),
            seed.weights.len(),
            "tiles and weights length mismatch"
        );
        assert_eq!(
            seed.tiles.len(),
            seed.neighbors.len(),
            "tiles and neighbors length mismatch"
        );
        assert!(
            seed.neighbors.iter().all(|rules| {
                Direction::ALL
                    .iter()
                    .all(|&dir| rules.get(dir).len() == seed.tiles.len())
            }),
            "rule sets must span the tile table"
        );

        self.seed = seed;
        self.init_random();
        self.init_field();
    }

    /// Learn tiles and adjacency rules from an exemplar, then initialize
    ///
    /// The pattern is `pattern_width × pattern_height` values in row-major
    /// order; the window is `tile_width × tile_height`. A zero `rnd_seed`
    /// requests a nondeterministic seed, which is recorded in [`Wave::seed`]
    /// so the run can be reproduced afterwards.
    ///
    /// # Panics
    ///
    /// Panics if the pattern buffer is shorter than its declared dimensions,
    /// or if the window is empty or exceeds the pattern bounds.
    pub fn init_from_pattern(
        &mut self,
        pattern: &[T],
        pattern_width: usize,
        pattern_height: usize,
        tile_width: usize,
        tile_height: usize,
        rnd_seed: u64,
    ) {
        let extractor = TileExtractor::extract(
            pattern,
            pattern_width,
            pattern_height,
            tile_width,
            tile_height,
        );
        self.seed = extractor.into_seed(rnd_seed);
        self.init_random();
        self.init_field();
    }

    /// The retained seed, including the effective RNG seed of this run
    pub const fn seed(&self) -> &WaveSeed<T> {
        &self.seed
    }

    /// Current field state
    ///
    /// After a successful collapse every cell has exactly one set bit, whose
    /// index is the tile id to place there.
    pub const fn field(&self) -> &Field {
        &self.field
    }

    /// Representative output value per tile id
    pub fn tiles(&self) -> &[T] {
        &self.seed.tiles
    }

    /// Field width
    pub const fn width(&self) -> usize {
        self.field.width()
    }

    /// Field height
    pub const fn height(&self) -> usize {
        self.field.height()
    }

    /// Normalized progress: cell count over summed candidate count
    ///
    /// Reaches 1.0 exactly when every cell is down to a single candidate.
    /// Returns 0.0 before initialization.
    pub fn uncertainty(&self) -> f32 {
        if self.field.is_empty() || self.uncertainty_current == 0 {
            return 0.0;
        }
        self.field.len() as f32 / self.uncertainty_current as f32
    }

    /// Run the observe and propagate loop until the field is solved
    ///
    /// With `one_step` set, performs exactly one observation plus its
    /// propagation and reports whether the field is solved, so a host can
    /// interleave collapsing with other work. Contradictions are repaired
    /// locally and never abort the run; where repair fired, the finished
    /// tiling may violate adjacency rules at isolated seams.
    ///
    /// # Panics
    ///
    /// Panics if called before initialization.
    pub fn collapse(&mut self, one_step: bool) -> bool {
        self.collapse_with(one_step, |_, _, _| {})
    }

    /// Like [`Wave::collapse`], invoking `observer` with the field and the
    /// coordinates of every cell processed during propagation
    ///
    /// The observer runs inline on the engine's thread, once per processed
    /// cell plus once for the observed cell, in wavefront order.
    ///
    /// # Panics
    ///
    /// Panics if called before initialization.
    pub fn collapse_with<F>(&mut self, one_step: bool, mut observer: F) -> bool
    where
        F: FnMut(&Field, usize, usize),
    {
        assert!(!self.field.is_empty(), "collapse before initialization");

        let tile_count = self.seed.tiles.len();
        let (mut point, mut total) =
            lowest_entropy_cell(&self.field, tile_count, &mut self.selector);
        self.uncertainty_current = total;

        while self.uncertainty_current > self.field.len() {
            let Some(cell) = point else { break };
            self.collapse_step(cell, &mut observer);

            (point, total) = lowest_entropy_cell(&self.field, tile_count, &mut self.selector);
            self.uncertainty_current = total;

            if one_step {
                return self.uncertainty_current == self.field.len();
            }
        }

        true
    }

    /// One observation and its full propagation
    fn collapse_step<F>(&mut self, start: usize, observer: &mut F)
    where
        F: FnMut(&Field, usize, usize),
    {
        let width = self.field.width();

        self.observe_cell(start);
        observer(&self.field, start % width, start / width);

        self.wavefront.begin(&self.field);
        self.wavefront.push_neighbors(&self.field, start);

        while let Some(cell) = self.wavefront.pop() {
            if !self.wavefront.visit(cell) {
                continue;
            }

            let before = self.field.cell(cell).count();
            if before == 1 {
                continue;
            }

            self.filter_candidates(cell);

            if self.field.cell(cell).count() != before {
                self.wavefront.push_neighbors(&self.field, cell);
            }

            observer(&self.field, cell % width, cell / width);
        }
    }

    /// Force one cell to a single tile by weighted random choice
    fn observe_cell(&mut self, cell: usize) {
        self.filter_candidates(cell);

        fill_weighted_pool(&mut self.pool, self.field.cell(cell), &self.seed.weights);
        let pick = self.selector.pick_index(self.pool.len());
        let tile = self.pool[pick];

        let chosen = self.field.cell_mut(cell);
        chosen.fill(false);
        chosen.set(tile, true);
    }

    /// Refine one cell's candidates against its neighbors
    ///
    /// Computes, per direction, the union of tiles that the neighbor's
    /// remaining candidates accept on this side, then intersects the cell
    /// with all four. An empty starting cell is refilled first so an earlier
    /// contradiction heals locally; an empty intersection is replaced by the
    /// union of the four allowed sets.
    fn filter_candidates(&mut self, cell: usize) {
        if self.field.cell(cell).is_empty() {
            self.field.cell_mut(cell).fill(true);
        }

        let x = cell % self.field.width();
        let y = cell / self.field.width();

        for dir in Direction::ALL {
            let allowed = &mut self.allowed[dir.index()];
            allowed.fill(false);

            let neighbor = self.field.neighbor(x, y, dir);
            for tile in neighbor.iter_ones() {
                allowed.union_with(self.seed.neighbors[tile].get(dir.reverse()));
            }
        }

        let candidates = self.field.cell_mut(cell);
        for allowed in &self.allowed {
            candidates.intersect_with(allowed);
        }

        if candidates.is_empty() {
            for allowed in &self.allowed {
                candidates.union_with(allowed);
            }
        }
    }

    fn init_random(&mut self) {
        while self.seed.rnd_seed == 0 {
            self.seed.rnd_seed = rand::rng().random();
        }
        self.selector = RandomSelector::new(self.seed.rnd_seed);
    }

    fn init_field(&mut self) {
        let tile_count = self.seed.tiles.len();
        self.field = Field::new(self.field.width(), self.field.height(), tile_count);
        self.allowed = std::array::from_fn(|_| TileBitset::new(tile_count));
        self.uncertainty_current = self.field.total_candidates();
    }
}

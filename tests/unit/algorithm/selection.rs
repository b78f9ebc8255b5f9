//! Tests for entropy-based cell selection and weighted pool construction

#[cfg(test)]
mod tests {
    use wavetile::algorithm::bitset::TileBitset;
    use wavetile::algorithm::selection::{
        RandomSelector, fill_weighted_pool, lowest_entropy_cell,
    };
    use wavetile::spatial::Field;

    // Tests that equal seeds replay the same draw sequence
    // Verified by reseeding from entropy on every construction
    #[test]
    fn test_selector_determinism() {
        let mut first = RandomSelector::new(99);
        let mut second = RandomSelector::new(99);

        for _ in 0..16 {
            assert_eq!(first.pick_index(1000), second.pick_index(1000));
        }
    }

    // Tests the scan finds the cell with the fewest remaining candidates
    // Verified by inverting the count comparison
    #[test]
    fn test_lowest_entropy_prefers_narrow_cells() {
        let mut field = Field::new(2, 2, 4);

        // Cell 1 narrowed to two candidates, cell 2 already decided
        let cell = field.cell_mut(1);
        cell.fill(false);
        cell.set(0, true);
        cell.set(3, true);

        let cell = field.cell_mut(2);
        cell.fill(false);
        cell.set(2, true);

        let mut selector = RandomSelector::new(7);
        let (point, total) = lowest_entropy_cell(&field, 4, &mut selector);

        assert_eq!(point, Some(1));
        assert_eq!(total, 4 + 2 + 1 + 4);
    }

    // Tests that a fully decided field yields no observation point
    // Verified by collecting singleton cells as candidates
    #[test]
    fn test_lowest_entropy_on_solved_field() {
        let mut field = Field::new(2, 1, 3);
        for id in 0..2 {
            let cell = field.cell_mut(id);
            cell.fill(false);
            cell.set(id, true);
        }

        let mut selector = RandomSelector::new(7);
        let (point, total) = lowest_entropy_cell(&field, 3, &mut selector);

        assert_eq!(point, None);
        assert_eq!(total, 2);
    }

    // Tests pool entries repeat according to tile weights
    // Verified by appending each candidate exactly once
    #[test]
    fn test_fill_weighted_pool_repeats_by_weight() {
        let mut cell = TileBitset::new(3);
        cell.set(0, true);
        cell.set(2, true);

        let mut pool = Vec::new();
        fill_weighted_pool(&mut pool, &cell, &[2, 5, 3]);

        assert_eq!(pool, vec![0, 0, 2, 2, 2]);
    }

    // Tests the empty-cell fallback draws from the whole tile table
    // Verified by leaving the pool empty for contradicted cells
    #[test]
    fn test_fill_weighted_pool_empty_cell_fallback() {
        let cell = TileBitset::new(3);
        assert!(cell.is_empty());

        let mut pool = Vec::new();
        fill_weighted_pool(&mut pool, &cell, &[1, 2, 1]);

        assert_eq!(pool, vec![0, 1, 1, 2]);
    }
}

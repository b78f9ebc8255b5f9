//! Tests for the wavefront queue and visited bookkeeping

#[cfg(test)]
mod tests {
    use wavetile::algorithm::propagation::Wavefront;
    use wavetile::spatial::Field;

    // Tests that begin preseeds decided cells as visited
    // Verified by clearing the visited bitmap without the singleton scan
    #[test]
    fn test_begin_preseeds_singletons() {
        let mut field = Field::new(2, 2, 3);

        let cell = field.cell_mut(3);
        cell.fill(false);
        cell.set(1, true);

        let mut wavefront = Wavefront::new();
        wavefront.begin(&field);

        assert!(!wavefront.visit(3), "singleton cell must start visited");
        assert!(wavefront.visit(0), "undecided cell must start unvisited");
    }

    // Tests visit marks a cell exactly once
    // Verified by removing the marking write
    #[test]
    fn test_visit_marks_once() {
        let field = Field::new(3, 1, 2);
        let mut wavefront = Wavefront::new();
        wavefront.begin(&field);

        assert!(wavefront.visit(1));
        assert!(!wavefront.visit(1));
    }

    // Tests neighbors enqueue in up, down, left, right order
    // Verified by reordering the direction sweep
    #[test]
    fn test_push_neighbors_fifo_order() {
        let field = Field::new(3, 3, 2);
        let mut wavefront = Wavefront::new();
        wavefront.begin(&field);

        // Center cell of the 3x3 field is id 4
        wavefront.push_neighbors(&field, 4);

        assert_eq!(wavefront.pop(), Some(1));
        assert_eq!(wavefront.pop(), Some(7));
        assert_eq!(wavefront.pop(), Some(3));
        assert_eq!(wavefront.pop(), Some(5));
        assert_eq!(wavefront.pop(), None);
    }

    // Tests corner cells only enqueue their in-bounds neighbors
    // Verified by dropping the boundary check on the step
    #[test]
    fn test_push_neighbors_respects_bounds() {
        let field = Field::new(3, 3, 2);
        let mut wavefront = Wavefront::new();
        wavefront.begin(&field);

        wavefront.push_neighbors(&field, 0);

        assert_eq!(wavefront.pop(), Some(3));
        assert_eq!(wavefront.pop(), Some(1));
        assert_eq!(wavefront.pop(), None);
    }

    // Tests decided and visited cells are not enqueued
    // Verified by removing the singleton guard in push_neighbors
    #[test]
    fn test_push_neighbors_skips_decided_cells() {
        let mut field = Field::new(3, 1, 2);

        let cell = field.cell_mut(0);
        cell.fill(false);
        cell.set(0, true);

        let mut wavefront = Wavefront::new();
        wavefront.begin(&field);

        wavefront.push_neighbors(&field, 1);

        // Only the undecided right-hand neighbor qualifies
        assert_eq!(wavefront.pop(), Some(2));
        assert_eq!(wavefront.pop(), None);
    }
}

//! Tests for engine initialization, accessors, and collapse behavior

#[cfg(test)]
mod tests {
    use wavetile::{Wave, WaveSeed};

    // Tests pattern init records tiles, weights, and the seed verbatim
    // Verified by dropping the seed assignment during init
    #[test]
    fn test_init_from_pattern_builds_seed() {
        let pattern = ['A', 'B', 'A', 'B'];
        let mut wave = Wave::new(3, 2);
        wave.init_from_pattern(&pattern, 2, 2, 1, 1, 123);

        assert_eq!(wave.width(), 3);
        assert_eq!(wave.height(), 2);
        assert_eq!(wave.tiles().to_vec(), vec!['A', 'B']);
        assert_eq!(wave.seed().weights, vec![2, 2]);
        assert_eq!(wave.seed().rnd_seed, 123);
        assert_eq!(wave.field().total_candidates(), 3 * 2 * 2);
    }

    // Tests collapse leaves exactly one candidate in every cell
    // Verified by stopping the loop one observation early
    #[test]
    fn test_collapse_fully_decides_field() {
        let pattern = ['A', 'B', 'A', 'B'];
        let mut wave = Wave::new(4, 4);
        wave.init_from_pattern(&pattern, 2, 2, 1, 1, 3);

        assert!(wave.collapse(false));
        assert!(wave.field().cells().iter().all(|cell| cell.is_single()));
        assert_eq!(wave.field().total_candidates(), 16);
    }

    // Tests one-step collapse reports completion only when solved
    // Verified by returning the solved flag unconditionally
    #[test]
    fn test_one_step_reports_partial_progress() {
        let pattern = ['A', 'B', 'A', 'B'];
        let mut wave = Wave::new(6, 6);
        wave.init_from_pattern(&pattern, 2, 2, 1, 1, 3);

        let mut steps = 0;
        while !wave.collapse(true) {
            steps += 1;
            assert!(steps <= 36, "one-step mode failed to converge");
        }

        assert!(wave.field().cells().iter().all(|cell| cell.is_single()));
    }

    // Tests seed init validates the record lengths
    // Verified by removing the weights length assertion
    #[test]
    #[should_panic(expected = "tiles and weights length mismatch")]
    fn test_init_from_seed_rejects_mismatched_weights() {
        let seed = WaveSeed {
            tiles: vec!['A', 'B'],
            weights: vec![1],
            neighbors: Vec::new(),
            rnd_seed: 1,
        };

        let mut wave = Wave::new(2, 2);
        wave.init_from_seed(seed);
    }

    // Tests collapse refuses to run without initialization
    // Verified by skipping the initialization assertion
    #[test]
    #[should_panic(expected = "collapse before initialization")]
    fn test_collapse_requires_init() {
        let mut wave: Wave<char> = Wave::new(2, 2);
        wave.collapse(false);
    }
}

//! Tests for error display formatting and source chaining

#[cfg(test)]
mod tests {
    use std::error::Error;
    use std::path::PathBuf;
    use wavetile::io::error::{WaveError, invalid_parameter, io_error};

    // Tests invalid parameter messages carry name, value, and reason
    // Verified by dropping fields from the format string
    #[test]
    fn test_invalid_parameter_display() {
        let err = invalid_parameter("seed", &42, &"must be positive");
        assert_eq!(
            err.to_string(),
            "Invalid parameter 'seed' = '42': must be positive"
        );
    }

    // Tests tile index errors name both the index and the bound
    // Verified by swapping the two values in the message
    #[test]
    fn test_invalid_tile_index_display() {
        let err = WaveError::InvalidTileIndex {
            index: 7,
            max_tiles: 3,
        };
        assert_eq!(err.to_string(), "Tile index 7 is out of bounds (max: 3)");
    }

    // Tests filesystem errors expose their underlying I/O source
    // Verified by returning None from the source accessor
    #[test]
    fn test_filesystem_error_source() {
        let err = WaveError::FileSystem {
            path: PathBuf::from("/tmp/missing"),
            operation: "create file",
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };

        assert!(err.source().is_some());
        assert!(err.to_string().contains("create file"));
        assert!(err.to_string().contains("/tmp/missing"));
    }

    // Tests the std::io::Error conversion keeps a filesystem variant
    // Verified by converting into the image-load variant instead
    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: WaveError = io_err.into();

        assert!(matches!(err, WaveError::FileSystem { .. }));
    }

    // Tests the path helper produces a parameter error
    // Verified by producing a source-data error instead
    #[test]
    fn test_io_error_helper() {
        let err = io_error("Target must be a PNG file or directory");
        assert!(matches!(err, WaveError::InvalidParameter { .. }));
        assert!(err.to_string().contains("PNG"));
    }
}

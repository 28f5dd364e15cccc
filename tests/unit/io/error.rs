//! Tests for error construction, display formatting, and source chaining

#[cfg(test)]
mod tests {
    use beadgrid::io::error::{PipelineError, computation_error, invalid_parameter};
    use std::error::Error;
    use std::path::PathBuf;

    // Tests display output for parameter validation failures
    // Verified by reordering the format arguments
    #[test]
    fn test_invalid_parameter_display() {
        let err = invalid_parameter("color_count", &300, &"must be between 1 and 256");
        assert_eq!(
            err.to_string(),
            "Invalid parameter 'color_count' = '300': must be between 1 and 256"
        );
    }

    // Tests display output and source chaining for file system failures
    #[test]
    fn test_file_system_display_and_source() {
        let err = PipelineError::FileSystem {
            path: PathBuf::from("/tmp/out"),
            operation: "create directory",
            source: std::io::Error::other("disk full"),
        };

        assert_eq!(
            err.to_string(),
            "File system error during create directory on '/tmp/out': disk full"
        );
        assert!(err.source().is_some());
    }

    // Tests that computation errors carry no source error
    #[test]
    fn test_computation_error_has_no_source() {
        let err = computation_error("quantize", &"image contains no pixels");
        assert!(err.source().is_none());
    }

    // Tests the blanket conversion from std::io::Error
    #[test]
    fn test_io_error_conversion() {
        let err: PipelineError = std::io::Error::other("denied").into();
        assert!(matches!(err, PipelineError::FileSystem { .. }));
    }
}

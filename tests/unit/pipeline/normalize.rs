//! Tests for image decoding and alpha flattening

#[cfg(test)]
mod tests {
    use beadgrid::io::error::PipelineError;
    use beadgrid::pipeline::normalize::{flatten_onto_white, load_normalized};
    use image::{Rgb, Rgba, RgbaImage};

    // Tests that fully opaque pixels pass through compositing unchanged
    // Verified by forcing the blend path for opaque pixels
    #[test]
    fn test_opaque_pixels_unchanged() {
        let source = RgbaImage::from_pixel(3, 3, Rgba([12, 200, 99, 255]));
        let flattened = flatten_onto_white(&source);

        assert!(flattened.pixels().all(|pixel| *pixel == Rgb([12, 200, 99])));
    }

    // Tests that fully transparent pixels become pure white
    #[test]
    fn test_transparent_pixels_become_white() {
        let source = RgbaImage::from_pixel(5, 5, Rgba([40, 40, 40, 0]));
        let flattened = flatten_onto_white(&source);

        assert_eq!(flattened.dimensions(), (5, 5));
        assert!(flattened
            .pixels()
            .all(|pixel| *pixel == Rgb([255, 255, 255])));
    }

    // Tests the "over" compositing arithmetic at half opacity
    // Verified against result = src*alpha + white*(1-alpha) by hand
    #[test]
    fn test_half_transparent_black_blends_to_gray() {
        let source = RgbaImage::from_pixel(1, 1, Rgba([0, 0, 0, 128]));
        let flattened = flatten_onto_white(&source);

        // 255 * (1 - 128/255) = 127
        assert!(flattened.pixels().all(|pixel| *pixel == Rgb([127, 127, 127])));
    }

    // Tests that decoding preserves the source dimensions
    #[test]
    fn test_load_normalized_preserves_dimensions() {
        let Ok(dir) = tempfile::tempdir() else {
            unreachable!("failed to create temp directory");
        };
        let input_path = dir.path().join("input.png");
        let source = RgbaImage::from_pixel(4, 3, Rgba([1, 2, 3, 255]));
        assert!(source.save(&input_path).is_ok());

        let Ok(normalized) = load_normalized(&input_path) else {
            unreachable!("decode should succeed");
        };
        assert_eq!(normalized.dimensions(), (4, 3));
    }

    // Tests that a missing input surfaces a decode error
    #[test]
    fn test_load_normalized_missing_path() {
        let result = load_normalized("definitely/not/here.png");
        assert!(matches!(result, Err(PipelineError::ImageLoad { .. })));
    }
}

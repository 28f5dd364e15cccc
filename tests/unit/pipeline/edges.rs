//! Tests for edge-map blending behavior

#[cfg(test)]
mod tests {
    use beadgrid::pipeline::edges::enhance_edges;
    use image::{Rgb, RgbImage};

    // Tests that output dimensions match the input
    #[test]
    fn test_dimensions_preserved() {
        let source = RgbImage::new(31, 17);
        assert_eq!(enhance_edges(&source).dimensions(), (31, 17));
    }

    // Tests the blend arithmetic on a uniform image, where the edge
    // response is zero and every channel lands at original * 0.7
    // Verified against the blend formula by hand
    #[test]
    fn test_uniform_image_scales_by_original_weight() {
        let source = RgbImage::from_pixel(8, 8, Rgb([200, 200, 200]));
        let enhanced = enhance_edges(&source);

        assert!(enhanced.pixels().all(|pixel| *pixel == Rgb([140, 140, 140])));
    }

    // Tests that a hard boundary saturates while flat regions darken,
    // which is what makes clustering split cleanly along object edges
    #[test]
    fn test_boundary_response_exceeds_flat_regions() {
        let source = RgbImage::from_fn(16, 16, |x, _| {
            if x < 8 {
                Rgb([0, 0, 0])
            } else {
                Rgb([255, 255, 255])
            }
        });
        let enhanced = enhance_edges(&source);

        // White pixel hugging the boundary: edge response clamps at 255
        let boundary = enhanced.get_pixel(8, 8);
        assert_eq!(*boundary, Rgb([255, 255, 255]));

        // White pixel far from the boundary: zero edge response, darkened
        let interior = enhanced.get_pixel(14, 8);
        assert!(interior.0.iter().all(|&channel| channel < 200));
    }
}

//! Tests for seeded k-means color reduction

#[cfg(test)]
mod tests {
    use beadgrid::io::error::PipelineError;
    use beadgrid::pipeline::quantize::quantize_colors;
    use image::{Rgb, RgbImage};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use std::collections::HashSet;

    fn noise_image(width: u32, height: u32, seed: u64) -> RgbImage {
        let mut rng = StdRng::seed_from_u64(seed);
        RgbImage::from_fn(width, height, |_, _| {
            Rgb([rng.random(), rng.random(), rng.random()])
        })
    }

    fn distinct_colors(image: &RgbImage) -> HashSet<[u8; 3]> {
        image.pixels().map(|pixel| pixel.0).collect()
    }

    // Tests that a single cluster reproduces a solid color exactly, since
    // the centroid of identical samples is the sample itself
    #[test]
    fn test_solid_color_single_cluster_is_exact() {
        let source = RgbImage::from_pixel(10, 10, Rgb([10, 20, 30]));

        let Ok(quantized) = quantize_colors(&source, 1, 42) else {
            unreachable!("quantization should succeed");
        };

        assert_eq!(quantized.dimensions(), (10, 10));
        assert!(quantized.pixels().all(|pixel| *pixel == Rgb([10, 20, 30])));
    }

    // Tests the distinct-color upper bound
    // Verified by raising the cluster count above the requested value
    #[test]
    fn test_color_count_bound() {
        let source = noise_image(32, 32, 7);

        let Ok(quantized) = quantize_colors(&source, 8, 42) else {
            unreachable!("quantization should succeed");
        };

        assert!(distinct_colors(&quantized).len() <= 8);
    }

    // Tests bit-identical output across independent runs with one seed
    // Verified by letting the per-run seeds drift between invocations
    #[test]
    fn test_deterministic_under_fixed_seed() {
        let source = noise_image(24, 24, 11);

        let Ok(first) = quantize_colors(&source, 6, 42) else {
            unreachable!("quantization should succeed");
        };
        let Ok(second) = quantize_colors(&source, 6, 42) else {
            unreachable!("quantization should succeed");
        };

        assert_eq!(first.as_raw(), second.as_raw());
    }

    // Tests graceful degradation when more colors are requested than exist
    #[test]
    fn test_degenerate_color_count_is_not_an_error() {
        let two_tone = RgbImage::from_fn(8, 8, |x, _| {
            if x < 4 {
                Rgb([0, 0, 0])
            } else {
                Rgb([255, 255, 255])
            }
        });

        let Ok(quantized) = quantize_colors(&two_tone, 10, 42) else {
            unreachable!("degenerate quantization should still succeed");
        };

        assert!(distinct_colors(&quantized).len() <= 10);
    }

    // Tests parameter validation at both ends of the range
    #[test]
    fn test_invalid_color_count_rejected() {
        let source = RgbImage::from_pixel(2, 2, Rgb([1, 1, 1]));

        assert!(matches!(
            quantize_colors(&source, 0, 42),
            Err(PipelineError::InvalidParameter { .. })
        ));
        assert!(matches!(
            quantize_colors(&source, 257, 42),
            Err(PipelineError::InvalidParameter { .. })
        ));
    }
}

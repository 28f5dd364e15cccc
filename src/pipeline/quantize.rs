//! Color reduction through seeded k-means clustering

use crate::io::configuration::{KMEANS_CONVERGE, KMEANS_MAX_ITERATIONS, KMEANS_RUNS, MAX_COLOR_COUNT};
use crate::io::error::{Result, computation_error, invalid_parameter};
use image::{Rgb, RgbImage};
use kmeans_colors::{Kmeans, get_kmeans};
use palette::Srgb;

/// Replace every pixel with one of at most `color_count` cluster centroids
///
/// Pixels are flattened to normalized RGB samples and clustered with
/// k-means. The run is repeated [`KMEANS_RUNS`] times from consecutive
/// seeds derived from `seed` and the lowest-score fit is kept, reducing
/// sensitivity to initialization while staying reproducible: the same
/// input, seed, and `color_count` yield a bit-identical result. Requesting
/// more colors than the image contains degrades silently to fewer
/// effective colors.
///
/// # Errors
///
/// Returns [`crate::PipelineError::InvalidParameter`] if `color_count` is
/// outside `1..=MAX_COLOR_COUNT`, or [`crate::PipelineError::Computation`]
/// if the image has no pixels or a cluster assignment is out of range.
pub fn quantize_colors(image: &RgbImage, color_count: usize, seed: u64) -> Result<RgbImage> {
    if color_count == 0 || color_count > MAX_COLOR_COUNT {
        return Err(invalid_parameter(
            "color_count",
            &color_count,
            &format!("must be between 1 and {MAX_COLOR_COUNT}"),
        ));
    }

    let samples: Vec<Srgb<f32>> = image
        .pixels()
        .map(|pixel| {
            let [r, g, b] = pixel.0;
            Srgb::new(
                f32::from(r) / 255.0,
                f32::from(g) / 255.0,
                f32::from(b) / 255.0,
            )
        })
        .collect();

    if samples.is_empty() {
        return Err(computation_error("quantize", &"image contains no pixels"));
    }

    // Keep the best of several independently seeded fits
    let mut best = Kmeans::new();
    for run in 0..KMEANS_RUNS {
        let candidate = get_kmeans(
            color_count,
            KMEANS_MAX_ITERATIONS,
            KMEANS_CONVERGE,
            false,
            &samples,
            seed.wrapping_add(run),
        );
        if candidate.score < best.score {
            best = candidate;
        }
    }

    let centroids: Vec<Rgb<u8>> = best
        .centroids
        .iter()
        .map(|centroid| {
            let rounded: Srgb<u8> = centroid.into_format();
            Rgb([rounded.red, rounded.green, rounded.blue])
        })
        .collect();

    let mut quantized = RgbImage::new(image.width(), image.height());
    for (target, &index) in quantized.pixels_mut().zip(best.indices.iter()) {
        *target = centroids
            .get(usize::from(index))
            .copied()
            .ok_or_else(|| computation_error("quantize", &"cluster index out of range"))?;
    }

    Ok(quantized)
}

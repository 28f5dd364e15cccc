//! Fixed-resolution resampling between working and chart grids

use crate::io::configuration::{GRID_SIZE, WORKING_SIZE};
use image::RgbImage;
use image::imageops::{self, FilterType};

/// Stretch an image to the square working resolution
///
/// Uses a Lanczos kernel to avoid aliasing artifacts ahead of edge
/// detection. Aspect ratio is deliberately not preserved; the source is
/// stretched to fill the square.
pub fn to_working_resolution(image: &RgbImage) -> RgbImage {
    imageops::resize(image, WORKING_SIZE, WORKING_SIZE, FilterType::Lanczos3)
}

/// Collapse the quantized working image down to the chart grid
///
/// Nearest-neighbor sampling keeps every output pixel an exact source
/// color, so no blended colors appear after quantization.
pub fn to_chart_resolution(image: &RgbImage) -> RgbImage {
    imageops::resize(image, GRID_SIZE, GRID_SIZE, FilterType::Nearest)
}

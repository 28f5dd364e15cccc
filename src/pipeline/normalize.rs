//! Image decoding with transparency flattened onto a white backdrop

use crate::io::error::{PipelineError, Result};
use image::{Rgb, RgbImage, Rgba, RgbaImage};
use std::path::Path;

/// Decode the image at `path` and flatten any transparency onto white
///
/// The decoded image is composited over an opaque white canvas of identical
/// dimensions and the alpha channel is discarded. Sources without an alpha
/// channel pass through as a direct channel copy.
///
/// # Errors
///
/// Returns [`PipelineError::ImageLoad`] if the path does not reference a
/// readable, supported image format.
pub fn load_normalized<P: AsRef<Path>>(path: P) -> Result<RgbImage> {
    let path_buf = path.as_ref().to_path_buf();
    let decoded = image::open(&path_buf).map_err(|e| PipelineError::ImageLoad {
        path: path_buf,
        source: e,
    })?;
    Ok(flatten_onto_white(&decoded.to_rgba8()))
}

/// Composite an RGBA image over opaque white and drop the alpha channel
pub fn flatten_onto_white(image: &RgbaImage) -> RgbImage {
    let mut flattened = RgbImage::new(image.width(), image.height());
    for (target, source) in flattened.pixels_mut().zip(image.pixels()) {
        *target = over_white(*source);
    }
    flattened
}

// Standard "over" compositing against a white background
fn over_white(pixel: Rgba<u8>) -> Rgb<u8> {
    let [r, g, b, a] = pixel.0;
    if a == u8::MAX {
        return Rgb([r, g, b]);
    }

    let alpha = f32::from(a) / 255.0;
    let blend = |channel: u8| f32::from(channel).mul_add(alpha, 255.0 * (1.0 - alpha)).round() as u8;
    Rgb([blend(r), blend(g), blend(b)])
}

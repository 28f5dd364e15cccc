//! Bead-pattern chart generation from photographic images
//!
//! The pipeline normalizes a source photo onto a white backdrop, sharpens
//! region boundaries, reduces the colors with seeded k-means clustering, and
//! renders the result as a 50x50 chart of bead colors annotated with grid
//! lines and per-cell coordinates for manual crafting reference.

#![forbid(unsafe_code)]

/// Input/output operations, CLI orchestration, and error handling
pub mod io;
/// The forward-only image-to-palette transformation stages
pub mod pipeline;
/// Bead palette lookup and chart rasterization
pub mod render;

pub use io::error::{PipelineError, Result};

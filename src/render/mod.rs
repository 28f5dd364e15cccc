//! Bead palette lookup and chart rasterization
//!
//! This module contains everything downstream of the pipeline proper:
//! - The fixed decorative bead palette
//! - Built-in digit glyphs for coordinate labels
//! - Rasterization of the annotated chart figure

/// Annotated chart rasterization with grid lines and cell coordinates
pub mod chart;
/// Minimal built-in glyphs for coordinate labels
pub mod glyphs;
/// The fixed bead color assortment used for rendering
pub mod palette;

pub use palette::BeadPalette;

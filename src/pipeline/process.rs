//! End-to-end pipeline orchestration

use crate::io::configuration::{DEFAULT_COLOR_COUNT, DEFAULT_SEED};
use crate::io::error::Result;
use crate::io::export;
use crate::pipeline::{edges, normalize, quantize, resample};
use crate::render::chart;
use crate::render::palette::BeadPalette;
use std::path::Path;

/// Pipeline stages in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Decode the source and flatten transparency
    Decode,
    /// Stretch to the working resolution
    WorkingResize,
    /// Blend the edge map over the working image
    EdgeEnhance,
    /// Cluster colors down to the requested count
    Quantize,
    /// Collapse to the chart grid
    Downsample,
    /// Rasterize cells, grid lines, and labels
    Render,
    /// Write the chart to disk
    Write,
}

impl Stage {
    /// All stages in execution order
    pub const ALL: [Self; 7] = [
        Self::Decode,
        Self::WorkingResize,
        Self::EdgeEnhance,
        Self::Quantize,
        Self::Downsample,
        Self::Render,
        Self::Write,
    ];

    /// Human-readable stage name for progress display
    pub const fn label(self) -> &'static str {
        match self {
            Self::Decode => "decode",
            Self::WorkingResize => "resize",
            Self::EdgeEnhance => "edges",
            Self::Quantize => "quantize",
            Self::Downsample => "downsample",
            Self::Render => "render",
            Self::Write => "write",
        }
    }
}

/// Tunable pipeline parameters
#[derive(Debug, Clone)]
pub struct PipelineOptions {
    /// Number of clusters for color quantization
    pub color_count: usize,
    /// Seed for the clustering runs
    pub seed: u64,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            color_count: DEFAULT_COLOR_COUNT,
            seed: DEFAULT_SEED,
        }
    }
}

/// Convert the image at `input_path` into a bead chart at `output_path`
///
/// Runs the full pipeline synchronously to completion. All computation
/// happens before the single output file is written, so a failure never
/// leaves a partial chart behind. An existing file at `output_path` is
/// overwritten.
///
/// # Errors
///
/// Returns an error if the source cannot be decoded, a pipeline parameter
/// is invalid, or the chart cannot be written.
pub fn process_image(input_path: &Path, output_path: &Path, options: &PipelineOptions) -> Result<()> {
    process_image_observed(input_path, output_path, options, &mut |_| {})
}

/// Like [`process_image`], reporting each stage as it begins
///
/// The observer exists for progress display; it receives every [`Stage`]
/// in execution order.
///
/// # Errors
///
/// Identical to [`process_image`].
pub fn process_image_observed(
    input_path: &Path,
    output_path: &Path,
    options: &PipelineOptions,
    observe: &mut dyn FnMut(Stage),
) -> Result<()> {
    observe(Stage::Decode);
    let normalized = normalize::load_normalized(input_path)?;

    observe(Stage::WorkingResize);
    let working = resample::to_working_resolution(&normalized);

    observe(Stage::EdgeEnhance);
    let enhanced = edges::enhance_edges(&working);

    observe(Stage::Quantize);
    let quantized = quantize::quantize_colors(&enhanced, options.color_count, options.seed)?;

    observe(Stage::Downsample);
    let cells = resample::to_chart_resolution(&quantized);

    observe(Stage::Render);
    let palette = BeadPalette::standard();
    let grid = chart::palette_grid(&cells, &palette)?;
    let figure = chart::render_chart(&grid, &palette)?;

    observe(Stage::Write);
    export::save_chart(&figure, output_path)
}

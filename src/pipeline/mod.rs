//! The image-to-palette pipeline
//!
//! Data flows strictly forward: normalize, working resize, edge
//! enhancement, color quantization, chart downsample. Each stage is a pure
//! function of its input; orchestration lives in [`process`].

/// Edge-map blending to sharpen region boundaries before clustering
pub mod edges;
/// Image decoding with transparency flattened onto a white backdrop
pub mod normalize;
/// End-to-end pipeline orchestration
pub mod process;
/// Color reduction through seeded k-means clustering
pub mod quantize;
/// Fixed-resolution resampling between working and chart grids
pub mod resample;

pub use process::{PipelineOptions, Stage, process_image};

//! Pipeline constants and runtime configuration defaults

// Pipeline geometry
/// Working resolution the source is stretched to before edge enhancement
pub const WORKING_SIZE: u32 = 200;

/// Chart resolution in cells per side
pub const GRID_SIZE: u32 = 50;

// Quantization settings
/// Default number of clusters for color quantization
pub const DEFAULT_COLOR_COUNT: usize = 48;

// Cluster assignments are stored as bytes
/// Upper bound on the requested color count
pub const MAX_COLOR_COUNT: usize = 256;

/// Fixed seed for reproducible clustering
pub const DEFAULT_SEED: u64 = 42;

/// Number of independently seeded clustering runs; the best fit is kept
pub const KMEANS_RUNS: u64 = 10;

/// Iteration cap for a single clustering run
pub const KMEANS_MAX_ITERATIONS: usize = 300;

/// Convergence threshold for clustering in normalized RGB space
pub const KMEANS_CONVERGE: f32 = 0.0025;

/// Weight of the edge map when blending it back over the working image
pub const EDGE_BLEND_WEIGHT: f32 = 0.3;

// Chart rendering settings
// 50 cells at 120 px give a 6000 px square, 300 dpi at 20 inches
/// Rendered size of one chart cell in pixels
pub const CELL_SIZE: u32 = 120;

/// Grid line stroke width in canvas pixels
pub const GRID_LINE_THICKNESS: u32 = 2;

/// Grid line opacity over the cell fills
pub const GRID_LINE_ALPHA: f32 = 0.5;

/// Integer scale applied to the built-in label glyphs
pub const LABEL_SCALE: u32 = 3;

// Output settings
/// Suffix added to derived output filenames
pub const OUTPUT_SUFFIX: &str = "_processed";

/// Extensions accepted when scanning a directory for input images
pub const SUPPORTED_EXTENSIONS: [&str; 7] = ["png", "jpg", "jpeg", "bmp", "gif", "webp", "tiff"];

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;

//! Chart export with directory creation and overwrite semantics

use crate::io::error::{PipelineError, Result};
use image::RgbImage;
use std::path::Path;

/// Save a rendered chart to `output_path`, overwriting any existing file
///
/// Missing parent directories are created. The encoding format follows the
/// output extension.
///
/// # Errors
///
/// Returns [`PipelineError::FileSystem`] if the parent directory cannot be
/// created, or [`PipelineError::ImageExport`] if encoding or writing the
/// chart fails.
pub fn save_chart(chart: &RgbImage, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| PipelineError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }
    }

    chart
        .save(output_path)
        .map_err(|e| PipelineError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}

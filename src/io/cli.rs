//! Command-line interface for turning photos into bead-pattern charts

use crate::io::configuration::{
    DEFAULT_COLOR_COUNT, DEFAULT_SEED, OUTPUT_SUFFIX, SUPPORTED_EXTENSIONS,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::progress::ProgressManager;
use crate::pipeline::process::{
    PipelineOptions, Stage, process_image, process_image_observed,
};
use clap::Parser;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "beadgrid")]
#[command(
    author,
    version,
    about = "Convert photos into printable bead-pattern charts"
)]
/// Command-line arguments for the chart generator
pub struct Cli {
    /// Input image file or directory to process
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Output path (single-file targets only; defaults to <stem>_processed.png)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Number of colors to quantize down to
    #[arg(short, long, default_value_t = DEFAULT_COLOR_COUNT)]
    pub colors: usize,

    /// Random seed for reproducible clustering
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Process files even if output exists
    #[arg(short, long)]
    pub no_skip: bool,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Derive the default output path `<stem>_processed.png` next to the input
pub fn derive_output_path(input_path: &Path) -> PathBuf {
    let stem = input_path.file_stem().unwrap_or_default();
    let output_name = format!("{}{OUTPUT_SUFFIX}.png", stem.to_string_lossy());

    if let Some(parent) = input_path.parent() {
        parent.join(output_name)
    } else {
        PathBuf::from(output_name)
    }
}

/// Check whether a path carries a supported raster image extension
pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|extension| extension.to_str())
        .is_some_and(|extension| {
            SUPPORTED_EXTENSIONS
                .iter()
                .any(|supported| extension.eq_ignore_ascii_case(supported))
        })
}

/// Orchestrates batch processing of image files with progress tracking
pub struct FileProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Process files according to CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if target validation or file processing fails.
    pub fn process(&mut self) -> Result<()> {
        if let Some(output) = &self.cli.output {
            if self.cli.target.is_dir() {
                return Err(invalid_parameter(
                    "output",
                    &output.display(),
                    &"an explicit output path requires a single file target",
                ));
            }
        }

        let files = self.collect_files()?;

        if files.is_empty() {
            return Ok(());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        for (index, file) in files.iter().enumerate() {
            self.process_file(file, index)?;
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        if self.cli.target.is_file() {
            if is_supported_image(&self.cli.target) {
                if self.should_process_file(&self.cli.target) {
                    Ok(vec![self.cli.target.clone()])
                } else {
                    Ok(vec![])
                }
            } else {
                Err(invalid_parameter(
                    "target",
                    &self.cli.target.display(),
                    &"target file must be a supported raster image",
                ))
            }
        } else if self.cli.target.is_dir() {
            let mut files = Vec::new();
            for entry in std::fs::read_dir(&self.cli.target)? {
                let path = entry?.path();
                if path.is_file() && is_supported_image(&path) && self.should_process_file(&path) {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(invalid_parameter(
                "target",
                &self.cli.target.display(),
                &"target must be an image file or a directory",
            ))
        }
    }

    fn should_process_file(&self, input_path: &Path) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        let output_path = self
            .cli
            .output
            .clone()
            .unwrap_or_else(|| derive_output_path(input_path));
        if output_path.exists() {
            // Allow print for user feedback on skipped files
            #[allow(clippy::print_stderr)]
            if !self.cli.quiet {
                eprintln!("Skipping: {} (output exists)", input_path.display());
            }
            false
        } else {
            true
        }
    }

    fn process_file(&mut self, input_path: &Path, index: usize) -> Result<()> {
        let output_path = self
            .cli
            .output
            .clone()
            .unwrap_or_else(|| derive_output_path(input_path));

        let options = PipelineOptions {
            color_count: self.cli.colors,
            seed: self.cli.seed,
        };

        match self.progress_manager.as_mut() {
            Some(pm) => {
                pm.start_file(index, input_path, Stage::ALL.len());
                let mut completed = 0usize;
                process_image_observed(input_path, &output_path, &options, &mut |stage| {
                    completed += 1;
                    pm.update_stage(index, completed, stage.label());
                })?;
                pm.complete_file(index);
            }
            None => process_image(input_path, &output_path, &options)?,
        }

        Ok(())
    }
}

//! CLI entry point for the bead-pattern chart generator

use beadgrid::io::cli::{Cli, FileProcessor};
use clap::Parser;

fn main() -> beadgrid::Result<()> {
    let cli = Cli::parse();
    let mut processor = FileProcessor::new(cli);
    processor.process()
}

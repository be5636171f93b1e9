use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use histostretch_core::io::image_io::load_image;
use histostretch_core::pipeline::analyze;
use histostretch_core::region::RegionParams;

use super::RegionArgs;
use crate::summary::print_bounds_summary;

#[derive(Args)]
pub struct BoundsArgs {
    /// Input image file
    pub file: PathBuf,

    #[command(flatten)]
    pub region: RegionArgs,
}

/// Print the histogram geometry and stretch bounds without writing anything.
pub fn run(args: &BoundsArgs) -> Result<()> {
    let frame = load_image(&args.file)
        .with_context(|| format!("Failed to load {}", args.file.display()))?;
    let analysis = analyze(&frame, &RegionParams::from(&args.region))?;

    print_bounds_summary(&args.file, &analysis);
    Ok(())
}

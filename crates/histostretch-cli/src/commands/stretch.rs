use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Args;
use histostretch_core::pipeline::stretch_with_progress;
use histostretch_core::region::RegionParams;
use indicatif::{ProgressBar, ProgressStyle};

use super::RegionArgs;
use crate::summary::print_stretch_summary;

#[derive(Args)]
pub struct StretchArgs {
    /// Input image file
    pub file: PathBuf,

    /// Output file path (format from extension)
    pub output: PathBuf,

    #[command(flatten)]
    pub region: RegionArgs,
}

pub fn run(args: &StretchArgs) -> Result<()> {
    let params = RegionParams::from(&args.region);

    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner} {msg}")?);
    pb.enable_steady_tick(Duration::from_millis(100));

    let report = stretch_with_progress(&args.file, &args.output, &params, |stage| {
        pb.set_message(stage.to_string());
    });
    pb.finish_and_clear();

    let report = report.with_context(|| format!("Failed to stretch {}", args.file.display()))?;
    print_stretch_summary(&report);
    println!("Saved to {}", report.output.display());

    Ok(())
}

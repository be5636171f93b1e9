use std::path::Path;

use ndarray::{s, Array2};
use rayon::prelude::*;
use tracing::{info, warn};

use crate::error::Result;
use crate::filters::{calculate_bounds, rescale_to_u8, Histogram};
use crate::frame::Frame;
use crate::io::image_io::{load_image, save_image};
use crate::region::RegionParams;

use super::config::{BatchConfig, StretchJob};
use super::types::{Analysis, JobOutcome, StretchReport, StretchStage};

/// Resolve the region, sample its histogram and derive the stretch bounds.
pub fn analyze(frame: &Frame, params: &RegionParams) -> Result<Analysis> {
    let (width, height) = (frame.width(), frame.height());
    let resolved = params.resolve(width, height)?;
    let region = resolved.region;

    let view = frame
        .data
        .slice(s![region.top..region.bottom, region.left..region.right]);
    let histogram = Histogram::compute(view);
    let pixel_count = region.pixel_count() as u64;

    let bounds = calculate_bounds(
        &histogram.counts,
        pixel_count,
        histogram.bin_size(),
        histogram.hist_min(),
    );
    info!(
        %region,
        hist_min = histogram.hist_min(),
        bin_size = histogram.bin_size(),
        pixel_count,
        min_val = bounds.min_val,
        max_val = bounds.max_val,
        "Computed stretch bounds"
    );
    if bounds.min_is_sentinel() || bounds.max_is_sentinel() {
        warn!(
            min_bin = bounds.min_bin,
            max_bin = bounds.max_bin,
            "No qualifying histogram bin in at least one direction; bound extrapolated"
        );
    }

    Ok(Analysis {
        width,
        height,
        bit_depth: frame.bit_depth,
        region,
        region_source: resolved.source,
        histogram,
        pixel_count,
        bounds,
    })
}

/// Stretch an in-memory frame. The bounds come from the region; the rescale
/// covers the whole frame.
pub fn stretch_frame(frame: &Frame, params: &RegionParams) -> Result<(Array2<u8>, Analysis)> {
    let analysis = analyze(frame, params)?;
    let stretched = rescale_to_u8(frame, &analysis.bounds)?;
    Ok((stretched, analysis))
}

/// Load `input`, stretch it and write an 8-bit grayscale image to `output`.
pub fn stretch(input: &Path, output: &Path, params: &RegionParams) -> Result<StretchReport> {
    stretch_with_progress(input, output, params, |_| {})
}

/// Like [`stretch`], calling `progress` as each stage begins.
pub fn stretch_with_progress(
    input: &Path,
    output: &Path,
    params: &RegionParams,
    mut progress: impl FnMut(StretchStage),
) -> Result<StretchReport> {
    progress(StretchStage::Loading);
    let frame = load_image(input)?;
    info!(
        path = %input.display(),
        width = frame.width(),
        height = frame.height(),
        bit_depth = frame.bit_depth,
        "Loaded image"
    );

    progress(StretchStage::Analyzing);
    let analysis = analyze(&frame, params)?;

    progress(StretchStage::Rescaling);
    let stretched = rescale_to_u8(&frame, &analysis.bounds)?;

    progress(StretchStage::Writing);
    save_image(&stretched, output)?;
    info!(path = %output.display(), "Saved stretched image");

    Ok(StretchReport {
        input: input.to_path_buf(),
        output: output.to_path_buf(),
        analysis,
    })
}

pub fn run_job(job: &StretchJob) -> Result<StretchReport> {
    stretch(&job.input, &job.output, &job.region)
}

/// Run every job in parallel. A failing job is logged and recorded in its
/// outcome; the remaining jobs still run. Outcomes keep the config order.
pub fn run_batch(
    config: &BatchConfig,
    on_done: impl Fn(&JobOutcome) + Sync + Send,
) -> Vec<JobOutcome> {
    info!(jobs = config.jobs.len(), "Starting batch");
    config
        .jobs
        .par_iter()
        .map(|job| {
            let result = run_job(job);
            if let Err(ref e) = result {
                warn!(input = %job.input.display(), error = %e, "Job failed");
            }
            let outcome = JobOutcome {
                job: job.clone(),
                result,
            };
            on_done(&outcome);
            outcome
        })
        .collect()
}

#[allow(dead_code)]
mod common;

use std::sync::atomic::{AtomicUsize, Ordering};

use approx::assert_relative_eq;
use ndarray::Array2;

use histostretch_core::error::StretchError;
use histostretch_core::frame::Frame;
use histostretch_core::io::image_io::load_image;
use histostretch_core::pipeline::config::{BatchConfig, StretchJob};
use histostretch_core::pipeline::{
    analyze, run_batch, stretch, stretch_frame, stretch_with_progress, StretchStage,
};
use histostretch_core::region::{Region, RegionParams, RegionSource};

#[test]
fn test_patch_image_whole_region_bounds() {
    let frame = common::noisy_patch_frame();
    let analysis = analyze(&frame, &RegionParams::default()).unwrap();

    assert_eq!(analysis.pixel_count, 10_000);
    assert_relative_eq!(analysis.histogram.hist_min(), 50.0);
    assert_relative_eq!(analysis.bounds.min_val, 50.0);
    assert_relative_eq!(analysis.bounds.max_val, 50.0 + 255.0 * 150.0 / 256.0);
    assert!(analysis.bounds.max_val > 199.0);
}

#[test]
fn test_patch_image_whole_region_stretch() {
    let frame = common::noisy_patch_frame();
    let (out, _) = stretch_frame(&frame, &RegionParams::default()).unwrap();

    assert_eq!(out.dim(), (100, 100));
    assert_eq!(out[[0, 0]], 0);
    assert!(out[[0, 9]] <= 16, "background max {}", out[[0, 9]]);
    assert_eq!(out[[50, 50]], 255);
}

// A flat background makes its bin exceed the outlier limit, so both scans
// land on the patch bin and the window collapses.
#[test]
fn test_flat_background_collapses_to_degenerate_range() {
    let frame = common::flat_patch_frame();
    let analysis = analyze(&frame, &RegionParams::default()).unwrap();
    assert_eq!(analysis.bounds.min_bin, 255);
    assert_eq!(analysis.bounds.max_bin, 255);

    let err = stretch_frame(&frame, &RegionParams::default()).unwrap_err();
    assert!(matches!(err, StretchError::DegenerateRange(_)));
}

#[test]
fn test_sentinel_bounds_reported_in_diagnostics() {
    let data = Array2::from_shape_fn((100, 100), |(row, _)| if row < 50 { 50u8 } else { 200 });
    let frame = Frame::from_u8(data);
    let analysis = analyze(&frame, &RegionParams::default()).unwrap();

    assert!(analysis.bounds.min_is_sentinel());
    assert!(analysis.bounds.max_is_sentinel());
    assert_relative_eq!(
        analysis.bounds.min_val,
        50.0 - analysis.histogram.bin_size()
    );
    let notes = analysis.diagnostics();
    assert!(notes.iter().any(|n| n.contains("lower bound")));
    assert!(notes.iter().any(|n| n.contains("upper bound")));
    assert!(notes.iter().any(|n| n.starts_with("No histogram region given")));
}

#[test]
fn test_region_bounds_applied_to_whole_image() {
    let frame = common::noisy_patch_frame();
    let params = RegionParams::new(Some(50.0), Some(50.0), Some(30.0), false);
    let (out, analysis) = stretch_frame(&frame, &params).unwrap();

    assert_eq!(analysis.region_source, RegionSource::Explicit);
    assert_eq!(
        analysis.region,
        Region {
            left: 35,
            top: 35,
            right: 65,
            bottom: 65
        }
    );
    assert_eq!(analysis.pixel_count, 900);
    // Patch bin is saturated inside the region; bounds hug the background.
    assert_relative_eq!(analysis.bounds.min_val, 50.0);
    assert_relative_eq!(analysis.bounds.max_val, 50.0 + 15.0 * 150.0 / 256.0);

    // Pixels outside the region are rescaled too.
    assert_eq!(out[[0, 0]], 0);
    assert_eq!(out[[0, 8]], 232);
    assert_eq!(out[[0, 9]], 255);
    assert_eq!(out[[50, 50]], 255);
}

#[test]
fn test_stretch_file_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let input = common::write_gray_png(dir.path(), "in.png", &common::noisy_patch_frame());
    let output = dir.path().join("out.png");

    let report = stretch(&input, &output, &RegionParams::default()).unwrap();
    assert_eq!(report.analysis.width, 100);
    assert_eq!(report.analysis.bit_depth, 8);

    let written = load_image(&output).unwrap();
    assert_eq!(written.bit_depth, 8);
    assert_eq!(written.data[[0, 0]], 0);
    assert_eq!(written.data[[50, 50]], 255);
}

#[test]
fn test_stretch_16bit_input_writes_8bit() {
    let dir = tempfile::tempdir().unwrap();
    let data = Array2::from_shape_fn((100, 100), |(row, col)| {
        if (40..60).contains(&row) && (40..60).contains(&col) {
            60_000u16
        } else {
            1000 + ((row * 100 + col) % 10) as u16 * 1000
        }
    });
    let input = common::write_gray16_png(dir.path(), "in16.png", &data);
    let output = dir.path().join("out16.png");

    let report = stretch(&input, &output, &RegionParams::default()).unwrap();
    assert_eq!(report.analysis.bit_depth, 16);
    assert_relative_eq!(report.analysis.bounds.min_val, 1000.0);

    let written = load_image(&output).unwrap();
    assert_eq!(written.bit_depth, 8);
    assert_eq!(written.data[[0, 0]], 0);
    assert_eq!(written.data[[50, 50]], 255);
}

#[test]
fn test_stretch_proportional_region_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = common::write_gray_png(dir.path(), "in.png", &common::noisy_patch_frame());
    let output = dir.path().join("out.png");

    let params = RegionParams::new(Some(0.5), Some(0.5), Some(0.3), true);
    let report = stretch(&input, &output, &params).unwrap();
    assert_eq!(report.analysis.region.width(), 30);
    assert_eq!(report.analysis.region.left, 35);
}

#[test]
fn test_stretch_reports_stages_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let input = common::write_gray_png(dir.path(), "in.png", &common::noisy_patch_frame());
    let output = dir.path().join("out.png");

    let mut stages = Vec::new();
    stretch_with_progress(&input, &output, &RegionParams::default(), |s| stages.push(s)).unwrap();
    assert_eq!(
        stages,
        vec![
            StretchStage::Loading,
            StretchStage::Analyzing,
            StretchStage::Rescaling,
            StretchStage::Writing
        ]
    );
}

#[test]
fn test_stretch_missing_input() {
    let dir = tempfile::tempdir().unwrap();
    let err = stretch(
        &dir.path().join("missing.png"),
        &dir.path().join("out.png"),
        &RegionParams::default(),
    )
    .unwrap_err();
    assert!(matches!(err, StretchError::NotFound(_)));
    assert!(!dir.path().join("out.png").exists());
}

#[test]
fn test_batch_continues_after_failure() {
    let dir = tempfile::tempdir().unwrap();
    let good = common::write_gray_png(dir.path(), "good.png", &common::noisy_patch_frame());
    let flat = common::write_gray_png(dir.path(), "flat.png", &common::flat_patch_frame());

    let config = BatchConfig {
        jobs: vec![
            StretchJob {
                input: dir.path().join("missing.png"),
                output: dir.path().join("missing_out.png"),
                region: RegionParams::default(),
            },
            StretchJob {
                input: good,
                output: dir.path().join("good_out.png"),
                region: RegionParams::default(),
            },
            StretchJob {
                input: flat,
                output: dir.path().join("flat_out.png"),
                region: RegionParams::default(),
            },
        ],
    };

    let done = AtomicUsize::new(0);
    let outcomes = run_batch(&config, |_| {
        done.fetch_add(1, Ordering::SeqCst);
    });

    assert_eq!(done.load(Ordering::SeqCst), 3);
    assert_eq!(outcomes.len(), 3);
    assert!(matches!(outcomes[0].result, Err(StretchError::NotFound(_))));
    assert!(outcomes[1].result.is_ok());
    assert!(matches!(
        outcomes[2].result,
        Err(StretchError::DegenerateRange(_))
    ));
    assert_eq!(outcomes[1].job.output, dir.path().join("good_out.png"));
    assert!(dir.path().join("good_out.png").exists());
}

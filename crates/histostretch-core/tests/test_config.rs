use std::path::PathBuf;

use histostretch_core::pipeline::config::{BatchConfig, StretchJob};
use histostretch_core::pipeline::StretchStage;
use histostretch_core::region::RegionParams;

#[test]
fn test_parse_batch_config() {
    let toml_str = r#"
[[job]]
input = "a.tiff"
output = "a.png"

[[job]]
input = "b.jpg"
output = "b_out.jpg"

[job.region]
center_x = 0.4
center_y = 0.5
diameter = 0.2
proportional = true
"#;
    let config: BatchConfig = toml::from_str(toml_str).unwrap();
    assert_eq!(config.jobs.len(), 2);
    assert_eq!(config.jobs[0].input, PathBuf::from("a.tiff"));
    assert_eq!(config.jobs[0].region, RegionParams::default());
    assert_eq!(
        config.jobs[1].region,
        RegionParams::new(Some(0.4), Some(0.5), Some(0.2), true)
    );
}

#[test]
fn test_partial_region_in_config() {
    let toml_str = r#"
[[job]]
input = "a.png"
output = "b.png"
region = { center_x = 120, center_y = 80 }
"#;
    let config: BatchConfig = toml::from_str(toml_str).unwrap();
    let region = &config.jobs[0].region;
    assert_eq!(region.center_x, Some(120.0));
    assert_eq!(region.diameter, None);
    assert!(!region.proportional);
}

#[test]
fn test_empty_config_has_no_jobs() {
    let config: BatchConfig = toml::from_str("").unwrap();
    assert!(config.jobs.is_empty());
}

#[test]
fn test_sample_config_roundtrip() {
    let sample = BatchConfig::sample();
    let toml_str = toml::to_string_pretty(&sample).unwrap();
    assert!(toml_str.contains("[[job]]"));
    let parsed: BatchConfig = toml::from_str(&toml_str).unwrap();
    assert_eq!(parsed, sample);
}

#[test]
fn test_job_requires_paths() {
    let result: Result<StretchJob, _> = toml::from_str(r#"input = "a.png""#);
    assert!(result.is_err());
}

#[test]
fn test_stretch_stage_display() {
    assert_eq!(StretchStage::Loading.to_string(), "Loading image");
    assert_eq!(StretchStage::Analyzing.to_string(), "Computing bounds");
    assert_eq!(StretchStage::Rescaling.to_string(), "Rescaling");
    assert_eq!(StretchStage::Writing.to_string(), "Writing output");
}

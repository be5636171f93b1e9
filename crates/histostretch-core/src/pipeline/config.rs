use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::region::RegionParams;

/// One image to stretch.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StretchJob {
    pub input: PathBuf,
    pub output: PathBuf,
    #[serde(default)]
    pub region: RegionParams,
}

/// A list of independent jobs, read from TOML as `[[job]]` tables.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BatchConfig {
    #[serde(default, rename = "job")]
    pub jobs: Vec<StretchJob>,
}

impl BatchConfig {
    /// A sample config with one whole-image job and one proportional-region job.
    pub fn sample() -> Self {
        Self {
            jobs: vec![
                StretchJob {
                    input: PathBuf::from("input.tiff"),
                    output: PathBuf::from("stretched.png"),
                    region: RegionParams::default(),
                },
                StretchJob {
                    input: PathBuf::from("scan.jpg"),
                    output: PathBuf::from("scan_stretched.jpg"),
                    region: RegionParams::new(Some(0.4), Some(0.5), Some(0.2), true),
                },
            ],
        }
    }
}

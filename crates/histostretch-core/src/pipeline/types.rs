use std::path::PathBuf;

use crate::error::Result;
use crate::filters::{Bounds, Histogram};
use crate::region::{Region, RegionSource};

use super::config::StretchJob;

/// Processing stage of a single stretch, used for progress reporting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StretchStage {
    Loading,
    Analyzing,
    Rescaling,
    Writing,
}

impl std::fmt::Display for StretchStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Loading => write!(f, "Loading image"),
            Self::Analyzing => write!(f, "Computing bounds"),
            Self::Rescaling => write!(f, "Rescaling"),
            Self::Writing => write!(f, "Writing output"),
        }
    }
}

/// Everything derived from a frame before the rescale.
#[derive(Clone, Debug)]
pub struct Analysis {
    pub width: usize,
    pub height: usize,
    pub bit_depth: u8,
    pub region: Region,
    pub region_source: RegionSource,
    pub histogram: Histogram,
    pub pixel_count: u64,
    pub bounds: Bounds,
}

impl Analysis {
    /// Notes worth surfacing to the user: region fallbacks and sentinel bounds.
    pub fn diagnostics(&self) -> Vec<String> {
        let mut notes = Vec::new();
        if let Some(note) = self.region_source.diagnostic() {
            notes.push(note);
        }
        if self.bounds.min_is_sentinel() {
            notes.push(format!(
                "No histogram bin qualified for the lower bound; extrapolated to {}",
                self.bounds.min_val
            ));
        }
        if self.bounds.max_is_sentinel() {
            notes.push(format!(
                "No histogram bin qualified for the upper bound; extrapolated to {}",
                self.bounds.max_val
            ));
        }
        notes
    }
}

/// Result of a completed stretch.
#[derive(Clone, Debug)]
pub struct StretchReport {
    pub input: PathBuf,
    pub output: PathBuf,
    pub analysis: Analysis,
}

/// Outcome of one job in a batch.
#[derive(Debug)]
pub struct JobOutcome {
    pub job: StretchJob,
    pub result: Result<StretchReport>,
}

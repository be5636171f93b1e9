use crate::consts::{NOISE_FLOOR_DIVISOR, OUTLIER_DIVISOR};

/// Bin index recorded when no bin passes the filters in a scan direction.
pub const SENTINEL_BIN: i64 = -1;

/// Linear stretch window derived from a histogram.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub min_val: f64,
    pub max_val: f64,
    /// Bin that produced `min_val`, or `SENTINEL_BIN`.
    pub min_bin: i64,
    /// Bin that produced `max_val`, or `SENTINEL_BIN`.
    pub max_bin: i64,
}

impl Bounds {
    /// `min_val` was extrapolated one bin below the histogram range.
    pub fn min_is_sentinel(&self) -> bool {
        self.min_bin == SENTINEL_BIN
    }

    /// `max_val` was extrapolated one bin below the histogram range.
    pub fn max_is_sentinel(&self) -> bool {
        self.max_bin == SENTINEL_BIN
    }

    /// The window has zero width and cannot drive a rescale.
    pub fn is_degenerate(&self) -> bool {
        self.min_val == self.max_val
    }
}

/// Find the stretch window from a histogram.
///
/// Bins holding more than `pixel_count / 10` samples are skipped as
/// saturated; the first bin from each end holding more than
/// `pixel_count / 5000` samples fixes that end. Bin index `i` maps to
/// `hist_min + i * bin_size`.
///
/// When no bin qualifies the index stays at `SENTINEL_BIN`, giving
/// `hist_min - bin_size` for that end.
pub fn calculate_bounds(histogram: &[u64], pixel_count: u64, bin_size: f64, hist_min: f64) -> Bounds {
    let limit = pixel_count / OUTLIER_DIVISOR;
    let threshold = pixel_count / NOISE_FLOOR_DIVISOR;
    let qualifies = |count: &u64| *count <= limit && *count > threshold;

    let min_bin = histogram
        .iter()
        .position(qualifies)
        .map_or(SENTINEL_BIN, |i| i as i64);
    let max_bin = histogram
        .iter()
        .rposition(qualifies)
        .map_or(SENTINEL_BIN, |i| i as i64);

    Bounds {
        min_val: hist_min + min_bin as f64 * bin_size,
        max_val: hist_min + max_bin as f64 * bin_size,
        min_bin,
        max_bin,
    }
}

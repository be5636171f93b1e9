/// Number of histogram bins used when sampling the region.
pub const HISTOGRAM_BINS: usize = 256;

/// Bins holding more than `pixel_count / OUTLIER_DIVISOR` samples are skipped
/// as saturated background.
pub const OUTLIER_DIVISOR: u64 = 10;

/// Bins must hold more than `pixel_count / NOISE_FLOOR_DIVISOR` samples to
/// count as signal.
pub const NOISE_FLOOR_DIVISOR: u64 = 5000;

/// Upper end of the 8-bit output range.
pub const OUTPUT_MAX: f64 = 255.0;

/// Minimum pixel count (h*w) to use row-level Rayon parallelism.
pub const PARALLEL_PIXEL_THRESHOLD: usize = 65_536;

use ndarray::ArrayView2;

use crate::consts::HISTOGRAM_BINS;

/// Equal-width intensity histogram over the observed range of a region.
///
/// Binning matches `numpy.histogram(a, bins=256)`: edges are spaced uniformly
/// across `[min, max]`, every bin is half-open except the last, which also
/// holds `max`. A uniform region is widened to `[v - 0.5, v + 0.5]` and an
/// empty one spans `[0, 1]`.
#[derive(Clone, Debug, PartialEq)]
pub struct Histogram {
    /// Sample count per bin (`HISTOGRAM_BINS` entries).
    pub counts: Vec<u64>,
    /// Bin boundaries (`HISTOGRAM_BINS + 1` entries, increasing).
    pub edges: Vec<f64>,
}

impl Histogram {
    pub fn compute(region: ArrayView2<u16>) -> Self {
        let (first, last) = match value_range(region) {
            Some((lo, hi)) if lo == hi => (lo as f64 - 0.5, hi as f64 + 0.5),
            Some((lo, hi)) => (lo as f64, hi as f64),
            None => (0.0, 1.0),
        };

        let edges = linspace(first, last, HISTOGRAM_BINS + 1);
        let mut counts = vec![0u64; HISTOGRAM_BINS];
        let span = last - first;

        for &v in region.iter() {
            counts[bin_index(v as f64, first, span, &edges)] += 1;
        }

        Self { counts, edges }
    }

    /// Lower edge of the first bin.
    pub fn hist_min(&self) -> f64 {
        self.edges[0]
    }

    /// Upper edge of the last bin.
    pub fn hist_max(&self) -> f64 {
        self.edges[self.edges.len() - 1]
    }

    pub fn bin_size(&self) -> f64 {
        self.edges[1] - self.edges[0]
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }
}

fn value_range(region: ArrayView2<u16>) -> Option<(u16, u16)> {
    region.iter().fold(None, |acc, &v| match acc {
        None => Some((v, v)),
        Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
    })
}

fn linspace(start: f64, stop: f64, num: usize) -> Vec<f64> {
    let step = (stop - start) / (num - 1) as f64;
    let mut edges: Vec<f64> = (0..num).map(|i| i as f64 * step + start).collect();
    edges[num - 1] = stop;
    edges
}

fn bin_index(x: f64, first: f64, span: f64, edges: &[f64]) -> usize {
    let last_bin = HISTOGRAM_BINS - 1;
    let mut idx = (((x - first) / span * HISTOGRAM_BINS as f64) as usize).min(last_bin);

    // Rounding in the scaled index can land one bin off the true edge.
    if x < edges[idx] {
        idx = idx.saturating_sub(1);
    } else if idx != last_bin && x >= edges[idx + 1] {
        idx += 1;
    }
    idx
}

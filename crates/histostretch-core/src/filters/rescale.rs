use ndarray::{Array2, Zip};

use crate::consts::{OUTPUT_MAX, PARALLEL_PIXEL_THRESHOLD};
use crate::error::{Result, StretchError};
use crate::filters::bounds::Bounds;
use crate::frame::Frame;

/// Linear stretch: maps [min_val, max_val] → [0, 255], rounding and clamping.
///
/// Applies to every pixel of `frame`, not only the sampled region.
pub fn rescale_to_u8(frame: &Frame, bounds: &Bounds) -> Result<Array2<u8>> {
    if bounds.is_degenerate() {
        return Err(StretchError::DegenerateRange(bounds.min_val));
    }

    let min_val = bounds.min_val;
    let scale = OUTPUT_MAX / (bounds.max_val - min_val);
    let map = |v: u16| ((v as f64 - min_val) * scale).round().clamp(0.0, OUTPUT_MAX) as u8;

    let mut out = Array2::<u8>::zeros(frame.data.raw_dim());
    let zip = Zip::from(&mut out).and(&frame.data);
    if frame.pixel_count() >= PARALLEL_PIXEL_THRESHOLD {
        zip.par_for_each(|o, &v| *o = map(v));
    } else {
        zip.for_each(|o, &v| *o = map(v));
    }

    Ok(out)
}

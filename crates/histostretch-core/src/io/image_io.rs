use std::io::ErrorKind;
use std::path::Path;

use image::{DynamicImage, GrayImage, ImageBuffer, ImageError, ImageFormat, ImageReader, Luma};
use ndarray::Array2;
use tracing::debug;

use crate::error::{Result, StretchError};
use crate::frame::Frame;

/// Load an image file as a single-channel intensity frame.
///
/// 8-bit and 16-bit grayscale are kept at their native depth; every other
/// color type is converted to 8-bit luma.
pub fn load_image(path: &Path) -> Result<Frame> {
    let reader = ImageReader::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => StretchError::NotFound(path.to_path_buf()),
        _ => StretchError::Io(e),
    })?;
    let reader = reader.with_guessed_format()?;
    let img = reader.decode().map_err(|e| decode_error(path, e))?;
    debug!(path = %path.display(), color = ?img.color(), "Decoded image");
    to_intensity(img)
}

/// Normalize a decoded image to single-channel intensity.
pub fn to_intensity(img: DynamicImage) -> Result<Frame> {
    let frame = match img {
        DynamicImage::ImageLuma8(gray) => luma_to_frame(gray, 8)?,
        DynamicImage::ImageLuma16(gray) => luma_to_frame(gray, 16)?,
        other => {
            debug!(color = ?other.color(), "Converting to 8-bit luma");
            luma_to_frame(other.to_luma8(), 8)?
        }
    };

    if frame.pixel_count() == 0 {
        return Err(StretchError::Conversion(format!(
            "image has no pixels ({}x{})",
            frame.width(),
            frame.height()
        )));
    }
    Ok(frame)
}

fn luma_to_frame<P>(gray: ImageBuffer<Luma<P>, Vec<P>>, bit_depth: u8) -> Result<Frame>
where
    P: image::Primitive + Into<u16>,
{
    let (w, h) = gray.dimensions();
    let samples: Vec<u16> = gray.into_raw().into_iter().map(Into::into).collect();
    let data = Array2::from_shape_vec((h as usize, w as usize), samples)
        .map_err(|e| StretchError::Conversion(e.to_string()))?;
    Ok(Frame::new(data, bit_depth))
}

fn decode_error(path: &Path, err: ImageError) -> StretchError {
    match err {
        ImageError::IoError(e) => StretchError::Io(e),
        other => StretchError::UnsupportedFormat {
            path: path.to_path_buf(),
            reason: other.to_string(),
        },
    }
}

/// Save 8-bit samples as a grayscale image, choosing format from file extension.
pub fn save_image(data: &Array2<u8>, path: &Path) -> Result<()> {
    let write_error = |reason: String| StretchError::Write {
        path: path.to_path_buf(),
        reason,
    };

    let format = ImageFormat::from_path(path).map_err(|e| write_error(e.to_string()))?;
    let (h, w) = data.dim();
    let pixels: Vec<u8> = data.iter().copied().collect();
    let img = GrayImage::from_raw(w as u32, h as u32, pixels)
        .ok_or_else(|| write_error("buffer size does not match dimensions".into()))?;

    img.save_with_format(path, format)
        .map_err(|e| write_error(e.to_string()))?;
    debug!(path = %path.display(), ?format, "Wrote stretched image");
    Ok(())
}

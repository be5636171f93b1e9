use std::path::{Path, PathBuf};

use image::{GrayImage, ImageBuffer, Luma};
use ndarray::Array2;

use histostretch_core::frame::Frame;

/// 100x100 8-bit frame: background spread over 50..=59, centered 20x20 patch of 200.
///
/// Each background level holds 960 pixels, under the 1/10 outlier limit.
pub fn noisy_patch_frame() -> Frame {
    let data = Array2::from_shape_fn((100, 100), |(row, col)| {
        if (40..60).contains(&row) && (40..60).contains(&col) {
            200u8
        } else {
            50 + ((row * 100 + col) % 10) as u8
        }
    });
    Frame::from_u8(data)
}

/// 100x100 8-bit frame: flat background of 50, centered 20x20 patch of 200.
pub fn flat_patch_frame() -> Frame {
    let data = Array2::from_shape_fn((100, 100), |(row, col)| {
        if (40..60).contains(&row) && (40..60).contains(&col) {
            200u8
        } else {
            50
        }
    });
    Frame::from_u8(data)
}

/// Write an 8-bit frame as a grayscale PNG.
pub fn write_gray_png(dir: &Path, name: &str, frame: &Frame) -> PathBuf {
    let path = dir.join(name);
    let (h, w) = frame.data.dim();
    let img = GrayImage::from_fn(w as u32, h as u32, |x, y| {
        Luma([frame.data[[y as usize, x as usize]] as u8])
    });
    img.save(&path).unwrap();
    path
}

/// Write a 16-bit grayscale PNG.
pub fn write_gray16_png(dir: &Path, name: &str, data: &Array2<u16>) -> PathBuf {
    let path = dir.join(name);
    let (h, w) = data.dim();
    let img: ImageBuffer<Luma<u16>, Vec<u16>> =
        ImageBuffer::from_fn(w as u32, h as u32, |x, y| Luma([data[[y as usize, x as usize]]]));
    img.save(&path).unwrap();
    path
}

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StretchError {
    #[error("Image not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Unsupported image format for {}: {reason}", .path.display())]
    UnsupportedFormat { path: PathBuf, reason: String },

    #[error("Cannot convert image to single-channel intensity: {0}")]
    Conversion(String),

    #[error("Failed to write {}: {reason}", .path.display())]
    Write { path: PathBuf, reason: String },

    #[error("Degenerate stretch range: min_val == max_val == {0}")]
    DegenerateRange(f64),

    #[error("Empty histogram region: ({left},{top})-({right},{bottom})")]
    EmptyRegion {
        left: i64,
        top: i64,
        right: i64,
        bottom: i64,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, StretchError>;

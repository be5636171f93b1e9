use ndarray::Array2;

/// A single-channel intensity image.
/// Samples keep their source scale: [0, 255] for 8-bit, [0, 65535] for 16-bit.
#[derive(Clone, Debug)]
pub struct Frame {
    /// Pixel data, row-major, shape = (height, width)
    pub data: Array2<u16>,
    /// Bit depth of the decoded samples (8 or 16)
    pub bit_depth: u8,
}

impl Frame {
    pub fn new(data: Array2<u16>, bit_depth: u8) -> Self {
        Self { data, bit_depth }
    }

    /// Build an 8-bit frame from raw bytes.
    pub fn from_u8(data: Array2<u8>) -> Self {
        Self::new(data.mapv(u16::from), 8)
    }

    pub fn width(&self) -> usize {
        self.data.ncols()
    }

    pub fn height(&self) -> usize {
        self.data.nrows()
    }

    pub fn pixel_count(&self) -> usize {
        self.data.len()
    }
}

pub mod bounds;
pub mod histogram;
pub mod rescale;

pub use bounds::{calculate_bounds, Bounds, SENTINEL_BIN};
pub use histogram::Histogram;
pub use rescale::rescale_to_u8;

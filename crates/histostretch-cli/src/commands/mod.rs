pub mod batch;
pub mod bounds;
pub mod config;
pub mod stretch;

use clap::Args;
use histostretch_core::region::RegionParams;

/// Histogram region options shared by `stretch` and `bounds`.
#[derive(Args, Clone, Debug)]
pub struct RegionArgs {
    /// Region center X (pixels, or fraction of width with --proportional)
    #[arg(long, short = 'x')]
    pub center_x: Option<f64>,

    /// Region center Y (pixels, or fraction of height with --proportional)
    #[arg(long, short = 'y')]
    pub center_y: Option<f64>,

    /// Region diameter (pixels, or fraction of width with --proportional)
    #[arg(long, short = 'd')]
    pub diameter: Option<f64>,

    /// Interpret center and diameter as proportions of the image size
    #[arg(long, short = 'p')]
    pub proportional: bool,
}

impl From<&RegionArgs> for RegionParams {
    fn from(args: &RegionArgs) -> Self {
        RegionParams::new(
            args.center_x,
            args.center_y,
            args.diameter,
            args.proportional,
        )
    }
}

//! Histogram sampling region.
//!
//! A region is given as a center point and a diameter, either in pixels or as
//! proportions of the image size. When any of the three is missing (or zero)
//! the whole image is sampled instead.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{Result, StretchError};

/// Caller-supplied region parameters.
///
/// With `proportional` set, `center_x` and `diameter` are fractions of the
/// image width and `center_y` a fraction of its height.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RegionParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub center_x: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub center_y: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diameter: Option<f64>,
    #[serde(default)]
    pub proportional: bool,
}

/// One of the three region parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RegionParam {
    CenterX,
    CenterY,
    Diameter,
}

impl fmt::Display for RegionParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CenterX => write!(f, "Region center X"),
            Self::CenterY => write!(f, "Region center Y"),
            Self::Diameter => write!(f, "Region diameter"),
        }
    }
}

/// Axis-aligned rectangle in pixel coordinates; `right` and `bottom` are exclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Region {
    pub left: usize,
    pub top: usize,
    pub right: usize,
    pub bottom: usize,
}

impl Region {
    pub fn whole(width: usize, height: usize) -> Self {
        Self {
            left: 0,
            top: 0,
            right: width,
            bottom: height,
        }
    }

    pub fn width(&self) -> usize {
        self.right - self.left
    }

    pub fn height(&self) -> usize {
        self.bottom - self.top
    }

    pub fn pixel_count(&self) -> usize {
        self.width() * self.height()
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({},{})-({},{}) {}x{}",
            self.left,
            self.top,
            self.right,
            self.bottom,
            self.width(),
            self.height()
        )
    }
}

/// How the sampled region was chosen.
#[derive(Clone, Debug, PartialEq)]
pub enum RegionSource {
    /// Center and diameter were all given.
    Explicit,
    /// Fell back to the whole image; lists the parameters that were absent or zero.
    WholeImage { missing: Vec<RegionParam> },
}

impl RegionSource {
    /// User-facing note about a fallback to the whole image, if any.
    pub fn diagnostic(&self) -> Option<String> {
        match self {
            Self::Explicit => None,
            Self::WholeImage { missing } if missing.len() == 3 => {
                Some("No histogram region given; using the whole image".to_string())
            }
            Self::WholeImage { missing } => {
                let names: Vec<String> = missing.iter().map(ToString::to_string).collect();
                Some(format!(
                    "{} not given; using the whole image",
                    names.join(", ")
                ))
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedRegion {
    pub region: Region,
    pub source: RegionSource,
}

impl RegionParams {
    pub fn new(
        center_x: Option<f64>,
        center_y: Option<f64>,
        diameter: Option<f64>,
        proportional: bool,
    ) -> Self {
        Self {
            center_x,
            center_y,
            diameter,
            proportional,
        }
    }

    /// Convert proportional parameters to whole pixels (truncating).
    /// Absolute parameters are returned unchanged.
    pub fn to_pixels(&self, width: usize, height: usize) -> RegionParams {
        if !self.proportional {
            return self.clone();
        }
        let scale = |v: Option<f64>, extent: usize| v.map(|p| (p * extent as f64).trunc());
        RegionParams {
            center_x: scale(self.center_x, width),
            center_y: scale(self.center_y, height),
            diameter: scale(self.diameter, width),
            proportional: false,
        }
    }

    /// Parameters that are absent or zero. A zero counts as not given.
    pub fn missing(&self) -> Vec<RegionParam> {
        [
            (RegionParam::CenterX, self.center_x),
            (RegionParam::CenterY, self.center_y),
            (RegionParam::Diameter, self.diameter),
        ]
        .into_iter()
        .filter(|(_, v)| given(*v).is_none())
        .map(|(p, _)| p)
        .collect()
    }

    /// Resolve to a rectangle clamped to a `width` x `height` image.
    pub fn resolve(&self, width: usize, height: usize) -> Result<ResolvedRegion> {
        let px = self.to_pixels(width, height);

        let (Some(cx), Some(cy), Some(diameter)) =
            (given(px.center_x), given(px.center_y), given(px.diameter))
        else {
            let source = RegionSource::WholeImage {
                missing: px.missing(),
            };
            if let Some(note) = source.diagnostic() {
                warn!("{note}");
            }
            return Ok(ResolvedRegion {
                region: Region::whole(width, height),
                source,
            });
        };

        let half = (diameter / 2.0).floor();
        let left = (cx - half).max(0.0).round() as i64;
        let top = (cy - half).max(0.0).round() as i64;
        let right = (cx + half).min(width as f64).round() as i64;
        let bottom = (cy + half).min(height as f64).round() as i64;

        if right <= left || bottom <= top {
            return Err(StretchError::EmptyRegion {
                left,
                top,
                right,
                bottom,
            });
        }

        let region = Region {
            left: left as usize,
            top: top as usize,
            right: right as usize,
            bottom: bottom as usize,
        };
        debug!(%region, "Resolved histogram region");

        Ok(ResolvedRegion {
            region,
            source: RegionSource::Explicit,
        })
    }
}

fn given(v: Option<f64>) -> Option<f64> {
    v.filter(|v| *v != 0.0)
}

//! Off-nadir pointing and sensor footprints
//!
//! Both calculators work in the same local frame: the nadir vector from the
//! satellite to its sub-point, the along-track plane spanned by nadir and velocity,
//! and the cross-track plane perpendicular to it through nadir.

pub mod footprint;
pub mod off_nadir;

pub use footprint::{Corner, FootprintCalculator, FootprintPolygon};
pub use off_nadir::OffNadirCalculator;

use glam::DVec3;
use serde::Serialize;

use crate::error::{Error, Result};
use crate::orbital::EarthFixedState;

/// Signed pointing offset from nadir, degrees.
///
/// `along` is measured in the along-track plane, `across` in the cross-track plane.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct OffNadir {
    pub along: f64,
    pub across: f64,
}

impl OffNadir {
    pub const fn new(along: f64, across: f64) -> Self {
        Self { along, across }
    }
}

/// Full angular width of the sensor, degrees. `x` cross-track, `y` along-track.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FieldOfView {
    x: f64,
    y: f64,
}

impl FieldOfView {
    /// Zero is allowed and collapses the footprint onto the boresight point.
    pub fn new(x: f64, y: f64) -> Result<Self> {
        for (axis, value) in [("x", x), ("y", y)] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(Error::Validation(format!(
                    "field of view {} must be a non-negative angle, got {:?}",
                    axis, value
                )));
            }
        }
        Ok(Self { x, y })
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }
}

impl Default for FieldOfView {
    fn default() -> Self {
        Self { x: 2.0, y: 2.0 }
    }
}

/// Nadir vector and plane normals at one satellite state
#[derive(Debug, Clone, Copy)]
pub(crate) struct PointingFrame {
    pub origin: DVec3,
    pub nadir: DVec3,
    pub along_track_normal: DVec3,
    pub cross_track_normal: DVec3,
}

impl PointingFrame {
    pub fn new(state: &EarthFixedState, nadir_location: DVec3) -> Self {
        let nadir = nadir_location - state.position;
        let along_track_normal = nadir.cross(state.velocity);
        let cross_track_normal = along_track_normal.cross(nadir);
        Self {
            origin: state.position,
            nadir,
            along_track_normal,
            cross_track_normal,
        }
    }
}

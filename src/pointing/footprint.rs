//! Sensor footprint on the ellipsoid
//!
//! Each corner of the field of view is cast as a ray from the satellite and
//! intersected with the reference ellipsoid.

use glam::DVec3;
use serde::Serialize;
use tracing::debug;

use super::{FieldOfView, OffNadir, PointingFrame};
use crate::core::algebra::{rotate, unit_vector};
use crate::core::coordinates::{EllipsoidGeodesy, GeoRing, GeographicPoint};
use crate::error::{Error, Result};
use crate::orbital::EarthFixedState;

/// Corner of the field of view, relative to the direction of flight
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Corner {
    FrontRight,
    FrontLeft,
    RearLeft,
    RearRight,
}

impl Corner {
    /// Ring order
    pub const ALL: [Corner; 4] = [
        Corner::FrontRight,
        Corner::FrontLeft,
        Corner::RearLeft,
        Corner::RearRight,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Corner::FrontRight => "front-right",
            Corner::FrontLeft => "front-left",
            Corner::RearLeft => "rear-left",
            Corner::RearRight => "rear-right",
        }
    }

    /// Rotations (degrees) about the along-track and cross-track normals
    fn angles(self, off_nadir: &OffNadir, fov: &FieldOfView) -> (f64, f64) {
        let half_along = fov.y() / 2.0;
        let half_across = fov.x() / 2.0;
        let along = match self {
            Corner::FrontRight | Corner::FrontLeft => off_nadir.along + half_along,
            Corner::RearLeft | Corner::RearRight => off_nadir.along - half_along,
        };
        let across = match self {
            Corner::FrontRight | Corner::RearRight => -off_nadir.across - half_across,
            Corner::FrontLeft | Corner::RearLeft => -off_nadir.across + half_across,
        };
        (along, across)
    }
}

/// Closed footprint ring: front-right, front-left, rear-left, rear-right, front-right
///
/// Vertex altitudes are the residual height of each ray hit, zero up to rounding.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FootprintPolygon {
    ring: [GeographicPoint; 5],
}

impl FootprintPolygon {
    fn from_corners(corners: [GeographicPoint; 4]) -> Self {
        let [fr, fl, rl, rr] = corners;
        Self {
            ring: [fr, fl, rl, rr, fr],
        }
    }

    pub fn corner(&self, corner: Corner) -> GeographicPoint {
        match corner {
            Corner::FrontRight => self.ring[0],
            Corner::FrontLeft => self.ring[1],
            Corner::RearLeft => self.ring[2],
            Corner::RearRight => self.ring[3],
        }
    }

    pub fn ring(&self) -> &[GeographicPoint; 5] {
        &self.ring
    }
}

impl GeoRing for FootprintPolygon {
    type Vertex = GeographicPoint;

    fn vertices(&self) -> &[GeographicPoint] {
        &self.ring
    }
}

/// Projects a field of view onto the ellipsoid
pub struct FootprintCalculator;

impl FootprintCalculator {
    /// Footprint of `fov` pointed at `off_nadir`.
    ///
    /// Fails with [`Error::Computation`] when a corner ray misses the ellipsoid,
    /// e.g. when the field of view reaches past the limb.
    pub fn footprint<G>(
        geodesy: &G,
        state: &EarthFixedState,
        nadir_location: DVec3,
        off_nadir: &OffNadir,
        fov: &FieldOfView,
    ) -> Result<FootprintPolygon>
    where
        G: EllipsoidGeodesy + ?Sized,
    {
        let frame = PointingFrame::new(state, nadir_location);

        let mut corners = [GeographicPoint::new(0.0, 0.0, 0.0); 4];
        for (slot, corner) in corners.iter_mut().zip(Corner::ALL) {
            *slot = Self::cast_corner(geodesy, &frame, corner, off_nadir, fov)?;
        }

        Ok(FootprintPolygon::from_corners(corners))
    }

    fn cast_corner<G>(
        geodesy: &G,
        frame: &PointingFrame,
        corner: Corner,
        off_nadir: &OffNadir,
        fov: &FieldOfView,
    ) -> Result<GeographicPoint>
    where
        G: EllipsoidGeodesy + ?Sized,
    {
        let (along_deg, across_deg) = corner.angles(off_nadir, fov);
        let direction = rotate(
            rotate(frame.nadir, frame.along_track_normal, along_deg.to_radians()),
            frame.cross_track_normal,
            across_deg.to_radians(),
        );

        let hit = geodesy
            .ray_ellipsoid_intersection(frame.origin, unit_vector(direction))
            .ok_or_else(|| {
                Error::Computation(format!(
                    "no ellipsoid intersection for corner {}",
                    corner.name()
                ))
            })?;

        let p = geodesy.earth_fixed_to_geographic(hit);
        debug!(
            corner = corner.name(),
            along_deg,
            across_deg,
            lon = p.longitude,
            lat = p.latitude,
            "footprint corner"
        );
        Ok(p)
    }
}

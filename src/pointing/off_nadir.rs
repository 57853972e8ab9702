//! Off-nadir angles toward a ground target

use glam::DVec3;

use super::{OffNadir, PointingFrame};
use crate::core::algebra::{project_vector_onto_plane, vector_angle_signed};
use crate::core::coordinates::{EllipsoidGeodesy, GeographicPoint};
use crate::orbital::EarthFixedState;

/// Converts a ground target and a satellite state into along/cross-track angles
pub struct OffNadirCalculator;

impl OffNadirCalculator {
    /// Signed along- and cross-track angles (degrees) from nadir to `target`.
    ///
    /// `nadir_location` is the Earth-fixed sub-point on the ellipsoid surface.
    pub fn off_nadir<G>(
        geodesy: &G,
        state: &EarthFixedState,
        nadir_location: DVec3,
        target: &GeographicPoint,
    ) -> OffNadir
    where
        G: EllipsoidGeodesy + ?Sized,
    {
        let frame = PointingFrame::new(state, nadir_location);
        let target_position = geodesy.geographic_to_earth_fixed(target);
        let target_vec = target_position - frame.origin;

        let target_along = project_vector_onto_plane(target_vec, frame.along_track_normal);
        let target_across = project_vector_onto_plane(target_vec, frame.cross_track_normal);

        OffNadir {
            along: vector_angle_signed(frame.nadir, target_along, frame.along_track_normal)
                .to_degrees(),
            across: vector_angle_signed(frame.nadir, target_across, frame.cross_track_normal)
                .to_degrees(),
        }
    }
}

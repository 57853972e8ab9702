//! Shared fixtures for integration tests

#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use glam::DVec3;

use offnadir::orbital::{EarthFixedState, OrbitalStateAdapter};
use offnadir::{EllipsoidGeodesy, Error, GeographicPoint, Result, Wgs84};

/// Sub-point of the polar test orbit at 2024-04-19T12:00:00Z
pub const SUBPOINT: GeographicPoint =
    GeographicPoint::new(152.6226382884999, 78.18538506762289, 557_934.9901695348);

pub const REFERENCE_RING: [(f64, f64); 5] = [
    (127.7379246591503, 76.95181009374622),
    (129.391022866435, 77.1132119968597),
    (128.95920974658245, 77.3478604621005),
    (127.26201922293443, 77.19358515346873),
    (127.7379246591503, 76.95181009374622),
];

pub fn reference_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 4, 19, 12, 0, 0).unwrap()
}

/// Fixed state at [`SUBPOINT`], heading south and slightly west.
///
/// The velocity is a plausible stand-in, not the propagated one, so geometry driven
/// by it is only close to the reference scene.
pub fn reference_state() -> EarthFixedState {
    let (lon, lat) = (
        SUBPOINT.longitude.to_radians(),
        SUBPOINT.latitude.to_radians(),
    );
    let north = DVec3::new(-lat.sin() * lon.cos(), -lat.sin() * lon.sin(), lat.cos());
    let east = DVec3::new(-lon.sin(), lon.cos(), 0.0);
    EarthFixedState {
        position: Wgs84.geographic_to_earth_fixed(&SUBPOINT),
        velocity: north * -7_580.0 + east * -103.0,
    }
}

/// State source that always fails, like a decayed orbit
pub struct FailingAdapter;

impl OrbitalStateAdapter for FailingAdapter {
    fn state_at(&self, t: DateTime<Utc>) -> Result<EarthFixedState> {
        Err(Error::Propagation(format!("{} is past decay", t.to_rfc3339())))
    }
}

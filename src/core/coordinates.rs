//! Core coordinate utilities
//!
//! Everything coordinate-related lives here:
//! - Geographic points and the WGS84 ellipsoid (geodetic <-> Earth-fixed, ray casts)
//! - Earth-frame transformations and time utilities (Julian date, GMST, TEME -> ECEF)
//!
//! Earth-fixed vectors are meters unless a function name says otherwise.

use chrono::{DateTime, Datelike, Timelike, Utc};
use glam::DVec3;
use serde::Serialize;

use crate::error::{Error, Result};

/// WGS84 semi-major (equatorial) axis in meters
pub const WGS84_A: f64 = 6_378_137.0;
/// WGS84 flattening
pub const WGS84_F: f64 = 1.0 / 298.257_223_563;
/// WGS84 semi-minor (polar) axis in meters
pub const WGS84_B: f64 = WGS84_A * (1.0 - WGS84_F);
/// WGS84 first eccentricity squared
pub const WGS84_E2: f64 = WGS84_F * (2.0 - WGS84_F);

/// Earth rotation rate used for the TEME -> ECEF velocity transport term
pub const EARTH_ROTATION_RAD_PER_S: f64 = 7.292_115_146_706_979e-5;

// ========================= Geographic coordinates and helpers =========================

/// Anything that can be read as a geographic coordinate.
pub trait GeoCoordinate {
    /// Longitude in degrees
    fn longitude(&self) -> f64;
    /// Latitude in degrees
    fn latitude(&self) -> f64;
    /// Height above the ellipsoid in meters
    fn altitude(&self) -> f64 {
        0.0
    }
}

/// Geographic point: degrees, degrees, meters above the ellipsoid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeographicPoint {
    pub longitude: f64,
    pub latitude: f64,
    pub altitude: f64,
}

impl GeographicPoint {
    pub const fn new(longitude: f64, latitude: f64, altitude: f64) -> Self {
        Self {
            longitude,
            latitude,
            altitude,
        }
    }

    /// Build a point, rejecting latitudes and longitudes out of range.
    pub fn from_degrees(longitude: f64, latitude: f64, altitude: f64) -> Result<Self> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(Error::Validation(format!("Invalid latitude: {:?}", latitude)));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(Error::Validation(format!(
                "Invalid longitude: {:?}",
                longitude
            )));
        }
        if !altitude.is_finite() {
            return Err(Error::Validation(format!("Invalid altitude: {:?}", altitude)));
        }
        Ok(Self::new(longitude, latitude, altitude))
    }

    /// Validated copy of any coordinate-like value.
    pub fn try_from_coordinate<C: GeoCoordinate + ?Sized>(c: &C) -> Result<Self> {
        Self::from_degrees(c.longitude(), c.latitude(), c.altitude())
    }
}

impl GeoCoordinate for GeographicPoint {
    fn longitude(&self) -> f64 {
        self.longitude
    }
    fn latitude(&self) -> f64 {
        self.latitude
    }
    fn altitude(&self) -> f64 {
        self.altitude
    }
}

/// `(longitude, latitude)` in degrees, on the ellipsoid surface
impl GeoCoordinate for (f64, f64) {
    fn longitude(&self) -> f64 {
        self.0
    }
    fn latitude(&self) -> f64 {
        self.1
    }
}

/// `(longitude, latitude, altitude)` in degrees, degrees, meters
impl GeoCoordinate for (f64, f64, f64) {
    fn longitude(&self) -> f64 {
        self.0
    }
    fn latitude(&self) -> f64 {
        self.1
    }
    fn altitude(&self) -> f64 {
        self.2
    }
}

/// An ordered ring of geographic vertices, first vertex repeated last when closed.
pub trait GeoRing {
    type Vertex: GeoCoordinate;

    fn vertices(&self) -> &[Self::Vertex];

    fn is_closed(&self) -> bool {
        match (self.vertices().first(), self.vertices().last()) {
            (Some(a), Some(b)) => {
                self.vertices().len() > 3
                    && a.longitude() == b.longitude()
                    && a.latitude() == b.latitude()
            }
            _ => false,
        }
    }

    /// `[longitude, latitude]` pairs in ring order
    fn lon_lat_ring(&self) -> Vec<[f64; 2]> {
        self.vertices()
            .iter()
            .map(|v| [v.longitude(), v.latitude()])
            .collect()
    }
}

// ========================= Ellipsoid geodesy =========================

/// Geodesy operations on a reference ellipsoid of revolution.
pub trait EllipsoidGeodesy {
    /// `(equatorial, polar)` radii in meters
    fn radii(&self) -> (f64, f64);

    fn geographic_to_earth_fixed(&self, point: &GeographicPoint) -> DVec3;

    fn earth_fixed_to_geographic(&self, position: DVec3) -> GeographicPoint;

    /// Sub-point of an Earth-fixed position, with the position's height as altitude.
    fn subpoint_of(&self, position: DVec3) -> GeographicPoint {
        self.earth_fixed_to_geographic(position)
    }

    /// First point where the ray `origin + t * direction`, `t >= 0`, meets the ellipsoid.
    fn ray_ellipsoid_intersection(&self, origin: DVec3, direction: DVec3) -> Option<DVec3> {
        let (a, b) = self.radii();
        ray_ellipsoid_intersection(origin, direction, DVec3::new(a, a, b))
    }
}

/// The WGS84 reference ellipsoid.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Wgs84;

impl EllipsoidGeodesy for Wgs84 {
    fn radii(&self) -> (f64, f64) {
        (WGS84_A, WGS84_B)
    }

    fn geographic_to_earth_fixed(&self, point: &GeographicPoint) -> DVec3 {
        let lat = point.latitude.to_radians();
        let lon = point.longitude.to_radians();
        let (sin_lat, cos_lat) = lat.sin_cos();
        // Prime vertical radius of curvature
        let n = WGS84_A / (1.0 - WGS84_E2 * sin_lat * sin_lat).sqrt();
        let h = point.altitude;
        DVec3::new(
            (n + h) * cos_lat * lon.cos(),
            (n + h) * cos_lat * lon.sin(),
            ((1.0 - WGS84_E2) * n + h) * sin_lat,
        )
    }

    fn earth_fixed_to_geographic(&self, position: DVec3) -> GeographicPoint {
        let p = position.x.hypot(position.y);
        let lon = position.y.atan2(position.x);
        let mut lat = position.z.atan2(p * (1.0 - WGS84_E2));

        for _ in 0..10 {
            let prev = lat;
            let sin_lat = lat.sin();
            let n = WGS84_A / (1.0 - WGS84_E2 * sin_lat * sin_lat).sqrt();
            lat = (position.z + n * WGS84_E2 * sin_lat).atan2(p);
            if (lat - prev).abs() < 1e-14 {
                break;
            }
        }

        let (sin_lat, cos_lat) = lat.sin_cos();
        let n = WGS84_A / (1.0 - WGS84_E2 * sin_lat * sin_lat).sqrt();
        // Pick the better-conditioned height formula away from the poles / equator
        let height = if cos_lat.abs() > sin_lat.abs() {
            p / cos_lat - n
        } else {
            position.z / sin_lat - n * (1.0 - WGS84_E2)
        };

        GeographicPoint::new(lon.to_degrees(), lat.to_degrees(), height)
    }
}

/// Intersect a ray with an axis-aligned ellipsoid centred on the origin.
///
/// Returns the closest intersection with `t >= 0`, or `None` when the ray misses
/// or points away from the ellipsoid.
pub fn ray_ellipsoid_intersection(origin: DVec3, direction: DVec3, radii: DVec3) -> Option<DVec3> {
    // Scale into the unit-sphere frame and solve |o + t d|^2 = 1
    // -> (d·d) t^2 + 2 (o·d) t + (o·o - 1) = 0
    let o = origin / radii;
    let d = direction / radii;

    let a = d.length_squared();
    if a == 0.0 {
        return None;
    }
    let b = 2.0 * o.dot(d);
    let c = o.length_squared() - 1.0;

    let discr = b * b - 4.0 * a * c;
    if discr < 0.0 {
        return None;
    }

    let sqrt_d = discr.sqrt();
    let t1 = (-b - sqrt_d) / (2.0 * a);
    let t2 = (-b + sqrt_d) / (2.0 * a);

    let t = if t1 >= 0.0 {
        t1
    } else if t2 >= 0.0 {
        t2
    } else {
        return None;
    };
    Some(origin + direction * t)
}

// ========================= Orbital/Earth-frame transformations =========================

/// Compute the Julian Date (UTC) for a given timestamp.
/// Uses the standard Gregorian calendar to JD conversion.
pub fn julian_date_utc(t: DateTime<Utc>) -> f64 {
    let mut y = t.year();
    let mut m = t.month() as i32;
    let d = t.day() as i32;

    // Convert time of day to fraction of day
    let hour = t.hour() as f64;
    let minute = t.minute() as f64;
    let sec = t.second() as f64 + (t.nanosecond() as f64) * 1e-9_f64;
    let day_fraction = (hour + (minute + sec / 60.0) / 60.0) / 24.0;

    if m <= 2 {
        y -= 1;
        m += 12;
    }

    let a = (y as f64 / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();

    let jd0 = (365.25 * (y as f64 + 4716.0)).floor()
        + (30.6001 * ((m + 1) as f64)).floor()
        + d as f64
        + b
        - 1524.5;

    jd0 + day_fraction
}

/// Greenwich Mean Sidereal Time (radians) using the IAU 1982 polynomial.
/// Assumes UT1 ~= UTC.
pub fn gmst_rad(t: DateTime<Utc>) -> f64 {
    let jd = julian_date_utc(t);
    let t_cent = (jd - 2451545.0) / 36525.0; // Julian centuries from J2000.0

    // GMST in seconds (IAU 1982). See Vallado and IERS Conventions.
    let gmst_sec =
        67310.54841 + (876600.0 * 3600.0 + 8640184.812866) * t_cent + 0.093104 * t_cent * t_cent
            - 6.2e-6 * t_cent * t_cent * t_cent;

    let sec_in_day = 86400.0_f64;
    gmst_sec.rem_euclid(sec_in_day) * (std::f64::consts::TAU / sec_in_day)
}

/// Rotate ECI (TEME) -> ECEF using simple GMST rotation about Z.
/// Standard transformation rotates by -GMST (clockwise when viewed from +Z).
pub fn eci_to_ecef(eci: DVec3, gmst: f64) -> DVec3 {
    let (s, c) = gmst.sin_cos();
    let x = c * eci.x + s * eci.y;
    let y = -s * eci.x + c * eci.y;
    DVec3::new(x, y, eci.z)
}

/// Rotate a TEME position/velocity pair into the Earth-fixed frame.
///
/// Velocity picks up the `-ω × r` transport term so it is relative to the rotating Earth.
/// Units pass through: meters in, meters out; m/s in, m/s out.
pub fn teme_to_ecef(position: DVec3, velocity: DVec3, gmst: f64) -> (DVec3, DVec3) {
    let r = eci_to_ecef(position, gmst);
    let omega = DVec3::new(0.0, 0.0, EARTH_ROTATION_RAD_PER_S);
    let v = eci_to_ecef(velocity, gmst) - omega.cross(r);
    (r, v)
}

// =================================== Tests ===================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    const EPSILON: f64 = 1e-9;

    fn on_ellipsoid(p: DVec3) -> f64 {
        (p.x * p.x + p.y * p.y) / (WGS84_A * WGS84_A) + (p.z * p.z) / (WGS84_B * WGS84_B)
    }

    // ---- Geographic coordinate tests ----

    #[test]
    fn test_from_degrees_valid() {
        let p = GeographicPoint::from_degrees(90.0, 45.0, 100.0).unwrap();
        assert_eq!(p.longitude, 90.0);
        assert_eq!(p.latitude, 45.0);
        assert_eq!(p.altitude, 100.0);
    }

    #[test]
    fn test_from_degrees_boundary_values() {
        assert!(GeographicPoint::from_degrees(180.0, 90.0, 0.0).is_ok());
        assert!(GeographicPoint::from_degrees(-180.0, -90.0, 0.0).is_ok());
        assert!(GeographicPoint::from_degrees(0.0, 0.0, 0.0).is_ok());
    }

    #[test]
    fn test_from_degrees_invalid() {
        assert!(matches!(
            GeographicPoint::from_degrees(0.0, 91.0, 0.0),
            Err(Error::Validation(_))
        ));
        assert!(GeographicPoint::from_degrees(0.0, -91.0, 0.0).is_err());
        assert!(GeographicPoint::from_degrees(181.0, 0.0, 0.0).is_err());
        assert!(GeographicPoint::from_degrees(-181.0, 0.0, 0.0).is_err());
        assert!(GeographicPoint::from_degrees(0.0, 0.0, f64::NAN).is_err());
    }

    #[test]
    fn test_tuple_coordinates() {
        let p = GeographicPoint::try_from_coordinate(&(10.0, 20.0)).unwrap();
        assert_eq!(p, GeographicPoint::new(10.0, 20.0, 0.0));

        let q = GeographicPoint::try_from_coordinate(&(10.0, 20.0, 30.0)).unwrap();
        assert_eq!(q.altitude, 30.0);

        let err = GeographicPoint::try_from_coordinate(&(10.0, 95.0)).unwrap_err();
        assert!(matches!(err, Error::Validation(_)), "{:?}", err);
    }

    #[test]
    fn test_wgs84_constants() {
        assert!((WGS84_B - 6_356_752.314_245_179).abs() < 1e-3);
        assert!((WGS84_E2.sqrt() - 0.081_819_190_842_622).abs() < 1e-12);
        assert_eq!(Wgs84.radii(), (WGS84_A, WGS84_B));
    }

    #[test]
    fn test_geographic_to_earth_fixed_axes() {
        let origin = Wgs84.geographic_to_earth_fixed(&GeographicPoint::new(0.0, 0.0, 0.0));
        assert!((origin.x - WGS84_A).abs() < EPSILON);
        assert!(origin.y.abs() < EPSILON);
        assert!(origin.z.abs() < EPSILON);

        let east = Wgs84.geographic_to_earth_fixed(&GeographicPoint::new(90.0, 0.0, 1000.0));
        assert!(east.x.abs() < 1e-6);
        assert!((east.y - (WGS84_A + 1000.0)).abs() < 1e-6);

        let pole = Wgs84.geographic_to_earth_fixed(&GeographicPoint::new(0.0, 90.0, 0.0));
        assert!(pole.x.abs() < 1e-6);
        assert!((pole.z - WGS84_B).abs() < 1e-6);
    }

    #[test]
    fn test_surface_points_satisfy_ellipsoid_equation() {
        let points = [
            (0.0, 0.0),
            (45.0, 45.0),
            (-120.0, -33.0),
            (152.6, 78.2),
            (10.0, -89.9),
        ];
        for (lon, lat) in points {
            let p = Wgs84.geographic_to_earth_fixed(&GeographicPoint::new(lon, lat, 0.0));
            assert!(
                (on_ellipsoid(p) - 1.0).abs() < 1e-12,
                "({}, {}) -> {}",
                lon,
                lat,
                on_ellipsoid(p)
            );
        }
    }

    #[test]
    fn test_roundtrip_conversion_precision() {
        let test_coords = [
            (0.0, 0.0, 0.0),
            (0.0, 90.0, 0.0),
            (0.0, -90.0, 1000.0),
            (90.0, 45.0, 557_934.99),
            (-90.0, -45.0, 10.0),
            (180.0, 0.0, 0.0),
            (179.9, 89.9, 35_786_000.0),
            (-179.9, -89.9, -100.0),
            (152.6226382884999, 78.18538506762289, 557934.9901695348),
        ];

        for (lon, lat, alt) in test_coords {
            let p = GeographicPoint::new(lon, lat, alt);
            let back = Wgs84.earth_fixed_to_geographic(Wgs84.geographic_to_earth_fixed(&p));

            assert!(
                (back.latitude - lat).abs() < 1e-9,
                "Latitude roundtrip failed for ({}, {}): {}",
                lon,
                lat,
                back.latitude
            );
            assert!(
                (back.altitude - alt).abs() < 1e-4,
                "Altitude roundtrip failed for ({}, {}, {}): {}",
                lon,
                lat,
                alt,
                back.altitude
            );
            if lat.abs() < 90.0 {
                // Handle longitude wraparound at ±180°
                let mut lon_diff = (back.longitude - lon).abs();
                if lon_diff > 180.0 {
                    lon_diff = 360.0 - lon_diff;
                }
                assert!(lon_diff < 1e-9, "Longitude roundtrip failed for ({}, {})", lon, lat);
            }
        }
    }

    #[test]
    fn test_subpoint_of_keeps_height() {
        let p = GeographicPoint::new(-75.0, 40.0, 500_000.0);
        let sub = Wgs84.subpoint_of(Wgs84.geographic_to_earth_fixed(&p));
        assert!((sub.longitude + 75.0).abs() < 1e-9);
        assert!((sub.latitude - 40.0).abs() < 1e-9);
        assert!((sub.altitude - 500_000.0).abs() < 1e-4);
    }

    #[test]
    fn test_ray_straight_down_hits_surface_below() {
        let sat = GeographicPoint::new(30.0, 60.0, 600_000.0);
        let origin = Wgs84.geographic_to_earth_fixed(&sat);
        let ground = Wgs84.geographic_to_earth_fixed(&GeographicPoint::new(30.0, 60.0, 0.0));
        let dir = (ground - origin).normalize();

        let hit = Wgs84.ray_ellipsoid_intersection(origin, dir).unwrap();
        assert!((hit - ground).length() < 1e-3, "hit {:?} vs {:?}", hit, ground);
    }

    #[test]
    fn test_ray_returns_near_side_intersection() {
        let origin = DVec3::new(2.0 * WGS84_A, 0.0, 0.0);
        let radii = DVec3::new(WGS84_A, WGS84_A, WGS84_B);
        let hit = ray_ellipsoid_intersection(origin, -DVec3::X, radii).unwrap();
        assert!((hit.x - WGS84_A).abs() < 1e-6);
    }

    #[test]
    fn test_ray_pointing_away_misses() {
        let origin = DVec3::new(2.0 * WGS84_A, 0.0, 0.0);
        assert!(Wgs84.ray_ellipsoid_intersection(origin, DVec3::X).is_none());
        // Passes beside the Earth
        assert!(Wgs84.ray_ellipsoid_intersection(origin, DVec3::Y).is_none());
        // Degenerate direction
        assert!(Wgs84.ray_ellipsoid_intersection(origin, DVec3::ZERO).is_none());
    }

    #[test]
    fn test_ray_hits_polar_radius_along_axis() {
        let origin = DVec3::new(0.0, 0.0, 8_000_000.0);
        let hit = Wgs84.ray_ellipsoid_intersection(origin, -DVec3::Z).unwrap();
        assert!((hit.z - WGS84_B).abs() < 1e-6);
    }

    // ---- Orbital/ECEF transform tests ----

    #[test]
    fn test_gmst_rad_j2000_known_value() {
        // GMST at J2000.0 (2000-01-01 12:00:00 UT1) is 18.697374558 h, i.e. 280.46061837 deg
        let t = Utc.with_ymd_and_hms(2000, 1, 1, 12, 0, 0).unwrap();
        let gmst = gmst_rad(t);
        let deg = gmst.to_degrees();
        let expected_deg = 280.46061837_f64;
        let diff = (deg - expected_deg).abs();
        assert!(diff < 0.05, "gmst deg diff too large: {} deg", diff);
    }

    #[test]
    fn test_gmst_range() {
        for year in [1900, 1957, 2000, 2024, 2100] {
            let t = Utc.with_ymd_and_hms(year, 6, 15, 3, 0, 0).unwrap();
            let gmst = gmst_rad(t);
            assert!(gmst >= 0.0 && gmst < std::f64::consts::TAU);
            assert!(gmst.is_finite());
        }
    }

    #[test]
    fn test_julian_date_j2000_noon() {
        let t = Utc.with_ymd_and_hms(2000, 1, 1, 12, 0, 0).unwrap();
        let jd = julian_date_utc(t);
        assert!((jd - 2451545.0).abs() < 1e-9, "jd = {}", jd);
    }

    #[test]
    fn test_julian_date_leap_year_boundaries() {
        let leap_feb_28 = Utc.with_ymd_and_hms(2000, 2, 28, 12, 0, 0).unwrap();
        let leap_feb_29 = Utc.with_ymd_and_hms(2000, 2, 29, 12, 0, 0).unwrap();
        let leap_mar_01 = Utc.with_ymd_and_hms(2000, 3, 1, 12, 0, 0).unwrap();

        let jd_feb_28 = julian_date_utc(leap_feb_28);
        let jd_feb_29 = julian_date_utc(leap_feb_29);
        let jd_mar_01 = julian_date_utc(leap_mar_01);

        assert!((jd_feb_29 - jd_feb_28 - 1.0).abs() < 1e-9);
        assert!((jd_mar_01 - jd_feb_29 - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_eci_to_ecef() {
        let eci = DVec3::new(1000.0, 0.0, 0.0);
        let ecef = eci_to_ecef(eci, 0.0);

        assert!((ecef.x - 1000.0).abs() < 1e-10);
        assert!(ecef.y.abs() < 1e-10);
        assert!(ecef.z.abs() < 1e-10);

        let ecef_90 = eci_to_ecef(eci, std::f64::consts::FRAC_PI_2);
        assert!(ecef_90.x.abs() < 1e-10);
        assert!((ecef_90.y + 1000.0).abs() < 1e-10);
        assert!(ecef_90.z.abs() < 1e-10);
    }

    #[test]
    fn test_teme_to_ecef_geostationary_is_static() {
        let r = 42_164_000.0;
        let position = DVec3::new(r, 0.0, 0.0);
        let velocity = DVec3::new(0.0, EARTH_ROTATION_RAD_PER_S * r, 0.0);

        for gmst in [0.0, 0.4, 2.0, 5.5] {
            let (p, v) = teme_to_ecef(
                eci_to_ecef(position, -gmst),
                eci_to_ecef(velocity, -gmst),
                gmst,
            );
            assert!((p - position).length() < 1e-6);
            assert!(v.length() < 1e-6, "residual ECEF velocity {:?}", v);
        }
    }

    #[test]
    fn test_teme_to_ecef_preserves_position_length() {
        let position = DVec3::new(6_900_000.0, 120_000.0, -35_000.0);
        let velocity = DVec3::new(10.0, 7_500.0, 0.0);
        let (p, _) = teme_to_ecef(position, velocity, 1.234);
        assert!((p.length() - position.length()).abs() < 1e-6);
    }
}

//! Core math and Earth model
//!
//! Vector algebra for the pointing frame, plus WGS84 geodesy and the
//! Earth-fixed frame conversions the propagator relies on.

pub mod algebra;
pub mod coordinates;

pub use algebra::{
    project_vector_onto_plane, rotate, unit_vector, vector_angle, vector_angle_signed,
};
pub use coordinates::{EllipsoidGeodesy, GeoCoordinate, GeoRing, GeographicPoint, Wgs84};

//! Output formats

pub mod geojson;

pub use geojson::{Feature, FeatureCollection, FootprintScene, Geometry};

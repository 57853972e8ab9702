//! GeoJSON rendering of a single footprint query

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{Value, json};

use crate::core::coordinates::{GeoRing, GeographicPoint};
use crate::pointing::{FieldOfView, FootprintPolygon, OffNadir};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum Geometry {
    Point { coordinates: [f64; 3] },
    LineString { coordinates: Vec<[f64; 3]> },
    Polygon { coordinates: Vec<Vec<[f64; 2]>> },
}

impl Geometry {
    pub fn point(p: &GeographicPoint) -> Self {
        Geometry::Point {
            coordinates: [p.longitude, p.latitude, p.altitude],
        }
    }

    pub fn line_string(points: &[GeographicPoint]) -> Self {
        Geometry::LineString {
            coordinates: points
                .iter()
                .map(|p| [p.longitude, p.latitude, p.altitude])
                .collect(),
        }
    }

    pub fn polygon<R: GeoRing + ?Sized>(ring: &R) -> Self {
        Geometry::Polygon {
            coordinates: vec![ring.lon_lat_ring()],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Feature {
    #[serde(rename = "type")]
    kind: &'static str,
    pub geometry: Geometry,
    pub properties: Value,
}

impl Feature {
    pub fn new(geometry: Geometry, properties: Value) -> Self {
        Self {
            kind: "Feature",
            geometry,
            properties,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureCollection {
    #[serde(rename = "type")]
    kind: &'static str,
    pub features: Vec<Feature>,
}

impl FeatureCollection {
    pub fn new(features: Vec<Feature>) -> Self {
        Self {
            kind: "FeatureCollection",
            features,
        }
    }

    pub fn to_json(&self, pretty: bool) -> serde_json::Result<String> {
        if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        }
    }
}

/// Everything one footprint query produces
#[derive(Debug, Clone)]
pub struct FootprintScene {
    pub t: DateTime<Utc>,
    pub position: GeographicPoint,
    pub ground_track: Vec<GeographicPoint>,
    pub footprint: FootprintPolygon,
    pub off_nadir: OffNadir,
    pub fov: FieldOfView,
}

impl From<&FootprintScene> for FeatureCollection {
    fn from(scene: &FootprintScene) -> Self {
        FeatureCollection::new(vec![
            Feature::new(Geometry::point(&scene.position), json!({ "label": "sat" })),
            Feature::new(
                Geometry::line_string(&scene.ground_track),
                json!({ "label": "orbit direction" }),
            ),
            Feature::new(
                Geometry::polygon(&scene.footprint),
                json!({
                    "label": "footprint",
                    "fov-x": scene.fov.x(),
                    "fov-y": scene.fov.y(),
                    "off-nadir-x": scene.off_nadir.across,
                    "off-nadir-y": scene.off_nadir.along,
                    "datetime": scene.t.to_rfc3339(),
                }),
            ),
        ])
    }
}

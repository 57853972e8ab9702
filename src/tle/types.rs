//! TLE data types

use chrono::{DateTime, Utc};

use crate::error::{Error, Result};
use crate::tle::parser::{parse_tle_epoch_to_utc, split_element_lines};

/// One parsed element set
#[derive(Debug, Clone, PartialEq)]
pub struct TleData {
    pub name: Option<String>,
    pub line1: String,
    pub line2: String,
    pub epoch_utc: DateTime<Utc>,
}

impl TleData {
    /// Parse two-line or three-line (name + two lines) element-set text.
    pub fn parse(text: &str) -> Result<Self> {
        let (name, line1, line2) = split_element_lines(text)?;
        let epoch_utc = parse_tle_epoch_to_utc(&line1).ok_or_else(|| {
            Error::Configuration(format!("unreadable epoch in line 1: {:?}", line1))
        })?;
        Ok(Self {
            name,
            line1,
            line2,
            epoch_utc,
        })
    }

    /// Build the SGP4 model for this element set.
    ///
    /// Element sets are fitted against WGS72, so the propagator uses the WGS72
    /// geopotential with the IAU epoch and sidereal-time expressions.
    pub fn to_constants(&self) -> Result<sgp4::Constants> {
        let elements = sgp4::Elements::from_tle(
            self.name.clone(),
            self.line1.as_bytes(),
            self.line2.as_bytes(),
        )
        .map_err(|e| Error::Configuration(format!("elements error: {}", e)))?;

        let deg = std::f64::consts::PI / 180.0;
        let orbit = sgp4::Orbit::from_kozai_elements(
            &sgp4::WGS72,
            elements.inclination * deg,
            elements.right_ascension * deg,
            elements.eccentricity,
            elements.argument_of_perigee * deg,
            elements.mean_anomaly * deg,
            // rev/day -> rad/min
            elements.mean_motion * (std::f64::consts::PI / 720.0),
        )
        .map_err(|e| Error::Configuration(format!("elements error: {}", e)))?;

        sgp4::Constants::new(
            sgp4::WGS72,
            sgp4::iau_epoch_to_sidereal_time,
            elements.epoch(),
            elements.drag_term,
            orbit,
        )
        .map_err(|e| Error::Configuration(format!("constants error: {}", e)))
    }
}

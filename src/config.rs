//! Run configuration for the command-line tool

use crate::pointing::{FieldOfView, OffNadir};
use crate::tle::POLAR_TLE;

/// Defaults for one footprint query; the CLI overrides individual fields.
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    /// Element-set text, 2 or 3 lines
    pub tle: String,
    /// Sensor pointing
    pub off_nadir: OffNadir,
    /// Sensor field of view
    pub fov: FieldOfView,
    /// Ground-track samples, one per second
    pub track_seconds: usize,
    /// Pretty-print the JSON output
    pub pretty: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            tle: POLAR_TLE.to_string(),
            off_nadir: OffNadir::default(),
            fov: FieldOfView::default(),
            track_seconds: 10,
            pretty: false,
        }
    }
}

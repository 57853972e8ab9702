//! Off-nadir pointing and sensor footprint geometry for Earth-orbiting satellites.
//!
//! ```no_run
//! use chrono::{TimeZone, Utc};
//! use offnadir::{FieldOfView, OffNadir, Satellite};
//!
//! let sat = Satellite::from_tle(offnadir::tle::POLAR_TLE)?;
//! let t = Utc.with_ymd_and_hms(2024, 4, 19, 12, 0, 0).unwrap();
//! let footprint = sat.footprint(&t, OffNadir::new(0.0, 45.0), FieldOfView::default())?;
//! # Ok::<(), offnadir::Error>(())
//! ```

pub mod config;
pub mod core;
pub mod error;
pub mod orbital;
pub mod output;
pub mod pointing;
pub mod satellite;
pub mod tle;

pub use config::RunConfig;
pub use crate::core::{EllipsoidGeodesy, GeoCoordinate, GeoRing, GeographicPoint, Wgs84};
pub use error::{Error, Result};
pub use orbital::{EarthFixedState, OrbitalStateAdapter};
pub use pointing::{Corner, FieldOfView, FootprintPolygon, OffNadir};
pub use satellite::Satellite;

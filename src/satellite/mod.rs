//! Satellite queries
//!
//! A [`Satellite`] wraps one state source and one reference ellipsoid and answers
//! time-parameterized questions: where is it, how far off nadir is a target, and what
//! does the sensor see. Every time input must be UTC.

use chrono::{DateTime, Duration, TimeZone, Utc};
use glam::DVec3;
use tracing::debug;

use crate::core::coordinates::{EllipsoidGeodesy, GeoCoordinate, GeographicPoint, Wgs84};
use crate::error::Result;
use crate::orbital::{
    EarthFixedState, OrbitalStateAdapter, Sgp4Propagator, ensure_utc, utc_steps,
};
use crate::pointing::{
    FieldOfView, FootprintCalculator, FootprintPolygon, OffNadir, OffNadirCalculator,
};
use crate::tle::TleData;

/// One satellite: a state source plus the ellipsoid it is measured against.
///
/// Immutable after construction, so a single instance can serve any number of
/// queries, from any number of threads.
#[derive(Debug)]
pub struct Satellite<A = Sgp4Propagator, G = Wgs84> {
    tle: Option<TleData>,
    adapter: A,
    geodesy: G,
}

impl Satellite {
    /// Build from 2-line or 3-line element-set text, propagated with SGP4 over WGS84.
    pub fn from_tle(text: &str) -> Result<Self> {
        let tle = TleData::parse(text)?;
        let adapter = Sgp4Propagator::new(&tle)?;
        debug!(
            name = tle.name.as_deref().unwrap_or("-"),
            epoch = %tle.epoch_utc.to_rfc3339(),
            "loaded element set"
        );
        Ok(Self {
            tle: Some(tle),
            adapter,
            geodesy: Wgs84,
        })
    }
}

impl<A, G> Satellite<A, G>
where
    A: OrbitalStateAdapter,
    G: EllipsoidGeodesy,
{
    /// Use any state source, e.g. a fixed state for synthetic geometry.
    pub fn with_adapter(adapter: A, geodesy: G) -> Self {
        Self {
            tle: None,
            adapter,
            geodesy,
        }
    }

    /// Name line of a 3-line element set
    pub fn name(&self) -> Option<&str> {
        self.tle.as_ref().and_then(|t| t.name.as_deref())
    }

    pub fn epoch(&self) -> Option<DateTime<Utc>> {
        self.tle.as_ref().map(|t| t.epoch_utc)
    }

    /// Earth-fixed state at `t`.
    pub fn at<Tz: TimeZone>(&self, t: &DateTime<Tz>) -> Result<EarthFixedState> {
        let t = ensure_utc(t)?;
        self.adapter.state_at(t)
    }

    /// Sub-satellite point with the height above the ellipsoid as altitude (m).
    pub fn position<Tz: TimeZone>(&self, t: &DateTime<Tz>) -> Result<GeographicPoint> {
        let state = self.at(t)?;
        Ok(self.geodesy.subpoint_of(state.position))
    }

    /// Along- and cross-track angles (degrees) from nadir to `target`.
    ///
    /// Targets outside -180..=180 longitude or -90..=90 latitude are a
    /// [`Error::Validation`](crate::Error::Validation).
    pub fn off_nadir<Tz, C>(&self, t: &DateTime<Tz>, target: &C) -> Result<OffNadir>
    where
        Tz: TimeZone,
        C: GeoCoordinate + ?Sized,
    {
        let state = self.at(t)?;
        let target = GeographicPoint::try_from_coordinate(target)?;
        let nadir = self.nadir_location(&state);
        Ok(OffNadirCalculator::off_nadir(
            &self.geodesy,
            &state,
            nadir,
            &target,
        ))
    }

    /// Ground footprint of `fov` pointed at `off_nadir`.
    pub fn footprint<Tz: TimeZone>(
        &self,
        t: &DateTime<Tz>,
        off_nadir: OffNadir,
        fov: FieldOfView,
    ) -> Result<FootprintPolygon> {
        let state = self.at(t)?;
        let nadir = self.nadir_location(&state);
        FootprintCalculator::footprint(&self.geodesy, &state, nadir, &off_nadir, &fov)
    }

    /// Sub-satellite points at `t`, `t + 1 s`, ... for `seconds` samples
    pub fn ground_track<Tz: TimeZone>(
        &self,
        t: &DateTime<Tz>,
        seconds: usize,
    ) -> Result<Vec<GeographicPoint>> {
        let start = ensure_utc(t)?;
        utc_steps(start, Duration::seconds(1), seconds)?
            .iter()
            .map(|step| self.position(step))
            .collect()
    }

    /// Earth-fixed sub-point on the ellipsoid surface
    fn nadir_location(&self, state: &EarthFixedState) -> DVec3 {
        let sub = self.geodesy.subpoint_of(state.position);
        self.geodesy
            .geographic_to_earth_fixed(&GeographicPoint::new(sub.longitude, sub.latitude, 0.0))
    }
}

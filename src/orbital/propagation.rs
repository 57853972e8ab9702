//! Orbital propagation utilities

use chrono::{DateTime, Utc};
use glam::DVec3;
use tracing::debug;

use crate::core::coordinates::{gmst_rad, teme_to_ecef};
use crate::error::{Error, Result};
use crate::tle::TleData;

/// Calculate minutes since epoch for SGP4 propagation
pub fn minutes_since_epoch(sim_utc: DateTime<Utc>, epoch: DateTime<Utc>) -> f64 {
    let delta = sim_utc - epoch;
    delta.num_seconds() as f64 / 60.0 + (delta.subsec_nanos() as f64) / 60.0 / 1.0e9
}

/// Earth-fixed position (m) and velocity (m/s) at one instant
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EarthFixedState {
    pub position: DVec3,
    pub velocity: DVec3,
}

/// Source of Earth-fixed satellite state at a UTC instant.
pub trait OrbitalStateAdapter {
    fn state_at(&self, t: DateTime<Utc>) -> Result<EarthFixedState>;
}

/// A fixed state, whatever the time. Handy for synthetic geometry.
impl OrbitalStateAdapter for EarthFixedState {
    fn state_at(&self, _t: DateTime<Utc>) -> Result<EarthFixedState> {
        Ok(*self)
    }
}

/// SGP4 propagation rotated from TEME into the Earth-fixed frame by GMST.
pub struct Sgp4Propagator {
    constants: sgp4::Constants,
    epoch_utc: DateTime<Utc>,
}

impl Sgp4Propagator {
    pub fn new(tle: &TleData) -> Result<Self> {
        Ok(Self {
            constants: tle.to_constants()?,
            epoch_utc: tle.epoch_utc,
        })
    }

    pub fn epoch_utc(&self) -> DateTime<Utc> {
        self.epoch_utc
    }
}

impl std::fmt::Debug for Sgp4Propagator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Sgp4Propagator")
            .field("epoch_utc", &self.epoch_utc)
            .finish_non_exhaustive()
    }
}

impl OrbitalStateAdapter for Sgp4Propagator {
    fn state_at(&self, t: DateTime<Utc>) -> Result<EarthFixedState> {
        let mins = minutes_since_epoch(t, self.epoch_utc);
        let prediction = self
            .constants
            .propagate(sgp4::MinutesSinceEpoch(mins))
            .map_err(|e| {
                Error::Propagation(format!(
                    "{} ({:.3} min from epoch): {}",
                    t.to_rfc3339(),
                    mins,
                    e
                ))
            })?;

        // sgp4 returns TEME km and km/s
        let teme_pos = DVec3::from_array(prediction.position) * 1000.0;
        let teme_vel = DVec3::from_array(prediction.velocity) * 1000.0;
        let (position, velocity) = teme_to_ecef(teme_pos, teme_vel, gmst_rad(t));

        debug!(
            t = %t.to_rfc3339(),
            minutes = mins,
            radius_km = position.length() / 1000.0,
            speed_m_s = velocity.length(),
            "[SGP4] propagated"
        );
        Ok(EarthFixedState { position, velocity })
    }
}

//! Orbital mechanics module
//!
//! This module turns an element set and a UTC instant into Earth-fixed
//! satellite state, and guards every time input against non-UTC values.

pub mod propagation;
pub mod time;

pub use propagation::{
    EarthFixedState, OrbitalStateAdapter, Sgp4Propagator, minutes_since_epoch,
};
pub use time::{MAX_STEPS, ensure_utc, parse_utc, utc_steps};

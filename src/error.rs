//! Error types shared by every query in the crate

use thiserror::Error;

/// Failures surfaced by element-set parsing, propagation and pointing geometry.
///
/// None of these are retried: every computation is deterministic.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Rejected input, e.g. a timestamp that is not UTC.
    #[error("validation error: {0}")]
    Validation(String),
    /// Malformed element set or one the propagator refuses to initialise.
    #[error("configuration error: {0}")]
    Configuration(String),
    /// Geometrically unsolvable case, e.g. a ray that misses the ellipsoid.
    #[error("computation error: {0}")]
    Computation(String),
    /// The propagator failed for the requested instant.
    #[error("propagation error: {0}")]
    Propagation(String),
}

pub type Result<T> = std::result::Result<T, Error>;

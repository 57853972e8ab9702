//! UTC handling for time-parameterized queries

use chrono::{DateTime, Duration, NaiveDateTime, Offset, TimeZone, Utc};
use tracing::warn;

use crate::error::{Error, Result};

/// Accept `t` only if it carries a zero UTC offset.
///
/// Runs before any propagation so a local time is never silently reinterpreted.
pub fn ensure_utc<Tz: TimeZone>(t: &DateTime<Tz>) -> Result<DateTime<Utc>> {
    let offset = t.offset().fix().local_minus_utc();
    if offset != 0 {
        warn!(offset_seconds = offset, "rejecting non-UTC datetime");
        return Err(Error::Validation("datetime must be in UTC".into()));
    }
    Ok(t.with_timezone(&Utc))
}

/// Parse an RFC 3339 / ISO 8601 timestamp that must be UTC.
///
/// Timestamps without an offset are rejected rather than assumed to be UTC.
pub fn parse_utc(s: &str) -> Result<DateTime<Utc>> {
    let s = s.trim();
    match DateTime::parse_from_rfc3339(s) {
        Ok(t) => ensure_utc(&t),
        Err(e) => {
            if NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f").is_ok() {
                warn!(input = s, "timestamp has no UTC offset");
                return Err(Error::Validation("datetime must be in UTC".into()));
            }
            Err(Error::Validation(format!("unreadable datetime {:?}: {}", s, e)))
        }
    }
}

/// Upper bound on sampled instants per query: one day at 1 s spacing
pub const MAX_STEPS: usize = 86_400;

/// `start`, `start + step`, ... for `count` samples
pub fn utc_steps(start: DateTime<Utc>, step: Duration, count: usize) -> Result<Vec<DateTime<Utc>>> {
    if count > MAX_STEPS {
        return Err(Error::Validation(format!(
            "too many time steps: {} (max {})",
            count, MAX_STEPS
        )));
    }
    (0..count)
        .map(|k| {
            let k = i32::try_from(k)
                .map_err(|_| Error::Validation(format!("time step index {} out of range", k)))?;
            start
                .checked_add_signed(step * k)
                .ok_or_else(|| Error::Validation(format!("time step {} out of range", k)))
        })
        .collect()
}

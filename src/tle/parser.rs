//! TLE parsing utilities

use chrono::{DateTime, Utc};

use crate::error::{Error, Result};

/// Split element-set text into an optional name line and the two element lines.
///
/// Two lines are used as-is; with three, the first is the name. Leading and trailing
/// blank lines (and a BOM) are ignored, anything else counts.
pub fn split_element_lines(text: &str) -> Result<(Option<String>, String, String)> {
    let body = text.trim_matches(|c| c == '\u{feff}' || c == '\r' || c == '\n');
    let lines: Vec<&str> = body.lines().map(|l| l.trim_end_matches('\r')).collect();

    match lines.as_slice() {
        [l1, l2] => Ok((None, l1.to_string(), l2.to_string())),
        [name, l1, l2] => Ok((Some(name.trim().to_string()), l1.to_string(), l2.to_string())),
        _ => Err(Error::Configuration(format!(
            "element set must be 2 or 3 lines, got {}",
            lines.len()
        ))),
    }
}

/// Parse TLE epoch from line 1 to UTC DateTime
pub fn parse_tle_epoch_to_utc(line1: &str) -> Option<DateTime<Utc>> {
    // TLE line1 epoch fields (columns 19–32, 1-based; 18..32 0-based)
    let s = line1.get(18..32)?;
    let mut parts = s.trim().split('.');
    let yyddd = parts.next()?;
    let frac = parts.next().unwrap_or("0");
    if yyddd.len() < 3 {
        return None;
    }
    let (yy_str, ddd_str) = yyddd.split_at(2);
    let yy: i32 = yy_str.parse().ok()?;
    let ddd: i64 = ddd_str.parse().ok()?;
    let year = if yy >= 57 { 1900 + yy } else { 2000 + yy };
    let jan1 = chrono::NaiveDate::from_ymd_opt(year, 1, 1)?;
    let date = jan1.checked_add_signed(chrono::Duration::days(ddd - 1))?;
    let frac_sec: f64 = format!("0.{}", frac).parse::<f64>().ok()? * 86400.0;
    let secs = frac_sec.trunc() as i64;
    let nanos = ((frac_sec - (secs as f64)) * 1e9).round() as i64;
    let ndt = date.and_hms_opt(0, 0, 0)?
        + chrono::Duration::seconds(secs)
        + chrono::Duration::nanoseconds(nanos);
    Some(DateTime::<Utc>::from_naive_utc_and_offset(ndt, Utc))
}

// SPDX-License-Identifier: AGPL-3.0-or-later

//! Solar noon offsets and circular seconds-of-day deltas.
//!
//! Solar noon is approximated as a fixed 4 standard minutes per degree of
//! longitude away from Greenwich noon — a linear meridian offset with no
//! equation-of-time correction.  Deltas live on the circular 86 400-second
//! day, so the shortest signed path is always in `(−43 200, 43 200]`.

use qtty::Seconds;

use crate::error::{ensure_finite, Result};
use crate::scheme::SECONDS_PER_DAY;

/// Solar-noon shift per degree of longitude: 4 standard minutes.
const SECONDS_PER_LONGITUDE_DEGREE: f64 = 240.0;

/// Solar noon at the Greenwich meridian, 12:00:00 UTC.
const GREENWICH_SOLAR_NOON: f64 = 43_200.0;

/// Half a day; the turnover point of the signed circular delta.
const HALF_DAY: f64 = 43_200.0;

/// UTC seconds-of-day of solar noon at the given longitude.
///
/// East (positive) longitude shifts solar noon earlier than Greenwich, west
/// later; the result wraps into `[0, 86 400)`.  The longitude is not clamped
/// here — the parsing layer bounds it to `[-180, 180]` — but must be finite.
pub fn solar_noon_utc_seconds_of_day(longitude_degrees: f64) -> Result<Seconds> {
    let longitude = ensure_finite(longitude_degrees, "longitude_degrees")?;
    let shifted = GREENWICH_SOLAR_NOON - longitude * SECONDS_PER_LONGITUDE_DEGREE;
    Ok(Seconds::new(shifted.rem_euclid(SECONDS_PER_DAY as f64)))
}

/// Shortest signed difference from `now` to `target` on the circular day.
///
/// The result is in `(−43 200, 43 200]`: a positive value means `target` is
/// ahead of `now` going forward, a negative one that the backward path is
/// shorter.  Exactly opposite points yield `+43 200`.  Integral operands
/// produce an integral result.
pub fn shortest_signed_delta(
    target_seconds_of_day: f64,
    now_seconds_of_day: f64,
) -> Result<Seconds> {
    let target = ensure_finite(target_seconds_of_day, "target_seconds_of_day")?;
    let now = ensure_finite(now_seconds_of_day, "now_seconds_of_day")?;

    let forward = (target - now).rem_euclid(SECONDS_PER_DAY as f64);
    let signed = if forward > HALF_DAY {
        forward - SECONDS_PER_DAY as f64
    } else {
        forward
    };
    Ok(Seconds::new(signed))
}

/// Render a signed delta as `±HH:MM:SS` in standard (3600/60) decomposition.
///
/// Zero takes the `+` sign; the fractional part is truncated, not rounded.
pub fn format_signed_delta(delta_seconds: f64) -> Result<String> {
    let delta = ensure_finite(delta_seconds, "delta_seconds")?;

    let sign = if delta < 0.0 { '-' } else { '+' };
    let abs = delta.trunc().abs() as u64;

    let hours = abs / 3_600;
    let minutes = (abs % 3_600) / 60;
    let seconds = abs % 60;

    Ok(format!("{sign}{hours:02}:{minutes:02}:{seconds:02}"))
}

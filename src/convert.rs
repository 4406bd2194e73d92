// SPDX-License-Identifier: AGPL-3.0-or-later

//! Unit converters and input parsing.
//!
//! Everything here sits at the boundary between user-supplied values (Unix
//! timestamps, wall-clock strings, longitude fields) and the seconds-of-day
//! scalar the engine works on.  Calendar arithmetic goes through `chrono`;
//! nothing in this module touches timezone databases — a UTC offset is just
//! a signed number of minutes.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::error::{ensure_finite, InvalidArgument, Result};
use crate::scheme::SECONDS_PER_DAY;

/// Unit of a raw Unix timestamp string.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnixUnit {
    Seconds,
    Milliseconds,
}

/// UTC seconds-of-day of a Unix-epoch millisecond timestamp, whole seconds.
///
/// Truncates to the whole second first (`⌊ms / 1000⌋`), then wraps into
/// `[0, 86 400)`.
pub fn unix_ms_to_utc_seconds_of_day(unix_ms: f64) -> Result<f64> {
    let ms = ensure_finite(unix_ms, "unix_ms")?;
    Ok((ms / 1_000.0).floor().rem_euclid(SECONDS_PER_DAY as f64))
}

/// Sub-second-preserving variant of [`unix_ms_to_utc_seconds_of_day`].
pub fn unix_ms_to_utc_seconds_of_day_precise(unix_ms: f64) -> Result<f64> {
    let ms = ensure_finite(unix_ms, "unix_ms")?;
    Ok((ms / 1_000.0).rem_euclid(SECONDS_PER_DAY as f64))
}

/// Parse a longitude field in degrees.
///
/// A blank field is `Ok(None)` — the caller simply has no longitude — while
/// a non-numeric or non-finite value is an error.  The result is clamped to
/// `[-180, 180]`.
pub fn parse_longitude_degrees(raw: &str) -> Result<Option<f64>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let value: f64 = trimmed.parse().map_err(|_| InvalidArgument::BadFormat {
        name: "longitude",
        expected: "a decimal number",
    })?;
    let value = ensure_finite(value, "longitude")?;

    Ok(Some(value.clamp(-180.0, 180.0)))
}

/// Parse a raw Unix timestamp string into epoch milliseconds.
///
/// Only an optionally-signed whole number is accepted; the unit says whether
/// it counts seconds or milliseconds.
pub fn parse_unix_value_to_unix_ms(raw: &str, unit: UnixUnit) -> Result<i64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(InvalidArgument::Empty { name: "unix value" });
    }

    let value: i64 = trimmed.parse().map_err(|_| InvalidArgument::BadFormat {
        name: "unix value",
        expected: "an integer",
    })?;

    match unit {
        UnixUnit::Milliseconds => Ok(value),
        UnixUnit::Seconds => value
            .checked_mul(1_000)
            .ok_or(InvalidArgument::Unrepresentable { name: "unix value" }),
    }
}

/// Convert a wall-clock reading at a fixed UTC offset into epoch milliseconds.
///
/// `date` is strict `YYYY-MM-DD`, `time` is `HH:MM` or `HH:MM:SS`.  The wall
/// time is interpreted as if read at the given offset: 10:00 at UTC+02:00 is
/// 08:00 UTC, so the offset is subtracted.
pub fn wall_time_with_utc_offset_to_unix_ms(
    date: &str,
    time: &str,
    offset_minutes: i64,
) -> Result<i64> {
    let date = parse_iso_date(date)?;
    let time = parse_hms(time)?;

    let wall = NaiveDateTime::new(date, time);
    Ok(wall.and_utc().timestamp_millis() - offset_minutes * 60_000)
}

fn parse_iso_date(raw: &str) -> Result<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(InvalidArgument::Empty { name: "date" });
    }

    // chrono's numeric fields are lenient about width; enforce the strict
    // 4-2-2 shape before handing over.
    let strict_shape = trimmed.len() == 10
        && trimmed
            .bytes()
            .enumerate()
            .all(|(i, b)| if i == 4 || i == 7 { b == b'-' } else { b.is_ascii_digit() });
    if !strict_shape {
        return Err(InvalidArgument::BadFormat {
            name: "date",
            expected: "YYYY-MM-DD",
        });
    }

    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").map_err(|_| InvalidArgument::BadFormat {
        name: "date",
        expected: "a valid calendar date",
    })
}

fn parse_hms(raw: &str) -> Result<NaiveTime> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(InvalidArgument::Empty { name: "time" });
    }

    let format = if trimmed.matches(':').count() == 2 {
        "%H:%M:%S"
    } else {
        "%H:%M"
    };
    NaiveTime::parse_from_str(trimmed, format).map_err(|_| InvalidArgument::BadFormat {
        name: "time",
        expected: "HH:MM or HH:MM:SS",
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unix_ms_truncates_to_whole_seconds() {
        assert_eq!(unix_ms_to_utc_seconds_of_day(1_000.0).unwrap(), 1.0);
        assert_eq!(unix_ms_to_utc_seconds_of_day(1_999.0).unwrap(), 1.0);
    }

    #[test]
    fn unix_ms_wraps_into_the_day() {
        // 1970-01-02T00:00:01Z
        assert_eq!(unix_ms_to_utc_seconds_of_day(86_401_000.0).unwrap(), 1.0);
        // 1 ms before the epoch truncates to second -1, i.e. 23:59:59.
        assert_eq!(unix_ms_to_utc_seconds_of_day(-1.0).unwrap(), 86_399.0);
    }

    #[test]
    fn precise_variant_keeps_the_fraction() {
        assert_eq!(
            unix_ms_to_utc_seconds_of_day_precise(1_500.0).unwrap(),
            1.5
        );
        assert_eq!(
            unix_ms_to_utc_seconds_of_day_precise(-500.0).unwrap(),
            86_399.5
        );
    }

    #[test]
    fn blank_longitude_means_no_longitude() {
        assert_eq!(parse_longitude_degrees("").unwrap(), None);
        assert_eq!(parse_longitude_degrees("   ").unwrap(), None);
    }

    #[test]
    fn longitude_parses_and_clamps() {
        assert_eq!(parse_longitude_degrees(" 12.5 ").unwrap(), Some(12.5));
        assert_eq!(parse_longitude_degrees("200").unwrap(), Some(180.0));
        assert_eq!(parse_longitude_degrees("-200").unwrap(), Some(-180.0));
    }

    #[test]
    fn longitude_rejects_garbage_and_infinities() {
        assert_eq!(
            parse_longitude_degrees("east"),
            Err(InvalidArgument::BadFormat {
                name: "longitude",
                expected: "a decimal number",
            })
        );
        // "inf" parses as an f64 but is not a usable longitude.
        assert_eq!(
            parse_longitude_degrees("inf"),
            Err(InvalidArgument::NonFinite { name: "longitude" })
        );
    }

    #[test]
    fn unix_value_parsing_respects_the_unit() {
        assert_eq!(
            parse_unix_value_to_unix_ms("1700000000", UnixUnit::Seconds).unwrap(),
            1_700_000_000_000
        );
        assert_eq!(
            parse_unix_value_to_unix_ms(" 1700000000000 ", UnixUnit::Milliseconds).unwrap(),
            1_700_000_000_000
        );
        assert_eq!(
            parse_unix_value_to_unix_ms("-5", UnixUnit::Seconds).unwrap(),
            -5_000
        );
    }

    #[test]
    fn unix_value_rejects_blank_and_non_integers() {
        assert_eq!(
            parse_unix_value_to_unix_ms("", UnixUnit::Seconds),
            Err(InvalidArgument::Empty { name: "unix value" })
        );
        assert!(parse_unix_value_to_unix_ms("12.5", UnixUnit::Seconds).is_err());
        assert!(parse_unix_value_to_unix_ms("12s", UnixUnit::Milliseconds).is_err());
    }

    #[test]
    fn unix_value_overflow_is_reported_not_wrapped() {
        let huge = i64::MAX.to_string();
        assert_eq!(
            parse_unix_value_to_unix_ms(&huge, UnixUnit::Seconds),
            Err(InvalidArgument::Unrepresentable { name: "unix value" })
        );
    }

    #[test]
    fn wall_time_subtracts_the_offset() {
        // 10:00 at UTC+02:00 is 08:00 UTC on the same day.
        let ms = wall_time_with_utc_offset_to_unix_ms("2024-01-01", "10:00", 120).unwrap();
        assert_eq!(ms, 1_704_096_000_000);
    }

    #[test]
    fn wall_time_accepts_seconds_and_negative_offsets() {
        let ms = wall_time_with_utc_offset_to_unix_ms("2024-01-01", "00:00:30", 0).unwrap();
        assert_eq!(ms, 1_704_067_230_000);

        let ms = wall_time_with_utc_offset_to_unix_ms("2024-01-01", "00:00", -60).unwrap();
        assert_eq!(ms, 1_704_070_800_000);
    }

    #[test]
    fn wall_time_rejects_malformed_inputs() {
        assert!(wall_time_with_utc_offset_to_unix_ms("2024/01/01", "10:00", 0).is_err());
        assert!(wall_time_with_utc_offset_to_unix_ms("2024-1-1", "10:00", 0).is_err());
        assert!(wall_time_with_utc_offset_to_unix_ms("2024-02-30", "10:00", 0).is_err());
        assert!(wall_time_with_utc_offset_to_unix_ms("2024-01-01", "25:00", 0).is_err());
        assert!(wall_time_with_utc_offset_to_unix_ms("2024-01-01", "10:61", 0).is_err());
        assert_eq!(
            wall_time_with_utc_offset_to_unix_ms("", "10:00", 0),
            Err(InvalidArgument::Empty { name: "date" })
        );
        assert_eq!(
            wall_time_with_utc_offset_to_unix_ms("2024-01-01", "", 0),
            Err(InvalidArgument::Empty { name: "time" })
        );
    }
}

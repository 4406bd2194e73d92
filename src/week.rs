// SPDX-License-Identifier: AGPL-3.0-or-later

//! Ten-day-week calendar helper.
//!
//! Companion calendar to the decimal clock: the UTC day-of-year is split
//! into ten-day weeks, numbered from zero.  A plain divmod — the year is
//! whatever `chrono` says it is, and the final short week is simply shorter.

use chrono::{DateTime, Datelike, Utc};
use std::fmt;

use crate::error::{ensure_finite, InvalidArgument, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A date in the ten-day-week calendar.
///
/// Renders as `YYYY(WW.D)` via [`Display`](fmt::Display), with the week
/// zero-padded to two digits.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TenDayWeekDate {
    pub year: i32,
    /// Ten-day week within the year, `0..=36`.
    pub week: u32,
    /// Day within the week, `0..=9`.
    pub day: u32,
}

impl TenDayWeekDate {
    /// Ten-day-week date of a Unix-epoch millisecond timestamp, in UTC.
    pub fn from_unix_ms(unix_ms: f64) -> Result<Self> {
        let ms = ensure_finite(unix_ms, "unix_ms")?;
        let datetime = DateTime::<Utc>::from_timestamp_millis(ms.floor() as i64)
            .ok_or(InvalidArgument::Unrepresentable { name: "unix_ms" })?;

        let day_of_year = datetime.ordinal0();
        Ok(Self {
            year: datetime.year(),
            week: day_of_year / 10,
            day: day_of_year % 10,
        })
    }
}

impl fmt::Display for TenDayWeekDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:02}.{})", self.year, self.week, self.day)
    }
}

// SPDX-License-Identifier: AGPL-3.0-or-later

//! Decimal Time Module
//!
//! Primitives for a decimal civil day: **96 hours of 900 SI seconds**, each
//! hour carved into short minutes with a deliberately overlapping
//! **crossover minute** — the first minute slot of every hour can equally be
//! read as the tail minute of the hour before it.  The crate maps a plain
//! "seconds since UTC midnight" scalar onto that grid, resolves both
//! readings, formats them, and provides the small converters around the
//! engine (Unix timestamps, wall clock + UTC offset, solar noon from
//! longitude, ten-day weeks).
//!
//! Everything is a pure function over its arguments: no stored state, no
//! I/O, no clocks.  Callers feed in a seconds-of-day value on every tick and
//! render what comes back.
//!
//! # Core types
//!
//! - [`DecimalParts<S>`] — an instant broken onto the decimal grid of a
//!   [`MinuteScheme`] marker `S`.
//! - [`MinuteScheme`] — trait defining a minute scheme (minute length,
//!   crossover index, display base).
//! - [`DecimalLabel`] / [`LabelReading`] — renderable labels, primary plus
//!   the alternate crossover reading.
//! - [`LabelStyle`] / [`Visibility`] — display-style selection.
//! - [`TenDayWeekDate`] — companion ten-day-week calendar date.
//! - [`InvalidArgument`] — the single error kind.
//!
//! # Minute schemes
//!
//! The following markers implement [`MinuteScheme`]:
//!
//! | Marker | Minute | Regular slots | Crossover index |
//! |--------|--------|---------------|-----------------|
//! | [`Hecto`] | 100 s | 9 (0–8) | 9 |
//! | [`Nona`]  | 90 s  | 10 (0–9) | 10 |
//!
//! [`Hecto`] is the system of record; the [`Parts`] and [`labels`] aliases
//! below use it.
//!
//! # The crossover window
//!
//! `labels(0.0)` — midnight — reads either as `00:0:00` or as `95:9:00`: the
//! first 100 seconds of every hour belong to both the new hour and the old
//! one.  Both labels denote the same physical instant; which one a clock
//! face shows is a presentation choice, not a model ambiguity.
//!
//! ```
//! use decitime::{format_label, LabelStyle, Parts, Visibility};
//!
//! let parts = Parts::from_utc_seconds_of_day(28_800.0)?; // 08:00 UTC
//! let reading = parts.labels();
//!
//! assert_eq!(reading.primary.hour, 32);
//! assert!(reading.is_overlap_window);
//! assert_eq!(
//!     format_label(&reading.primary, LabelStyle::Brackets, Visibility::ALL),
//!     "32(0)00"
//! );
//! # Ok::<(), decitime::InvalidArgument>(())
//! ```

mod convert;
mod error;
mod label;
mod parts;
mod scheme;
mod solar;
mod week;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use convert::{
    parse_longitude_degrees, parse_unix_value_to_unix_ms, unix_ms_to_utc_seconds_of_day,
    unix_ms_to_utc_seconds_of_day_precise, wall_time_with_utc_offset_to_unix_ms, UnixUnit,
};
pub use error::{InvalidArgument, Result};
pub use label::{format_label, DecimalLabel, LabelReading, LabelStyle, Visibility};
pub use parts::DecimalParts;
pub use scheme::{Hecto, MinuteScheme, Nona, HOURS_PER_DAY, SECONDS_PER_DAY, SECONDS_PER_HOUR};
pub use solar::{format_signed_delta, shortest_signed_delta, solar_noon_utc_seconds_of_day};
pub use week::TenDayWeekDate;

// ── System-of-record aliases ──────────────────────────────────────────────

/// Decimal parts under the system-of-record [`Hecto`] scheme.
pub type Parts = DecimalParts<Hecto>;

/// Resolve both readings of a seconds-of-day value under the
/// system-of-record [`Hecto`] scheme.
pub fn labels(utc_seconds_of_day: f64) -> Result<LabelReading> {
    LabelReading::from_utc_seconds_of_day::<Hecto>(utc_seconds_of_day)
}

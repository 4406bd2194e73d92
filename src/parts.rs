// SPDX-License-Identifier: AGPL-3.0-or-later

//! Decimal parts extraction.
//!
//! [`DecimalParts<S>`] is the core type of the crate.  It breaks a single
//! "seconds since UTC midnight" scalar onto the decimal grid of a
//! [`MinuteScheme`] marker `S`: hour index, minute slot, second within the
//! minute, and whether the instant sits inside the **overlap window** (the
//! first minute slot of the hour, which doubles as the previous hour's
//! crossover minute).
//!
//! Extraction is a pure mapping recomputed on every call: there is no stored
//! clock state anywhere in the crate.  `PhantomData` tags the scheme at the
//! type level, so `DecimalParts<S>` costs nothing over its scalar fields.

use qtty::Seconds;
use std::marker::PhantomData;

use crate::error::{ensure_finite, Result};
use crate::scheme::{MinuteScheme, SECONDS_PER_DAY, SECONDS_PER_HOUR};

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// One instant of the day, broken onto the decimal grid of scheme `S`.
///
/// # Invariants
///
/// - `0 ≤ seconds_of_day < 86 400` (fraction preserved)
/// - `0 ≤ hour_index < 96` and `hour_index = ⌊seconds_of_day / 900⌋`
/// - `0 ≤ seconds_into_hour < 900` (fraction preserved)
/// - `minute_index` and `second_in_minute` classify the *whole* seconds into
///   the hour; the fractional remainder never moves an instant across a
///   minute or overlap boundary
/// - `is_overlap_window ⇔ ⌊seconds_into_hour⌋ < S::SECONDS_PER_MINUTE`
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DecimalParts<S: MinuteScheme> {
    seconds_of_day: Seconds,
    hour_index: u32,
    seconds_into_hour: Seconds,
    minute_index: u32,
    second_in_minute: u32,
    is_overlap_window: bool,
    _scheme: PhantomData<S>,
}

impl<S: MinuteScheme> DecimalParts<S> {
    /// Break a UTC seconds-of-day value onto the decimal grid.
    ///
    /// The input may be negative or ≥ 86 400; it is normalized into
    /// `[0, 86 400)` by floored modulo, so the mapping is periodic over whole
    /// days.  Fractional seconds survive normalization and are retained in
    /// [`seconds_of_day`](Self::seconds_of_day) and
    /// [`seconds_into_hour`](Self::seconds_into_hour) for sub-second
    /// rendering, but minute and overlap classification always work on whole
    /// seconds.
    ///
    /// Fails with [`InvalidArgument::NonFinite`](crate::InvalidArgument) when
    /// the input is NaN or infinite.
    pub fn from_utc_seconds_of_day(utc_seconds_of_day: f64) -> Result<Self> {
        let value = ensure_finite(utc_seconds_of_day, "utc_seconds_of_day")?;

        let mut seconds = value.rem_euclid(SECONDS_PER_DAY as f64);
        // rem_euclid of a tiny negative value can round up to the modulus
        // itself; the normalized value must stay strictly below 86 400.
        if seconds >= SECONDS_PER_DAY as f64 {
            seconds = 0.0;
        }

        let hour_index = (seconds / SECONDS_PER_HOUR as f64).floor() as u32;
        let seconds_into_hour = seconds - f64::from(hour_index * SECONDS_PER_HOUR);

        let second_whole = seconds_into_hour.floor() as u32;
        let minute_index = second_whole / S::SECONDS_PER_MINUTE;
        let second_in_minute = second_whole - minute_index * S::SECONDS_PER_MINUTE;
        let is_overlap_window = second_whole < S::SECONDS_PER_MINUTE;

        Ok(Self {
            seconds_of_day: Seconds::new(seconds),
            hour_index,
            seconds_into_hour: Seconds::new(seconds_into_hour),
            minute_index,
            second_in_minute,
            is_overlap_window,
            _scheme: PhantomData,
        })
    }

    // ── accessors ─────────────────────────────────────────────────────

    /// Normalized seconds since UTC midnight, in `[0, 86 400)`.
    #[inline]
    pub const fn seconds_of_day(&self) -> Seconds {
        self.seconds_of_day
    }

    /// Decimal hour index, `0..96`.
    #[inline]
    pub const fn hour_index(&self) -> u32 {
        self.hour_index
    }

    /// Seconds elapsed inside the current hour, in `[0, 900)`, fraction kept.
    #[inline]
    pub const fn seconds_into_hour(&self) -> Seconds {
        self.seconds_into_hour
    }

    /// Minute slot of the whole second, `0..S::REGULAR_MINUTES`.
    #[inline]
    pub const fn minute_index(&self) -> u32 {
        self.minute_index
    }

    /// Whole second within the minute slot, `0..S::SECONDS_PER_MINUTE`.
    #[inline]
    pub const fn second_in_minute(&self) -> u32 {
        self.second_in_minute
    }

    /// Whether the instant sits in the crossover window — the first minute
    /// slot of the hour, which can equally be read as the previous hour's
    /// crossover minute.
    #[inline]
    pub const fn is_overlap_window(&self) -> bool {
        self.is_overlap_window
    }

    // ── continuous helpers for analogue rendering ─────────────────────

    /// Continuous position within the current hour, in `[0, 1)`.
    #[inline]
    pub fn fraction_of_hour(&self) -> f64 {
        self.seconds_into_hour.value() / SECONDS_PER_HOUR as f64
    }

    /// Sub-second fraction of the current instant, in `[0, 1)`.
    #[inline]
    pub fn subsecond(&self) -> f64 {
        self.seconds_into_hour.value().fract()
    }
}

// ── Serde ─────────────────────────────────────────────────────────────────
//
// The parts are fully derived from `seconds_of_day`, so that scalar is the
// whole serial form; deserialization re-runs the extraction.

#[cfg(feature = "serde")]
impl<S: MinuteScheme> Serialize for DecimalParts<S> {
    fn serialize<Ser>(&self, serializer: Ser) -> core::result::Result<Ser::Ok, Ser::Error>
    where
        Ser: Serializer,
    {
        serializer.serialize_f64(self.seconds_of_day.value())
    }
}

#[cfg(feature = "serde")]
impl<'de, S: MinuteScheme> Deserialize<'de> for DecimalParts<S> {
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let v = f64::deserialize(deserializer)?;
        Self::from_utc_seconds_of_day(v).map_err(serde::de::Error::custom)
    }
}

// SPDX-License-Identifier: AGPL-3.0-or-later

//! Minute-scheme marker types.
//!
//! Each zero-sized type identifies one way of carving the 900-second decimal
//! hour into minutes.  Two incompatible schemes exist historically; both keep
//! the same day grid (96 hours of 900 s) and differ only in the minute length
//! and therefore in the index of the **crossover minute** — the extra tail
//! minute of an hour that overlaps the first minute of the next one.
//!
//! | Marker | Minute length | Regular slots | Crossover index |
//! |--------|---------------|---------------|-----------------|
//! | [`Hecto`] | 100 s | 9 (0–8) | 9 |
//! | [`Nona`]  | 90 s  | 10 (0–9) | 10 |
//!
//! [`Hecto`] is the system of record; the crate-level aliases use it.
//! Switching a call-site to the other scheme is a one-line type-parameter
//! change, never an edit to arithmetic.

/// SI seconds in one civil day.
pub const SECONDS_PER_DAY: u32 = 86_400;

/// SI seconds in one decimal hour.
pub const SECONDS_PER_HOUR: u32 = 900;

/// Decimal hours in one day.
pub const HOURS_PER_DAY: u32 = 96;

/// Marker trait for minute schemes.
///
/// A **minute scheme** defines how the 900-second hour is split into minute
/// slots, and where the crossover minute sits.  Implementors are zero-sized
/// markers; all values are compile-time constants.
///
/// Invariant: `REGULAR_MINUTES * SECONDS_PER_MINUTE == 900`, so the regular
/// slots tile the hour exactly and the crossover reading never lands outside
/// it.
pub trait MinuteScheme: Copy + Clone + std::fmt::Debug + PartialEq + 'static {
    /// Display label used in diagnostics.
    const LABEL: &'static str;

    /// Length of one decimal minute in whole seconds.
    const SECONDS_PER_MINUTE: u32;

    /// Number of regular minute slots per hour (indices `0..REGULAR_MINUTES`).
    const REGULAR_MINUTES: u32;

    /// Index of the crossover minute: one past the last regular slot.
    ///
    /// The first `SECONDS_PER_MINUTE` seconds of every hour can also be read
    /// as minute `CROSSOVER_MINUTE` of the *previous* hour.
    const CROSSOVER_MINUTE: u32 = Self::REGULAR_MINUTES;

    /// First displayed hour/minute number (0-based or 1-based numbering).
    const DISPLAY_BASE: u32;
}

/// Hecto scheme — 100-second minutes.
///
/// Nine regular minutes (0–8) tile the hour; minute 9 is the crossover
/// reading.  System of record for this crate.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Hecto;

impl MinuteScheme for Hecto {
    const LABEL: &'static str = "hecto";
    const SECONDS_PER_MINUTE: u32 = 100;
    const REGULAR_MINUTES: u32 = 9;
    const DISPLAY_BASE: u32 = 0;
}

/// Nona scheme — 90-second minutes.
///
/// Ten regular minutes (0–9) tile the hour; minute 10 is the crossover
/// reading.  Kept as the alternate historical variant.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Nona;

impl MinuteScheme for Nona {
    const LABEL: &'static str = "nona";
    const SECONDS_PER_MINUTE: u32 = 90;
    const REGULAR_MINUTES: u32 = 10;
    const DISPLAY_BASE: u32 = 0;
}

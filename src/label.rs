// SPDX-License-Identifier: AGPL-3.0-or-later

//! Dual-label resolution and display formatting.
//!
//! During the crossover window a single physical instant has two legitimate
//! readings: the first minute of the current hour (**primary**) or the
//! crossover minute of the previous hour (**alternate**).  Outside the window
//! only the primary reading exists.  [`LabelReading`] carries both, and the
//! formatters render a [`DecimalLabel`] in either of the two historical
//! display styles.

use std::fmt;

use crate::error::Result;
use crate::parts::DecimalParts;
use crate::scheme::{MinuteScheme, HOURS_PER_DAY};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A renderable point in decimal time.
///
/// Plain display numbers, already shifted by the scheme's display base.
/// Two labels may denote the same instant; see [`LabelReading`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DecimalLabel {
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

impl fmt::Display for DecimalLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{}:{:02}", self.hour, self.minute, self.second)
    }
}

/// Both readings of one instant.
///
/// `alternate` is `Some` exactly when the instant falls inside the crossover
/// window; it carries the same second with the previous hour (wrapping 0 →
/// 95) and the scheme's crossover minute index.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LabelReading {
    pub primary: DecimalLabel,
    pub alternate: Option<DecimalLabel>,
    pub is_overlap_window: bool,
}

impl LabelReading {
    /// Resolve both readings of a UTC seconds-of-day value under scheme `S`.
    ///
    /// Shorthand for extracting [`DecimalParts`] and calling
    /// [`labels`](DecimalParts::labels) on the result.
    pub fn from_utc_seconds_of_day<S: MinuteScheme>(utc_seconds_of_day: f64) -> Result<Self> {
        Ok(DecimalParts::<S>::from_utc_seconds_of_day(utc_seconds_of_day)?.labels())
    }
}

impl<S: MinuteScheme> DecimalParts<S> {
    /// Resolve the primary and (inside the overlap window) alternate labels
    /// for this instant.
    pub fn labels(&self) -> LabelReading {
        let primary = DecimalLabel {
            hour: S::DISPLAY_BASE + self.hour_index(),
            minute: S::DISPLAY_BASE + self.minute_index(),
            second: self.second_in_minute(),
        };

        let alternate = if self.is_overlap_window() {
            // Previous hour, wrapping midnight back to the last hour of the
            // day; same second, crossover minute slot.
            let previous_hour = (self.hour_index() + HOURS_PER_DAY - 1) % HOURS_PER_DAY;
            Some(DecimalLabel {
                hour: S::DISPLAY_BASE + previous_hour,
                minute: S::DISPLAY_BASE + S::CROSSOVER_MINUTE,
                second: self.second_in_minute(),
            })
        } else {
            None
        };

        LabelReading {
            primary,
            alternate,
            is_overlap_window: self.is_overlap_window(),
        }
    }
}

/// Which of the two historical display styles to render.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LabelStyle {
    /// `HH:M[:SS]` — hour and seconds zero-padded, minute a bare digit.
    Colon,
    /// `HH(M)SS` — minute always parenthesised, hidden fields omitted.
    Brackets,
}

/// Which label fields the caller wants rendered.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Visibility {
    pub show_hour: bool,
    pub show_minute: bool,
    pub show_seconds: bool,
}

impl Visibility {
    /// Everything shown.
    pub const ALL: Self = Self {
        show_hour: true,
        show_minute: true,
        show_seconds: true,
    };
}

impl Default for Visibility {
    fn default() -> Self {
        Self::ALL
    }
}

/// Render a label in the requested style.
///
/// Total over all inputs: any combination of visibility flags is accepted and
/// the result is never empty in colon style (hour-only fallback when both
/// hour and minute are hidden).
pub fn format_label(label: &DecimalLabel, style: LabelStyle, visibility: Visibility) -> String {
    match style {
        LabelStyle::Colon => format_colon(label, visibility),
        LabelStyle::Brackets => format_brackets(label, visibility),
    }
}

fn format_colon(label: &DecimalLabel, v: Visibility) -> String {
    // Minutes stay a bare digit: the minute domain is a single digit wide.
    match (v.show_hour, v.show_minute, v.show_seconds) {
        (true, true, true) => format!("{:02}:{}:{:02}", label.hour, label.minute, label.second),
        (true, true, false) => format!("{:02}:{}", label.hour, label.minute),
        (false, true, true) => format!("{}:{:02}", label.minute, label.second),
        (false, true, false) => format!("{}", label.minute),
        // Hour-only fallback, also taken when hour and minute are both hidden.
        _ => format!("{:02}", label.hour),
    }
}

fn format_brackets(label: &DecimalLabel, v: Visibility) -> String {
    let hour = if v.show_hour {
        format!("{:02}", label.hour)
    } else {
        String::new()
    };
    let minute = if v.show_minute {
        label.minute.to_string()
    } else {
        String::new()
    };

    // The parentheses are the minute "slot" and stay even when the minute
    // itself is hidden.
    if v.show_seconds {
        format!("{hour}({minute}){:02}", label.second)
    } else {
        format!("{hour}({minute})")
    }
}

// SPDX-License-Identifier: AGPL-3.0-or-later

//! Crate error type.
//!
//! Every fallible function in this crate fails for exactly one reason: the
//! caller handed it an argument the decimal-time model cannot interpret.
//! [`InvalidArgument`] enumerates the concrete shapes that takes.  Errors are
//! raised synchronously and atomically — no function produces a partial
//! result, and nothing is logged or swallowed inside the crate.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = core::result::Result<T, InvalidArgument>;

/// An argument this crate refuses to interpret.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidArgument {
    /// A numeric argument was NaN or infinite.
    #[error("{name} must be a finite number")]
    NonFinite { name: &'static str },

    /// A required string argument was empty after trimming.
    #[error("{name} is required")]
    Empty { name: &'static str },

    /// A string argument did not match the expected shape.
    #[error("{name} must be {expected}")]
    BadFormat {
        name: &'static str,
        expected: &'static str,
    },

    /// A value fell outside the range the underlying representation covers.
    #[error("{name} is outside the representable range")]
    Unrepresentable { name: &'static str },
}

/// Guard used by every numeric entry point.
#[inline]
pub(crate) fn ensure_finite(value: f64, name: &'static str) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(InvalidArgument::NonFinite { name })
    }
}

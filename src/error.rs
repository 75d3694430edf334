// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Error type for chart construction.

use std::num::ParseIntError;
use thiserror::Error;

/// Errors raised while building a [`ChartInput`](crate::ChartInput).
///
/// Once an input exists, computing its chart cannot fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ChartError {
    /// A date or time string did not split into the expected fields.
    #[error("malformed {what} {input:?}: expected {expected} fields separated by '{separator}', found {found}")]
    FieldCount {
        what: &'static str,
        input: String,
        separator: char,
        expected: usize,
        found: usize,
    },

    /// A date or time field is not an integer.
    #[error("malformed {what} {input:?}: field {field:?} is not an integer")]
    InvalidField {
        what: &'static str,
        input: String,
        field: String,
        #[source]
        source: ParseIntError,
    },

    /// The fields do not name a real civil date-time.
    ///
    /// Only raised by the explicit UTC conversions on
    /// [`ChartInput`](crate::ChartInput).
    #[error("{year:04}-{month:02}-{day:02} {hour:02}:{minute:02} is not a valid civil date-time")]
    InvalidCivilTime {
        year: i32,
        month: i32,
        day: i32,
        hour: i32,
        minute: i32,
    },
}

impl ChartError {
    /// `true` for malformed date/time strings.
    pub fn is_parse_error(&self) -> bool {
        matches!(self, Self::FieldCount { .. } | Self::InvalidField { .. })
    }
}

// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Julian Day instant and civil-calendar conversion.
//!
//! [`JulianDay`] stores a single [`Days`] quantity: a continuous day count
//! referenced to noon, following the convention of Meeus, *Astronomical
//! Algorithms*, ch. 7. It is `Copy` and layout-identical to an `f64`.
//!
//! No time-scale bookkeeping happens here. The calendar fields handed to
//! [`JulianDay::from_calendar`] are used as they are; whichever time
//! reference the caller picked is the one the result lives in.

use qtty::*;
use std::ops::{Add, Sub};

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A point on the Julian Day axis.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct JulianDay {
    quantity: Days,
}

impl JulianDay {
    /// J2000.0 epoch: 2000-01-01T12:00:00 (JD 2 451 545.0).
    pub const J2000: Self = Self::new(2_451_545.0);

    /// One Julian century expressed in days.
    pub const JULIAN_CENTURY: Days = Days::new(36_525.0);

    // ── constructors ──────────────────────────────────────────────────

    /// Create from a raw day count.
    #[inline]
    pub const fn new(value: f64) -> Self {
        Self {
            quantity: Days::new(value),
        }
    }

    /// Create from a [`Days`] quantity.
    #[inline]
    pub const fn from_days(days: Days) -> Self {
        Self { quantity: days }
    }

    /// Julian Day of a proleptic Gregorian calendar date.
    ///
    /// `day_with_fraction` is the day of the month plus the elapsed fraction
    /// of that day, e.g. `1.5` for noon on the first. January and February
    /// count as months 13 and 14 of the previous year, and the Gregorian
    /// century correction `B = 2 − A + ⌊A/4⌋` is always applied.
    ///
    /// Inputs are not range-checked: an out-of-range month or day still
    /// yields a well-defined number.
    ///
    /// ```
    /// use natal::JulianDay;
    ///
    /// assert_eq!(JulianDay::from_calendar(2000, 1, 1.5), JulianDay::J2000);
    /// ```
    pub fn from_calendar(year: i32, month: i32, day_with_fraction: f64) -> Self {
        // f64 keeps the shifts below exact for every i32 field
        let (y, m) = if month <= 2 {
            (f64::from(year) - 1.0, f64::from(month) + 12.0)
        } else {
            (f64::from(year), f64::from(month))
        };
        let a = (y / 100.0).floor();
        let b = 2.0 - a + (a / 4.0).floor();

        let jd = (365.25 * (y + 4716.0)).floor()
            + (30.6001 * (m + 1.0)).floor()
            + day_with_fraction
            + b
            - 1524.5;
        Self::new(jd)
    }

    // ── accessors ─────────────────────────────────────────────────────

    /// The underlying quantity in days.
    #[inline]
    pub const fn quantity(&self) -> Days {
        self.quantity
    }

    /// The underlying scalar value in days.
    #[inline]
    pub const fn value(&self) -> f64 {
        self.quantity.value()
    }

    /// Days elapsed since J2000.0 (negative before the epoch).
    #[inline]
    pub fn days_since_j2000(&self) -> Days {
        *self - Self::J2000
    }

    /// Julian centuries since J2000.0, the `T` argument of every series
    /// in this crate.
    #[inline]
    pub fn julian_centuries(&self) -> Centuries {
        Centuries::new(
            (self.days_since_j2000() / Self::JULIAN_CENTURY)
                .simplify()
                .value(),
        )
    }
}

// ── Display ───────────────────────────────────────────────────────────────

impl std::fmt::Display for JulianDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "JD {:.5}", self.value())
    }
}

// ── Serde ─────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl Serialize for JulianDay {
    fn serialize<Ser>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error>
    where
        Ser: Serializer,
    {
        serializer.serialize_f64(self.value())
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for JulianDay {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let v = f64::deserialize(deserializer)?;
        Ok(Self::new(v))
    }
}

// ── Arithmetic ────────────────────────────────────────────────────────────

impl Add<Days> for JulianDay {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Days) -> Self::Output {
        Self::from_days(self.quantity + rhs)
    }
}

impl Sub<Days> for JulianDay {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Days) -> Self::Output {
        Self::from_days(self.quantity - rhs)
    }
}

impl Sub for JulianDay {
    type Output = Days;
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        self.quantity - rhs.quantity
    }
}

// ── From/Into Days ────────────────────────────────────────────────────────

impl From<Days> for JulianDay {
    #[inline]
    fn from(days: Days) -> Self {
        Self::from_days(days)
    }
}

impl From<JulianDay> for Days {
    #[inline]
    fn from(jd: JulianDay) -> Self {
        jd.quantity
    }
}

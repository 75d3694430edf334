// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Chart calculation.
//!
//! A [`ChartInput`] carries the birth date, time and place.
//! [`calculate`] turns it into a [`ChartResult`]:
//!
//! ```text
//! input → Julian Day → Sun, Moon → placeholder bodies → Ascendant
//! ```
//!
//! [`compute`] is the string front-end: it parses `"YYYY-MM-DD"` and
//! `"HH:MM"` first and fails only if they are malformed.
//!
//! The clock time is fed to the Julian Day formula as given. Converting a
//! local civil time to UTC is a separate, explicit step
//! ([`ChartInput::to_utc`]).

use chrono::{
    DateTime, Datelike, FixedOffset, NaiveDate, NaiveDateTime, TimeZone, Timelike, Utc,
};
use qtty::Degrees;

use crate::angle::normalize;
use crate::ascendant::ascendant;
use crate::body::{Body, BodyLongitudes};
use crate::error::ChartError;
use crate::houses::{equal_house_cusps, house_of, HOUSE_COUNT};
use crate::lunar::moon_longitude;
use crate::solar::sun_longitude;
use crate::zodiac::ZodiacSign;
use crate::JulianDay;

#[cfg(feature = "serde")]
use serde::{ser::SerializeStruct, Deserialize, Deserializer, Serialize, Serializer};

// ═══════════════════════════════════════════════════════════════════════════
// ChartInput
// ═══════════════════════════════════════════════════════════════════════════

/// Birth data for one chart.
///
/// Calendar fields are not range-checked; any integers produce a
/// well-defined Julian Day.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ChartInput {
    year: i32,
    month: i32,
    day: i32,
    hour: i32,
    minute: i32,
    longitude: Degrees,
    latitude: Degrees,
}

impl ChartInput {
    /// Build an input from already-split fields.
    pub fn new(
        (year, month, day): (i32, i32, i32),
        (hour, minute): (i32, i32),
        longitude: Degrees,
        latitude: Degrees,
    ) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            longitude,
            latitude,
        }
    }

    // ── accessors ─────────────────────────────────────────────────────

    #[inline]
    pub const fn year(&self) -> i32 {
        self.year
    }

    #[inline]
    pub const fn month(&self) -> i32 {
        self.month
    }

    #[inline]
    pub const fn day(&self) -> i32 {
        self.day
    }

    #[inline]
    pub const fn hour(&self) -> i32 {
        self.hour
    }

    #[inline]
    pub const fn minute(&self) -> i32 {
        self.minute
    }

    /// Geographic longitude, east positive.
    #[inline]
    pub const fn longitude(&self) -> Degrees {
        self.longitude
    }

    /// Geographic latitude, north positive.
    #[inline]
    pub const fn latitude(&self) -> Degrees {
        self.latitude
    }

    // ── parsing and conversion ────────────────────────────────────────

    /// Parse a `"YYYY-MM-DD"` date and an `"HH:MM"` 24-hour time.
    ///
    /// ```
    /// use natal::ChartInput;
    /// use qtty::Degrees;
    ///
    /// let input = ChartInput::parse("1990-07-15", "08:30", Degrees::new(-74.0), Degrees::new(40.7))?;
    /// assert_eq!((input.year(), input.month(), input.day()), (1990, 7, 15));
    /// assert!(ChartInput::parse("1990/07/15", "08:30", Degrees::new(0.0), Degrees::new(0.0)).is_err());
    /// # Ok::<(), natal::ChartError>(())
    /// ```
    pub fn parse(
        date: &str,
        time: &str,
        longitude: Degrees,
        latitude: Degrees,
    ) -> Result<Self, ChartError> {
        let [year, month, day] = split_fields("date", date, '-')?;
        let [hour, minute] = split_fields("time", time, ':')?;
        Ok(Self::new((year, month, day), (hour, minute), longitude, latitude))
    }

    /// Build an input from a UTC timestamp. Seconds are dropped.
    pub fn from_utc(datetime: DateTime<Utc>, longitude: Degrees, latitude: Degrees) -> Self {
        Self::new(
            (datetime.year(), datetime.month() as i32, datetime.day() as i32),
            (datetime.hour() as i32, datetime.minute() as i32),
            longitude,
            latitude,
        )
    }

    /// Reinterpret the fields as civil time at `offset` and shift them to UTC.
    ///
    /// [`calculate`] never does this on its own; call it first when the
    /// fields hold a local clock reading.
    pub fn to_utc(&self, offset: FixedOffset) -> Result<Self, ChartError> {
        let local = self
            .naive_datetime()
            .ok_or_else(|| self.invalid_civil_time())?;
        let utc = offset
            .from_local_datetime(&local)
            .single()
            .ok_or_else(|| self.invalid_civil_time())?
            .with_timezone(&Utc);
        Ok(Self::from_utc(utc, self.longitude, self.latitude))
    }

    /// Fraction of the day elapsed at `hour:minute`.
    #[inline]
    pub fn day_fraction(&self) -> f64 {
        (f64::from(self.hour) + f64::from(self.minute) / 60.0) / 24.0
    }

    /// Julian Day of the input instant, with no time-zone adjustment.
    #[inline]
    pub fn julian_day(&self) -> JulianDay {
        JulianDay::from_calendar(
            self.year,
            self.month,
            f64::from(self.day) + self.day_fraction(),
        )
    }

    fn naive_datetime(&self) -> Option<NaiveDateTime> {
        let date = NaiveDate::from_ymd_opt(
            self.year,
            u32::try_from(self.month).ok()?,
            u32::try_from(self.day).ok()?,
        )?;
        date.and_hms_opt(
            u32::try_from(self.hour).ok()?,
            u32::try_from(self.minute).ok()?,
            0,
        )
    }

    fn invalid_civil_time(&self) -> ChartError {
        ChartError::InvalidCivilTime {
            year: self.year,
            month: self.month,
            day: self.day,
            hour: self.hour,
            minute: self.minute,
        }
    }
}

/// Split `input` on `separator` into exactly `N` integers.
fn split_fields<const N: usize>(
    what: &'static str,
    input: &str,
    separator: char,
) -> Result<[i32; N], ChartError> {
    let parts: Vec<&str> = input.split(separator).collect();
    if parts.len() != N {
        return Err(ChartError::FieldCount {
            what,
            input: input.to_owned(),
            separator,
            expected: N,
            found: parts.len(),
        });
    }

    let mut fields = [0; N];
    for (slot, part) in fields.iter_mut().zip(&parts) {
        *slot = part.parse().map_err(|source| ChartError::InvalidField {
            what,
            input: input.to_owned(),
            field: (*part).to_owned(),
            source,
        })?;
    }
    Ok(fields)
}

// ═══════════════════════════════════════════════════════════════════════════
// ChartResult
// ═══════════════════════════════════════════════════════════════════════════

/// A computed chart.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ChartResult {
    julian_day: JulianDay,
    longitudes: BodyLongitudes,
    ascendant: Option<Degrees>,
}

impl ChartResult {
    /// Julian Day the chart was cast for.
    #[inline]
    pub fn julian_day(&self) -> JulianDay {
        self.julian_day
    }

    /// Longitudes of all ten bodies.
    #[inline]
    pub fn longitudes(&self) -> &BodyLongitudes {
        &self.longitudes
    }

    /// Longitude of a single body.
    #[inline]
    pub fn longitude(&self, body: Body) -> Degrees {
        self.longitudes.get(body)
    }

    /// Ascendant longitude; `None` at the geographic poles.
    #[inline]
    pub fn ascendant(&self) -> Option<Degrees> {
        self.ascendant
    }

    /// Sign occupied by `body`.
    pub fn sign_of(&self, body: Body) -> ZodiacSign {
        ZodiacSign::from_longitude(self.longitude(body))
    }

    /// Rising sign, if the Ascendant is defined.
    pub fn ascendant_sign(&self) -> Option<ZodiacSign> {
        self.ascendant.map(ZodiacSign::from_longitude)
    }

    /// Equal-house cusps starting at the Ascendant.
    pub fn house_cusps(&self) -> Option<[Degrees; HOUSE_COUNT]> {
        self.ascendant.map(equal_house_cusps)
    }

    /// Equal house (`1..=12`) occupied by `body`.
    pub fn house_of(&self, body: Body) -> Option<u8> {
        self.ascendant
            .map(|asc| house_of(self.longitude(body), asc))
    }
}

#[cfg(feature = "serde")]
impl Serialize for ChartResult {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut s = serializer.serialize_struct("ChartResult", 3)?;
        s.serialize_field("julian_day", &self.julian_day)?;
        s.serialize_field("longitudes", &self.longitudes)?;
        s.serialize_field("ascendant", &self.ascendant.map(|a| a.value()))?;
        s.end()
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for ChartResult {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            julian_day: JulianDay,
            longitudes: BodyLongitudes,
            ascendant: Option<f64>,
        }

        let raw = Raw::deserialize(deserializer)?;
        Ok(ChartResult {
            julian_day: raw.julian_day,
            longitudes: raw.longitudes,
            ascendant: raw.ascendant.map(Degrees::new),
        })
    }
}

#[cfg(feature = "serde")]
impl Serialize for ChartInput {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut s = serializer.serialize_struct("ChartInput", 7)?;
        s.serialize_field("year", &self.year)?;
        s.serialize_field("month", &self.month)?;
        s.serialize_field("day", &self.day)?;
        s.serialize_field("hour", &self.hour)?;
        s.serialize_field("minute", &self.minute)?;
        s.serialize_field("longitude", &self.longitude.value())?;
        s.serialize_field("latitude", &self.latitude.value())?;
        s.end()
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for ChartInput {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            year: i32,
            month: i32,
            day: i32,
            hour: i32,
            minute: i32,
            longitude: f64,
            latitude: f64,
        }

        let raw = Raw::deserialize(deserializer)?;
        Ok(ChartInput::new(
            (raw.year, raw.month, raw.day),
            (raw.hour, raw.minute),
            Degrees::new(raw.longitude),
            Degrees::new(raw.latitude),
        ))
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Engine
// ═══════════════════════════════════════════════════════════════════════════

/// Cast the chart for `input`.
pub fn calculate(input: &ChartInput) -> ChartResult {
    let jd = input.julian_day();
    let sun = sun_longitude(jd);
    let moon = moon_longitude(jd);

    let longitudes = BodyLongitudes::from_fn(|body| match body {
        Body::Moon => moon,
        // the Sun has no offset and keeps its own longitude
        other => other
            .solar_offset()
            .map_or(sun, |offset| normalize(Degrees::new(sun.value() + offset.value()))),
    });

    let ascendant = ascendant(jd, input.longitude(), input.latitude());
    log::debug!(
        "chart at {jd}: sun={:.4}° moon={:.4}° asc={:?}",
        sun.value(),
        moon.value(),
        ascendant.map(|a| a.value())
    );

    ChartResult {
        julian_day: jd,
        longitudes,
        ascendant,
    }
}

/// Parse the date and time strings, then cast the chart.
///
/// ```
/// use natal::{compute, Body};
/// use qtty::Degrees;
///
/// let chart = compute("2000-01-01", "12:00", Degrees::new(0.0), Degrees::new(51.5))?;
/// assert_eq!(chart.julian_day().value(), 2_451_545.0);
/// assert!(chart.longitude(Body::Sun).value() > 280.0);
/// # Ok::<(), natal::ChartError>(())
/// ```
pub fn compute(
    date: &str,
    time: &str,
    longitude: Degrees,
    latitude: Degrees,
) -> Result<ChartResult, ChartError> {
    let input = ChartInput::parse(date, time, longitude, latitude)?;
    Ok(calculate(&input))
}

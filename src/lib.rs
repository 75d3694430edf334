// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Natal chart module
//!
//! This crate casts an approximate astrological chart from a birth date,
//! clock time and geographic position, using classical closed-form
//! astronomy rather than a numerical ephemeris.
//!
//! # Pipeline
//!
//! | Step | Item |
//! |------|------|
//! | Julian Day | [`JulianDay::from_calendar`] |
//! | Obliquity of the ecliptic | [`obliquity::obliquity`] |
//! | Solar longitude | [`solar::sun_longitude`] |
//! | Lunar longitude | [`lunar::moon_longitude`] |
//! | Local sidereal time | [`sidereal::local_sidereal_time`] |
//! | Ascendant | [`ascendant::ascendant`] |
//! | Whole chart | [`calculate`] / [`compute`] |
//!
//! Every longitude is a [`qtty::Degrees`] in `[0°, 360°)`
//! (see [`angle::normalize`]).
//!
//! # Accuracy
//!
//! The Sun is good to about an arc-minute and the Moon to a few tenths of a
//! degree. Mercury through Pluto are **not** modelled: each sits at a fixed
//! offset from the Sun ([`Body::solar_offset`]). The clock time is used as
//! given; call [`ChartInput::to_utc`] first if it is a local reading.
//!
//! # Example
//!
//! ```
//! use natal::{compute, Body, ZodiacSign};
//! use qtty::Degrees;
//!
//! let chart = compute("1990-07-15", "08:30", Degrees::new(-74.0), Degrees::new(40.7))?;
//! assert_eq!(chart.sign_of(Body::Sun), ZodiacSign::Cancer);
//! assert_eq!(chart.house_cusps().map(|c| c.len()), Some(12));
//! # Ok::<(), natal::ChartError>(())
//! ```

pub mod angle;
pub mod ascendant;
mod body;
mod chart;
mod error;
pub mod houses;
mod julian_day;
pub mod lunar;
pub mod obliquity;
pub mod report;
pub mod sidereal;
pub mod solar;
pub mod zodiac;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use body::{Body, BodyLongitudes};
pub use chart::{calculate, compute, ChartInput, ChartResult};
pub use error::ChartError;
pub use julian_day::JulianDay;
pub use zodiac::{sign_index, sign_name, sign_symbol, ZodiacSign};

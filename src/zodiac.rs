// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Tropical zodiac signs.
//!
//! The ecliptic is split into twelve contiguous 30° bins starting at the
//! vernal equinox. [`sign_index`] accepts raw, unnormalised longitudes.

use qtty::Degrees;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Width of one sign in degrees.
pub const SIGN_WIDTH: f64 = 30.0;

/// One of the twelve tropical signs.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ZodiacSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

impl ZodiacSign {
    /// All signs in ecliptic order, Aries first.
    pub const ALL: [ZodiacSign; 12] = [
        ZodiacSign::Aries,
        ZodiacSign::Taurus,
        ZodiacSign::Gemini,
        ZodiacSign::Cancer,
        ZodiacSign::Leo,
        ZodiacSign::Virgo,
        ZodiacSign::Libra,
        ZodiacSign::Scorpio,
        ZodiacSign::Sagittarius,
        ZodiacSign::Capricorn,
        ZodiacSign::Aquarius,
        ZodiacSign::Pisces,
    ];

    /// Sign at position `index` of [`ZodiacSign::ALL`], if any.
    #[inline]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Sign containing `longitude`.
    #[inline]
    pub fn from_longitude(longitude: Degrees) -> Self {
        Self::ALL[sign_index(longitude)]
    }

    /// Position in [`ZodiacSign::ALL`], `0..=11`.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// English display name.
    pub const fn name(self) -> &'static str {
        match self {
            ZodiacSign::Aries => "Aries",
            ZodiacSign::Taurus => "Taurus",
            ZodiacSign::Gemini => "Gemini",
            ZodiacSign::Cancer => "Cancer",
            ZodiacSign::Leo => "Leo",
            ZodiacSign::Virgo => "Virgo",
            ZodiacSign::Libra => "Libra",
            ZodiacSign::Scorpio => "Scorpio",
            ZodiacSign::Sagittarius => "Sagittarius",
            ZodiacSign::Capricorn => "Capricorn",
            ZodiacSign::Aquarius => "Aquarius",
            ZodiacSign::Pisces => "Pisces",
        }
    }

    /// Short label drawn on the chart wheel.
    pub const fn symbol(self) -> &'static str {
        match self {
            ZodiacSign::Aries => "Ar",
            ZodiacSign::Taurus => "Ta",
            ZodiacSign::Gemini => "Ge",
            ZodiacSign::Cancer => "Cnc",
            ZodiacSign::Leo => "Le",
            ZodiacSign::Virgo => "Vi",
            ZodiacSign::Libra => "Li",
            ZodiacSign::Scorpio => "Sc",
            ZodiacSign::Sagittarius => "Sg",
            ZodiacSign::Capricorn => "Cp",
            ZodiacSign::Aquarius => "Aq",
            ZodiacSign::Pisces => "Pi",
        }
    }

    /// Unicode glyph (U+2648..U+2653).
    pub const fn glyph(self) -> char {
        match self {
            ZodiacSign::Aries => '♈',
            ZodiacSign::Taurus => '♉',
            ZodiacSign::Gemini => '♊',
            ZodiacSign::Cancer => '♋',
            ZodiacSign::Leo => '♌',
            ZodiacSign::Virgo => '♍',
            ZodiacSign::Libra => '♎',
            ZodiacSign::Scorpio => '♏',
            ZodiacSign::Sagittarius => '♐',
            ZodiacSign::Capricorn => '♑',
            ZodiacSign::Aquarius => '♒',
            ZodiacSign::Pisces => '♓',
        }
    }

    /// Longitude at which this sign begins.
    #[inline]
    pub fn start(self) -> Degrees {
        Degrees::new(self.index() as f64 * SIGN_WIDTH)
    }
}

impl fmt::Display for ZodiacSign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Index `0..=11` of the sign containing `longitude`.
///
/// Longitudes outside `[0°, 360°)` are folded in, negative ones included.
pub fn sign_index(longitude: Degrees) -> usize {
    let mut idx = (longitude.value() / SIGN_WIDTH).floor() as i64 % 12;
    if idx < 0 {
        idx += 12;
    }
    idx as usize
}

/// Display name of the sign at `index`, `None` past 11.
#[inline]
pub fn sign_name(index: usize) -> Option<&'static str> {
    ZodiacSign::from_index(index).map(ZodiacSign::name)
}

/// Short symbol of the sign at `index`, `None` past 11.
#[inline]
pub fn sign_symbol(index: usize) -> Option<&'static str> {
    ZodiacSign::from_index(index).map(ZodiacSign::symbol)
}

// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Truncated lunar longitude.
//!
//! Mean lunar longitude corrected by the five largest periodic terms of the
//! ELP-2000 longitude series (evection, variation, the elliptic term and its
//! harmonic, and the parallactic term). Typical error is a few tenths of a
//! degree.

use qtty::Degrees;

use crate::angle::normalize;
use crate::JulianDay;

/// Fundamental arguments of the lunar theory, all in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
struct LunarArguments {
    /// Moon's mean longitude L′.
    mean_longitude: f64,
    /// Sun's mean anomaly M. Not used by the truncated series.
    #[allow(dead_code)]
    sun_anomaly: f64,
    /// Moon's mean anomaly M′.
    moon_anomaly: f64,
    /// Mean elongation D.
    elongation: f64,
}

impl LunarArguments {
    fn at(jd: JulianDay) -> Self {
        let t = jd.julian_centuries().value();
        Self {
            mean_longitude: 218.3164477 + 481267.88123421 * t - 0.0015786 * t * t,
            sun_anomaly: 357.5291092 + 35999.0502909 * t,
            moon_anomaly: 134.9633964 + 477198.8675055 * t,
            elongation: 297.8501921 + 445267.1114034 * t,
        }
    }
}

/// Ecliptic longitude of the Moon at `jd`, in `[0°, 360°)`.
pub fn moon_longitude(jd: JulianDay) -> Degrees {
    let LunarArguments {
        mean_longitude: l0,
        moon_anomaly: mm,
        elongation: d,
        ..
    } = LunarArguments::at(jd);

    let lon = l0
        + 6.289 * mm.to_radians().sin()
        + 1.274 * (2.0 * d - mm).to_radians().sin()
        + 0.658 * (2.0 * d).to_radians().sin()
        - 0.214 * (2.0 * mm).to_radians().sin()
        - 0.11 * d.to_radians().sin();

    normalize(Degrees::new(lon))
}

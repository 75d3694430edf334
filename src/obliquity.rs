// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Mean obliquity of the ecliptic.

use qtty::Degrees;

use crate::JulianDay;

/// Mean obliquity of the ecliptic at `jd`.
///
/// ε = 23.439291 − 0.0130042·T − 1.64e−7·T² + 5.04e−7·T³, with `T` in Julian
/// centuries since J2000.0. Stays close to 23.44° for any historical date,
/// so no normalisation is applied.
pub fn obliquity(jd: JulianDay) -> Degrees {
    let t = jd.julian_centuries().value();
    Degrees::new(23.439291 - 0.0130042 * t - 1.64e-7 * t * t + 5.04e-7 * t * t * t)
}

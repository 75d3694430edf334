// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Mean sidereal time.
//!
//! Greenwich mean sidereal time from the IAU 1982 expression in degrees
//! (Meeus, eq. 12.4), shifted by the observer's east longitude.

use qtty::Degrees;

use crate::angle::normalize;
use crate::JulianDay;

/// Greenwich mean sidereal time at `jd`, in `[0°, 360°)`.
pub fn greenwich_sidereal_time(jd: JulianDay) -> Degrees {
    let t = jd.julian_centuries().value();
    let d = jd.days_since_j2000().value();
    let theta0 =
        280.46061837 + 360.98564736629 * d + 0.000387933 * t * t - (t * t * t) / 38710000.0;
    normalize(Degrees::new(theta0))
}

/// Local mean sidereal time for an observer at `longitude` (east positive),
/// in `[0°, 360°)`.
pub fn local_sidereal_time(jd: JulianDay, longitude: Degrees) -> Degrees {
    let gst = greenwich_sidereal_time(jd);
    normalize(Degrees::new(gst.value() + longitude.value()))
}

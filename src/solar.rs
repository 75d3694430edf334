// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Low-order solar position.
//!
//! Geometric mean longitude plus the three-term equation of the centre
//! (Meeus, ch. 25, "low accuracy"). Good to roughly an arc-minute around the
//! present epoch; nutation and aberration are not applied.

use qtty::Degrees;

use crate::angle::normalize;
use crate::JulianDay;

/// Ecliptic longitude of the Sun at `jd`, in `[0°, 360°)`.
pub fn sun_longitude(jd: JulianDay) -> Degrees {
    let t = jd.julian_centuries().value();

    // Mean anomaly (degrees)
    let m = 357.52911 + 35999.05029 * t - 0.0001537 * t * t;
    // Geometric mean longitude (degrees)
    let l0 = 280.46646 + 36000.76983 * t + 0.0003032 * t * t;

    // Equation of the centre
    let c = (1.914602 - 0.004817 * t - 0.000014 * t * t) * m.to_radians().sin()
        + (0.019993 - 0.000101 * t) * (2.0 * m).to_radians().sin()
        + 0.000289 * (3.0 * m).to_radians().sin();

    normalize(Degrees::new(l0 + c))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn sun_at_j2000() {
        // L0 = 280.46646°, M = 357.52911° → C ≈ −0.0843°
        let lon = sun_longitude(JulianDay::J2000);
        assert_abs_diff_eq!(lon.value(), 280.382_16, epsilon = 1e-4);
    }

    #[test]
    fn sun_near_march_equinox() {
        // 2024-03-20 03:06 UT
        let jd = JulianDay::from_calendar(2024, 3, 20.0 + (3.0 + 6.0 / 60.0) / 24.0);
        let lon = sun_longitude(jd).value();
        let off = if lon > 180.0 { lon - 360.0 } else { lon };
        assert!(off.abs() < 0.05, "longitude at equinox = {lon}");
    }

    #[test]
    fn sun_meeus_example_25a() {
        // 1992-10-13 0h TD: true longitude 199.90988°
        let lon = sun_longitude(JulianDay::new(2_448_908.5));
        assert_abs_diff_eq!(lon.value(), 199.909_88, epsilon = 1e-3);
    }
}

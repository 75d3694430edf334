// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Angle normalisation and chart-wheel placement.
//!
//! Every longitude produced by this crate passes through [`normalize`], so
//! the half-open range `[0°, 360°)` is the only representation callers ever
//! see. The wheel helpers map an ecliptic longitude onto a drawing surface
//! where 0° points up.

use qtty::Degrees;

/// One full turn in degrees.
const FULL_TURN: f64 = 360.0;

/// Reduce any degree measure into `[0°, 360°)`.
///
/// Values already in range are returned unchanged. `NaN` propagates.
///
/// ```
/// use natal::angle::normalize;
/// use qtty::Degrees;
///
/// assert_eq!(normalize(Degrees::new(-30.0)), Degrees::new(330.0));
/// assert_eq!(normalize(Degrees::new(720.0)), Degrees::new(0.0));
/// ```
#[inline]
pub fn normalize(angle: Degrees) -> Degrees {
    let mut deg = angle.value() % FULL_TURN;
    if deg < 0.0 {
        deg += FULL_TURN;
        // -1e-20 + 360 rounds to exactly 360
        if deg >= FULL_TURN {
            deg = 0.0;
        }
    }
    Degrees::new(deg)
}

/// Angle on the chart wheel at which a longitude is drawn.
///
/// The wheel is rotated a quarter turn so that 0° longitude sits at the top;
/// the result is deliberately left unnormalised.
#[inline]
pub fn wheel_angle(longitude: Degrees) -> Degrees {
    Degrees::new(longitude.value() - 90.0)
}

/// Screen offset `(x, y)` from the wheel centre for a longitude at `radius`.
///
/// Uses screen coordinates: `y` grows downwards.
pub fn wheel_point(longitude: Degrees, radius: f64) -> (f64, f64) {
    let (sin, cos) = wheel_angle(longitude).value().to_radians().sin_cos();
    (cos * radius, sin * radius)
}

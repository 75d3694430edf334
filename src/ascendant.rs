// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! The Ascendant: the ecliptic point rising on the eastern horizon.
//!
//! ```text
//! λ_asc = atan2( sin θ·cos ε − tan φ·sin ε, cos θ )
//! ```
//!
//! where θ is the local sidereal time, ε the obliquity of the ecliptic and φ
//! the geographic latitude.
//!
//! At the poles `tan φ` diverges and the horizon no longer cuts the ecliptic
//! at a single rising point. Those latitudes produce `None` instead of an
//! angle.

use qtty::Degrees;

use crate::angle::normalize;
use crate::obliquity::obliquity;
use crate::sidereal::local_sidereal_time;
use crate::JulianDay;

/// Geographic latitude at which the Ascendant is undefined.
const POLE: f64 = 90.0;

/// Ecliptic longitude of the Ascendant, in `[0°, 360°)`.
///
/// Returns `None` when `latitude` is exactly ±90° or when any input is not
/// finite.
pub fn ascendant(jd: JulianDay, longitude: Degrees, latitude: Degrees) -> Option<Degrees> {
    if latitude.value().abs() == POLE {
        log::debug!("ascendant undefined at latitude {}°", latitude.value());
        return None;
    }

    let lst = local_sidereal_time(jd, longitude);
    let eps = obliquity(jd);
    log::trace!(
        "ascendant inputs: lst={}° eps={}° lat={}°",
        lst.value(),
        eps.value(),
        latitude.value()
    );

    let (sin_lst, cos_lst) = lst.value().to_radians().sin_cos();
    let (sin_eps, cos_eps) = eps.value().to_radians().sin_cos();
    let tan_lat = latitude.value().to_radians().tan();

    let asc = (sin_lst * cos_eps - tan_lat * sin_eps)
        .atan2(cos_lst)
        .to_degrees();
    if !asc.is_finite() {
        log::debug!("ascendant undefined for non-finite inputs");
        return None;
    }
    Some(normalize(Degrees::new(asc)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn poles_are_undefined() {
        let jd = JulianDay::J2000;
        assert_eq!(ascendant(jd, Degrees::new(0.0), Degrees::new(90.0)), None);
        assert_eq!(ascendant(jd, Degrees::new(12.5), Degrees::new(-90.0)), None);
    }

    #[test]
    fn non_finite_inputs_are_undefined() {
        let jd = JulianDay::J2000;
        assert_eq!(ascendant(jd, Degrees::new(f64::NAN), Degrees::new(10.0)), None);
        assert_eq!(ascendant(JulianDay::new(f64::INFINITY), Degrees::new(0.0), Degrees::new(10.0)), None);
    }

    #[test]
    fn equator_at_j2000() {
        let asc = ascendant(JulianDay::J2000, Degrees::new(0.0), Degrees::new(0.0)).unwrap();
        assert_abs_diff_eq!(asc.value(), 281.377_876, epsilon = 1e-5);
    }

    #[test]
    fn mid_latitudes_stay_in_range() {
        let jd = JulianDay::from_calendar(1990, 7, 15.354_166_666_666_667);
        let asc = ascendant(jd, Degrees::new(-74.0), Degrees::new(40.7)).unwrap();
        assert_abs_diff_eq!(asc.value(), 330.171_57, epsilon = 1e-4);

        for lat in [-89.9, -66.0, -30.0, 0.0, 30.0, 66.0, 89.9] {
            let asc = ascendant(jd, Degrees::new(10.0), Degrees::new(lat)).unwrap();
            assert!((0.0..360.0).contains(&asc.value()));
        }
    }
}

// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Equal house system.
//!
//! Twelve houses of exactly 30°, the first beginning at the Ascendant and
//! the rest following in order of increasing longitude.

use qtty::Degrees;

use crate::angle::normalize;

/// Number of houses.
pub const HOUSE_COUNT: usize = 12;

/// Width of one equal house in degrees.
const HOUSE_WIDTH: f64 = 30.0;

/// Cusps of the twelve equal houses; element `i` opens house `i + 1`.
pub fn equal_house_cusps(ascendant: Degrees) -> [Degrees; HOUSE_COUNT] {
    let mut cusps = [Degrees::new(0.0); HOUSE_COUNT];
    for (i, cusp) in cusps.iter_mut().enumerate() {
        *cusp = normalize(Degrees::new(ascendant.value() + i as f64 * HOUSE_WIDTH));
    }
    cusps
}

/// House number (`1..=12`) containing `longitude` for a given Ascendant.
pub fn house_of(longitude: Degrees, ascendant: Degrees) -> u8 {
    let offset = normalize(Degrees::new(longitude.value() - ascendant.value()));
    let house = (offset.value() / HOUSE_WIDTH).floor() as u8;
    // NaN casts to 0, so the result is always a valid house
    house.min(HOUSE_COUNT as u8 - 1) + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cusps_step_by_thirty_and_wrap() {
        let cusps = equal_house_cusps(Degrees::new(315.0));
        assert_eq!(cusps[0], Degrees::new(315.0));
        assert_eq!(cusps[1], Degrees::new(345.0));
        assert_eq!(cusps[2], Degrees::new(15.0));
        assert_eq!(cusps[11], Degrees::new(285.0));
    }

    #[test]
    fn ascendant_opens_first_house() {
        let asc = Degrees::new(100.0);
        assert_eq!(house_of(Degrees::new(100.0), asc), 1);
        assert_eq!(house_of(Degrees::new(129.9), asc), 1);
        assert_eq!(house_of(Degrees::new(130.0), asc), 2);
        assert_eq!(house_of(Degrees::new(99.9), asc), 12);
        assert_eq!(house_of(Degrees::new(10.0), asc), 10);
    }

    #[test]
    fn every_cusp_lies_in_its_own_house() {
        let asc = Degrees::new(281.377_876);
        for (i, cusp) in equal_house_cusps(asc).into_iter().enumerate() {
            // nudge past rounding at the boundary
            let inside = Degrees::new(cusp.value() + 1e-6);
            assert_eq!(house_of(inside, asc) as usize, i + 1);
        }
    }
}

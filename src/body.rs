// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Chart bodies and their longitudes.
//!
//! Only the Sun and the Moon are modelled. The eight remaining bodies sit at
//! fixed angular offsets from the Sun ([`Body::solar_offset`]); they are
//! placeholders for a planetary theory, not positions.

use qtty::Degrees;
use std::fmt;
use std::ops::Index;

#[cfg(feature = "serde")]
use serde::{ser::SerializeMap, Deserialize, Deserializer, Serialize, Serializer};

/// One of the ten bodies placed on a chart.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Body {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
}

impl Body {
    /// Number of bodies on a chart.
    pub const COUNT: usize = 10;

    /// All bodies in traditional order.
    pub const ALL: [Body; Body::COUNT] = [
        Body::Sun,
        Body::Moon,
        Body::Mercury,
        Body::Venus,
        Body::Mars,
        Body::Jupiter,
        Body::Saturn,
        Body::Uranus,
        Body::Neptune,
        Body::Pluto,
    ];

    /// Position of this body in [`Body::ALL`].
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// English display name.
    pub const fn name(self) -> &'static str {
        match self {
            Body::Sun => "Sun",
            Body::Moon => "Moon",
            Body::Mercury => "Mercury",
            Body::Venus => "Venus",
            Body::Mars => "Mars",
            Body::Jupiter => "Jupiter",
            Body::Saturn => "Saturn",
            Body::Uranus => "Uranus",
            Body::Neptune => "Neptune",
            Body::Pluto => "Pluto",
        }
    }

    /// Fixed offset from the solar longitude used to place this body.
    ///
    /// `None` for the Sun and the Moon, which are computed directly.
    pub const fn solar_offset(self) -> Option<Degrees> {
        let offset = match self {
            Body::Sun | Body::Moon => return None,
            Body::Mercury => 48.0,
            Body::Venus => 75.0,
            Body::Mars => 120.0,
            Body::Jupiter => 200.0,
            Body::Saturn => 260.0,
            Body::Uranus => 300.0,
            Body::Neptune => 320.0,
            Body::Pluto => 330.0,
        };
        Some(Degrees::new(offset))
    }

    /// Look a body up by its English name (case-insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|body| body.name().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Ecliptic longitude of every [`Body`], each in `[0°, 360°)`.
///
/// Backed by a fixed array indexed by [`Body::index`], so every body has
/// exactly one entry by construction.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct BodyLongitudes {
    values: [Degrees; Body::COUNT],
}

impl BodyLongitudes {
    /// Build the set by evaluating `f` once per body, in [`Body::ALL`] order.
    pub fn from_fn(mut f: impl FnMut(Body) -> Degrees) -> Self {
        let mut values = [Degrees::new(0.0); Body::COUNT];
        for body in Body::ALL {
            values[body.index()] = f(body);
        }
        Self { values }
    }

    /// Longitude of `body`.
    #[inline]
    pub fn get(&self, body: Body) -> Degrees {
        self.values[body.index()]
    }

    /// `(body, longitude)` pairs in [`Body::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (Body, Degrees)> + '_ {
        Body::ALL.into_iter().map(move |body| (body, self.get(body)))
    }
}

impl Index<Body> for BodyLongitudes {
    type Output = Degrees;

    #[inline]
    fn index(&self, body: Body) -> &Degrees {
        &self.values[body.index()]
    }
}

// Serialised as a map `{"Sun": 280.38, "Moon": 223.79, ...}`.
#[cfg(feature = "serde")]
impl Serialize for BodyLongitudes {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(Body::COUNT))?;
        for (body, lon) in self.iter() {
            map.serialize_entry(body.name(), &lon.value())?;
        }
        map.end()
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for BodyLongitudes {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::Error;

        let raw = std::collections::BTreeMap::<Body, f64>::deserialize(deserializer)?;
        if let Some(missing) = Body::ALL.into_iter().find(|b| !raw.contains_key(b)) {
            return Err(D::Error::custom(format!("missing longitude for {missing}")));
        }
        Ok(Self::from_fn(|body| Degrees::new(raw[&body])))
    }
}

// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Plain-text chart reading.
//!
//! A fixed template over a [`ChartResult`]: one line per body with its sign
//! and a stock sentence about what the body stands for. Nothing here
//! computes positions.

use std::fmt;

use crate::body::Body;
use crate::chart::ChartResult;
use crate::zodiac::ZodiacSign;

/// Render a reading of `chart`, optionally addressed to `name`.
pub fn interpret(chart: &ChartResult, name: Option<&str>) -> String {
    Reading::new(chart, name).to_string()
}

/// A chart reading, rendered through [`fmt::Display`].
#[derive(Debug, Clone, Copy)]
pub struct Reading<'a> {
    chart: &'a ChartResult,
    name: Option<&'a str>,
}

impl<'a> Reading<'a> {
    /// Reading of `chart`; a blank `name` counts as none.
    pub fn new(chart: &'a ChartResult, name: Option<&'a str>) -> Self {
        let name = name.map(str::trim).filter(|n| !n.is_empty());
        Self { chart, name }
    }
}

impl fmt::Display for Reading<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name {
            Some(name) => writeln!(f, "Chart reading for {name}")?,
            None => writeln!(f, "Chart reading")?,
        }
        writeln!(f)?;
        writeln!(f, "Julian Day: {:.5}", self.chart.julian_day().value())?;
        writeln!(f)?;

        for (body, lon) in self.chart.longitudes().iter() {
            let sign = ZodiacSign::from_longitude(lon);
            writeln!(f, "{body}: {:.2}° in {sign}", lon.value())?;
            writeln!(f, "{}", meaning(body, sign))?;
        }

        writeln!(f)?;
        match self.chart.ascendant() {
            Some(asc) => writeln!(
                f,
                "Ascendant: {:.2}° in {}",
                asc.value(),
                ZodiacSign::from_longitude(asc)
            )?,
            None => writeln!(f, "Ascendant: undefined at this latitude")?,
        }

        writeln!(f)?;
        write!(
            f,
            "Positions come from simplified formulas; planets other than the Sun \
             and Moon are schematic."
        )
    }
}

fn meaning(body: Body, sign: ZodiacSign) -> String {
    match body {
        Body::Sun => format!(
            "The Sun stands for the core self, will and vitality; in {sign} it takes on that sign's basic traits."
        ),
        Body::Moon => format!(
            "The Moon stands for emotion, instinct and the need for security; in {sign} it colours how feelings are expressed."
        ),
        Body::Mercury => format!(
            "Mercury stands for communication and thought; in {sign} it shapes how ideas are formed and shared."
        ),
        Body::Venus => format!(
            "Venus stands for love, values and taste; in {sign} it sets the tone of relationships and aesthetics."
        ),
        Body::Mars => format!(
            "Mars stands for drive and desire; in {sign} it shapes ambition and the way of competing."
        ),
        other => format!("{other} in {sign} expresses its themes through that sign's qualities."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compute;
    use qtty::Degrees;

    #[test]
    fn reading_lists_every_body_in_order() {
        let chart = compute("1990-07-15", "08:30", Degrees::new(-74.0), Degrees::new(40.7)).unwrap();
        let text = interpret(&chart, Some("Ada"));

        assert!(text.starts_with("Chart reading for Ada\n"));
        assert!(text.contains("Julian Day: 2448087.85417"));
        assert!(text.contains("Sun: 112.61° in Cancer"));
        assert!(text.contains("Ascendant: 330.17° in Pisces"));

        let mut last = 0;
        for body in Body::ALL {
            let pos = text.find(&format!("\n{}: ", body.name())).unwrap();
            assert!(pos > last, "{body} out of order");
            last = pos;
        }
    }

    #[test]
    fn blank_name_falls_back_to_generic_header() {
        let chart = compute("2000-01-01", "12:00", Degrees::new(0.0), Degrees::new(0.0)).unwrap();
        assert!(interpret(&chart, Some("  ")).starts_with("Chart reading\n"));
        assert!(interpret(&chart, None).starts_with("Chart reading\n"));
    }

    #[test]
    fn display_matches_interpret() {
        let chart = compute("2000-01-01", "12:00", Degrees::new(0.0), Degrees::new(0.0)).unwrap();
        let shown = format!("{}", Reading::new(&chart, Some("Ada")));
        assert_eq!(shown, interpret(&chart, Some("Ada")));
        assert!(shown.ends_with("are schematic."));
    }

    #[test]
    fn polar_reading_marks_ascendant_undefined() {
        let chart = compute("2000-01-01", "12:00", Degrees::new(0.0), Degrees::new(-90.0)).unwrap();
        assert!(interpret(&chart, None).contains("Ascendant: undefined"));
    }
}

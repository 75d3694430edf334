use approx::assert_abs_diff_eq;
use natal::angle::normalize;
use natal::ascendant::ascendant;
use natal::lunar::moon_longitude;
use natal::solar::sun_longitude;
use natal::{calculate, compute, sign_index, Body, ChartError, ChartInput, JulianDay};
use proptest::prelude::*;
use qtty::Degrees;

fn deg(v: f64) -> Degrees {
    Degrees::new(v)
}

#[test]
fn j2000_reference_value_is_exact() {
    assert_eq!(JulianDay::from_calendar(2000, 1, 1.5).value(), 2_451_545.0);
    let chart = compute("2000-01-01", "12:00", deg(0.0), deg(0.0)).unwrap();
    assert_eq!(chart.julian_day(), JulianDay::J2000);
}

#[test]
fn compute_is_deterministic() {
    let a = compute("1985-11-02", "23:59", deg(139.69), deg(35.68)).unwrap();
    let b = compute("1985-11-02", "23:59", deg(139.69), deg(35.68)).unwrap();
    assert_eq!(a, b);
    for body in Body::ALL {
        assert_eq!(a.longitude(body).value().to_bits(), b.longitude(body).value().to_bits());
    }
}

#[test]
fn venus_sits_seventy_five_degrees_ahead_of_the_sun() {
    let chart = compute("2024-12-31", "18:45", deg(-0.12), deg(51.5)).unwrap();
    assert_eq!(
        chart.longitude(Body::Venus),
        normalize(deg(chart.longitude(Body::Sun).value() + 75.0))
    );
}

#[test]
fn ascendant_poles_are_undefined() {
    let jd = JulianDay::from_calendar(2021, 3, 20.5);
    assert_eq!(ascendant(jd, deg(10.0), deg(90.0)), None);
    assert_eq!(ascendant(jd, deg(10.0), deg(-90.0)), None);
    assert!(ascendant(jd, deg(10.0), deg(89.0)).is_some());
}

#[test]
fn malformed_strings_are_parse_errors() {
    let err = compute("2020/01/01", "10:00", deg(0.0), deg(0.0)).unwrap_err();
    assert!(err.is_parse_error());
    let err = compute("2020-01-01", "1000", deg(0.0), deg(0.0)).unwrap_err();
    assert!(err.is_parse_error());
    assert!(matches!(err, ChartError::FieldCount { .. }));
    assert!(err.to_string().contains("\"1000\""));
}

#[test]
fn calculate_matches_compute() {
    let input = ChartInput::new((1969, 7, 20), (20, 17), deg(23.47), deg(0.67));
    let from_fields = calculate(&input);
    let from_strings = compute("1969-07-20", "20:17", deg(23.47), deg(0.67)).unwrap();
    assert_eq!(from_fields, from_strings);
}

#[test]
fn summer_solstice_sun_is_near_cancer_ingress() {
    let chart = compute("2021-06-21", "03:32", deg(0.0), deg(0.0)).unwrap();
    assert_abs_diff_eq!(chart.longitude(Body::Sun).value(), 90.0, epsilon = 0.05);
}

#[cfg(feature = "serde")]
#[test]
fn serde_chart_roundtrip_uses_body_names() {
    let chart = compute("1990-07-15", "08:30", deg(-74.0), deg(40.7)).unwrap();
    let json = serde_json::to_string(&chart).unwrap();
    assert!(json.contains("\"julian_day\""));
    assert!(json.contains("\"Pluto\""));
    let back: natal::ChartResult = serde_json::from_str(&json).unwrap();
    assert_eq!(back, chart);

    let polar = compute("1990-07-15", "08:30", deg(-74.0), deg(90.0)).unwrap();
    let json = serde_json::to_string(&polar).unwrap();
    assert!(json.contains("\"ascendant\":null"));
}

#[cfg(feature = "serde")]
#[test]
fn serde_input_from_json() {
    let input: ChartInput = serde_json::from_str(
        r#"{"year":2000,"month":1,"day":1,"hour":12,"minute":0,"longitude":0.0,"latitude":0.0}"#,
    )
    .unwrap();
    assert_eq!(input.julian_day(), JulianDay::J2000);
}

proptest! {
    #[test]
    fn normalize_is_idempotent_and_half_open(x in -1.0e7f64..1.0e7) {
        let n = normalize(deg(x));
        prop_assert!(n.value() >= 0.0 && n.value() < 360.0);
        prop_assert_eq!(normalize(n), n);
    }

    #[test]
    fn julian_day_is_monotonic(
        year in 1600i32..2400,
        month in 1i32..=12,
        day in 1i32..=28,
        minutes in 0i32..1440,
    ) {
        let a = ChartInput::new((year, month, day), (minutes / 60, minutes % 60), deg(0.0), deg(0.0));
        let next_minute = (minutes + 1) % 1440;
        let b = if next_minute == 0 {
            ChartInput::new((year, month, day + 1), (0, 0), deg(0.0), deg(0.0))
        } else {
            ChartInput::new((year, month, day), (next_minute / 60, next_minute % 60), deg(0.0), deg(0.0))
        };
        prop_assert!(b.julian_day() >= a.julian_day());

        let next_month = if month == 12 {
            JulianDay::from_calendar(year + 1, 1, 1.0)
        } else {
            JulianDay::from_calendar(year, month + 1, 1.0)
        };
        prop_assert!(next_month > a.julian_day());
    }

    #[test]
    fn luminaries_stay_in_range(jd in 2_000_000.0f64..2_800_000.0) {
        let jd = JulianDay::new(jd);
        let sun = sun_longitude(jd).value();
        let moon = moon_longitude(jd).value();
        prop_assert!((0.0..360.0).contains(&sun));
        prop_assert!((0.0..360.0).contains(&moon));
    }

    #[test]
    fn sign_index_partitions_the_circle(x in 0.0f64..360.0) {
        let idx = sign_index(deg(x));
        prop_assert!(idx < 12);
        prop_assert!(x >= idx as f64 * 30.0 && x < (idx as f64 + 1.0) * 30.0);
    }
}

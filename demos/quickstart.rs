use chrono::Utc;
use natal::{calculate, report, Body, ChartInput};
use qtty::Degrees;

fn main() -> Result<(), natal::ChartError> {
    env_logger::init();

    let beijing = (Degrees::new(116.40), Degrees::new(39.90));
    let input = ChartInput::parse("1990-07-15", "08:30", beijing.0, beijing.1)?;
    let chart = calculate(&input);

    println!("{}", report::interpret(&chart, Some("Example")));
    println!();

    if let Some(cusps) = chart.house_cusps() {
        for (i, cusp) in cusps.iter().enumerate() {
            println!("House {:>2}: {:>7.2}°", i + 1, cusp.value());
        }
    }
    println!("Sun in house {:?}", chart.house_of(Body::Sun));

    // Same clock reading taken as Beijing time (UTC+8).
    let offset = chrono::FixedOffset::east_opt(8 * 3600).expect("valid offset");
    let utc_chart = calculate(&input.to_utc(offset)?);
    println!("With UTC correction: {}", utc_chart.julian_day());

    let now = calculate(&ChartInput::from_utc(Utc::now(), beijing.0, beijing.1));
    println!(
        "Now: Sun {:.2}°, Moon {:.2}°",
        now.longitude(Body::Sun).value(),
        now.longitude(Body::Moon).value()
    );
    Ok(())
}

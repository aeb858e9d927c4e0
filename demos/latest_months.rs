use smhi::Parameter;
use smhi::Smhi;
use std::env;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    configure_polars_display();
    let client = Smhi::builder().build()?;
    let station_id = 98210; // Stockholm-Observatoriekullen A

    let temperature = client
        .latest_months(Parameter::TemperaturePast1h, station_id)
        .await?;
    println!("{}", temperature.to_frame()?);

    let wide = client
        .latest_months_multi(
            &[
                Parameter::TemperaturePast1h,
                Parameter::Humidity,
                Parameter::WindSpeed,
            ],
            station_id,
        )
        .await?;
    println!("{}", wide.to_frame()?);

    let latest = client
        .latest_observations(Parameter::TemperaturePast1h)
        .await?;
    println!("{} stations reported in the last hour", latest.len());

    Ok(())
}

fn configure_polars_display() {
    env::set_var("POLARS_FMT_MAX_COLS", "-1");
    env::set_var("POLARS_FMT_MAX_ROWS", "20");
}

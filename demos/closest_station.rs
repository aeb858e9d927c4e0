use smhi::{Smhi, SmhiError};

#[tokio::main]
async fn main() -> Result<(), SmhiError> {
    let client = Smhi::builder().build()?;

    // Uppsala
    let station = client.closest_station(59.8586, 17.6389).await?;
    match station {
        Some(station) => println!(
            "Closest station: {} ({}) at {:?}",
            station.name,
            station.id,
            station.coordinates()
        ),
        None => println!("No station with coordinates found"),
    }

    let parameters = client
        .station_parameters()
        .station_id(97510)
        .call()
        .await?;
    println!("Station 97510 reports {:?}", parameters);

    Ok(())
}

use chrono::NaiveDate;
use smhi::{Parameter, RetryPolicy, Smhi};
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = Smhi::builder()
        .retry(RetryPolicy {
            max_attempts: 5,
            jitter: Duration::from_millis(50)..=Duration::from_millis(250),
        })
        .timeout(Duration::from_secs(60))
        .build()?;

    let since = NaiveDate::from_ymd_opt(2020, 1, 1).ok_or("invalid date")?;
    let history = client
        .combined(Parameter::TemperaturePast1h, 98210, since)
        .await?;

    let frame = history.to_frame()?;
    println!("{}", frame.tail(Some(10)));
    println!(
        "{} rows from {:?} to {:?}",
        history.len(),
        history.dates().next(),
        history.max_date()
    );

    Ok(())
}

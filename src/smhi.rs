//! This module provides the main entry point for the SMHI Open Data meteorological
//! observations API. It lists parameters and stations, and fetches observations of a
//! station as normalized tables.

use crate::error::SmhiError;
use crate::fetch::fetcher::{Fetch, HttpFetcher, DEFAULT_API_VERSION, DEFAULT_BASE_URL};
use crate::fetch::retry::RetryPolicy;
use crate::observations::error::NormalizeError;
use crate::observations::join::join;
use crate::observations::normalize::{normalize_archive, normalize_json, RawObservation};
use crate::observations::stitch::stitch;
use crate::stations::locate_station;
use crate::types::frames::observation_table::ObservationTable;
use crate::types::frames::wide_table::WideTable;
use crate::types::into_utc_trait::IntoUtcDateTime;
use crate::types::observation::LatestObservation;
use crate::types::parameter::{ArchiveFormat, Parameter};
use crate::types::station::Station;
use bon::bon;
use futures_util::future::try_join;
use futures_util::stream::{self, StreamExt, TryStreamExt};
use log::{debug, info};
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashSet;
use std::time::Duration;

/// Parameter requests in flight at once when listing every station.
const STATION_FETCH_CONCURRENCY: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StationPeriod {
    LatestHour,
    LatestMonths,
    CorrectedArchive,
}

impl StationPeriod {
    fn key(self) -> &'static str {
        match self {
            StationPeriod::LatestHour => "latest-hour",
            StationPeriod::LatestMonths => "latest-months",
            StationPeriod::CorrectedArchive => "corrected-archive",
        }
    }
}

// Response documents, reduced to the fields read here.

#[derive(Deserialize)]
struct ParameterDocument {
    #[serde(default)]
    station: Vec<Station>,
}

#[derive(Deserialize)]
struct StationSetDocument {
    #[serde(default, rename = "stationSet")]
    station_set: Option<Value>,
}

#[derive(Deserialize)]
struct PeriodsDocument {
    #[serde(default)]
    period: Option<Vec<PeriodLink>>,
}

#[derive(Deserialize)]
struct PeriodLink {
    key: String,
}

#[derive(Deserialize)]
struct StationSetData {
    #[serde(default)]
    station: Vec<StationValues>,
}

#[derive(Deserialize)]
struct StationValues {
    key: String,
    #[serde(default)]
    value: Option<Vec<RawObservation>>,
}

#[derive(Deserialize)]
struct ObservationDocument {
    #[serde(default)]
    value: Option<Vec<RawObservation>>,
}

/// The client for SMHI meteorological observations.
///
/// Create one with [`Smhi::builder()`] to talk to the live API, or with
/// [`Smhi::with_fetcher()`] to serve documents from any other [`Fetch`] implementation.
///
/// # Examples
///
/// ```rust,no_run
/// # use smhi::{Parameter, Smhi, SmhiError};
/// # #[tokio::main]
/// # async fn main() -> Result<(), SmhiError> {
/// let client = Smhi::builder().build()?;
///
/// let temperature = client
///     .latest_months(Parameter::TemperaturePast1h, 98210)
///     .await?;
/// println!("{}", temperature.to_frame().expect("valid frame"));
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Smhi<F = HttpFetcher> {
    fetcher: F,
}

#[bon]
impl Smhi<HttpFetcher> {
    /// Creates a client for the SMHI Open Data API.
    ///
    /// # Arguments
    ///
    /// * `.base_url(..)`: Optional. Defaults to `https://opendata-download-metobs.smhi.se`.
    /// * `.version(..)`: Optional. The API version, defaults to `"1.0"`.
    /// * `.retry(RetryPolicy)`: Optional. Defaults to [`RetryPolicy::default()`].
    /// * `.timeout(Duration)`: Optional. Per-request timeout, none by default.
    ///
    /// # Errors
    ///
    /// Returns [`SmhiError::Fetch`] if the HTTP client cannot be initialized.
    #[builder]
    pub fn new(
        #[builder(into)] base_url: Option<String>,
        #[builder(into)] version: Option<String>,
        retry: Option<RetryPolicy>,
        timeout: Option<Duration>,
    ) -> Result<Self, SmhiError> {
        let fetcher = HttpFetcher::new(
            base_url.as_deref().unwrap_or(DEFAULT_BASE_URL),
            version.as_deref().unwrap_or(DEFAULT_API_VERSION),
            retry.unwrap_or_default(),
            timeout,
        )?;
        Ok(Self { fetcher })
    }
}

#[bon]
impl<F: Fetch> Smhi<F> {
    pub fn with_fetcher(fetcher: F) -> Self {
        Self { fetcher }
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Every parameter in the catalog, ordered by id.
    pub fn list_parameters(&self) -> &'static [Parameter] {
        &Parameter::ALL
    }

    /// The stations reporting `parameter`.
    pub async fn parameter_stations(&self, parameter: Parameter) -> Result<Vec<Station>, SmhiError> {
        let document: ParameterDocument = self
            .fetcher
            .fetch_json(&format!("parameter/{}.json", parameter.id()))
            .await?;
        Ok(document.station)
    }

    /// The parameters station `station_id` reports.
    ///
    /// Issues one request per candidate parameter.
    ///
    /// # Arguments
    ///
    /// * `.station_id(i64)`: **Required.**
    /// * `.parameters(Vec<Parameter>)`: Optional. The candidates to check, in the order they
    ///   are returned. Defaults to the whole catalog.
    #[builder]
    pub async fn station_parameters(
        &self,
        station_id: i64,
        parameters: Option<Vec<Parameter>>,
    ) -> Result<Vec<Parameter>, SmhiError> {
        let candidates = parameters.unwrap_or_else(|| Parameter::ALL.to_vec());
        let mut found = Vec::new();
        for parameter in candidates {
            if found.contains(&parameter) {
                continue;
            }
            let stations = self.parameter_stations(parameter).await?;
            if stations.iter().any(|s| s.id == station_id) {
                found.push(parameter);
            }
        }
        Ok(found)
    }

    /// Every station reporting at least one parameter, deduplicated by id.
    ///
    /// Issues one request per parameter in the catalog. For a station listed under several
    /// parameters, the entry of the lowest parameter id is kept.
    pub async fn stations(&self) -> Result<Vec<Station>, SmhiError> {
        let per_parameter: Vec<Vec<Station>> = stream::iter(Parameter::ALL)
            .map(|parameter| self.parameter_stations(parameter))
            .buffered(STATION_FETCH_CONCURRENCY)
            .try_collect()
            .await?;

        let mut seen = HashSet::new();
        let stations: Vec<Station> = per_parameter
            .into_iter()
            .flatten()
            .filter(|station| seen.insert(station.id))
            .collect();
        info!("Found {} distinct stations", stations.len());
        Ok(stations)
    }

    /// The station closest to `(latitude, longitude)`, searching every station.
    ///
    /// Returns `Ok(None)` when no station has coordinates.
    pub async fn closest_station(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<Option<Station>, SmhiError> {
        let stations = self.stations().await?;
        Ok(locate_station::closest_station(&stations, latitude, longitude).cloned())
    }

    /// The latest-hour values of `parameter` across all stations.
    ///
    /// Stations without values are left out.
    ///
    /// # Errors
    ///
    /// * [`SmhiError::MissingStationSet`] when the parameter has no station set.
    /// * [`SmhiError::NoPeriods`] when the station set lists no periods.
    /// * [`SmhiError::UnsupportedPeriod`] when its first period is not `latest-hour`.
    pub async fn latest_observations(
        &self,
        parameter: Parameter,
    ) -> Result<Vec<LatestObservation>, SmhiError> {
        let id = parameter.id();
        let station_set: StationSetDocument = self
            .fetcher
            .fetch_json(&format!("parameter/{id}/station-set.json"))
            .await?;
        if station_set.station_set.is_none() {
            return Err(SmhiError::MissingStationSet(parameter));
        }

        let periods: PeriodsDocument = self
            .fetcher
            .fetch_json(&format!("parameter/{id}/station-set/all.json"))
            .await?;
        let period = periods
            .period
            .unwrap_or_default()
            .into_iter()
            .next()
            .ok_or(SmhiError::NoPeriods(parameter))?;
        let latest_hour = StationPeriod::LatestHour.key();
        if period.key != latest_hour {
            return Err(SmhiError::UnsupportedPeriod {
                parameter,
                period: period.key,
            });
        }

        let data: StationSetData = self
            .fetcher
            .fetch_json(&format!(
                "parameter/{id}/station-set/all/period/{latest_hour}/data.json"
            ))
            .await?;

        let mut observations = Vec::new();
        for station in data.station {
            let Some(values) = station.value else {
                debug!("Station {} has no latest {} value", station.key, parameter);
                continue;
            };
            for (row, raw) in values.iter().enumerate() {
                let timestamp = raw
                    .date
                    .ok_or(NormalizeError::MissingField { row, field: "date" })?;
                observations.push(LatestObservation {
                    parameter,
                    timestamp,
                    value: raw.lenient_value(),
                    station: station.key.clone(),
                });
            }
        }
        info!(
            "Read {} latest {} observations",
            observations.len(),
            parameter
        );
        Ok(observations)
    }

    fn station_service(
        parameter: Parameter,
        station_id: i64,
        period: StationPeriod,
        extension: &str,
    ) -> String {
        format!(
            "parameter/{}/station/{}/period/{}/data.{}",
            parameter.id(),
            station_id,
            period.key(),
            extension
        )
    }

    async fn latest_period(
        &self,
        parameter: Parameter,
        station_id: i64,
        period: StationPeriod,
    ) -> Result<ObservationTable, SmhiError> {
        let document: ObservationDocument = self
            .fetcher
            .fetch_json(&Self::station_service(parameter, station_id, period, "json"))
            .await?;
        let records = document.value.unwrap_or_default();
        Ok(normalize_json(&records, parameter)?.with_station(station_id))
    }

    /// Quality-controlled archive of `parameter` at station `station_id`, from the start of
    /// its record until roughly three months ago.
    ///
    /// # Errors
    ///
    /// [`SmhiError::Normalize`] with [`NormalizeError::UnsupportedParameter`] for parameters
    /// without a known archive layout; no request is made for those.
    pub async fn corrected_archive(
        &self,
        parameter: Parameter,
        station_id: i64,
    ) -> Result<ObservationTable, SmhiError> {
        if parameter.archive_format() == ArchiveFormat::Unsupported {
            return Err(NormalizeError::UnsupportedParameter(parameter).into());
        }
        let table = self
            .fetcher
            .fetch_table(&Self::station_service(
                parameter,
                station_id,
                StationPeriod::CorrectedArchive,
                "csv",
            ))
            .await?;
        Ok(normalize_archive(&table, parameter)?.with_station(station_id))
    }

    /// The last months of not yet quality-controlled observations.
    pub async fn latest_months(
        &self,
        parameter: Parameter,
        station_id: i64,
    ) -> Result<ObservationTable, SmhiError> {
        self.latest_period(parameter, station_id, StationPeriod::LatestMonths)
            .await
    }

    /// The observations of the last hour.
    pub async fn latest_hour(
        &self,
        parameter: Parameter,
        station_id: i64,
    ) -> Result<ObservationTable, SmhiError> {
        self.latest_period(parameter, station_id, StationPeriod::LatestHour)
            .await
    }

    /// [`Smhi::latest_months`] of several parameters, joined on their shared timestamps.
    pub async fn latest_months_multi(
        &self,
        parameters: &[Parameter],
        station_id: i64,
    ) -> Result<WideTable, SmhiError> {
        let tables: Vec<ObservationTable> = stream::iter(parameters.iter().copied())
            .map(|parameter| self.latest_months(parameter, station_id))
            .buffered(STATION_FETCH_CONCURRENCY)
            .try_collect()
            .await?;
        Ok(join(&tables, station_id)?)
    }

    /// [`Smhi::corrected_archive`] of several parameters, joined on their shared timestamps.
    pub async fn corrected_archive_multi(
        &self,
        parameters: &[Parameter],
        station_id: i64,
    ) -> Result<WideTable, SmhiError> {
        let tables: Vec<ObservationTable> = stream::iter(parameters.iter().copied())
            .map(|parameter| self.corrected_archive(parameter, station_id))
            .buffered(STATION_FETCH_CONCURRENCY)
            .try_collect()
            .await?;
        Ok(join(&tables, station_id)?)
    }

    /// The corrected archive from `combine_since` on, continued with the latest months.
    ///
    /// See [`crate::stitch`] for how the two overlap.
    pub async fn combined(
        &self,
        parameter: Parameter,
        station_id: i64,
        combine_since: impl IntoUtcDateTime,
    ) -> Result<ObservationTable, SmhiError> {
        let (archive, latest) = try_join(
            self.corrected_archive(parameter, station_id),
            self.latest_months(parameter, station_id),
        )
        .await?;
        Ok(stitch(&archive, &latest, combine_since)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::archive_csv::tests::TEMPERATURE_ARCHIVE;
    use crate::fetch::memory::MemoryFetcher;
    use crate::observations::error::TableError;
    use crate::types::observation::ObservationValue;
    use chrono::{TimeZone, Utc};

    const STOCKHOLM: &str = r#"{"key": "98210", "name": "Stockholm-Observatoriekullen A", "id": 98210,
        "latitude": 59.3417, "longitude": 18.0549, "height": 43.133, "active": true}"#;
    const KIRUNA: &str = r#"{"key": "180940", "name": "Kiruna Flygplats", "id": 180940,
        "latitude": 67.8275, "longitude": 20.3362, "height": 452.0, "active": true}"#;
    const NO_COORDINATES: &str = r#"{"key": "1", "name": "Unknown", "id": 1}"#;

    fn stations_document(stations: &[&str]) -> String {
        format!(r#"{{"key": "x", "station": [{}]}}"#, stations.join(","))
    }

    /// Every parameter document, with stations only for temperature and humidity.
    fn catalog() -> MemoryFetcher {
        Parameter::ALL
            .iter()
            .fold(MemoryFetcher::default(), |fetcher, parameter| {
                let stations = match parameter {
                    Parameter::TemperaturePast1h => stations_document(&[STOCKHOLM, NO_COORDINATES]),
                    Parameter::Humidity => stations_document(&[KIRUNA, STOCKHOLM]),
                    _ => stations_document(&[]),
                };
                fetcher.with(&format!("parameter/{}.json", parameter.id()), stations)
            })
    }

    fn hour(h: u32) -> chrono::DateTime<Utc> {
        Utc.with_ymd_and_hms(2023, 1, 1, h, 0, 0).unwrap()
    }

    fn latest_json(hours: &[u32]) -> String {
        let values: Vec<String> = hours
            .iter()
            .map(|h| {
                format!(
                    r#"{{"date": {}, "value": "{}.5", "quality": "Y"}}"#,
                    hour(*h).timestamp_millis(),
                    h
                )
            })
            .collect();
        format!(r#"{{"value": [{}]}}"#, values.join(","))
    }

    #[test]
    fn test_builder_defaults() {
        let client = Smhi::builder().retry(RetryPolicy::none()).build().unwrap();
        assert_eq!(client.fetcher().retry_policy(), &RetryPolicy::none());
        assert_eq!(
            client.fetcher().url("parameter.json"),
            "https://opendata-download-metobs.smhi.se/api/version/1.0/parameter.json"
        );

        let client = Smhi::builder()
            .base_url("http://localhost:8080")
            .version("2.0")
            .timeout(Duration::from_secs(5))
            .build()
            .unwrap();
        assert_eq!(
            client.fetcher().url("parameter.json"),
            "http://localhost:8080/api/version/2.0/parameter.json"
        );
    }

    #[test]
    fn test_list_parameters() {
        let client = Smhi::with_fetcher(MemoryFetcher::default());
        let parameters = client.list_parameters();
        assert_eq!(parameters.len(), 40);
        assert_eq!(parameters[5], Parameter::Humidity);
    }

    #[test]
    fn test_unknown_parameter_id_converts() {
        fn lookup(id: u32) -> Result<Parameter, SmhiError> {
            Ok(Parameter::try_from(id)?)
        }
        assert_eq!(lookup(6).unwrap(), Parameter::Humidity);
        assert!(matches!(lookup(0), Err(SmhiError::UnknownParameter(_))));
    }

    #[tokio::test]
    async fn test_parameter_stations() -> Result<(), SmhiError> {
        let client = Smhi::with_fetcher(catalog());
        let stations = client.parameter_stations(Parameter::Humidity).await?;
        let ids: Vec<i64> = stations.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![180940, 98210]);
        assert_eq!(stations[0].name, "Kiruna Flygplats");
        Ok(())
    }

    #[tokio::test]
    async fn test_station_parameters() -> Result<(), SmhiError> {
        let client = Smhi::with_fetcher(catalog());

        let found = client
            .station_parameters()
            .station_id(98210)
            .parameters(vec![
                Parameter::WindSpeed,
                Parameter::Humidity,
                Parameter::TemperaturePast1h,
                Parameter::Humidity,
            ])
            .call()
            .await?;
        assert_eq!(found, vec![Parameter::Humidity, Parameter::TemperaturePast1h]);

        let found = client.station_parameters().station_id(180940).call().await?;
        assert_eq!(found, vec![Parameter::Humidity]);
        Ok(())
    }

    #[tokio::test]
    async fn test_stations_are_deduplicated() -> Result<(), SmhiError> {
        let client = Smhi::with_fetcher(catalog());
        let stations = client.stations().await?;
        let ids: Vec<i64> = stations.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![98210, 1, 180940]);
        assert_eq!(client.fetcher().requested().len(), 40);
        Ok(())
    }

    #[tokio::test]
    async fn test_closest_station() -> Result<(), SmhiError> {
        let client = Smhi::with_fetcher(catalog());
        let closest = client.closest_station(67.0, 20.0).await?;
        assert_eq!(closest.map(|s| s.id), Some(180940));
        Ok(())
    }

    fn station_set_fetcher(station_set: &str, periods: &str) -> MemoryFetcher {
        MemoryFetcher::default()
            .with("parameter/1/station-set.json", station_set)
            .with("parameter/1/station-set/all.json", periods)
            .with(
                "parameter/1/station-set/all/period/latest-hour/data.json",
                r#"{"station": [
                    {"key": "98210", "value": [{"date": 1682899200000, "value": "7.7", "quality": "G"}]},
                    {"key": "180940", "value": null},
                    {"key": "97400", "value": [{"date": 1682899200000, "value": "--", "quality": "Y"}]}
                ]}"#,
            )
    }

    #[tokio::test]
    async fn test_latest_observations() -> Result<(), SmhiError> {
        let client = Smhi::with_fetcher(station_set_fetcher(
            r#"{"stationSet": [{"key": "all"}]}"#,
            r#"{"period": [{"key": "latest-hour"}]}"#,
        ));
        let observations = client
            .latest_observations(Parameter::TemperaturePast1h)
            .await?;

        assert_eq!(observations.len(), 2);
        assert_eq!(observations[0].station, "98210");
        assert_eq!(observations[0].value, ObservationValue::Number(7.7));
        assert_eq!(
            observations[0].date(),
            Some(Utc.with_ymd_and_hms(2023, 5, 1, 0, 0, 0).unwrap())
        );
        assert_eq!(observations[1].value, ObservationValue::Text("--".into()));
        assert_eq!(observations[1].parameter, Parameter::TemperaturePast1h);
        Ok(())
    }

    #[tokio::test]
    async fn test_latest_observations_unavailable() {
        let client = Smhi::with_fetcher(station_set_fetcher(
            r#"{"stationSet": null}"#,
            r#"{"period": [{"key": "latest-hour"}]}"#,
        ));
        let result = client.latest_observations(Parameter::TemperaturePast1h).await;
        assert!(matches!(
            result,
            Err(SmhiError::MissingStationSet(Parameter::TemperaturePast1h))
        ));

        let client = Smhi::with_fetcher(station_set_fetcher(
            r#"{"stationSet": [{}]}"#,
            r#"{"period": []}"#,
        ));
        let result = client.latest_observations(Parameter::TemperaturePast1h).await;
        assert!(matches!(result, Err(SmhiError::NoPeriods(_))));

        let client = Smhi::with_fetcher(station_set_fetcher(
            r#"{"stationSet": [{}]}"#,
            r#"{"period": [{"key": "latest-day"}]}"#,
        ));
        let result = client.latest_observations(Parameter::TemperaturePast1h).await;
        assert!(matches!(
            result,
            Err(SmhiError::UnsupportedPeriod { period, .. }) if period == "latest-day"
        ));
    }

    #[tokio::test]
    async fn test_latest_months_and_hour() -> Result<(), SmhiError> {
        let client = Smhi::with_fetcher(
            MemoryFetcher::default()
                .with(
                    "parameter/1/station/98210/period/latest-months/data.json",
                    latest_json(&[1, 2, 3]),
                )
                .with(
                    "parameter/1/station/98210/period/latest-hour/data.json",
                    latest_json(&[3]),
                ),
        );

        let months = client
            .latest_months(Parameter::TemperaturePast1h, 98210)
            .await?;
        assert_eq!(months.len(), 3);
        assert_eq!(months.station_id, Some(98210));
        assert_eq!(months.observations[0].date, hour(1));
        assert_eq!(months.observations[2].value, ObservationValue::Number(3.5));

        let latest = client.latest_hour(Parameter::TemperaturePast1h, 98210).await?;
        assert_eq!(latest.dates().collect::<Vec<_>>(), vec![hour(3)]);
        Ok(())
    }

    #[tokio::test]
    async fn test_null_value_list_is_empty_table() -> Result<(), SmhiError> {
        let client = Smhi::with_fetcher(MemoryFetcher::default().with(
            "parameter/4/station/1/period/latest-months/data.json",
            r#"{"value": null}"#,
        ));
        let table = client.latest_months(Parameter::WindSpeed, 1).await?;
        assert!(table.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_corrected_archive() -> Result<(), SmhiError> {
        let client = Smhi::with_fetcher(MemoryFetcher::default().with(
            "parameter/1/station/98210/period/corrected-archive/data.csv",
            TEMPERATURE_ARCHIVE,
        ));
        let archive = client
            .corrected_archive(Parameter::TemperaturePast1h, 98210)
            .await?;

        assert_eq!(archive.len(), 5);
        assert_eq!(archive.station_id, Some(98210));
        assert_eq!(archive.max_date(), Some(hour(4)));
        assert_eq!(archive.observations[2].quality, "Y");

        let df = archive.to_frame().expect("frame");
        assert_eq!(df.width(), 4);
        Ok(())
    }

    #[tokio::test]
    async fn test_corrected_archive_unsupported_parameter_makes_no_request() {
        let client = Smhi::with_fetcher(MemoryFetcher::default());
        let result = client.corrected_archive(Parameter::PrecipPastMonth, 98210).await;
        assert!(matches!(
            result,
            Err(SmhiError::Normalize(NormalizeError::UnsupportedParameter(
                Parameter::PrecipPastMonth
            )))
        ));
        assert!(client.fetcher().requested().is_empty());
    }

    #[tokio::test]
    async fn test_latest_months_multi() -> Result<(), SmhiError> {
        let client = Smhi::with_fetcher(
            MemoryFetcher::default()
                .with(
                    "parameter/1/station/98210/period/latest-months/data.json",
                    latest_json(&[1, 2, 3]),
                )
                .with(
                    "parameter/6/station/98210/period/latest-months/data.json",
                    latest_json(&[2, 3, 4]),
                ),
        );
        let wide = client
            .latest_months_multi(&[Parameter::TemperaturePast1h, Parameter::Humidity], 98210)
            .await?;

        assert_eq!(wide.dates().collect::<Vec<_>>(), vec![hour(2), hour(3)]);
        assert_eq!(wide.station_id, Some(98210));

        let result = client
            .latest_months_multi(&[Parameter::Humidity, Parameter::Humidity], 98210)
            .await;
        assert!(matches!(
            result,
            Err(SmhiError::Table(TableError::DuplicateParameter(Parameter::Humidity)))
        ));
        Ok(())
    }

    #[tokio::test]
    async fn test_corrected_archive_multi_single_parameter() -> Result<(), SmhiError> {
        let client = Smhi::with_fetcher(MemoryFetcher::default().with(
            "parameter/1/station/98210/period/corrected-archive/data.csv",
            TEMPERATURE_ARCHIVE,
        ));
        let wide = client
            .corrected_archive_multi(&[Parameter::TemperaturePast1h], 98210)
            .await?;
        assert_eq!(wide.len(), 5);
        assert_eq!(wide.parameters, vec![Parameter::TemperaturePast1h]);
        Ok(())
    }

    #[tokio::test]
    async fn test_combined() -> Result<(), SmhiError> {
        let client = Smhi::with_fetcher(
            MemoryFetcher::default()
                .with(
                    "parameter/1/station/98210/period/corrected-archive/data.csv",
                    TEMPERATURE_ARCHIVE,
                )
                .with(
                    "parameter/1/station/98210/period/latest-months/data.json",
                    latest_json(&[3, 4, 5, 6]),
                ),
        );
        let combined = client
            .combined(Parameter::TemperaturePast1h, 98210, hour(1))
            .await?;

        assert_eq!(
            combined.dates().collect::<Vec<_>>(),
            (1..=6).map(hour).collect::<Vec<_>>()
        );
        // Archived rows win where both sources overlap
        assert_eq!(combined.observations[2].value, ObservationValue::Number(0.4));
        assert_eq!(combined.observations[4].value, ObservationValue::Number(5.5));
        assert_eq!(combined.observations[4].quality, "Y");
        assert_eq!(combined.station_id, Some(98210));
        Ok(())
    }
}

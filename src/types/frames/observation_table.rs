//! Contains `ObservationTable`, the normalized single-parameter table every SMHI response
//! shape is reshaped into.

use crate::types::into_utc_trait::IntoUtcDateTime;
use crate::types::observation::{Observation, ObservationValue};
use crate::types::parameter::Parameter;
use chrono::{DateTime, Utc};
use polars::prelude::*;

pub(crate) const COL_DATE: &str = "date";
pub(crate) const COL_QUALITY: &str = "quality";
pub(crate) const COL_STATION_ID: &str = "station_id";

/// Observations of one parameter, ordered by date as the source delivered them.
///
/// Conceptually the columns are `date`, `<parameter name>`, `quality` and `station_id`;
/// [`ObservationTable::to_frame`] materializes exactly that as a Polars `DataFrame`.
/// The station id is attached by the caller after normalization, which is why it is
/// optional.
#[derive(Debug, Clone, PartialEq)]
pub struct ObservationTable {
    pub parameter: Parameter,
    pub station_id: Option<i64>,
    pub observations: Vec<Observation>,
}

impl ObservationTable {
    pub fn new(parameter: Parameter, observations: Vec<Observation>) -> Self {
        Self {
            parameter,
            station_id: None,
            observations,
        }
    }

    /// Attaches the station the observations belong to.
    pub fn with_station(mut self, station_id: i64) -> Self {
        self.station_id = Some(station_id);
        self
    }

    pub fn len(&self) -> usize {
        self.observations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    pub fn dates(&self) -> impl Iterator<Item = DateTime<Utc>> + '_ {
        self.observations.iter().map(|o| o.date)
    }

    /// The latest date in the table, regardless of row order.
    pub fn max_date(&self) -> Option<DateTime<Utc>> {
        self.dates().max()
    }

    /// Keeps only the rows with `start <= date <= end`.
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use smhi::{Observation, ObservationTable, Parameter, IntoUtcDateTime};
    ///
    /// let day = |d| NaiveDate::from_ymd_opt(2023, 5, d).unwrap();
    /// let table = ObservationTable::new(
    ///     Parameter::Humidity,
    ///     (1..=5).map(|d| Observation::new(day(d).into_utc(), 80.0_f64, "G")).collect(),
    /// );
    /// assert_eq!(table.between(day(2), day(4)).len(), 3);
    /// ```
    pub fn between(&self, start: impl IntoUtcDateTime, end: impl IntoUtcDateTime) -> Self {
        let start = start.into_utc();
        let end = end.into_utc();
        Self {
            parameter: self.parameter,
            station_id: self.station_id,
            observations: self
                .observations
                .iter()
                .filter(|o| o.date >= start && o.date <= end)
                .cloned()
                .collect(),
        }
    }

    /// Builds a `DataFrame` with columns `[date, <parameter name>, quality, station_id]`.
    ///
    /// `date` is a timezone-naive millisecond `Datetime` holding UTC instants. The value
    /// column is `Float64` when every value parsed as a number and `String` otherwise.
    /// `station_id` is only present once a station has been attached.
    pub fn to_frame(&self) -> PolarsResult<DataFrame> {
        let date = date_column(self.dates())?;
        let value = value_column(
            self.parameter.name(),
            self.observations.iter().map(|o| &o.value),
        );
        let quality = Column::new(
            COL_QUALITY.into(),
            self.observations
                .iter()
                .map(|o| o.quality.as_str())
                .collect::<Vec<_>>(),
        );
        let mut columns = vec![date, value, quality];
        if let Some(station_id) = self.station_id {
            columns.push(station_id_column(station_id, self.observations.len()));
        }

        DataFrame::new(columns)
    }
}

/// Millisecond `Datetime` column named `date`.
pub(crate) fn date_column(dates: impl Iterator<Item = DateTime<Utc>>) -> PolarsResult<Column> {
    let millis: Vec<i64> = dates.map(|d| d.timestamp_millis()).collect();
    Column::new(COL_DATE.into(), millis)
        .cast(&DataType::Datetime(TimeUnit::Milliseconds, None))
}

pub(crate) fn station_id_column(station_id: i64, height: usize) -> Column {
    Column::new(COL_STATION_ID.into(), vec![station_id; height])
}

/// `Float64` when every value is numeric, otherwise the textual form of each value.
pub(crate) fn value_column<'a>(
    name: &str,
    values: impl Iterator<Item = &'a ObservationValue> + Clone,
) -> Column {
    if values.clone().all(ObservationValue::is_numeric) {
        let numbers: Vec<Option<f64>> = values.map(ObservationValue::as_f64).collect();
        Column::new(name.into(), numbers)
    } else {
        let texts: Vec<String> = values.map(ObservationValue::to_string).collect();
        Column::new(name.into(), texts)
    }
}

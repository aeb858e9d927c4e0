//! Reshapes SMHI observation payloads into [`ObservationTable`]s.
//!
//! Latest-period data arrives as JSON records, archived data as a `;`-separated CSV export
//! whose columns depend on the parameter's [`ArchiveFormat`]. Both end up as the same
//! `date / value / quality` rows.

use crate::observations::error::NormalizeError;
use crate::types::frames::observation_table::ObservationTable;
use crate::types::observation::{try_parse_numeric, Observation, ObservationValue};
use crate::types::parameter::{ArchiveFormat, Parameter};
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use log::info;
use polars::prelude::*;
use serde::Deserialize;

// Archive CSV headers
const COL_DATUM: &str = "Datum";
const COL_TID: &str = "Tid (UTC)";
const COL_REPRESENTATIVT_DYGN: &str = "Representativt dygn";
const COL_KVALITET: &str = "Kvalitet";

// JSON record fields
const FIELD_DATE: &str = "date";
const FIELD_REF: &str = "ref";

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M:%S";

/// One record of the `value` array returned by the `latest-hour` and `latest-months`
/// station endpoints.
///
/// Most parameters carry an epoch-millisecond `date`. Daily parameters instead carry the
/// represented day under `ref` along with the `from`/`to` bounds of the accumulation.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct RawObservation {
    #[serde(default)]
    pub date: Option<i64>,
    #[serde(default, rename = "ref")]
    pub reference: Option<String>,
    #[serde(default)]
    pub from: Option<i64>,
    #[serde(default)]
    pub to: Option<i64>,
    #[serde(default)]
    pub value: Option<ObservationValue>,
    #[serde(default)]
    pub quality: String,
}

impl RawObservation {
    /// The value with numeric text parsed into a number. Other text is kept as is and a
    /// missing value becomes `NaN`.
    pub fn lenient_value(&self) -> ObservationValue {
        match &self.value {
            Some(ObservationValue::Text(text)) => try_parse_numeric(text),
            Some(number) => number.clone(),
            None => ObservationValue::Number(f64::NAN),
        }
    }
}

/// Normalizes latest-period JSON records of `parameter`.
///
/// Values are coerced leniently: text that is not a number is kept as
/// [`ObservationValue::Text`]. A missing value becomes `NaN`.
///
/// # Errors
///
/// [`NormalizeError::MissingField`] when a record lacks the timestamp field its parameter
/// uses, [`NormalizeError::MalformedDate`] when that field cannot be read as a UTC instant.
pub fn normalize_json(
    records: &[RawObservation],
    parameter: Parameter,
) -> Result<ObservationTable, NormalizeError> {
    let daily = parameter.archive_format() == ArchiveFormat::DailyAccumulation;

    let observations = records
        .iter()
        .enumerate()
        .map(|(row, record)| -> Result<Observation, NormalizeError> {
            let date = if daily {
                let reference = record.reference.as_deref().ok_or(NormalizeError::MissingField {
                    row,
                    field: FIELD_REF,
                })?;
                parse_reference_day(reference).ok_or_else(|| NormalizeError::MalformedDate {
                    row,
                    column: FIELD_REF.to_string(),
                    value: reference.to_string(),
                })?
            } else {
                let millis = record.date.ok_or(NormalizeError::MissingField {
                    row,
                    field: FIELD_DATE,
                })?;
                DateTime::from_timestamp_millis(millis).ok_or_else(|| {
                    NormalizeError::MalformedDate {
                        row,
                        column: FIELD_DATE.to_string(),
                        value: millis.to_string(),
                    }
                })?
            };

            Ok(Observation {
                date,
                value: record.lenient_value(),
                quality: record.quality.clone(),
            })
        })
        .collect::<Result<Vec<_>, NormalizeError>>()?;

    Ok(ObservationTable::new(parameter, observations))
}

/// `ref` is normally a calendar day, older payloads carry epoch milliseconds.
fn parse_reference_day(reference: &str) -> Option<DateTime<Utc>> {
    if let Ok(day) = NaiveDate::parse_from_str(reference, DATE_FORMAT) {
        return Some(day.and_time(NaiveTime::MIN).and_utc());
    }
    reference
        .parse::<i64>()
        .ok()
        .and_then(DateTime::from_timestamp_millis)
}

/// Where the timestamp lives in an archive table.
enum ArchiveDate {
    DateAndTime,
    RepresentativeDay,
}

impl ArchiveDate {
    fn for_parameter(parameter: Parameter) -> Result<Self, NormalizeError> {
        match parameter.archive_format() {
            ArchiveFormat::Instantaneous => Ok(ArchiveDate::DateAndTime),
            ArchiveFormat::DailyAccumulation => Ok(ArchiveDate::RepresentativeDay),
            ArchiveFormat::Unsupported => Err(NormalizeError::UnsupportedParameter(parameter)),
        }
    }

    fn columns(&self) -> &'static [&'static str] {
        match self {
            ArchiveDate::DateAndTime => &[COL_DATUM, COL_TID],
            ArchiveDate::RepresentativeDay => &[COL_REPRESENTATIVT_DYGN],
        }
    }
}

fn string_column<'a>(
    table: &'a DataFrame,
    name: &str,
) -> Result<&'a StringChunked, NormalizeError> {
    table
        .column(name)
        .map_err(|_| NormalizeError::MissingColumn(name.to_string()))?
        .str()
        .map_err(|e| NormalizeError::ColumnType {
            column: name.to_string(),
            source: e,
        })
}

/// The measured value sits in the column right before `Kvalitet`; its header is the
/// parameter's Swedish name, which differs per parameter.
fn value_column_name(table: &DataFrame, layout: &ArchiveDate) -> Result<String, NormalizeError> {
    let quality_index = table
        .get_column_index(COL_KVALITET)
        .ok_or_else(|| NormalizeError::MissingColumn(COL_KVALITET.to_string()))?;

    let value_column = quality_index
        .checked_sub(1)
        .map(|index| table.get_columns()[index].name().to_string())
        .filter(|name| !layout.columns().contains(&name.as_str()));

    value_column.ok_or_else(|| {
        NormalizeError::MissingColumn(format!("value column before '{COL_KVALITET}'"))
    })
}

/// Normalizes an archived `corrected-archive` table of `parameter`.
///
/// `table` is the CSV export with its descriptive preamble already skipped, every column
/// read as text. Instantaneous parameters combine `Datum` and `Tid (UTC)` into the
/// timestamp; daily parameters use `Representativt dygn` at midnight UTC. Values are
/// parsed strictly; an empty cell becomes `NaN`.
///
/// # Errors
///
/// * [`NormalizeError::UnsupportedParameter`] for parameters without a known archive layout.
/// * [`NormalizeError::MissingColumn`] / [`NormalizeError::ColumnType`] when the table does
///   not have the expected text columns.
/// * [`NormalizeError::MalformedValue`] when a value is not a number.
/// * [`NormalizeError::MalformedDate`] when a date or time cell cannot be parsed.
pub fn normalize_archive(
    table: &DataFrame,
    parameter: Parameter,
) -> Result<ObservationTable, NormalizeError> {
    let layout = ArchiveDate::for_parameter(parameter)?;
    let value_name = value_column_name(table, &layout)?;
    let values = string_column(table, &value_name)?;
    let qualities = string_column(table, COL_KVALITET)?;

    let dates: Vec<DateTime<Utc>> = match layout {
        ArchiveDate::DateAndTime => {
            let days = string_column(table, COL_DATUM)?;
            let times = string_column(table, COL_TID)?;
            days.into_iter()
                .zip(times)
                .enumerate()
                .map(|(row, (day, time))| parse_date_and_time(row, day, time))
                .collect::<Result<_, _>>()?
        }
        ArchiveDate::RepresentativeDay => {
            let days = string_column(table, COL_REPRESENTATIVT_DYGN)?;
            days.into_iter()
                .enumerate()
                .map(|(row, day)| parse_day(row, COL_REPRESENTATIVT_DYGN, day))
                .collect::<Result<_, _>>()?
        }
    };

    let observations = dates
        .into_iter()
        .zip(values.into_iter().zip(qualities))
        .enumerate()
        .map(|(row, (date, (value, quality)))| -> Result<Observation, NormalizeError> {
            let value = match value.map(str::trim) {
                None | Some("") => f64::NAN,
                Some(text) => text.parse::<f64>().map_err(|_| NormalizeError::MalformedValue {
                    row,
                    column: value_name.clone(),
                    value: text.to_string(),
                })?,
            };
            Ok(Observation {
                date,
                value: ObservationValue::Number(value),
                quality: quality.unwrap_or_default().to_string(),
            })
        })
        .collect::<Result<Vec<_>, NormalizeError>>()?;

    info!(
        "Normalized {} archived {} observations from column '{}'",
        observations.len(),
        parameter,
        value_name
    );
    Ok(ObservationTable::new(parameter, observations))
}

fn parse_day(row: usize, column: &str, day: Option<&str>) -> Result<DateTime<Utc>, NormalizeError> {
    let day = day.unwrap_or_default();
    NaiveDate::parse_from_str(day.trim(), DATE_FORMAT)
        .map(|d| d.and_time(NaiveTime::MIN).and_utc())
        .map_err(|_| NormalizeError::MalformedDate {
            row,
            column: column.to_string(),
            value: day.to_string(),
        })
}

fn parse_date_and_time(
    row: usize,
    day: Option<&str>,
    time: Option<&str>,
) -> Result<DateTime<Utc>, NormalizeError> {
    let day = day.unwrap_or_default().trim();
    let time = time.unwrap_or_default().trim();
    let combined = format!("{day} {time}");
    NaiveDateTime::parse_from_str(&combined, &format!("{DATE_FORMAT} {TIME_FORMAT}"))
        .map(|dt| dt.and_utc())
        .map_err(|_| NormalizeError::MalformedDate {
            row,
            column: format!("{COL_DATUM} + {COL_TID}"),
            value: combined,
        })
}

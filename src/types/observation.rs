//! Single observation rows and the lenient value type used for latest-period data.

use crate::types::parameter::Parameter;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A measured value as reported by SMHI.
///
/// Latest-period JSON reports values as strings, and some stations emit sentinel text
/// instead of a number. Such values are kept verbatim as [`ObservationValue::Text`]
/// rather than being dropped or turned into an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ObservationValue {
    Number(f64),
    Text(String),
}

impl ObservationValue {
    /// The numeric value, or `None` for non-numeric text.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            ObservationValue::Number(value) => Some(*value),
            ObservationValue::Text(_) => None,
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, ObservationValue::Number(_))
    }
}

impl From<f64> for ObservationValue {
    fn from(value: f64) -> Self {
        ObservationValue::Number(value)
    }
}

impl fmt::Display for ObservationValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ObservationValue::Number(value) => write!(f, "{}", value),
            ObservationValue::Text(text) => write!(f, "{}", text),
        }
    }
}

/// Parses `raw` as a float, falling back to the original text when it is not numeric.
///
/// Surrounding whitespace is ignored for the numeric parse but kept in the fallback.
///
/// ```
/// use smhi::{try_parse_numeric, ObservationValue};
///
/// assert_eq!(try_parse_numeric("3.14"), ObservationValue::Number(3.14));
/// assert_eq!(try_parse_numeric("N/A"), ObservationValue::Text("N/A".to_string()));
/// ```
pub fn try_parse_numeric(raw: &str) -> ObservationValue {
    match raw.trim().parse::<f64>() {
        Ok(value) => ObservationValue::Number(value),
        Err(_) => ObservationValue::Text(raw.to_string()),
    }
}

/// One normalized row: a value and its quality flag at a UTC instant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub date: DateTime<Utc>,
    pub value: ObservationValue,
    /// SMHI quality code, carried through unchanged (`G`, `Y`, ...).
    pub quality: String,
}

impl Observation {
    pub fn new(date: DateTime<Utc>, value: impl Into<ObservationValue>, quality: &str) -> Self {
        Self {
            date,
            value: value.into(),
            quality: quality.to_string(),
        }
    }
}

/// A value from the `station-set/all/period/latest-hour` endpoint, which reports one
/// parameter for every station at once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LatestObservation {
    pub parameter: Parameter,
    /// Epoch milliseconds, as reported.
    pub timestamp: i64,
    pub value: ObservationValue,
    /// The station key.
    pub station: String,
}

impl LatestObservation {
    pub fn date(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.timestamp)
    }
}

//! Defines the data structure representing an SMHI observation station as listed by the
//! `parameter/{id}.json` endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single SMHI observation station.
///
/// Stations are owned by the upstream API and are only read here. Coordinates are optional
/// because a few listed stations carry none; those are skipped by
/// [`crate::closest_station`]. Fields this struct does not model are kept in
/// [`Station::metadata`].
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Station {
    /// The numeric SMHI station id (e.g. `98210` for Stockholm-Observatoriekullen A).
    pub id: i64,
    /// The station key as used in API paths. Usually the id as a string.
    #[serde(default)]
    pub key: Option<String>,
    /// Human readable station name.
    #[serde(default)]
    pub name: String,
    /// Latitude in decimal degrees.
    #[serde(default)]
    pub latitude: Option<f64>,
    /// Longitude in decimal degrees.
    #[serde(default)]
    pub longitude: Option<f64>,
    /// Height above sea level in meters.
    #[serde(default)]
    pub height: Option<f64>,
    /// Whether the station still reports data.
    #[serde(default)]
    pub active: Option<bool>,
    /// Start of the station's reporting period, epoch milliseconds.
    #[serde(default)]
    pub from: Option<i64>,
    /// End of the station's reporting period, epoch milliseconds.
    #[serde(default)]
    pub to: Option<i64>,
    /// Every other field SMHI returned for this station (owner, summary, links, ...).
    #[serde(flatten)]
    pub metadata: Map<String, Value>,
}

impl Station {
    /// Both coordinates, if the station has them.
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        self.latitude.zip(self.longitude)
    }

    /// Start of the reporting period as a UTC instant.
    pub fn reporting_from(&self) -> Option<DateTime<Utc>> {
        self.from.and_then(DateTime::from_timestamp_millis)
    }

    /// End of the reporting period as a UTC instant.
    pub fn reporting_to(&self) -> Option<DateTime<Utc>> {
        self.to.and_then(DateTime::from_timestamp_millis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_station_keeps_unknown_fields() {
        let raw = r#"{
            "name": "Stockholm-Observatoriekullen A",
            "owner": "SMHI",
            "ownerCategory": "CLIMATE",
            "id": 98210,
            "height": 43.133,
            "latitude": 59.3417,
            "longitude": 18.0549,
            "active": true,
            "from": -3597523200000,
            "to": 1682899200000,
            "key": "98210"
        }"#;
        let station: Station = serde_json::from_str(raw).unwrap();
        assert_eq!(station.id, 98210);
        assert_eq!(station.key.as_deref(), Some("98210"));
        assert_eq!(station.coordinates(), Some((59.3417, 18.0549)));
        assert_eq!(station.metadata.get("owner"), Some(&Value::from("SMHI")));
        assert_eq!(
            station.reporting_to().map(|dt| dt.to_rfc3339()),
            Some("2023-05-01T00:00:00+00:00".to_string())
        );
    }

    #[test]
    fn test_station_without_coordinates() {
        let station: Station = serde_json::from_str(r#"{"id": 1, "name": "Nowhere"}"#).unwrap();
        assert_eq!(station.coordinates(), None);
        assert!(station.metadata.is_empty());
    }
}

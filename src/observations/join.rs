use crate::observations::error::TableError;
use crate::types::frames::observation_table::ObservationTable;
use crate::types::frames::wide_table::{Reading, WideRow, WideTable};
use chrono::{DateTime, Utc};
use std::collections::{HashMap, HashSet};

/// Inner-joins single-parameter tables of one station on their timestamps.
///
/// Rows keep the order of the first table. A timestamp is kept only when every table has it;
/// if a table repeats a timestamp, its first row for that timestamp is used. Joining a single
/// table keeps all its rows. No tables give an empty result.
///
/// # Errors
///
/// [`TableError::DuplicateParameter`] when two tables hold the same parameter.
pub fn join(tables: &[ObservationTable], station_id: i64) -> Result<WideTable, TableError> {
    let mut seen = HashSet::new();
    for table in tables {
        if !seen.insert(table.parameter) {
            return Err(TableError::DuplicateParameter(table.parameter));
        }
    }

    let Some((first, rest)) = tables.split_first() else {
        return Ok(WideTable {
            station_id: Some(station_id),
            parameters: Vec::new(),
            rows: Vec::new(),
        });
    };

    let lookups: Vec<HashMap<DateTime<Utc>, Reading>> = rest
        .iter()
        .map(|table| {
            let mut by_date = HashMap::with_capacity(table.len());
            for observation in &table.observations {
                by_date.entry(observation.date).or_insert_with(|| Reading {
                    value: observation.value.clone(),
                    quality: observation.quality.clone(),
                });
            }
            by_date
        })
        .collect();

    let rows = first
        .observations
        .iter()
        .filter_map(|observation| {
            let mut readings = Vec::with_capacity(tables.len());
            readings.push(Reading {
                value: observation.value.clone(),
                quality: observation.quality.clone(),
            });
            for by_date in &lookups {
                readings.push(by_date.get(&observation.date)?.clone());
            }
            Some(WideRow {
                date: observation.date,
                readings,
            })
        })
        .collect();

    Ok(WideTable {
        station_id: Some(station_id),
        parameters: tables.iter().map(|t| t.parameter).collect(),
        rows,
    })
}

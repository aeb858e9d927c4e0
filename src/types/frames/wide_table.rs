//! Contains `WideTable`, several parameters of one station aligned on shared timestamps.

use crate::types::frames::observation_table::{date_column, station_id_column, value_column};
use crate::types::into_utc_trait::IntoUtcDateTime;
use crate::types::observation::ObservationValue;
use crate::types::parameter::Parameter;
use chrono::{DateTime, Utc};
use polars::prelude::*;

/// A value and its quality flag for one parameter in a [`WideRow`].
#[derive(Debug, Clone, PartialEq)]
pub struct Reading {
    pub value: ObservationValue,
    pub quality: String,
}

/// One timestamp of a [`WideTable`]. `readings[i]` belongs to `WideTable::parameters[i]`.
#[derive(Debug, Clone, PartialEq)]
pub struct WideRow {
    pub date: DateTime<Utc>,
    pub readings: Vec<Reading>,
}

/// The result of joining several [`crate::ObservationTable`]s of one station.
///
/// Only timestamps present in every joined table appear. Produced by [`crate::join`].
#[derive(Debug, Clone, PartialEq)]
pub struct WideTable {
    pub station_id: Option<i64>,
    pub parameters: Vec<Parameter>,
    pub rows: Vec<WideRow>,
}

impl WideTable {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn dates(&self) -> impl Iterator<Item = DateTime<Utc>> + '_ {
        self.rows.iter().map(|r| r.date)
    }

    /// Position of `parameter` within each row's readings.
    pub fn parameter_index(&self, parameter: Parameter) -> Option<usize> {
        self.parameters.iter().position(|p| *p == parameter)
    }

    /// The reading of `parameter` in row `row`.
    pub fn reading(&self, row: usize, parameter: Parameter) -> Option<&Reading> {
        let index = self.parameter_index(parameter)?;
        self.rows.get(row).and_then(|r| r.readings.get(index))
    }

    /// Keeps only the rows with `start <= date <= end`.
    pub fn between(&self, start: impl IntoUtcDateTime, end: impl IntoUtcDateTime) -> Self {
        let start = start.into_utc();
        let end = end.into_utc();
        Self {
            station_id: self.station_id,
            parameters: self.parameters.clone(),
            rows: self
                .rows
                .iter()
                .filter(|r| r.date >= start && r.date <= end)
                .cloned()
                .collect(),
        }
    }

    /// Builds a `DataFrame` with columns
    /// `[date, station_id, <p1>, quality_<p1>, <p2>, quality_<p2>, ...]`, leaving out
    /// `station_id` when none is set.
    ///
    /// Fails with [`PolarsError::ShapeMismatch`] when a row does not hold one reading per
    /// parameter.
    pub fn to_frame(&self) -> PolarsResult<DataFrame> {
        if let Some(row) = self
            .rows
            .iter()
            .find(|r| r.readings.len() != self.parameters.len())
        {
            return Err(PolarsError::ShapeMismatch(
                format!(
                    "row at {} has {} readings for {} parameters",
                    row.date,
                    row.readings.len(),
                    self.parameters.len()
                )
                .into(),
            ));
        }

        let mut columns = Vec::with_capacity(2 + 2 * self.parameters.len());
        columns.push(date_column(self.dates())?);
        if let Some(station_id) = self.station_id {
            columns.push(station_id_column(station_id, self.rows.len()));
        }

        for (index, parameter) in self.parameters.iter().enumerate() {
            columns.push(value_column(
                parameter.name(),
                self.rows.iter().map(move |r| &r.readings[index].value),
            ));
            columns.push(Column::new(
                parameter.quality_column().into(),
                self.rows
                    .iter()
                    .map(|r| r.readings[index].quality.as_str())
                    .collect::<Vec<_>>(),
            ));
        }

        DataFrame::new(columns)
    }
}

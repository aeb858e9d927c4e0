use crate::types::parameter::Parameter;
use polars::error::PolarsError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum NormalizeError {
    #[error("Archive normalization is not supported for parameter {0}")]
    UnsupportedParameter(Parameter),

    // Archived values are coerced strictly, unlike latest-period JSON values
    #[error("Row {row}: value '{value}' in column '{column}' is not a number")]
    MalformedValue {
        row: usize,
        column: String,
        value: String,
    },

    #[error("Row {row}: could not parse '{value}' in column '{column}' as a UTC date")]
    MalformedDate {
        row: usize,
        column: String,
        value: String,
    },

    #[error("Required column '{0}' not found in archive table")]
    MissingColumn(String),

    #[error("Record {row} has no '{field}' field")]
    MissingField { row: usize, field: &'static str },

    #[error("Column '{column}' of the archive table is not a string column")]
    ColumnType {
        column: String,
        #[source]
        source: PolarsError,
    },
}

#[derive(Debug, Error)]
pub enum TableError {
    #[error("Parameter {0} was passed to join more than once")]
    DuplicateParameter(Parameter),

    #[error("Cannot stitch {archive} archive data with {latest} latest data")]
    ParameterMismatch {
        archive: Parameter,
        latest: Parameter,
    },
}

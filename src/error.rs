use crate::fetch::error::FetchError;
use crate::observations::error::{NormalizeError, TableError};
use crate::types::parameter::{Parameter, UnknownParameterId};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SmhiError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Normalize(#[from] NormalizeError),

    #[error(transparent)]
    Table(#[from] TableError),

    #[error(transparent)]
    UnknownParameter(#[from] UnknownParameterId),

    #[error("Parameter {0} has no station set")]
    MissingStationSet(Parameter),

    #[error("The station set of parameter {0} has no periods")]
    NoPeriods(Parameter),

    #[error("Latest observations of parameter {parameter} are not available for period '{period}'")]
    UnsupportedPeriod { parameter: Parameter, period: String },
}

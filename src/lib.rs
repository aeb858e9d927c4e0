mod error;
mod fetch;
mod observations;
mod smhi;
mod stations;
mod types;

pub use error::SmhiError;
pub use smhi::*;

pub use fetch::error::FetchError;
pub use fetch::fetcher::{Fetch, HttpFetcher, DEFAULT_API_VERSION, DEFAULT_BASE_URL};
pub use fetch::retry::RetryPolicy;
pub use fetch::archive_csv::{read_archive_csv, ARCHIVE_PREAMBLE_ROWS, ARCHIVE_SEPARATOR};

pub use observations::error::{NormalizeError, TableError};
pub use observations::join::join;
pub use observations::normalize::{normalize_archive, normalize_json, RawObservation};
pub use observations::stitch::stitch;

pub use stations::distance::{distance, EARTH_DIAMETER_KM};
pub use stations::locate_station::{closest_station, closest_station_with_distance};

pub use types::frames::observation_table::ObservationTable;
pub use types::frames::wide_table::{Reading, WideRow, WideTable};
pub use types::into_utc_trait::IntoUtcDateTime;
pub use types::observation::{try_parse_numeric, LatestObservation, Observation, ObservationValue};
pub use types::parameter::{ArchiveFormat, Parameter, UnknownParameterId};
pub use types::station::Station;

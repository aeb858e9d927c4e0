use crate::observations::error::TableError;
use crate::types::frames::observation_table::ObservationTable;
use crate::types::into_utc_trait::IntoUtcDateTime;
use log::debug;

/// Combines the corrected archive with the more recent latest-months data of the same
/// parameter and station.
///
/// Archive rows dated at or after `combine_since` are kept, followed by every latest row
/// strictly newer than the newest kept archive row. When no archive rows remain, all latest
/// rows are appended. The station id of `archive` is kept.
///
/// # Errors
///
/// [`TableError::ParameterMismatch`] when the tables hold different parameters.
pub fn stitch(
    archive: &ObservationTable,
    latest: &ObservationTable,
    combine_since: impl IntoUtcDateTime,
) -> Result<ObservationTable, TableError> {
    if archive.parameter != latest.parameter {
        return Err(TableError::ParameterMismatch {
            archive: archive.parameter,
            latest: latest.parameter,
        });
    }

    let since = combine_since.into_utc();
    let mut observations: Vec<_> = archive
        .observations
        .iter()
        .filter(|o| o.date >= since)
        .cloned()
        .collect();

    let archive_end = observations.iter().map(|o| o.date).max();
    let kept_archive = observations.len();
    observations.extend(
        latest
            .observations
            .iter()
            .filter(|o| archive_end.map_or(true, |end| o.date > end))
            .cloned(),
    );

    debug!(
        "Stitched {} archive rows and {} latest rows of {}",
        kept_archive,
        observations.len() - kept_archive,
        archive.parameter
    );

    Ok(ObservationTable {
        parameter: archive.parameter,
        station_id: archive.station_id,
        observations,
    })
}

//! Reads the `corrected-archive` CSV export into a `DataFrame`.
//!
//! The export starts with a block of station and parameter metadata before the actual
//! table header. Its data rows do not all have the same number of fields: the first few
//! carry a free-text note in a trailing column.

use polars::prelude::*;
use std::io::Cursor;

/// Lines of station/parameter metadata preceding the table header.
pub const ARCHIVE_PREAMBLE_ROWS: usize = 9;
pub const ARCHIVE_SEPARATOR: u8 = b';';

/// Parses an archive export, skipping `skip_rows` preamble lines.
///
/// Every column is read as `String`; converting values is left to
/// [`crate::normalize_archive`]. Empty cells are null.
pub fn read_archive_csv(bytes: &[u8], skip_rows: usize) -> PolarsResult<DataFrame> {
    CsvReadOptions::default()
        .with_skip_rows(skip_rows)
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .map_parse_options(|options| {
            options
                .with_separator(ARCHIVE_SEPARATOR)
                .with_truncate_ragged_lines(true)
        })
        .into_reader_with_file_handle(Cursor::new(bytes.to_vec()))
        .finish()
}

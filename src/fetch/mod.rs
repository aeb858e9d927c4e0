pub mod archive_csv;
pub mod error;
pub mod fetcher;
#[cfg(test)]
pub(crate) mod memory;
pub mod retry;

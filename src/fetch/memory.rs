//! Canned responses for exercising the client without a network.

use crate::fetch::archive_csv::{read_archive_csv, ARCHIVE_PREAMBLE_ROWS};
use crate::fetch::error::FetchError;
use crate::fetch::fetcher::Fetch;
use polars::frame::DataFrame;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::sync::Mutex;

#[derive(Default)]
pub(crate) struct MemoryFetcher {
    documents: HashMap<String, String>,
    requested: Mutex<Vec<String>>,
}

impl MemoryFetcher {
    pub(crate) fn with(mut self, service: &str, body: impl Into<String>) -> Self {
        self.documents.insert(service.to_string(), body.into());
        self
    }

    /// Services requested so far, in order.
    pub(crate) fn requested(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }

    fn body(&self, service: &str) -> &str {
        self.requested.lock().unwrap().push(service.to_string());
        self.documents
            .get(service)
            .unwrap_or_else(|| panic!("no canned response for {service}"))
    }
}

impl Fetch for MemoryFetcher {
    async fn fetch_json<T: DeserializeOwned>(&self, service: &str) -> Result<T, FetchError> {
        serde_json::from_str(self.body(service))
            .map_err(|e| FetchError::JsonParse(service.to_string(), e))
    }

    async fn fetch_table(&self, service: &str) -> Result<DataFrame, FetchError> {
        read_archive_csv(self.body(service).as_bytes(), ARCHIVE_PREAMBLE_ROWS)
            .map_err(|e| FetchError::CsvRead(service.to_string(), e))
    }
}

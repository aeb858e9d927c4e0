use crate::fetch::archive_csv::{read_archive_csv, ARCHIVE_PREAMBLE_ROWS};
use crate::fetch::error::FetchError;
use crate::fetch::retry::{RetryPolicy, TransientFailures};
use log::{info, warn};
use polars::frame::DataFrame;
use reqwest::Client;
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_retry::RetryTransientMiddleware;
use serde::de::DeserializeOwned;
use std::fmt;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://opendata-download-metobs.smhi.se";
pub const DEFAULT_API_VERSION: &str = "1.0";

/// Source of SMHI API documents, addressed by their path below
/// `api/version/{version}/`, e.g. `parameter/1.json`.
#[allow(async_fn_in_trait)]
pub trait Fetch {
    /// Fetches and deserializes a JSON document.
    async fn fetch_json<T: DeserializeOwned>(&self, service: &str) -> Result<T, FetchError>;

    /// Fetches an archive CSV export as a table of `String` columns, preamble skipped.
    async fn fetch_table(&self, service: &str) -> Result<DataFrame, FetchError>;
}

/// [`Fetch`] over HTTP with reqwest. Network failures, HTTP 429 and HTTP 5xx are repeated
/// by a retry middleware following its [`RetryPolicy`].
#[derive(Clone)]
pub struct HttpFetcher {
    client: ClientWithMiddleware,
    base_url: String,
    version: String,
    retry: RetryPolicy,
}

impl fmt::Debug for HttpFetcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpFetcher")
            .field("base_url", &self.base_url)
            .field("version", &self.version)
            .field("retry", &self.retry)
            .finish()
    }
}

impl HttpFetcher {
    pub fn new(
        base_url: &str,
        version: &str,
        retry: RetryPolicy,
        timeout: Option<Duration>,
    ) -> Result<Self, FetchError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| FetchError::NetworkRequest(base_url.to_string(), e.into()))?;
        let client = ClientBuilder::new(client)
            .with(RetryTransientMiddleware::new_with_policy_and_strategy(
                retry.clone(),
                TransientFailures,
            ))
            .build();

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            version: version.to_string(),
            retry,
        })
    }

    pub fn retry_policy(&self) -> &RetryPolicy {
        &self.retry
    }

    /// Full URL of `service`.
    pub fn url(&self, service: &str) -> String {
        format!(
            "{}/api/version/{}/{}",
            self.base_url,
            self.version,
            service.trim_start_matches('/')
        )
    }

    async fn get_bytes(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        info!("Requesting {}", url);
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::NetworkRequest(url.to_string(), e))?;

        let response = match response.error_for_status() {
            Ok(resp) => resp,
            Err(e) => {
                warn!("HTTP error for {}: {:?}", url, e);
                return Err(if let Some(status) = e.status() {
                    FetchError::HttpStatus {
                        url: url.to_string(),
                        status,
                        source: e,
                    }
                } else {
                    FetchError::NetworkRequest(url.to_string(), e.into())
                });
            }
        };

        let bytes = response
            .bytes()
            .await
            .map_err(|e| FetchError::NetworkRequest(url.to_string(), e.into()))?;
        Ok(bytes.to_vec())
    }
}

impl Fetch for HttpFetcher {
    async fn fetch_json<T: DeserializeOwned>(&self, service: &str) -> Result<T, FetchError> {
        let url = self.url(service);
        let bytes = self.get_bytes(&url).await?;
        serde_json::from_slice(&bytes).map_err(|e| FetchError::JsonParse(url, e))
    }

    async fn fetch_table(&self, service: &str) -> Result<DataFrame, FetchError> {
        let url = self.url(service);
        let bytes = self.get_bytes(&url).await?;
        if std::str::from_utf8(&bytes).is_err() {
            return Err(FetchError::InvalidUtf8(url));
        }
        let df = read_archive_csv(&bytes, ARCHIVE_PREAMBLE_ROWS)
            .map_err(|e| FetchError::CsvRead(url.clone(), e))?;
        info!("Read {} archive rows from {}", df.height(), url);
        Ok(df)
    }
}

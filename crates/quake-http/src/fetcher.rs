//! reqwest-backed fetcher.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use tracing::{debug, instrument, trace};

use quake_core::error::NetworkError;
use quake_core::traits::Fetcher;
use quake_core::types::parse_request_url;
use quake_core::Result;

/// Timeouts applied to every request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HttpFetcherConfig {
    pub connect_timeout: Duration,
    pub read_timeout: Duration,
}

impl Default for HttpFetcherConfig {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(15),
            read_timeout: Duration::from_secs(10),
        }
    }
}

/// A [`Fetcher`] that performs plain HTTP GET requests.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    /// Create a fetcher with the default timeouts.
    pub fn new() -> Result<Self> {
        Self::with_config(HttpFetcherConfig::default())
    }

    /// Create a fetcher with custom timeouts.
    pub fn with_config(config: HttpFetcherConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("quake/", env!("CARGO_PKG_VERSION")))
            .connect_timeout(config.connect_timeout)
            .read_timeout(config.read_timeout)
            .build()
            .map_err(|e| NetworkError::Client {
                message: e.to_string(),
            })?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    #[instrument(skip(self))]
    async fn try_fetch(&self, url: &str) -> Result<String> {
        let url = parse_request_url(url)?;
        debug!(%url, "GET earthquake feed");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(request_error)?;

        let status = response.status();
        trace!(%status, "Feed response");

        if status != StatusCode::OK {
            return Err(NetworkError::Status {
                status: status.as_u16(),
            }
            .into());
        }

        let body = response.text().await.map_err(body_error)?;
        trace!(bytes = body.len(), "Read feed body");

        Ok(body)
    }
}

fn request_error(err: reqwest::Error) -> NetworkError {
    if err.is_timeout() {
        NetworkError::Timeout {
            message: err.to_string(),
        }
    } else if err.is_connect() {
        NetworkError::Connection {
            message: err.to_string(),
        }
    } else {
        NetworkError::Client {
            message: err.to_string(),
        }
    }
}

fn body_error(err: reqwest::Error) -> NetworkError {
    if err.is_timeout() {
        NetworkError::Timeout {
            message: err.to_string(),
        }
    } else {
        NetworkError::Read {
            message: err.to_string(),
        }
    }
}

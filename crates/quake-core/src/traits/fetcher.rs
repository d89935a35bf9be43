//! Fetcher trait.

use async_trait::async_trait;
use tracing::warn;

use crate::Result;

/// Outcome of a fetch with every error folded away.
///
/// `ok` is false whenever the body could not be retrieved; the body is
/// empty in that case.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchResponse {
    pub body: String,
    pub ok: bool,
}

impl FetchResponse {
    /// A successful response carrying `body`.
    pub fn success(body: String) -> Self {
        Self { body, ok: true }
    }

    /// The "no data" response.
    pub fn failed() -> Self {
        Self::default()
    }

    /// Returns the body if the fetch succeeded.
    pub fn into_body(self) -> Option<String> {
        self.ok.then_some(self.body)
    }
}

/// Retrieves the raw text of a fully assembled request URL.
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Perform one GET of `url` and return the whole body.
    ///
    /// Only a 200 response counts as success.
    async fn try_fetch(&self, url: &str) -> Result<String>;

    /// Like [`try_fetch`](Fetcher::try_fetch), but logs and absorbs any error.
    async fn fetch(&self, url: &str) -> FetchResponse {
        match self.try_fetch(url).await {
            Ok(body) => FetchResponse::success(body),
            Err(e) => {
                warn!(url, error = %e, "Problem retrieving the earthquake JSON results");
                FetchResponse::failed()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, NetworkError};

    struct Canned(Option<&'static str>);

    #[async_trait]
    impl Fetcher for Canned {
        async fn try_fetch(&self, _url: &str) -> Result<String> {
            self.0
                .map(str::to_string)
                .ok_or(Error::Network(NetworkError::Status { status: 500 }))
        }
    }

    #[tokio::test]
    async fn fetch_wraps_success() {
        let response = Canned(Some("{}")).fetch("https://example.com").await;
        assert!(response.ok);
        assert_eq!(response.body, "{}");
    }

    #[tokio::test]
    async fn fetch_absorbs_errors() {
        let response = Canned(None).fetch("https://example.com").await;
        assert_eq!(response, FetchResponse::failed());
        assert!(response.into_body().is_none());
    }
}

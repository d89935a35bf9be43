//! Cancellable background loading of the earthquake feed.
//!
//! A loader owns at most one load at a time. Starting a new load, calling
//! [`EarthquakeLoader::reset`] or dropping the loader cancels the one in
//! flight, and a cancelled load never delivers its result.

use std::sync::Arc;

use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use quake_core::feed::{Earthquake, ParseMode, fetch_earthquakes};
use quake_core::traits::Fetcher;

/// Runs fetch-then-parse off the caller's task.
pub struct EarthquakeLoader {
    fetcher: Arc<dyn Fetcher>,
    mode: ParseMode,
    current: Option<CancellationToken>,
}

impl EarthquakeLoader {
    pub fn new(fetcher: Arc<dyn Fetcher>) -> Self {
        Self {
            fetcher,
            mode: ParseMode::default(),
            current: None,
        }
    }

    /// Use `mode` for loads started after this call.
    pub fn with_parse_mode(mut self, mode: ParseMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn parse_mode(&self) -> ParseMode {
        self.mode
    }

    /// Start loading `url`, cancelling any load still in flight.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start(&mut self, url: impl Into<String>) -> LoadHandle {
        self.reset();

        let url = url.into();
        let token = CancellationToken::new();
        let task_token = token.clone();
        let fetcher = Arc::clone(&self.fetcher);
        let mode = self.mode;

        info!(%url, "Starting earthquake load");

        let task = tokio::spawn(async move {
            tokio::select! {
                biased;
                _ = task_token.cancelled() => None,
                quakes = fetch_earthquakes(fetcher.as_ref(), &url, mode) => Some(quakes),
            }
        });

        self.current = Some(token.clone());
        LoadHandle { token, task }
    }

    /// Cancel the load in flight, if any.
    pub fn reset(&mut self) {
        if let Some(token) = self.current.take() {
            if !token.is_cancelled() {
                debug!("Cancelling in-flight earthquake load");
            }
            token.cancel();
        }
    }
}

impl Drop for EarthquakeLoader {
    fn drop(&mut self) {
        self.reset();
    }
}

impl std::fmt::Debug for EarthquakeLoader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EarthquakeLoader")
            .field("mode", &self.mode)
            .field("in_flight", &self.current.is_some())
            .finish()
    }
}

/// The single result of one load.
#[derive(Debug)]
pub struct LoadHandle {
    token: CancellationToken,
    task: JoinHandle<Option<Vec<Earthquake>>>,
}

impl LoadHandle {
    /// Cancel this load. Its result will not be delivered.
    pub fn cancel(&self) {
        self.token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Returns a token that cancels this load when triggered.
    pub fn cancellation_token(&self) -> CancellationToken {
        self.token.clone()
    }

    /// Wait for the load to finish.
    ///
    /// Returns `None` if the load was cancelled, even when the fetch had
    /// already completed.
    pub async fn wait(self) -> Option<Vec<Earthquake>> {
        let result = match self.task.await {
            Ok(result) => result,
            Err(e) => {
                warn!(error = %e, "Earthquake load task failed");
                return None;
            }
        };

        if self.token.is_cancelled() {
            debug!("Discarding result of cancelled load");
            return None;
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use async_trait::async_trait;
    use tokio::sync::Notify;

    use quake_core::Result;

    const ONE_QUAKE: &str = r#"{"features":[{"properties":{"mag":5.2,"place":"10km SW of Example","time":1609459200000,"url":"https://example.com/1"}}]}"#;

    struct Ready(&'static str);

    #[async_trait]
    impl Fetcher for Ready {
        async fn try_fetch(&self, _url: &str) -> Result<String> {
            Ok(self.0.to_string())
        }
    }

    /// Never answers until notified.
    struct Stalled(Arc<Notify>);

    #[async_trait]
    impl Fetcher for Stalled {
        async fn try_fetch(&self, _url: &str) -> Result<String> {
            self.0.notified().await;
            Ok(ONE_QUAKE.to_string())
        }
    }

    #[tokio::test]
    async fn delivers_parsed_result() {
        let mut loader = EarthquakeLoader::new(Arc::new(Ready(ONE_QUAKE)));
        let quakes = loader.start("https://example.com").wait().await.unwrap();
        assert_eq!(quakes.len(), 1);
        assert_eq!(quakes[0].magnitude(), 5.2);
    }

    #[tokio::test]
    async fn failed_fetch_delivers_empty_list() {
        let mut loader = EarthquakeLoader::new(Arc::new(Ready("not json")));
        let quakes = loader.start("https://example.com").wait().await.unwrap();
        assert!(quakes.is_empty());
    }

    #[tokio::test]
    async fn cancelled_load_delivers_nothing() {
        let mut loader = EarthquakeLoader::new(Arc::new(Stalled(Arc::new(Notify::new()))));
        let handle = loader.start("https://example.com");
        handle.cancel();
        assert!(handle.is_cancelled());
        assert!(handle.wait().await.is_none());
    }

    #[tokio::test]
    async fn starting_again_cancels_previous_load() {
        let notify = Arc::new(Notify::new());
        let mut loader = EarthquakeLoader::new(Arc::new(Stalled(Arc::clone(&notify))));

        let first = loader.start("https://example.com/first");
        let second = loader.start("https://example.com/second");
        notify.notify_one();

        assert!(first.wait().await.is_none());
        assert_eq!(second.wait().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn reset_cancels_in_flight_load() {
        let mut loader = EarthquakeLoader::new(Arc::new(Stalled(Arc::new(Notify::new()))));
        let handle = loader.start("https://example.com");
        loader.reset();
        assert!(handle.wait().await.is_none());
    }

    #[tokio::test]
    async fn dropping_loader_cancels_load() {
        let mut loader = EarthquakeLoader::new(Arc::new(Stalled(Arc::new(Notify::new()))));
        let handle = loader.start("https://example.com");
        drop(loader);
        assert!(handle.wait().await.is_none());
    }

    #[tokio::test]
    async fn lenient_mode_is_applied() {
        let body = r#"{"features":[
            {"properties":{"mag":"bad","place":"A","time":1,"url":"u"}},
            {"properties":{"mag":4.0,"place":"B","time":2,"url":"u"}}]}"#;
        let mut loader =
            EarthquakeLoader::new(Arc::new(Ready(body))).with_parse_mode(ParseMode::SkipInvalid);
        let quakes = loader.start("https://example.com").wait().await.unwrap();
        assert_eq!(quakes.len(), 1);
        assert_eq!(quakes[0].location(), "B");
    }
}

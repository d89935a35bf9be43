//! Earthquake feed records and GeoJSON parsing.

mod earthquake;
mod parse;

pub use earthquake::Earthquake;
pub use parse::{ParseMode, parse, parse_with, try_parse};

use tracing::{debug, instrument};

use crate::traits::Fetcher;

/// Fetch `url` and parse the body, folding every failure into an empty list.
#[instrument(skip(fetcher))]
pub async fn fetch_earthquakes(fetcher: &dyn Fetcher, url: &str, mode: ParseMode) -> Vec<Earthquake> {
    let response = fetcher.fetch(url).await;
    let quakes = parse_with(response.into_body().as_deref(), mode);
    debug!(count = quakes.len(), "Fetched earthquakes");
    quakes
}

//! quake-http - HTTP-backed earthquake fetching.

mod fetcher;
mod loader;

pub use fetcher::{HttpFetcher, HttpFetcherConfig};
pub use loader::{EarthquakeLoader, LoadHandle};

//! quake-core - Core types and traits for the USGS earthquake feed.
//!
//! The crate holds everything that does not touch the network: the
//! [`Earthquake`] record, the GeoJSON parser, request URL construction and
//! the [`Fetcher`] trait that transport backends implement.
//!
//! # Example
//!
//! ```
//! use quake_core::feed::parse;
//!
//! let body = r#"{"features":[{"properties":{
//!     "mag":5.2,"place":"10km SW of Example","time":1609459200000,
//!     "url":"https://example.com/1"}}]}"#;
//!
//! let quakes = parse(body);
//! assert_eq!(quakes.len(), 1);
//! assert_eq!(quakes[0].location(), "10km SW of Example");
//! ```

pub mod error;
pub mod feed;
pub mod traits;
pub mod types;

pub use error::{Error, NetworkError, ParseError};
pub use feed::{Earthquake, ParseMode, fetch_earthquakes, parse, parse_with, try_parse};
pub use traits::{FetchResponse, Fetcher};
pub use types::{FeedQuery, MinMagnitude, OrderBy, USGS_QUERY_URL};

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;

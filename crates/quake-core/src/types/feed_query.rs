//! Event query URL construction.

use std::fmt;
use url::Url;

use crate::error::Error;

use super::{MinMagnitude, OrderBy};

/// The USGS FDSN event query endpoint.
pub const USGS_QUERY_URL: &str = "https://earthquake.usgs.gov/fdsnws/event/1/query";

/// Parse and check a URL that is about to be requested.
///
/// Only absolute `http` and `https` URLs with a host are accepted.
///
/// # Errors
///
/// Returns [`Error::MalformedUrl`] for anything else.
pub fn parse_request_url(s: &str) -> Result<Url, Error> {
    let url = Url::parse(s).map_err(|e| Error::malformed_url(s, e))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(Error::malformed_url(s, "scheme must be http or https"));
    }

    if url.host_str().is_none() {
        return Err(Error::malformed_url(s, "must have a host"));
    }

    Ok(url)
}

/// Parameters of one earthquake query.
///
/// # Example
///
/// ```
/// use quake_core::{FeedQuery, OrderBy};
///
/// let query = FeedQuery::default().with_order_by(OrderBy::Time);
/// assert_eq!(
///     query.to_url(),
///     "https://earthquake.usgs.gov/fdsnws/event/1/query?format=geojson&limit=10&minmag=6&orderby=time"
/// );
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct FeedQuery {
    base: Url,
    limit: u32,
    min_magnitude: MinMagnitude,
    order_by: OrderBy,
}

impl FeedQuery {
    /// Default number of events requested.
    pub const DEFAULT_LIMIT: u32 = 10;

    /// Create a query against `base` with default parameters.
    ///
    /// # Errors
    ///
    /// Returns an error if `base` is not a usable http(s) URL.
    pub fn new(base: impl AsRef<str>) -> Result<Self, Error> {
        Ok(Self {
            base: parse_request_url(base.as_ref())?,
            limit: Self::DEFAULT_LIMIT,
            min_magnitude: MinMagnitude::default(),
            order_by: OrderBy::default(),
        })
    }

    /// Set the maximum number of events.
    ///
    /// # Errors
    ///
    /// Returns an error if `limit` is zero.
    pub fn with_limit(mut self, limit: u32) -> Result<Self, Error> {
        if limit == 0 {
            return Err(Error::InvalidInput("limit must be at least 1".to_string()));
        }
        self.limit = limit;
        Ok(self)
    }

    pub fn with_min_magnitude(mut self, min_magnitude: MinMagnitude) -> Self {
        self.min_magnitude = min_magnitude;
        self
    }

    pub fn with_order_by(mut self, order_by: OrderBy) -> Self {
        self.order_by = order_by;
        self
    }

    /// Returns the endpoint the query is sent to.
    pub fn base(&self) -> &Url {
        &self.base
    }

    /// Returns the host of the endpoint.
    pub fn host(&self) -> Option<&str> {
        self.base.host_str()
    }

    /// Returns the port of the endpoint, including the scheme default.
    pub fn port(&self) -> Option<u16> {
        self.base.port_or_known_default()
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    pub fn min_magnitude(&self) -> MinMagnitude {
        self.min_magnitude
    }

    pub fn order_by(&self) -> OrderBy {
        self.order_by
    }

    /// Render the full request URL.
    pub fn to_url(&self) -> String {
        let mut url = self.base.clone();
        url.query_pairs_mut()
            .append_pair("format", "geojson")
            .append_pair("limit", &self.limit.to_string())
            .append_pair("minmag", &self.min_magnitude.to_string())
            .append_pair("orderby", self.order_by.as_str());
        url.into()
    }
}

impl Default for FeedQuery {
    fn default() -> Self {
        Self {
            base: Url::parse(USGS_QUERY_URL).expect("USGS_QUERY_URL is a valid URL"),
            limit: Self::DEFAULT_LIMIT,
            min_magnitude: MinMagnitude::default(),
            order_by: OrderBy::default(),
        }
    }
}

impl fmt::Display for FeedQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_url())
    }
}

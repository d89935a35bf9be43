//! Stored settings.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use quake_core::{FeedQuery, MinMagnitude, OrderBy, USGS_QUERY_URL};

/// The user's query preferences.
///
/// Fields missing from the settings file take their default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub min_magnitude: MinMagnitude,
    pub order_by: OrderBy,
    pub limit: u32,
    pub base_url: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            min_magnitude: MinMagnitude::default(),
            order_by: OrderBy::default(),
            limit: FeedQuery::DEFAULT_LIMIT,
            base_url: USGS_QUERY_URL.to_string(),
        }
    }
}

impl Settings {
    /// Build the query these settings describe.
    pub fn to_query(&self) -> Result<FeedQuery> {
        let query = FeedQuery::new(&self.base_url)
            .context("Invalid feed URL")?
            .with_limit(self.limit)
            .context("Invalid limit")?
            .with_min_magnitude(self.min_magnitude)
            .with_order_by(self.order_by);
        Ok(query)
    }
}

//! The earthquake record.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Separator between the offset and the primary location in a USGS place.
const LOCATION_SEPARATOR: &str = " of ";

/// Offset used when a place carries no explicit distance.
const NEAR_THE: &str = "Near the";

/// One seismic event.
///
/// Records are only built from a complete set of properties; there is no
/// way to obtain a partially populated one.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Earthquake {
    magnitude: f64,
    location: String,
    timestamp: i64,
    detail_url: String,
}

impl Earthquake {
    pub fn new(
        magnitude: f64,
        location: impl Into<String>,
        timestamp: i64,
        detail_url: impl Into<String>,
    ) -> Self {
        Self {
            magnitude,
            location: location.into(),
            timestamp,
            detail_url: detail_url.into(),
        }
    }

    pub fn magnitude(&self) -> f64 {
        self.magnitude
    }

    /// Human-readable place, e.g. `"10km SW of Example"`.
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Event time in milliseconds since the Unix epoch.
    pub fn timestamp(&self) -> i64 {
        self.timestamp
    }

    pub fn detail_url(&self) -> &str {
        &self.detail_url
    }

    /// Event time as a UTC date, if the timestamp is in chrono's range.
    pub fn time(&self) -> Option<DateTime<Utc>> {
        DateTime::<Utc>::from_timestamp_millis(self.timestamp)
    }

    /// The distance part of the place, e.g. `"10km SW of"`.
    pub fn location_offset(&self) -> String {
        match self.location.split_once(LOCATION_SEPARATOR) {
            Some((offset, _)) => format!("{offset}{}", LOCATION_SEPARATOR.trim_end()),
            None => NEAR_THE.to_string(),
        }
    }

    /// The named part of the place, e.g. `"Example"`.
    pub fn primary_location(&self) -> &str {
        match self.location.split_once(LOCATION_SEPARATOR) {
            Some((_, primary)) => primary,
            None => &self.location,
        }
    }
}

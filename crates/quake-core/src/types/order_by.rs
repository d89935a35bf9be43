//! Sort order for the event query.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// The `orderby` query parameter understood by the USGS service.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OrderBy {
    /// Most recent first.
    Time,
    /// Oldest first.
    TimeAsc,
    /// Largest magnitude first.
    #[default]
    Magnitude,
    /// Smallest magnitude first.
    MagnitudeAsc,
}

impl OrderBy {
    /// All accepted values, in the order they are documented.
    pub const ALL: [OrderBy; 4] = [
        OrderBy::Time,
        OrderBy::TimeAsc,
        OrderBy::Magnitude,
        OrderBy::MagnitudeAsc,
    ];

    /// Returns the value sent on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderBy::Time => "time",
            OrderBy::TimeAsc => "time-asc",
            OrderBy::Magnitude => "magnitude",
            OrderBy::MagnitudeAsc => "magnitude-asc",
        }
    }
}

impl fmt::Display for OrderBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderBy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OrderBy::ALL
            .into_iter()
            .find(|order| order.as_str() == s)
            .ok_or_else(|| {
                Error::InvalidInput(format!(
                    "unknown sort order '{s}' (expected one of time, time-asc, magnitude, magnitude-asc)"
                ))
            })
    }
}

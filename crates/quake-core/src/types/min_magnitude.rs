//! Minimum magnitude filter.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// A validated `minmag` value: finite and not negative.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct MinMagnitude(f64);

impl MinMagnitude {
    /// Create a new minimum magnitude.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is NaN, infinite or negative.
    pub fn new(value: f64) -> Result<Self, Error> {
        if !value.is_finite() || value < 0.0 {
            return Err(Error::InvalidInput(format!(
                "minimum magnitude must be a finite, non-negative number, got {value}"
            )));
        }
        Ok(Self(value))
    }

    /// Returns the raw value.
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl Default for MinMagnitude {
    fn default() -> Self {
        Self(6.0)
    }
}

impl fmt::Display for MinMagnitude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for MinMagnitude {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s
            .trim()
            .parse::<f64>()
            .map_err(|e| Error::InvalidInput(format!("invalid minimum magnitude '{s}': {e}")))?;
        Self::new(value)
    }
}

impl<'de> Deserialize<'de> for MinMagnitude {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = f64::deserialize(deserializer)?;
        MinMagnitude::new(value).map_err(serde::de::Error::custom)
    }
}

//! GeoJSON feed parsing.
//!
//! The USGS service answers with a `FeatureCollection`. Only the
//! `properties` of each feature are read; geometry and metadata are
//! ignored.

use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::ParseError;

use super::Earthquake;

/// What to do with a feature that lacks a property or has a mistyped one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ParseMode {
    /// Stop at the first bad feature and keep the records built before it.
    #[default]
    Truncate,
    /// Abandon the whole document, including records already built.
    FailFast,
    /// Log the feature and carry on with the next one.
    SkipInvalid,
}

#[derive(Debug, Deserialize)]
struct Feature {
    properties: Properties,
}

#[derive(Debug, Deserialize)]
struct Properties {
    mag: f64,
    place: String,
    time: i64,
    url: String,
}

impl From<Properties> for Earthquake {
    fn from(p: Properties) -> Self {
        Earthquake::new(p.mag, p.place, p.time, p.url)
    }
}

/// Parse a feed body, reporting why it could not be used.
///
/// An empty or absent body is the "no data" case and yields `Ok` with an
/// empty list.
///
/// # Errors
///
/// Returns an error if the body is not JSON, is not an object, has no
/// `features` array, or (under [`ParseMode::FailFast`]) if any feature is
/// invalid.
pub fn try_parse<'a>(
    body: impl Into<Option<&'a str>>,
    mode: ParseMode,
) -> Result<Vec<Earthquake>, ParseError> {
    let Some(body) = body.into().filter(|b| !b.trim().is_empty()) else {
        debug!("Empty response body, no earthquakes");
        return Ok(Vec::new());
    };

    let document: Value = serde_json::from_str(body).map_err(|e| ParseError::InvalidJson {
        message: e.to_string(),
    })?;

    let Value::Object(mut root) = document else {
        return Err(ParseError::NotAnObject);
    };

    let Some(Value::Array(features)) = root.remove("features") else {
        return Err(ParseError::MissingFeatures);
    };

    let mut quakes = Vec::with_capacity(features.len());
    for (index, feature) in features.into_iter().enumerate() {
        match serde_json::from_value::<Feature>(feature) {
            Ok(feature) => quakes.push(feature.properties.into()),
            Err(e) => {
                let err = ParseError::InvalidFeature {
                    index,
                    reason: e.to_string(),
                };
                match mode {
                    ParseMode::Truncate => {
                        warn!(error = %err, kept = quakes.len(), "Stopping at earthquake feature");
                        break;
                    }
                    ParseMode::FailFast => return Err(err),
                    ParseMode::SkipInvalid => warn!(error = %err, "Skipping earthquake feature"),
                }
            }
        }
    }

    Ok(quakes)
}

/// Parse a feed body under `mode`, logging and absorbing any error.
pub fn parse_with<'a>(body: impl Into<Option<&'a str>>, mode: ParseMode) -> Vec<Earthquake> {
    match try_parse(body, mode) {
        Ok(quakes) => quakes,
        Err(e) => {
            warn!(error = %e, ?mode, "Earthquake JSON extraction failed");
            Vec::new()
        }
    }
}

/// Parse a feed body with the default truncating policy.
pub fn parse<'a>(body: impl Into<Option<&'a str>>) -> Vec<Earthquake> {
    parse_with(body, ParseMode::default())
}

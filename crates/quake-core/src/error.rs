//! Error types for quake operations.
//!
//! Every failure is one of three kinds: the network did not deliver a
//! body, the URL could not be used, or the body could not be turned into
//! earthquakes. Callers at the fetch/parse boundary usually fold all of
//! them into "no data".

use thiserror::Error;

/// The unified error type for quake operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Connection, timeout, status or body read failures.
    #[error("network error: {0}")]
    Network(#[from] NetworkError),

    /// The request URL could not be parsed or uses an unsupported scheme.
    #[error("invalid URL '{value}': {reason}")]
    MalformedUrl { value: String, reason: String },

    /// The response body is not a usable earthquake document.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// A setting or argument failed validation.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl Error {
    pub(crate) fn malformed_url(value: &str, reason: impl ToString) -> Self {
        Error::MalformedUrl {
            value: value.to_string(),
            reason: reason.to_string(),
        }
    }
}

/// Transport-level errors.
#[derive(Debug, Error)]
pub enum NetworkError {
    /// The connection could not be established.
    #[error("connection failed: {message}")]
    Connection { message: String },

    /// Connecting or reading took longer than the configured timeout.
    #[error("request timed out: {message}")]
    Timeout { message: String },

    /// The server answered with something other than 200 OK.
    #[error("unexpected response status {status}")]
    Status { status: u16 },

    /// The body could not be read to completion.
    #[error("failed to read response body: {message}")]
    Read { message: String },

    /// The HTTP client could not be built or the request failed otherwise.
    #[error("HTTP client error: {message}")]
    Client { message: String },
}

/// Errors raised while turning a response body into earthquakes.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The body is not JSON.
    #[error("invalid JSON: {message}")]
    InvalidJson { message: String },

    /// The top-level JSON value is not an object.
    #[error("top-level value is not an object")]
    NotAnObject,

    /// The document has no `features` array.
    #[error("missing 'features' array")]
    MissingFeatures,

    /// A feature lacks a required property or has one of the wrong type.
    #[error("feature {index} is invalid: {reason}")]
    InvalidFeature { index: usize, reason: String },
}

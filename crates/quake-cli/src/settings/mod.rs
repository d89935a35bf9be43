//! Persisted query settings.

pub mod storage;
mod types;

pub use types::Settings;

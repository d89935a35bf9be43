//! Core traits for transport backends.

mod fetcher;

pub use fetcher::{FetchResponse, Fetcher};

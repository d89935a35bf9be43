//! Request types for the USGS event query service.
//!
//! These types validate at construction time so that a [`FeedQuery`]
//! always renders to a usable URL.

mod feed_query;
mod min_magnitude;
mod order_by;

pub use feed_query::{FeedQuery, USGS_QUERY_URL, parse_request_url};
pub use min_magnitude::MinMagnitude;
pub use order_by::OrderBy;

//! Tower middleware bridging HTTP requests to validated search requests
//!
//! [`SearchLayer`] wraps a route (or a whole router): per request it reads
//! the configured query parameter, strictly decodes the JSON payload,
//! validates it against the resolved configuration, and attaches the
//! resulting [`SearchRequest`](crate::core::request::SearchRequest) to the
//! request extensions for handlers to retrieve with the [`Search`]
//! extractor. Rejections short-circuit through the configured error handler
//! and never reach the inner service.

pub mod extract;
pub mod service;

pub use extract::Search;
pub use service::{SearchLayer, SearchService};

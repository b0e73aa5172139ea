//! Typed errors for search request parsing and validation
//!
//! Every condition is detected synchronously during the single validation
//! pass and surfaced to the configured error handler. Nothing is retried or
//! deferred; each failure is scoped to the one request that produced it.

use crate::core::operator::{LogicalOperator, RelationalOperator};
use axum::extract::Request;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use std::fmt;
use std::sync::Arc;

/// Errors that can occur while parsing or validating a search request
#[derive(Debug, Clone, PartialEq)]
pub enum SearchError {
    /// The configured query parameter was absent but is mandatory
    MissingParameter(String),

    /// The payload was not valid JSON or did not match the search schema
    MalformedPayload(String),

    /// The limit was negative, missing while a ceiling is configured, or
    /// above the configured ceiling
    InvalidLimit(String),

    /// The offset was negative
    InvalidOffset,

    /// An order clause referenced a field outside the allow-list
    DisallowedOrderField(String),

    /// A filter group used a logical operator outside the allow-list
    DisallowedLogicalOperator(LogicalOperator),

    /// A filter referenced a field outside the allow-list
    DisallowedFilterField(String),

    /// A filter used a relational operator outside the allow-list
    DisallowedRelationalOperator(RelationalOperator, String),
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchError::MissingParameter(param) => {
                write!(f, "missing {:?} query parameter", param)
            }
            SearchError::MalformedPayload(detail) => {
                write!(f, "malformed search payload: {}", detail)
            }
            SearchError::InvalidLimit(detail) => write!(f, "{}", detail),
            SearchError::InvalidOffset => write!(f, "offset must be null or >= 0"),
            SearchError::DisallowedOrderField(field) => {
                write!(f, "field {:?} not allowed in order by", field)
            }
            SearchError::DisallowedLogicalOperator(op) => {
                write!(f, "logical operator \"{}\" not allowed", op)
            }
            SearchError::DisallowedFilterField(field) => {
                write!(f, "field {:?} not allowed in filters", field)
            }
            SearchError::DisallowedRelationalOperator(op, field) => {
                write!(
                    f,
                    "relational operator \"{}\" not allowed for field {:?}",
                    op, field
                )
            }
        }
    }
}

impl std::error::Error for SearchError {}

impl SearchError {
    /// Get the HTTP status code for this error
    ///
    /// Every rejection stems from client input, so everything maps to 400.
    pub fn status_code(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }
}

impl IntoResponse for SearchError {
    fn into_response(self) -> Response {
        (self.status_code(), self.to_string()).into_response()
    }
}

/// Handler invoked when a search request is rejected
///
/// It receives the originating request and the encountered error, and
/// returns the response to send instead of calling the inner service.
pub type ErrorHandler = Arc<dyn Fn(&Request, &SearchError) -> Response + Send + Sync>;

/// Fallback handler used when no custom error handler is configured
///
/// Writes a plain-text HTTP 400 response with a generic body; the rejection
/// cause is only logged, never exposed to the client.
pub fn default_error_handler(req: &Request, err: &SearchError) -> Response {
    tracing::debug!(path = %req.uri().path(), error = %err, "rejecting search request");

    (
        StatusCode::BAD_REQUEST,
        StatusCode::BAD_REQUEST
            .canonical_reason()
            .unwrap_or("Bad Request"),
    )
        .into_response()
}

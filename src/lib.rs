//! # qsearch
//!
//! Axum middleware for parsing and validating structured search queries
//! passed as query parameters.
//!
//! ## Features
//!
//! - **Single-Parameter Payload**: filters, sorting, and pagination arrive
//!   as one JSON value (e.g. `?q=<json>`)
//! - **Nested Filter Trees**: AND/OR groups with unlimited nesting
//! - **Allow-List Validation**: per-endpoint sets of permitted fields and
//!   operators; the first violation rejects the request
//! - **Strict Decoding**: any unknown key at any nesting level is malformed
//!   input, not ignored
//! - **Default/Override Configuration**: process-wide defaults built once
//!   at startup, refined per endpoint in call order
//! - **No Query Generation**: produces a trusted [`SearchRequest`]
//!   description; what to do with it is the handler's business
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use qsearch::prelude::*;
//!
//! // Process-wide defaults, built once at startup
//! let defaults = SearchConfig::new()
//!     .max_limit(50)
//!     .filter_fields(["id"])
//!     .order_fields(["id"]);
//!
//! let app = Router::new()
//!     .route("/api/v1/users", get(list_users))
//!     .layer(SearchLayer::new(
//!         // Per-endpoint overrides apply in call order
//!         defaults
//!             .clone()
//!             .extra_filter_fields(["name", "email"])
//!             .order_fields(["created_at", "updated_at"])
//!             .max_limit(10),
//!     ));
//!
//! async fn list_users(Search(search): Search) -> impl IntoResponse {
//!     match search {
//!         Some(search) => Json(search).into_response(),
//!         None => StatusCode::NO_CONTENT.into_response(),
//!     }
//! }
//! ```

pub mod config;
pub mod core;
pub mod layer;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Configuration ===
    pub use crate::config::SearchConfig;

    // === Core Types ===
    pub use crate::core::{
        error::{ErrorHandler, SearchError},
        operator::{LogicalOperator, OrderDirection, RelationalOperator},
        request::{Filter, FilterGroup, OrderClause, SearchRequest},
        validate::validate_search_request,
    };

    // === Middleware ===
    pub use crate::layer::{Search, SearchLayer};

    // === Axum ===
    pub use axum::{
        Json, Router,
        http::StatusCode,
        response::IntoResponse,
        routing::get,
    };
}

pub use crate::config::SearchConfig;
pub use crate::core::error::{ErrorHandler, SearchError};
pub use crate::core::operator::{LogicalOperator, OrderDirection, RelationalOperator};
pub use crate::core::request::{Filter, FilterGroup, OrderClause, SearchRequest};
pub use crate::core::validate::validate_search_request;
pub use crate::layer::{Search, SearchLayer, SearchService};

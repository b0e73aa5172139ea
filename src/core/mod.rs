//! Core module containing the search request model, operators, errors, and
//! the validation engine

pub mod error;
pub mod operator;
pub mod request;
pub mod validate;

pub use error::{default_error_handler, ErrorHandler, SearchError};
pub use operator::{LogicalOperator, OrderDirection, RelationalOperator};
pub use request::{Filter, FilterGroup, OrderClause, SearchRequest};
pub use validate::validate_search_request;

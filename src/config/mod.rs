//! Search handler configuration and default resolution
//!
//! A [`SearchConfig`] holds everything a search endpoint needs: the query
//! parameter name, the mandatory flag, the operator and field allow-lists,
//! the optional limit ceiling, and the error handler.
//!
//! Process-wide defaults are an explicit `SearchConfig` value built once at
//! startup and threaded into every endpoint build by cloning:
//!
//! ```rust,ignore
//! let defaults = SearchConfig::new()
//!     .query_param("s")
//!     .max_limit(50)
//!     .filter_fields(["id"]);
//!
//! // per endpoint: clone the defaults, then apply overrides in order
//! let users_config = defaults
//!     .clone()
//!     .extra_filter_fields(["name", "email"])
//!     .max_limit(10);
//! ```
//!
//! Configuration methods apply in call order: `extra_*` after a replacing
//! method unions into what the replacement left, while a replacing method
//! discards any prior extension. The library performs no synchronization;
//! defaults must be fully built before concurrent request handling begins.

use crate::core::error::{default_error_handler, ErrorHandler, SearchError};
use crate::core::operator::{LogicalOperator, RelationalOperator};
use axum::extract::Request;
use axum::response::Response;
use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

/// Resolved configuration for a search endpoint
///
/// Constructed with [`SearchConfig::new`] (process-wide defaults) and
/// refined with the chainable configuration methods. Resolution happens
/// once per endpoint setup, never per request.
#[derive(Clone)]
pub struct SearchConfig {
    query_param: String,
    mandatory: bool,
    logical_operators: HashSet<LogicalOperator>,
    relational_operators: HashSet<RelationalOperator>,
    filter_fields: HashSet<String>,
    order_fields: HashSet<String>,
    max_limit: Option<i64>,
    error_handler: ErrorHandler,
}

impl SearchConfig {
    /// Create a configuration with the process-wide defaults
    ///
    /// Query parameter `"q"`, search mandatory, every registry operator
    /// allowed, no filter or order fields allowed, no limit ceiling, and
    /// the plain-text 400 error handler.
    pub fn new() -> Self {
        Self {
            query_param: "q".to_string(),
            mandatory: true,
            logical_operators: LogicalOperator::all().into_iter().collect(),
            relational_operators: RelationalOperator::all().into_iter().collect(),
            filter_fields: HashSet::new(),
            order_fields: HashSet::new(),
            max_limit: None,
            error_handler: Arc::new(default_error_handler),
        }
    }

    // === replace scalars (last write wins) ===

    /// Set the query parameter name carrying the search payload
    pub fn query_param(mut self, name: impl Into<String>) -> Self {
        self.query_param = name.into();
        self
    }

    /// Set whether the search query parameter is required
    pub fn mandatory(mut self, mandatory: bool) -> Self {
        self.mandatory = mandatory;
        self
    }

    /// Set the maximum limit accepted in search requests
    ///
    /// When a ceiling is set, requests must carry a limit between 0 and the
    /// ceiling (inclusive). Pass `None` to remove the ceiling.
    pub fn max_limit(mut self, limit: impl Into<Option<i64>>) -> Self {
        self.max_limit = limit.into();
        self
    }

    /// Set the handler invoked when a search request is rejected
    pub fn error_handler<F>(mut self, handler: F) -> Self
    where
        F: Fn(&Request, &SearchError) -> Response + Send + Sync + 'static,
    {
        self.error_handler = Arc::new(handler);
        self
    }

    // === replace sets (discard prior contents) ===

    /// Restrict the logical operators allowed in filter groups
    pub fn logical_operators(
        mut self,
        operators: impl IntoIterator<Item = LogicalOperator>,
    ) -> Self {
        self.logical_operators = operators.into_iter().collect();
        self
    }

    /// Restrict the relational operators allowed in filters
    pub fn relational_operators(
        mut self,
        operators: impl IntoIterator<Item = RelationalOperator>,
    ) -> Self {
        self.relational_operators = operators.into_iter().collect();
        self
    }

    /// Restrict the fields allowed in filter conditions, replacing any
    /// previously allowed set
    pub fn filter_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.filter_fields = fields.into_iter().map(Into::into).collect();
        self
    }

    /// Restrict the fields allowed in order by clauses, replacing any
    /// previously allowed set
    pub fn order_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.order_fields = fields.into_iter().map(Into::into).collect();
        self
    }

    // === extend sets (union into current contents) ===

    /// Allow additional fields in filter conditions on top of the current
    /// set
    pub fn extra_filter_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.filter_fields.extend(fields.into_iter().map(Into::into));
        self
    }

    /// Allow additional fields in order by clauses on top of the current
    /// set
    pub fn extra_order_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.order_fields.extend(fields.into_iter().map(Into::into));
        self
    }

    // === accessors ===

    /// Name of the query parameter carrying the search payload
    pub fn param_name(&self) -> &str {
        &self.query_param
    }

    /// Whether the search query parameter is required
    pub fn is_mandatory(&self) -> bool {
        self.mandatory
    }

    /// Configured limit ceiling, if any
    pub fn max_limit_value(&self) -> Option<i64> {
        self.max_limit
    }

    /// Logical operators allowed in filter groups
    pub fn logical_operator_set(&self) -> &HashSet<LogicalOperator> {
        &self.logical_operators
    }

    /// Relational operators allowed in filters
    pub fn relational_operator_set(&self) -> &HashSet<RelationalOperator> {
        &self.relational_operators
    }

    /// Fields allowed in filter conditions
    pub fn filter_field_set(&self) -> &HashSet<String> {
        &self.filter_fields
    }

    /// Fields allowed in order by clauses
    pub fn order_field_set(&self) -> &HashSet<String> {
        &self.order_fields
    }

    /// Configured error handler
    pub fn handler(&self) -> &ErrorHandler {
        &self.error_handler
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for SearchConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchConfig")
            .field("query_param", &self.query_param)
            .field("mandatory", &self.mandatory)
            .field("logical_operators", &self.logical_operators)
            .field("relational_operators", &self.relational_operators)
            .field("filter_fields", &self.filter_fields)
            .field("order_fields", &self.order_fields)
            .field("max_limit", &self.max_limit)
            .finish_non_exhaustive()
    }
}

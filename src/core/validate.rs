//! Validation of decoded search requests against a resolved configuration
//!
//! The allow-lists checked here are the only boundary between client input
//! and whatever the caller's storage layer does with the validated object.
//! Checks run in a fixed order and stop at the first violation, so error
//! messages are deterministic.

use crate::config::SearchConfig;
use crate::core::error::SearchError;
use crate::core::request::{FilterGroup, SearchRequest};

/// Check a decoded search request against a resolved configuration
///
/// Check order: limit bounds, offset bounds, order clauses in supplied
/// order, then the filter tree depth-first. Returns the first violation
/// encountered.
pub fn validate_search_request(
    search: &SearchRequest,
    config: &SearchConfig,
) -> Result<(), SearchError> {
    // even though it is optional, a present negative limit is an error
    if let Some(limit) = search.limit {
        if limit < 0 {
            return Err(SearchError::InvalidLimit(
                "limit must be null or >= 0".to_string(),
            ));
        }
    }

    if let Some(max) = config.max_limit_value() {
        match search.limit {
            None => {
                return Err(SearchError::InvalidLimit("limit is mandatory".to_string()));
            }
            Some(limit) if limit > max => {
                return Err(SearchError::InvalidLimit(format!(
                    "limit must be between 0 and {}",
                    max
                )));
            }
            Some(_) => {}
        }
    }

    if let Some(offset) = search.offset {
        if offset < 0 {
            return Err(SearchError::InvalidOffset);
        }
    }

    for clause in &search.order_by {
        if !config.order_field_set().contains(&clause.field) {
            return Err(SearchError::DisallowedOrderField(clause.field.clone()));
        }
    }

    // absent root group is valid: it denotes "no filters"
    if let Some(group) = &search.groups {
        validate_group(group, config)?;
    }

    Ok(())
}

/// Depth-first pre-order walk of a filter group and its subgroups
fn validate_group(group: &FilterGroup, config: &SearchConfig) -> Result<(), SearchError> {
    if !config.logical_operator_set().contains(&group.op) {
        return Err(SearchError::DisallowedLogicalOperator(group.op.clone()));
    }

    for filter in &group.filters {
        if !config.filter_field_set().contains(&filter.field) {
            return Err(SearchError::DisallowedFilterField(filter.field.clone()));
        }

        if !config.relational_operator_set().contains(&filter.op) {
            return Err(SearchError::DisallowedRelationalOperator(
                filter.op.clone(),
                filter.field.clone(),
            ));
        }
    }

    for subgroup in &group.groups {
        validate_group(subgroup, config)?;
    }

    Ok(())
}

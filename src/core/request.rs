//! Search request data shapes decoded from the query parameter payload
//!
//! Decoding is strict: any key outside the documented schema, at any
//! nesting level, makes the payload malformed.

use crate::core::operator::{LogicalOperator, OrderDirection, RelationalOperator};
use serde::{Deserialize, Serialize};

/// A single filtering condition in a search query
///
/// It targets a specific field, applies a relational operator, and
/// compares against the given value.
///
/// ```json
/// { "field": "name", "op": "eq", "value": "Alice" }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Filter {
    /// Name of the column or attribute being filtered
    pub field: String,

    /// Relational operator to apply (e.g. eq, lt, in)
    pub op: RelationalOperator,

    /// Comparison value used with the operator
    pub value: String,
}

/// A collection of filters combined with a logical operator
///
/// Groups can be nested, enabling complex tree-like query conditions.
///
/// ```json
/// { "op": "and", "filters": [...], "groups": [...] }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FilterGroup {
    /// How filters and subgroups inside this group are combined
    pub op: LogicalOperator,

    /// Individual filtering conditions in this group
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub filters: Vec<Filter>,

    /// Nested filter groups for more complex queries
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub groups: Vec<FilterGroup>,
}

/// A single ORDER BY clause: the field to sort on and the direction
///
/// ```json
/// { "field": "created_at", "direction": "desc" }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OrderClause {
    /// Column or attribute to sort by
    pub field: String,

    /// Order direction ("asc" or "desc")
    pub direction: OrderDirection,
}

/// A structured query definition parsed from the search query parameter
///
/// Combines filtering (via [`FilterGroup`]), ordering, and pagination.
/// It is decoded from the configured query parameter (e.g. `?q=<json>`)
/// and, once validated, attached to the request for handlers to consume —
/// typically to build database queries or other filtering logic.
///
/// # Example payload
///
/// ```json
/// {
///   "groups": {
///     "op": "and",
///     "filters": [
///       { "field": "status", "op": "eq", "value": "active" }
///     ],
///     "groups": [
///       {
///         "op": "or",
///         "filters": [
///           { "field": "role", "op": "eq", "value": "admin" },
///           { "field": "role", "op": "eq", "value": "editor" }
///         ]
///       }
///     ]
///   },
///   "order_by": [
///     { "field": "created_at", "direction": "desc" }
///   ],
///   "limit": 20,
///   "offset": 0
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SearchRequest {
    /// Root filter group; `None` means "no filters"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub groups: Option<FilterGroup>,

    /// Sorting rules to apply to the result set, in order of precedence
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub order_by: Vec<OrderClause>,

    /// Maximum number of items to return; `None` means no explicit limit
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,

    /// Number of items to skip before returning results
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn decode(value: serde_json::Value) -> Result<SearchRequest, serde_json::Error> {
        serde_json::from_value(value)
    }

    // === decoding ===

    #[test]
    fn test_decode_full_payload() {
        let search = decode(json!({
            "groups": {
                "op": "and",
                "filters": [
                    { "field": "status", "op": "eq", "value": "active" }
                ],
                "groups": [
                    {
                        "op": "or",
                        "filters": [
                            { "field": "role", "op": "eq", "value": "admin" },
                            { "field": "role", "op": "eq", "value": "editor" }
                        ]
                    }
                ]
            },
            "order_by": [
                { "field": "created_at", "direction": "desc" }
            ],
            "limit": 20,
            "offset": 0
        }))
        .expect("payload should decode");

        let groups = search.groups.expect("root group expected");
        assert_eq!(groups.op, LogicalOperator::And);
        assert_eq!(groups.filters.len(), 1);
        assert_eq!(groups.groups.len(), 1);
        assert_eq!(groups.groups[0].filters.len(), 2);
        assert_eq!(search.order_by.len(), 1);
        assert_eq!(search.order_by[0].direction, OrderDirection::Desc);
        assert_eq!(search.limit, Some(20));
        assert_eq!(search.offset, Some(0));
    }

    #[test]
    fn test_decode_pagination_only() {
        let search = decode(json!({ "limit": 10, "offset": 0 })).expect("payload should decode");

        assert_eq!(search.groups, None);
        assert!(search.order_by.is_empty());
        assert_eq!(search.limit, Some(10));
        assert_eq!(search.offset, Some(0));
    }

    #[test]
    fn test_decode_empty_object() {
        let search = decode(json!({})).expect("payload should decode");

        assert_eq!(search.groups, None);
        assert!(search.order_by.is_empty());
        assert_eq!(search.limit, None);
        assert_eq!(search.offset, None);
    }

    #[test]
    fn test_absent_sequences_mean_empty() {
        let search = decode(json!({ "groups": { "op": "or" } })).expect("payload should decode");

        let groups = search.groups.expect("root group expected");
        assert!(groups.filters.is_empty());
        assert!(groups.groups.is_empty());
    }

    // === strict schema ===

    #[test]
    fn test_unknown_top_level_key_rejected() {
        let result = decode(json!({ "limit": 10, "page": 2 }));
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_nested_key_rejected() {
        let result = decode(json!({
            "groups": {
                "op": "and",
                "filters": [
                    { "field": "name", "op": "eq", "value": "x", "extra": true }
                ]
            }
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_key_in_order_clause_rejected() {
        let result = decode(json!({
            "order_by": [
                { "field": "name", "direction": "asc", "nulls": "last" }
            ]
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_non_integer_limit_rejected() {
        let result = decode(json!({ "limit": "ten" }));
        assert!(result.is_err());
    }

    // === serialization ===

    #[test]
    fn test_serialize_skips_absent_fields() {
        let search = SearchRequest {
            groups: None,
            order_by: vec![],
            limit: Some(10),
            offset: None,
        };

        let value = serde_json::to_value(&search).expect("should encode");
        assert_eq!(value, json!({ "limit": 10 }));
    }

    #[test]
    fn test_roundtrip_preserves_tree() {
        let payload = json!({
            "groups": {
                "op": "and",
                "groups": [
                    { "op": "or", "filters": [ { "field": "a", "op": "gt", "value": "1" } ] }
                ]
            }
        });

        let search = decode(payload.clone()).expect("payload should decode");
        assert_eq!(
            serde_json::to_value(&search).expect("should encode"),
            payload
        );
    }
}

//! Logical, relational and ordering operators supported in search queries
//!
//! Unrecognized wire values are preserved by the catch-all variant so that
//! validation can reject them with a specific error instead of failing at
//! the decoding stage.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Combinator applied to the filters and subgroups of a filter group
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogicalOperator {
    /// Logical AND between filters or groups
    And,

    /// Logical OR between filters or groups
    Or,

    /// Any value outside the registry; always rejected by validation
    #[serde(untagged)]
    Other(String),
}

impl LogicalOperator {
    /// All operators known to the registry, in declaration order
    pub fn all() -> [LogicalOperator; 2] {
        [LogicalOperator::And, LogicalOperator::Or]
    }

    /// SQL-equivalent keyword for this operator
    ///
    /// Defaults to `"and"` when the operator is not recognized. This is a
    /// rendering convenience for already-validated data; validation itself
    /// rejects unknown operators.
    pub fn symbol(&self) -> &str {
        match self {
            LogicalOperator::Or => "or",
            _ => "and",
        }
    }
}

impl fmt::Display for LogicalOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogicalOperator::And => write!(f, "and"),
            LogicalOperator::Or => write!(f, "or"),
            LogicalOperator::Other(s) => write!(f, "{}", s),
        }
    }
}

/// Comparison verb applied by a single filter condition
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RelationalOperator {
    /// Equality comparison (`=`)
    Eq,

    /// Inequality comparison (`<>`)
    Ne,

    /// Greater-than comparison (`>`)
    Gt,

    /// Greater-than-or-equal comparison (`>=`)
    Gte,

    /// Less-than comparison (`<`)
    Lt,

    /// Less-than-or-equal comparison (`<=`)
    Lte,

    /// Case-sensitive pattern match (`LIKE`)
    Like,

    /// Case-insensitive pattern match (`ILIKE`)
    Ilike,

    /// Inclusion check (`IN`)
    In,

    /// Any value outside the registry; always rejected by validation
    #[serde(untagged)]
    Other(String),
}

impl RelationalOperator {
    /// All operators known to the registry, in declaration order
    pub fn all() -> [RelationalOperator; 9] {
        [
            RelationalOperator::Eq,
            RelationalOperator::Ne,
            RelationalOperator::Gt,
            RelationalOperator::Gte,
            RelationalOperator::Lt,
            RelationalOperator::Lte,
            RelationalOperator::Like,
            RelationalOperator::Ilike,
            RelationalOperator::In,
        ]
    }

    /// SQL-equivalent symbol for this operator
    ///
    /// For example `eq` maps to `"="`, `ne` to `"<>"`, `ilike` to
    /// `"ilike"`. Defaults to `"="` when the operator is not recognized.
    pub fn symbol(&self) -> &str {
        match self {
            RelationalOperator::Ne => "<>",
            RelationalOperator::Gt => ">",
            RelationalOperator::Gte => ">=",
            RelationalOperator::Lt => "<",
            RelationalOperator::Lte => "<=",
            RelationalOperator::Like => "like",
            RelationalOperator::Ilike => "ilike",
            RelationalOperator::In => "in",
            _ => "=",
        }
    }
}

impl fmt::Display for RelationalOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RelationalOperator::Eq => write!(f, "eq"),
            RelationalOperator::Ne => write!(f, "ne"),
            RelationalOperator::Gt => write!(f, "gt"),
            RelationalOperator::Gte => write!(f, "gte"),
            RelationalOperator::Lt => write!(f, "lt"),
            RelationalOperator::Lte => write!(f, "lte"),
            RelationalOperator::Like => write!(f, "like"),
            RelationalOperator::Ilike => write!(f, "ilike"),
            RelationalOperator::In => write!(f, "in"),
            RelationalOperator::Other(s) => write!(f, "{}", s),
        }
    }
}

/// Direction of a single order clause
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderDirection {
    /// Ascending order (default)
    Asc,

    /// Descending order
    Desc,

    /// Any value outside the registry
    #[serde(untagged)]
    Other(String),
}

impl OrderDirection {
    /// SQL keyword for this direction
    ///
    /// Defaults to `"asc"` when the direction is not recognized.
    pub fn symbol(&self) -> &str {
        match self {
            OrderDirection::Desc => "desc",
            _ => "asc",
        }
    }
}

impl fmt::Display for OrderDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderDirection::Asc => write!(f, "asc"),
            OrderDirection::Desc => write!(f, "desc"),
            OrderDirection::Other(s) => write!(f, "{}", s),
        }
    }
}

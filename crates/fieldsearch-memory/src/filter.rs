//! Filter expression tree evaluated against in-memory [`Record`]s.

use crate::record::Record;
use serde_json::Value;

/// A boolean filter over record fields.
///
/// Combining two nodes of the same kind flattens them, so `(a | b) | c` and
/// `a | (b | c)` build the same `Or([a, b, c])`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Filter {
    /// Case-insensitive substring match of `term` within `field`.
    IContains { field: String, term: String },
    Or(Vec<Filter>),
    And(Vec<Filter>),
}

impl Filter {
    pub fn icontains(field: impl Into<String>, term: impl Into<String>) -> Self {
        Filter::IContains {
            field: field.into(),
            term: term.into(),
        }
    }

    pub fn or(self, rhs: Filter) -> Filter {
        let mut children = match self {
            Filter::Or(children) => children,
            other => vec![other],
        };
        match rhs {
            Filter::Or(more) => children.extend(more),
            other => children.push(other),
        }
        Filter::Or(children)
    }

    pub fn and(self, rhs: Filter) -> Filter {
        let mut children = match self {
            Filter::And(children) => children,
            other => vec![other],
        };
        match rhs {
            Filter::And(more) => children.extend(more),
            other => children.push(other),
        }
        Filter::And(children)
    }

    /// Evaluate against `record`.
    ///
    /// Missing fields, nulls, and nested objects never match. Arrays match when
    /// any element does.
    pub fn matches(&self, record: &Record) -> bool {
        match self {
            Filter::IContains { field, term } => record
                .get(field)
                .is_some_and(|value| value_contains(value, &term.to_lowercase())),
            Filter::Or(children) => children.iter().any(|f| f.matches(record)),
            Filter::And(children) => children.iter().all(|f| f.matches(record)),
        }
    }

    /// Field names referenced anywhere in the tree, in first-seen order.
    pub fn fields(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.collect_fields(&mut out);
        out
    }

    fn collect_fields<'a>(&'a self, out: &mut Vec<&'a str>) {
        match self {
            Filter::IContains { field, .. } => {
                if !out.contains(&field.as_str()) {
                    out.push(field.as_str());
                }
            }
            Filter::Or(children) | Filter::And(children) => {
                for child in children {
                    child.collect_fields(out);
                }
            }
        }
    }
}

fn value_contains(value: &Value, needle: &str) -> bool {
    match value {
        Value::String(s) => s.to_lowercase().contains(needle),
        Value::Number(n) => n.to_string().contains(needle),
        Value::Bool(b) => b.to_string().contains(needle),
        Value::Array(items) => items.iter().any(|v| value_contains(v, needle)),
        Value::Null | Value::Object(_) => false,
    }
}

impl std::ops::BitOr for Filter {
    type Output = Filter;

    fn bitor(self, rhs: Filter) -> Filter {
        self.or(rhs)
    }
}

impl std::ops::BitAnd for Filter {
    type Output = Filter;

    fn bitand(self, rhs: Filter) -> Filter {
        self.and(rhs)
    }
}

impl std::fmt::Display for Filter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Filter::IContains { field, term } => write!(f, "{field} icontains {term:?}"),
            Filter::Or(children) => write_group(f, children, " OR "),
            Filter::And(children) => write_group(f, children, " AND "),
        }
    }
}

fn write_group(f: &mut std::fmt::Formatter<'_>, children: &[Filter], sep: &str) -> std::fmt::Result {
    write!(f, "(")?;
    for (idx, child) in children.iter().enumerate() {
        if idx > 0 {
            write!(f, "{sep}")?;
        }
        write!(f, "{child}")?;
    }
    write!(f, ")")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

//! [`FilterBackend`] implementations producing [`Filter`] trees.

use crate::error::MemoryError;
use crate::filter::Filter;
use crate::record::Record;
use fieldsearch_core::{EntityFields, FilterBackend};
use std::collections::BTreeSet;
use std::convert::Infallible;

/// Accepts any field name.
#[derive(Debug, Clone, Copy, Default)]
pub struct MemoryBackend;

impl FilterBackend for MemoryBackend {
    type Predicate = Filter;
    type Error = Infallible;

    fn icontains(&self, field: &str, term: &str) -> Result<Filter, Infallible> {
        Ok(Filter::icontains(field, term))
    }

    fn or(&self, lhs: Filter, rhs: Filter) -> Filter {
        lhs | rhs
    }

    fn and(&self, lhs: Filter, rhs: Filter) -> Filter {
        lhs & rhs
    }
}

/// Rejects field names outside a known set, the way a real data store
/// rejects lookups on attributes a model does not have.
#[derive(Debug, Clone, Default)]
pub struct SchemaBackend {
    known: BTreeSet<String>,
}

impl SchemaBackend {
    pub fn new<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            known: fields.into_iter().map(Into::into).collect(),
        }
    }

    /// Every field named by any of `entities`.
    pub fn from_entities<'a>(entities: impl IntoIterator<Item = &'a EntityFields>) -> Self {
        Self::new(entities.into_iter().flat_map(|e| e.fields.iter().cloned()))
    }

    pub fn knows(&self, field: &str) -> bool {
        self.known.contains(field)
    }
}

impl FilterBackend for SchemaBackend {
    type Predicate = Filter;
    type Error = MemoryError;

    fn icontains(&self, field: &str, term: &str) -> Result<Filter, MemoryError> {
        if !self.knows(field) {
            return Err(MemoryError::UnknownField(field.to_string()));
        }
        Ok(Filter::icontains(field, term))
    }

    fn or(&self, lhs: Filter, rhs: Filter) -> Filter {
        lhs | rhs
    }

    fn and(&self, lhs: Filter, rhs: Filter) -> Filter {
        lhs & rhs
    }
}

/// Records matching `filter`, in input order.
pub fn filter_records<'a>(filter: &Filter, records: &'a [Record]) -> Vec<&'a Record> {
    let matched: Vec<&Record> = records.iter().filter(|r| filter.matches(r)).collect();
    tracing::debug!(scanned = records.len(), matched = matched.len(), "filtered records");
    matched
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

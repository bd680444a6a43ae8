//! Batch dispatcher — one query per entity type.

use crate::backend::FilterBackend;
use crate::query::build_terms_query;
use crate::terms::normalize_terms;
use crate::types::{Combine, EntityFields, SearchResults};

/// Build a predicate for every entity type in `fields_by_type`, joining terms
/// with OR.
///
/// Returns `Ok(None)` for an empty query string; that is distinct from an
/// empty result map, which is what an empty `fields_by_type` produces.
pub fn search<B, I, E>(
    backend: &B,
    query: &str,
    fields_by_type: I,
) -> Result<Option<SearchResults<B::Predicate>>, B::Error>
where
    B: FilterBackend + ?Sized,
    I: IntoIterator<Item = E>,
    E: Into<EntityFields>,
{
    search_with(backend, query, fields_by_type, Combine::Any)
}

/// Like [`search`], with an explicit term [`Combine`] mode.
///
/// Entities are visited in iteration order and the first backend error aborts
/// the whole dispatch.
pub fn search_with<B, I, E>(
    backend: &B,
    query: &str,
    fields_by_type: I,
    combine: Combine,
) -> Result<Option<SearchResults<B::Predicate>>, B::Error>
where
    B: FilterBackend + ?Sized,
    I: IntoIterator<Item = E>,
    E: Into<EntityFields>,
{
    if query.is_empty() {
        return Ok(None);
    }

    let terms = normalize_terms(query);
    let mut results = SearchResults::new();
    for entity in fields_by_type {
        let EntityFields { name, fields } = entity.into();
        let predicate = build_terms_query(backend, &terms, &fields, combine)?;
        results.insert(name, predicate);
    }

    tracing::debug!(entities = results.len(), terms = terms.len(), "dispatched search");
    Ok(Some(results))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

//! Query builder — turns a query string and a field set into one predicate.
//!
//! For every term the builder ORs `field icontains term` across the fields,
//! then joins the per-term predicates according to [`Combine`]. With the
//! default [`Combine::Any`], `foo bar` against `[title, body]` yields
//!
//! ```text
//! (title ∋ foo OR body ∋ foo) OR (title ∋ bar OR body ∋ bar)
//! ```

use crate::backend::FilterBackend;
use crate::terms::normalize_terms;
use crate::types::Combine;

/// Build the predicate for `query` over `fields`, joining terms with OR.
///
/// Returns `Ok(None)` when the query holds no terms or `fields` is empty.
pub fn build_query<B, S>(
    backend: &B,
    query: &str,
    fields: &[S],
) -> Result<Option<B::Predicate>, B::Error>
where
    B: FilterBackend + ?Sized,
    S: AsRef<str>,
{
    build_query_with(backend, query, fields, Combine::Any)
}

/// Like [`build_query`], with an explicit term [`Combine`] mode.
pub fn build_query_with<B, S>(
    backend: &B,
    query: &str,
    fields: &[S],
    combine: Combine,
) -> Result<Option<B::Predicate>, B::Error>
where
    B: FilterBackend + ?Sized,
    S: AsRef<str>,
{
    let terms = normalize_terms(query);
    build_terms_query(backend, &terms, fields, combine)
}

/// Build the predicate for already-extracted `terms`.
///
/// An empty field set leaves every term without a predicate, so the result is
/// `None` rather than an unsatisfiable filter.
pub fn build_terms_query<B, T, S>(
    backend: &B,
    terms: &[T],
    fields: &[S],
    combine: Combine,
) -> Result<Option<B::Predicate>, B::Error>
where
    B: FilterBackend + ?Sized,
    T: AsRef<str>,
    S: AsRef<str>,
{
    tracing::debug!(
        terms = terms.len(),
        fields = fields.len(),
        %combine,
        "building query"
    );

    let mut query: Option<B::Predicate> = None;
    for term in terms {
        let Some(term_query) = term_predicate(backend, term.as_ref(), fields)? else {
            continue;
        };
        query = Some(match query {
            None => term_query,
            Some(acc) => match combine {
                Combine::Any => backend.or(acc, term_query),
                Combine::All => backend.and(acc, term_query),
            },
        });
    }
    Ok(query)
}

/// OR of `field icontains term` across `fields`, in field order.
fn term_predicate<B, S>(
    backend: &B,
    term: &str,
    fields: &[S],
) -> Result<Option<B::Predicate>, B::Error>
where
    B: FilterBackend + ?Sized,
    S: AsRef<str>,
{
    let mut or_query: Option<B::Predicate> = None;
    for field in fields {
        let q = backend.icontains(field.as_ref(), term)?;
        or_query = Some(match or_query {
            None => q,
            Some(acc) => backend.or(acc, q),
        });
    }
    Ok(or_query)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

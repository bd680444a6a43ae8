//! Core types for fieldsearch-core.
//!
//! This module defines the data structures shared by the query builder and
//! the batch dispatcher: the per-entity [`EntityFields`] field set, the
//! [`Combine`] mode used to join per-term predicates, and the ordered
//! [`SearchResults`] map returned by [`search`](crate::dispatch::search).

use serde::Deserialize;

/// The searchable fields of one entity type.
///
/// Field names are opaque to this crate; they are handed to the
/// [`FilterBackend`](crate::backend::FilterBackend) verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EntityFields {
    /// Entity type identifier, e.g. `"Post"`.
    pub name: String,
    /// Ordered field names. May be empty, in which case the entity never
    /// receives a predicate.
    #[serde(default)]
    pub fields: Vec<String>,
}

impl EntityFields {
    pub fn new<I, S>(name: impl Into<String>, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            fields: fields.into_iter().map(Into::into).collect(),
        }
    }
}

impl<N, I, S> From<(N, I)> for EntityFields
where
    N: Into<String>,
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    fn from((name, fields): (N, I)) -> Self {
        Self::new(name, fields)
    }
}

impl From<&EntityFields> for EntityFields {
    fn from(entity: &EntityFields) -> Self {
        entity.clone()
    }
}

/// Insertion-ordered mapping from entity type to its field set.
pub type FieldMap = Vec<EntityFields>;

/// How per-term predicates are joined into the final predicate.
///
/// [`Combine::Any`] is the default: `foo bar` matches records containing
/// either word. [`Combine::All`] is the stricter variant where every term must
/// be found in at least one field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Combine {
    #[default]
    Any,
    All,
}

impl std::fmt::Display for Combine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Combine::Any => write!(f, "any"),
            Combine::All => write!(f, "all"),
        }
    }
}

/// Per-entity predicates produced by one dispatch, in input order.
///
/// An entity whose field set was empty is present with a `None` predicate.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResults<P> {
    entries: Vec<(String, Option<P>)>,
}

impl<P> Default for SearchResults<P> {
    fn default() -> Self {
        Self { entries: Vec::new() }
    }
}

impl<P> SearchResults<P> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the predicate for `name`. A replaced entry keeps its
    /// original position.
    pub fn insert(&mut self, name: impl Into<String>, predicate: Option<P>) {
        let name = name.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = predicate,
            None => self.entries.push((name, predicate)),
        }
    }

    /// The predicate built for `name`.
    ///
    /// Returns `None` both when the entity is unknown and when it had no
    /// searchable fields; use [`contains`](Self::contains) to tell them apart.
    pub fn get(&self, name: &str) -> Option<&P> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .and_then(|(_, p)| p.as_ref())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|(n, _)| n == name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&P>)> {
        self.entries.iter().map(|(n, p)| (n.as_str(), p.as_ref()))
    }
}

impl<P> IntoIterator for SearchResults<P> {
    type Item = (String, Option<P>);
    type IntoIter = std::vec::IntoIter<(String, Option<P>)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

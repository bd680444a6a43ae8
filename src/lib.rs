//! fieldsearch — keyword search across record fields.
//!
//! Parses a free-text query into terms (double-quoted phrases stay whole) and
//! builds one filter per entity type matching records where any configured
//! field contains any term. This crate re-exports the two workspace crates so
//! integration tests and callers can depend on a single package.
//!
//! # Architecture
//!
//! ```text
//! query ──► terms ──► query builder ──► dispatch ──► SearchResults
//!                          │
//!                          └──► FilterBackend ──► Filter (in-memory) / your store
//! ```
//!
//! ```
//! use fieldsearch::{search, EntityFields, MemoryBackend};
//!
//! let models = vec![
//!     EntityFields::new("Post", ["title", "body"]),
//!     EntityFields::new("Comment", ["text"]),
//! ];
//! let results = search(&MemoryBackend, r#"rust "borrow checker""#, &models)
//!     .unwrap()
//!     .unwrap();
//! assert_eq!(
//!     results.get("Comment").unwrap().to_string(),
//!     r#"(text icontains "rust" OR text icontains "borrow checker")"#,
//! );
//! ```

pub use fieldsearch_core::{
    build_query, build_query_with, build_terms_query, normalize_terms, search, search_with,
    Combine, ConfigError, EntityFields, FieldMap, FilterBackend, SearchConfig, SearchResults,
};
pub use fieldsearch_memory::{filter_records, Filter, MemoryBackend, MemoryError, Record, SchemaBackend};

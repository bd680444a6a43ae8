//! fieldsearch-core — keyword search across record fields.
//!
//! This crate exposes the query pipeline as public modules, plus the shared
//! types used across them.
//!
//! # Architecture
//!
//! ```text
//! query string ──► terms ──► query (per entity) ──► dispatch ──► SearchResults
//!                                │
//!                                └──► FilterBackend (icontains / or / and)
//! ```
//!
//! Everything is synchronous and pure; the only external collaborator is the
//! [`FilterBackend`] that builds predicates.

pub mod backend;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod query;
pub mod terms;
pub mod types;

pub use backend::FilterBackend;
pub use config::SearchConfig;
pub use dispatch::{search, search_with};
pub use error::ConfigError;
pub use query::{build_query, build_query_with, build_terms_query};
pub use terms::normalize_terms;
pub use types::{Combine, EntityFields, FieldMap, SearchResults};

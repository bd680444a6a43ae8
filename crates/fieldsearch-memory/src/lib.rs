//! fieldsearch-memory — in-memory filter backend for fieldsearch.
//!
//! Builds [`Filter`] trees through [`fieldsearch_core::FilterBackend`] and
//! evaluates them against JSON-valued [`Record`]s. Useful for small
//! collections and for exercising query construction without a data store.

pub mod backend;
pub mod error;
pub mod filter;
pub mod record;

pub use backend::{filter_records, MemoryBackend, SchemaBackend};
pub use error::MemoryError;
pub use filter::Filter;
pub use record::Record;

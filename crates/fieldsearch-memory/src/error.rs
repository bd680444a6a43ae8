//! Error types for fieldsearch-memory.

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MemoryError {
    #[error("unknown field {0:?}")]
    UnknownField(String),

    #[error("record must be a JSON object, got {0}")]
    NotAnObject(&'static str),
}

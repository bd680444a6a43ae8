//! Error types for fieldsearch-core.
//!
//! Query building and dispatch never fail on their own; any failure there is
//! the backend's `Error` type, returned untouched. Only configuration loading
//! has errors of its own.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("cannot read config file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] config::ConfigError),

    #[error("entity at position {0} has a blank name")]
    BlankEntityName(usize),

    #[error("entity {0:?} is defined more than once")]
    DuplicateEntity(String),
}

pub type Result<T> = std::result::Result<T, ConfigError>;

//! Configuration types for fieldsearch.
//!
//! [`SearchConfig::load`] reads a TOML file layered on top of the built-in
//! defaults. [`SearchConfig::defaults`] returns the same defaults without
//! touching the filesystem (useful in tests).
//!
//! ```toml
//! [search]
//! combine = "any"
//!
//! [[entity]]
//! name   = "Post"
//! fields = ["title", "body"]
//! ```
//!
//! Entities are an array of tables so their order survives deserialisation.

use crate::backend::FilterBackend;
use crate::dispatch::search_with;
use crate::error::{ConfigError, Result};
use crate::types::{Combine, EntityFields, FieldMap, SearchResults};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[search]
combine = "any"
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level search configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchConfig {
    #[serde(default)]
    pub search: SearchSection,
    /// `[[entity]]` tables, in file order.
    #[serde(default, rename = "entity")]
    pub entities: Vec<EntityFields>,
}

/// `[search]` section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchSection {
    #[serde(default)]
    pub combine: Combine,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::defaults()
    }
}

impl SearchConfig {
    /// Load `path` layered on top of the built-in defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|err| match err.kind() {
            std::io::ErrorKind::NotFound => ConfigError::NotFound(path.to_path_buf()),
            _ => ConfigError::Io {
                path: path.to_path_buf(),
                source: err,
            },
        })?;

        let cfg = Self::from_toml_str(&source)?;
        tracing::debug!(path = %path.display(), entities = cfg.entities.len(), "loaded search config");
        Ok(cfg)
    }

    /// Parse TOML source layered on top of the built-in defaults.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let cfg: Self = config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from_str(source, config::FileFormat::Toml))
            .build()?
            .try_deserialize()?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }

    /// Reject blank or repeated entity names. Empty field sets are allowed.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for (idx, entity) in self.entities.iter().enumerate() {
            if entity.name.trim().is_empty() {
                return Err(ConfigError::BlankEntityName(idx));
            }
            if !seen.insert(entity.name.as_str()) {
                return Err(ConfigError::DuplicateEntity(entity.name.clone()));
            }
        }
        Ok(())
    }

    pub fn field_map(&self) -> FieldMap {
        self.entities.clone()
    }

    /// Fields configured for `entity`, if it is known.
    pub fn fields_for(&self, entity: &str) -> Option<&[String]> {
        self.entities
            .iter()
            .find(|e| e.name == entity)
            .map(|e| e.fields.as_slice())
    }

    /// Dispatch `query` over every configured entity with the configured
    /// combine mode.
    pub fn search<B>(
        &self,
        backend: &B,
        query: &str,
    ) -> std::result::Result<Option<SearchResults<B::Predicate>>, B::Error>
    where
        B: FilterBackend + ?Sized,
    {
        search_with(backend, query, &self.entities, self.search.combine)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::tests::Render;
    use pretty_assertions::assert_eq;

    const BLOG: &str = r#"
[search]
combine = "all"

[[entity]]
name = "Post"
fields = ["title", "body"]

[[entity]]
name = "Comment"
fields = []

[[entity]]
name = "Author"
fields = ["name"]
"#;

    #[test]
    fn defaults_load() {
        let cfg = SearchConfig::defaults();
        assert_eq!(cfg.search.combine, Combine::Any);
        assert!(cfg.entities.is_empty());
    }

    #[test]
    fn entities_keep_file_order() {
        let cfg = SearchConfig::from_toml_str(BLOG).unwrap();
        assert_eq!(cfg.search.combine, Combine::All);
        let names: Vec<_> = cfg.entities.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Post", "Comment", "Author"]);
        assert_eq!(cfg.fields_for("Comment"), Some(&[][..]));
        assert_eq!(cfg.fields_for("Missing"), None);
    }

    #[test]
    fn missing_fields_key_is_empty_set() {
        let cfg = SearchConfig::from_toml_str("[[entity]]\nname = \"Tag\"\n").unwrap();
        assert!(cfg.entities[0].fields.is_empty());
    }

    #[test]
    fn duplicate_entity_rejected() {
        let src = "[[entity]]\nname = \"Post\"\n\n[[entity]]\nname = \"Post\"\n";
        let err = SearchConfig::from_toml_str(src).unwrap_err();
        assert!(matches!(err, ConfigError::DuplicateEntity(ref n) if n == "Post"));
    }

    #[test]
    fn blank_entity_name_rejected() {
        let err = SearchConfig::from_toml_str("[[entity]]\nname = \"  \"\n").unwrap_err();
        assert!(matches!(err, ConfigError::BlankEntityName(0)));
    }

    #[test]
    fn unknown_combine_mode_is_parse_error() {
        let err = SearchConfig::from_toml_str("[search]\ncombine = \"some\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn load_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("search.toml");
        std::fs::write(&path, BLOG).unwrap();

        let cfg = SearchConfig::load(&path).unwrap();
        assert_eq!(cfg.entities.len(), 3);
    }

    #[test]
    fn load_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = SearchConfig::load(dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(_)));
    }

    #[test]
    fn load_directory_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = SearchConfig::load(dir.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Io { ref path, .. } if path == dir.path()));
    }

    #[test]
    fn load_invalid_file_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("search.toml");
        std::fs::write(&path, "[search]\ncombine = \"some\"\n").unwrap();
        let err = SearchConfig::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn search_uses_configured_combine() {
        let cfg = SearchConfig::from_toml_str(BLOG).unwrap();
        let out = cfg.search(&Render::default(), "a b").unwrap().unwrap();
        assert_eq!(
            out.get("Author").map(String::as_str),
            Some("(name~a & name~b)")
        );
        assert_eq!(out.get("Comment"), None);
        assert_eq!(out.len(), 3);
    }
}

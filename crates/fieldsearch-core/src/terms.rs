//! Term extraction — splits a raw query string into normalised search terms.
//!
//! A term is either a double-quoted phrase (quotes stripped) or a maximal run
//! of non-whitespace characters. At each position the quoted alternative is
//! tried first, so `"with   quotes  "` becomes the single term `with quotes`.
//! An unterminated quote has no closing partner and falls back to the bare
//! word alternative, keeping the quote character inside the term.

use once_cell::sync::Lazy;
use regex::Regex;

static FIND_TERMS: Lazy<Regex> = Lazy::new(|| Regex::new(r#""([^"]+)"|(\S+)"#).unwrap());

static NORM_SPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s{2,}").unwrap());

/// Split `query` into normalised terms, in the order they appear.
///
/// Each term is trimmed and every internal run of two or more whitespace
/// characters is collapsed to a single space. A quoted phrase holding only
/// whitespace normalises to the empty term, which is kept.
///
/// # Examples
///
/// ```
/// use fieldsearch_core::terms::normalize_terms;
///
/// assert_eq!(
///     normalize_terms(r#"  some random  words "with   quotes  " and   spaces"#),
///     vec!["some", "random", "words", "with quotes", "and", "spaces"],
/// );
/// assert!(normalize_terms("").is_empty());
/// ```
pub fn normalize_terms(query: &str) -> Vec<String> {
    FIND_TERMS
        .captures_iter(query)
        .filter_map(|caps| caps.get(1).or_else(|| caps.get(2)))
        .map(|m| normalize_space(m.as_str()))
        .inspect(|term| tracing::trace!(term = %term, "extracted term"))
        .collect()
}

fn normalize_space(raw: &str) -> String {
    NORM_SPACE.replace_all(raw.trim(), " ").into_owned()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

//! Domain-specific assertion helpers for fieldsearch harnesses.
//!
//! These wrap `pretty_assertions` and add context-rich failure messages that
//! make it clear *which* query produced the unexpected result.

use fieldsearch::{filter_records, Filter, Record};

/// Assert that `normalize_terms(query)` yields exactly `expected`.
///
/// ```rust
/// assert_terms!(r#""a  b" c"#, ["a b", "c"]);
/// ```
#[macro_export]
macro_rules! assert_terms {
    ($query:expr, [$($term:expr),* $(,)?]) => {{
        let query: &str = $query;
        let expected: Vec<&str> = vec![$($term),*];
        let actual = fieldsearch::normalize_terms(query);
        pretty_assertions::assert_eq!(actual, expected, "normalize_terms({:?})", query);
    }};
}

/// Assert that `filter` selects exactly the records with the given ids, in
/// corpus order.
pub fn assert_selects(filter: &Filter, corpus: &[Record], expected_ids: &[u64]) {
    let hits = filter_records(filter, corpus);
    let actual = super::ids(&hits);
    pretty_assertions::assert_eq!(
        actual,
        expected_ids,
        "filter {filter} selected the wrong records"
    );
}

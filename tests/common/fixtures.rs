//! Static corpora used across harnesses.

use super::builders::{comment, post};
use fieldsearch::Record;

/// The query string from the term-extraction docs.
pub const MESSY_QUERY: &str = r#"  some random  words "with   quotes  " and   spaces"#;

/// A search configuration in TOML, mirroring [`blog_models`](super::blog_models).
pub const BLOG_CONFIG: &str = r#"
[search]
combine = "any"

[[entity]]
name = "Post"
fields = ["title", "body"]

[[entity]]
name = "Comment"
fields = ["author", "text"]

[[entity]]
name = "Tag"
fields = []
"#;

pub fn posts() -> Vec<Record> {
    vec![
        post(1, "Python tips", "List comprehensions and generators"),
        post(2, "Getting started with Django", "Models, views, and the ORM"),
        post(3, "Rust ownership", "The borrow checker explained"),
        post(4, "Weekend notes", "Nothing about programming at all"),
        post(5, "Django and Python", "Shipping a web app in a weekend"),
    ]
}

pub fn comments() -> Vec<Record> {
    vec![
        comment(10, "ann", "Great intro to the BORROW checker"),
        comment(11, "django_fan", "More please"),
        comment(12, "bob", "I prefer python for scripts"),
    ]
}

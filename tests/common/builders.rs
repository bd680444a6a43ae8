//! Test builders — ergonomic constructors for records and entity field sets.
//!
//! These builders are designed for readability in test assertions, not for
//! production use. They panic on invalid input rather than returning `Result`.

use fieldsearch::{EntityFields, Record};

// ---------------------------------------------------------------------------
// Records
// ---------------------------------------------------------------------------

/// A blog post with an `id`, `title`, and `body`.
pub fn post(id: u64, title: &str, body: &str) -> Record {
    Record::new()
        .with("id", id)
        .with("title", title)
        .with("body", body)
}

/// A comment with an `id`, `author`, and `text`.
pub fn comment(id: u64, author: &str, text: &str) -> Record {
    Record::new()
        .with("id", id)
        .with("author", author)
        .with("text", text)
}

/// Parse a JSON object literal into a [`Record`].
pub fn record_json(json: &str) -> Record {
    serde_json::from_str(json).expect("test record must be a JSON object")
}

/// `id` values of `records`, in order.
pub fn ids(records: &[&Record]) -> Vec<u64> {
    records
        .iter()
        .map(|r| {
            r.get("id")
                .and_then(serde_json::Value::as_u64)
                .expect("test record must carry a numeric id")
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Entity field sets
// ---------------------------------------------------------------------------

/// Post, Comment, and a fieldless Tag entity, in that order.
pub fn blog_models() -> Vec<EntityFields> {
    vec![
        EntityFields::new("Post", ["title", "body"]),
        EntityFields::new("Comment", ["author", "text"]),
        EntityFields::new("Tag", Vec::<String>::new()),
    ]
}

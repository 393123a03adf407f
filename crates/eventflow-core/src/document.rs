//! Schemaless event documents.

use serde_json::{Map, Value};

/// An ingested event record: an open-ended JSON object with no enforced
/// schema. Analysis recognizes a few optional fields (`event_type`,
/// `product_id`, `timestamp`) and ignores everything else.
pub type Document = Map<String, Value>;

/// Returns the string value of `key`, or `None` if the field is absent or
/// not a JSON string.
#[must_use]
pub fn str_field<'a>(doc: &'a Document, key: &str) -> Option<&'a str> {
    doc.get(key).and_then(Value::as_str)
}

//! Lazy decoding of opaque template documents.
//!
//! Templates store their questions, options, and rules as untyped JSON so
//! that documents of different shapes can coexist. A typed view is produced
//! on first access by trying an ordered list of candidate decoders; the first
//! one that succeeds wins.

use serde::de::DeserializeOwned;
use serde_json::Value;

/// A single way of reading a document into `T`.
pub type Candidate<T> = fn(&Value) -> Result<T, serde_json::Error>;

/// Decode `value` directly as `T` with serde.
pub fn as_is<T: DeserializeOwned>(value: &Value) -> Result<T, serde_json::Error> {
    T::deserialize(value)
}

/// Try each candidate in order and return the first success.
///
/// Returns `None` when every candidate rejects the document.
pub fn decode_first<T>(value: &Value, candidates: &[Candidate<T>]) -> Option<T> {
    candidates.iter().find_map(|decode| decode(value).ok())
}

/// True for documents that carry no content (`null`, `[]`, `{}`, `""`).
pub fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Array(items) => items.is_empty(),
        Value::Object(fields) => fields.is_empty(),
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

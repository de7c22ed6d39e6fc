//! Dotted-path resolution over record value trees.
//!
//! Match fields may name nested values (`"address.city"`). Resolution walks the
//! record's object members one dot-separated segment at a time and returns
//! `None` as a distinct absent sentinel: a missing field is never conflated with
//! a field that is explicitly present as `null`.

use crate::record::Record;
use serde_json::Value;

/// Resolves a dotted path against a record.
///
/// Returns a reference to the value at the path, or `None` if any segment is
/// missing or lands on a non-object. Segments address object members only;
/// array elements are not part of the dotted grammar.
///
/// # Example
///
/// ```rust
/// use mergeweave::resolve_path;
/// use serde_json::json;
///
/// let record = json!({"address": {"city": "Oslo"}});
/// let record = record.as_object().unwrap();
/// assert_eq!(resolve_path(record, "address.city"), Some(&json!("Oslo")));
/// assert_eq!(resolve_path(record, "address.zip"), None);
/// ```
pub fn resolve_path<'a>(record: &'a Record, path: &str) -> Option<&'a Value> {
  let mut segments = path.split('.');
  let first = segments.next()?;
  let mut current = record.get(first)?;
  for segment in segments {
    current = current.as_object()?.get(segment)?;
  }
  Some(current)
}

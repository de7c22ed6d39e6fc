//! Field-level record matching for the field-join handler.
//!
//! Two records match when every configured field resolves to equal values on
//! both sides. Comparison is strict [`serde_json::Value`] equality, except that
//! two string values are lower-cased first when `ignore_case` is set.
//!
//! A field that is absent on **both** sides counts as a match; this preserves
//! the reference engine's behavior for sparse records. Absent versus present
//! (including present-as-`null`) is a mismatch, since the path resolver keeps
//! the two cases distinct.

use crate::path::resolve_path;
use crate::record::Record;
use serde_json::Value;

/// Tests whether `a` and `b` agree on every field in `fields`.
///
/// Fields are checked in order and the scan short-circuits on the first
/// mismatch. Dotted paths are resolved per [`resolve_path`].
pub fn records_match(a: &Record, b: &Record, fields: &[String], ignore_case: bool) -> bool {
  fields.iter().all(|field| {
    match (resolve_path(a, field), resolve_path(b, field)) {
      // Absent on both sides counts as equal.
      (None, None) => true,
      (Some(left), Some(right)) => values_equal(left, right, ignore_case),
      _ => false,
    }
  })
}

fn values_equal(left: &Value, right: &Value, ignore_case: bool) -> bool {
  if ignore_case {
    if let (Some(l), Some(r)) = (left.as_str(), right.as_str()) {
      return l.to_lowercase() == r.to_lowercase();
    }
  }
  left == right
}

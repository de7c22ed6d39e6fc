//! Record and stream types for the merge engine.
//!
//! A [`Record`] is an ordered mapping from string keys to JSON values. Insertion
//! order is preserved end to end (serde_json's `preserve_order` feature backs the
//! map with an index-preserving implementation), so the key order of every output
//! record is deterministic and observable.
//!
//! A [`RecordStream`] is the finite, fully materialized sequence of records that
//! flows into or out of the engine. Inputs are treated as immutable; every output
//! record is a fresh copy, never an alias into an input stream.

use crate::config::MergeConfig;
use serde_json::{Map, Value};

/// One entry of a data stream: an ordered key-to-value map.
pub type Record = Map<String, Value>;

/// A finite, ordered, index-addressable sequence of records.
///
/// Named `RecordStream` rather than `Stream` to keep it distinct from
/// `futures::Stream`, which the async wrapper in [`crate::transformer`] uses.
pub type RecordStream = Vec<Record>;

/// Which input stream (or both) an output record was built from.
///
/// Used as the value of the source field when `add_source_field` is enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeSource {
  /// The record originated from the first input stream.
  Input1,
  /// The record originated from the second input stream.
  Input2,
  /// The record combines entries from both input streams.
  Both,
}

impl MergeSource {
  /// The literal written into the source field for this origin.
  pub fn label(&self) -> &'static str {
    match self {
      Self::Input1 => "input1",
      Self::Input2 => "input2",
      Self::Both => "both",
    }
  }
}

/// Writes the source tag into `record` under the configured field name.
pub(crate) fn tag_record(record: &mut Record, field: &str, source: MergeSource) {
  record.insert(field.to_string(), Value::String(source.label().to_string()));
}

/// Returns a fresh copy of `record`, tagged with its origin when the
/// configuration asks for source tagging.
pub(crate) fn copy_tagged(record: &Record, source: MergeSource, config: &MergeConfig) -> Record {
  let mut out = record.clone();
  if config.add_source_field {
    tag_record(&mut out, &config.source_field_name, source);
  }
  out
}

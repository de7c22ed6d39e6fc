//! Record combination with per-key conflict resolution.
//!
//! The combiner turns a (left, right) record pair into one output record. When
//! `output_data_from` selects a single side, the other side is discarded
//! entirely. In the default `both` mode the output starts from a copy of the
//! left record (left's key order preserved) and folds the right record's
//! entries in, resolving each key collision independently per the configured
//! [`ConflictResolution`] policy.

use crate::config::{ConflictResolution, MergeConfig, OutputDataFrom};
use crate::record::Record;
use serde_json::Value;

/// Merges `left` and `right` into a freshly built record.
pub fn combine_records(left: &Record, right: &Record, config: &MergeConfig) -> Record {
  match config.output_data_from {
    OutputDataFrom::Input1 => left.clone(),
    OutputDataFrom::Input2 => right.clone(),
    OutputDataFrom::Both => merge_both(left, right, config.conflict_resolution),
  }
}

fn merge_both(left: &Record, right: &Record, policy: ConflictResolution) -> Record {
  let mut merged = left.clone();
  for (key, value) in right {
    if !merged.contains_key(key) {
      merged.insert(key.clone(), value.clone());
      continue;
    }
    match policy {
      // Left already holds the winning value.
      ConflictResolution::Input1 => {}
      ConflictResolution::Input2 => {
        // Insert on an existing key keeps its position, so left's key order
        // survives the overwrite.
        merged.insert(key.clone(), value.clone());
      }
      ConflictResolution::Suffix => {
        // shift_remove keeps the remaining keys in order; the suffixed pair
        // is appended at the end.
        if let Some(existing) = merged.shift_remove(key) {
          merged.insert(format!("{key}_1"), existing);
          merged.insert(format!("{key}_2"), value.clone());
        }
      }
      ConflictResolution::Array => match merged.get_mut(key) {
        Some(Value::Array(items)) => items.push(value.clone()),
        Some(existing) => {
          let previous = existing.take();
          *existing = Value::Array(vec![previous, value.clone()]);
        }
        None => {}
      },
    }
  }
  merged
}

//! Cross-product handler: every ordered pair of A and B.
//!
//! The output has `|A| * |B|` records in row-major order (A outer, B inner).
//! Quadratic in the input sizes by contract; callers feeding large streams
//! should account for the memory and time this implies. The full product is
//! part of the observable behavior and is never short-circuited.

use crate::combine::combine_records;
use crate::config::MergeConfig;
use crate::record::{MergeSource, Record, tag_record};

/// Emits `combine(a, b)` for every pair in A × B, row-major.
pub fn cross(input1: &[Record], input2: &[Record], config: &MergeConfig) -> Vec<Record> {
  let mut output = Vec::with_capacity(input1.len() * input2.len());
  for left in input1 {
    for right in input2 {
      let mut combined = combine_records(left, right, config);
      if config.add_source_field {
        tag_record(&mut combined, &config.source_field_name, MergeSource::Both);
      }
      output.push(combined);
    }
  }
  output
}

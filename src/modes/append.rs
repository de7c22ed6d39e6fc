//! Append handler: stream A followed by stream B.

use crate::config::MergeConfig;
use crate::record::{MergeSource, Record, copy_tagged};

/// Concatenates both streams, A first, each in its original order.
///
/// The output length is always `|A| + |B|`. With `add_source_field` set, each
/// emitted record is tagged with the literal of its origin stream.
pub fn append(input1: &[Record], input2: &[Record], config: &MergeConfig) -> Vec<Record> {
  let mut output = Vec::with_capacity(input1.len() + input2.len());
  for record in input1 {
    output.push(copy_tagged(record, MergeSource::Input1, config));
  }
  for record in input2 {
    output.push(copy_tagged(record, MergeSource::Input2, config));
  }
  output
}

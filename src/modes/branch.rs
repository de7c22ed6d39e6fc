//! Branch-select handler: pass one input stream through unchanged.

use crate::config::MergeConfig;
use crate::error::MergeError;
use crate::record::{MergeSource, Record, copy_tagged};

/// Returns a fresh copy of the stream selected by `config.branch_index`.
///
/// Index 0 selects the first stream, 1 the second. Any other index is a
/// validation failure, never a silent fallback.
pub fn branch(
  input1: &[Record],
  input2: &[Record],
  config: &MergeConfig,
) -> Result<Vec<Record>, MergeError> {
  let (stream, source) = match config.branch_index {
    0 => (input1, MergeSource::Input1),
    1 => (input2, MergeSource::Input2),
    index => return Err(MergeError::InvalidBranchIndex(index)),
  };
  Ok(
    stream
      .iter()
      .map(|record| copy_tagged(record, source, config))
      .collect(),
  )
}

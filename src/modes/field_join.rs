//! Field-join handler: SQL-style join on field equality.
//!
//! For each record in A, B is scanned in order and every record agreeing on
//! all match fields is paired with it. The join type then decides what happens
//! to records that never matched: `inner` drops them, `left`/`right` keep one
//! side's leftovers, `outer` keeps both. Leftovers are emitted verbatim (they
//! never pass through the combiner), after all matched pairs.

use crate::combine::combine_records;
use crate::config::{JoinType, MergeConfig, MultipleMatches};
use crate::error::MergeError;
use crate::matcher::records_match;
use crate::record::{MergeSource, Record, copy_tagged, tag_record};

/// Joins both streams on equality over `config.match_fields`.
///
/// Output ordering: matched pairs grouped by A in A-order (B-scan order within
/// each group), then unmatched A records, then unmatched B records.
///
/// Returns [`MergeError::EmptyMatchFields`] before any processing when no
/// match fields are configured.
pub fn field_join(
  input1: &[Record],
  input2: &[Record],
  config: &MergeConfig,
) -> Result<Vec<Record>, MergeError> {
  if config.match_fields.is_empty() {
    return Err(MergeError::EmptyMatchFields);
  }

  let mut output = Vec::new();
  let mut matched_left = vec![false; input1.len()];
  let mut matched_right = vec![false; input2.len()];

  for (i, left) in input1.iter().enumerate() {
    for (j, right) in input2.iter().enumerate() {
      if !records_match(left, right, &config.match_fields, config.ignore_case) {
        continue;
      }
      matched_left[i] = true;
      matched_right[j] = true;
      let mut combined = combine_records(left, right, config);
      if config.add_source_field {
        tag_record(&mut combined, &config.source_field_name, MergeSource::Both);
      }
      output.push(combined);
      if config.multiple_matches == MultipleMatches::First {
        break;
      }
    }
  }

  if matches!(config.join_type, JoinType::Left | JoinType::Outer) {
    for (i, left) in input1.iter().enumerate() {
      if !matched_left[i] {
        output.push(copy_tagged(left, MergeSource::Input1, config));
      }
    }
  }
  if matches!(config.join_type, JoinType::Right | JoinType::Outer) {
    for (j, right) in input2.iter().enumerate() {
      if !matched_right[j] {
        output.push(copy_tagged(right, MergeSource::Input2, config));
      }
    }
  }

  Ok(output)
}

//! Positional-zip handler: pair records by index.
//!
//! Positions run from 0 to `max(|A|, |B|)`. Where the shorter stream has run
//! out, the fill mode decides what happens: `skip` drops the position, `repeat`
//! substitutes the last record of the absent side's own stream, and `null`
//! (the default) treats the absent side as an empty record. A side that stays
//! absent even after filling (repeat against an empty stream) is combined as an
//! empty record as well.

use crate::combine::combine_records;
use crate::config::{FillMode, MergeConfig};
use crate::record::{MergeSource, Record, tag_record};

/// Zips both streams position by position.
///
/// Source tags reflect which side(s) genuinely held a record at the position;
/// a filled-in side does not count as present.
pub fn position(input1: &[Record], input2: &[Record], config: &MergeConfig) -> Vec<Record> {
  let len = input1.len().max(input2.len());
  let mut output = Vec::new();

  for i in 0..len {
    let left = input1.get(i);
    let right = input2.get(i);

    if config.fill_mode == FillMode::Skip && (left.is_none() || right.is_none()) {
      continue;
    }

    let source = match (left.is_some(), right.is_some()) {
      (true, true) => MergeSource::Both,
      (true, false) => MergeSource::Input1,
      _ => MergeSource::Input2,
    };

    let resolved_left = resolve_side(left, input1, config.fill_mode);
    let resolved_right = resolve_side(right, input2, config.fill_mode);

    let mut combined = combine_records(&resolved_left, &resolved_right, config);
    if config.add_source_field {
      tag_record(&mut combined, &config.source_field_name, source);
    }
    output.push(combined);
  }

  output
}

/// Resolves one side of a position: the record itself when present, the
/// stream's own last record under `repeat`, an empty record otherwise.
fn resolve_side(record: Option<&Record>, stream: &[Record], fill_mode: FillMode) -> Record {
  match record {
    Some(record) => record.clone(),
    None => match fill_mode {
      FillMode::Repeat => stream.last().cloned().unwrap_or_default(),
      _ => Record::new(),
    },
  }
}

//! Merge configuration: the mode selector and the per-mode policies.
//!
//! # Overview
//!
//! [`MergeConfig`] carries everything a single merge call needs beyond the two
//! input streams: the [`MergeMode`] plus the tie-break, fill, and key-conflict
//! policies the individual handlers consult. The struct deserializes from the
//! camelCase wire names used by the workflow executor (`matchFields`,
//! `joinType`, ...), and every policy has the documented default, so a bare
//! `{"mode": "append"}` options value is a complete configuration.
//!
//! Configuration is supplied per call; the engine holds no state across
//! invocations.
//!
//! # Quick Start
//!
//! ```rust
//! use mergeweave::{JoinType, MergeConfig, MergeMode};
//!
//! let config = MergeConfig::new(MergeMode::CombineByFields)
//!   .with_match_fields(vec!["id".to_string()])
//!   .with_join_type(JoinType::Outer);
//! ```

use serde::{Deserialize, Serialize};

/// The five combination strategies of the merge engine.
///
/// Dispatch is an exhaustive match over this enum, so the compiler enforces
/// coverage of all five modes. Wire tags are the executor's camelCase strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MergeMode {
  /// Concatenate stream A then stream B.
  Append,
  /// Join records on field equality (SQL-style inner/left/right/outer).
  CombineByFields,
  /// Pair records by position, with a configurable fill policy.
  CombineByPosition,
  /// Emit the full cross product of both streams.
  CombineAll,
  /// Pass one of the two input streams through unchanged.
  ChooseBranch,
}

/// Retention policy for unmatched records in a field join.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JoinType {
  /// Keep matched pairs only.
  #[default]
  Inner,
  /// Also keep unmatched records from the first stream.
  Left,
  /// Also keep unmatched records from the second stream.
  Right,
  /// Keep unmatched records from both streams.
  Outer,
}

/// How a positional zip treats a position where one stream has run out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FillMode {
  /// Treat the absent side as an empty record.
  #[default]
  Null,
  /// Substitute the last record of the absent side's own stream.
  Repeat,
  /// Drop the position entirely.
  Skip,
}

/// Which side's data the combiner emits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputDataFrom {
  /// Merge both records, resolving key collisions per [`ConflictResolution`].
  #[default]
  Both,
  /// Emit a copy of the first stream's record only.
  Input1,
  /// Emit a copy of the second stream's record only.
  Input2,
}

/// Per-key policy when both records carry the same key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConflictResolution {
  /// Keep the first stream's value.
  Input1,
  /// Overwrite with the second stream's value.
  #[default]
  Input2,
  /// Drop the bare key and emit `key_1` / `key_2` with both values.
  Suffix,
  /// Collect both values into an array.
  Array,
}

/// Whether a field join keeps every match per record or only the first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MultipleMatches {
  /// Keep every matching pair.
  #[default]
  All,
  /// Keep only the earliest match in the second stream per first-stream record.
  First,
}

fn default_source_field_name() -> String {
  "_source".to_string()
}

/// Configuration for one merge call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MergeConfig {
  /// The combination strategy to run. Required; all other options default.
  pub mode: MergeMode,
  /// Field names to match on in `combineByFields` mode. Dotted paths permitted.
  #[serde(default)]
  pub match_fields: Vec<String>,
  /// Unmatched-record retention policy for field joins.
  #[serde(default)]
  pub join_type: JoinType,
  /// Fill policy for positional zips.
  #[serde(default)]
  pub fill_mode: FillMode,
  /// Which input stream `chooseBranch` passes through (0 or 1).
  #[serde(default)]
  pub branch_index: usize,
  /// Which side's data the combiner emits.
  #[serde(default)]
  pub output_data_from: OutputDataFrom,
  /// Per-key collision policy when combining both sides.
  #[serde(default)]
  pub conflict_resolution: ConflictResolution,
  /// Case-fold string values before comparing match fields.
  #[serde(default)]
  pub ignore_case: bool,
  /// Whether a field join keeps all matches or only the first per record.
  #[serde(default)]
  pub multiple_matches: MultipleMatches,
  /// Tag each output record with the stream(s) it came from.
  #[serde(default)]
  pub add_source_field: bool,
  /// Field name used for the source tag.
  #[serde(default = "default_source_field_name")]
  pub source_field_name: String,
}

impl MergeConfig {
  /// Creates a configuration for `mode` with every policy at its default.
  pub fn new(mode: MergeMode) -> Self {
    Self {
      mode,
      match_fields: Vec::new(),
      join_type: JoinType::default(),
      fill_mode: FillMode::default(),
      branch_index: 0,
      output_data_from: OutputDataFrom::default(),
      conflict_resolution: ConflictResolution::default(),
      ignore_case: false,
      multiple_matches: MultipleMatches::default(),
      add_source_field: false,
      source_field_name: default_source_field_name(),
    }
  }

  /// Sets the fields to match on in `combineByFields` mode.
  pub fn with_match_fields(mut self, fields: Vec<String>) -> Self {
    self.match_fields = fields;
    self
  }

  /// Sets the unmatched-record retention policy.
  pub fn with_join_type(mut self, join_type: JoinType) -> Self {
    self.join_type = join_type;
    self
  }

  /// Sets the positional fill policy.
  pub fn with_fill_mode(mut self, fill_mode: FillMode) -> Self {
    self.fill_mode = fill_mode;
    self
  }

  /// Sets the branch passed through by `chooseBranch`.
  pub fn with_branch_index(mut self, branch_index: usize) -> Self {
    self.branch_index = branch_index;
    self
  }

  /// Sets which side's data the combiner emits.
  pub fn with_output_data_from(mut self, output_data_from: OutputDataFrom) -> Self {
    self.output_data_from = output_data_from;
    self
  }

  /// Sets the per-key collision policy.
  pub fn with_conflict_resolution(mut self, conflict_resolution: ConflictResolution) -> Self {
    self.conflict_resolution = conflict_resolution;
    self
  }

  /// Enables case-folded string comparison for match fields.
  pub fn with_ignore_case(mut self, ignore_case: bool) -> Self {
    self.ignore_case = ignore_case;
    self
  }

  /// Sets whether a field join keeps all matches or only the first.
  pub fn with_multiple_matches(mut self, multiple_matches: MultipleMatches) -> Self {
    self.multiple_matches = multiple_matches;
    self
  }

  /// Enables source tagging under the default `_source` field name.
  pub fn with_source_field(mut self) -> Self {
    self.add_source_field = true;
    self
  }

  /// Enables source tagging under a custom field name.
  pub fn with_source_field_name(mut self, name: impl Into<String>) -> Self {
    self.add_source_field = true;
    self.source_field_name = name.into();
    self
  }
}

//! Error types for the merge engine.
//!
//! Failures fall into two groups:
//!
//! - **Validation errors**: an unsupported mode, an empty match-field list for a
//!   field join, or a branch index outside `{0, 1}`. These are surfaced before
//!   any records are processed.
//! - **Execution errors**: a panic raised inside a handler. These are caught at
//!   the dispatcher boundary and rewrapped, so a failure always surfaces through
//!   the return value rather than unwinding into the caller.
//!
//! Merging is all-or-nothing per call: a failed call never yields partial output.

use thiserror::Error;

/// Error type for merge engine operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MergeError {
  /// The options value failed to deserialize. This covers mode strings outside
  /// the supported set as well as config values of the wrong shape.
  #[error("invalid merge options: {0}")]
  InvalidOptions(String),

  /// A field join was requested without any match fields.
  #[error("combineByFields requires at least one match field")]
  EmptyMatchFields,

  /// The branch index was outside the two available input streams.
  #[error("branch index {0} is out of range (expected 0 or 1)")]
  InvalidBranchIndex(usize),

  /// A handler panicked mid-computation; the payload message is preserved.
  #[error("merge execution failed: {0}")]
  Execution(String),
}

/// Component name and type information for error reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentInfo {
  /// The configured or default name of the component.
  pub name: String,
  /// The Rust type name of the component.
  pub type_name: String,
}

impl ComponentInfo {
  /// Creates a new `ComponentInfo` with the given name and type name.
  pub fn new(name: String, type_name: String) -> Self {
    Self { name, type_name }
  }
}

/// Contextual information about when and where a failure occurred.
///
/// Built by the stream-facing wrapper when the engine reports a failure, and
/// attached to the structured log record for that failure.
#[derive(Debug, Clone)]
pub struct ErrorContext {
  /// When the failure was observed.
  pub timestamp: chrono::DateTime<chrono::Utc>,
  /// Name of the component that reported the failure.
  pub component_name: String,
  /// Type of the component that reported the failure.
  pub component_type: String,
}

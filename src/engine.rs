//! Mode dispatcher and result envelope.
//!
//! # Overview
//!
//! [`execute`] is the typed entry point: it routes two record streams through
//! the handler selected by the configuration's [`MergeMode`] and returns the
//! merged stream or a [`MergeError`]. Dispatch is a single exhaustive match,
//! so adding a mode without a handler fails to compile.
//!
//! [`run`] is the options-value entry point consumed by the workflow executor:
//! it deserializes the executor's options envelope (streams plus camelCase
//! config keys), invokes [`execute`] with a panic guard, and converts every
//! outcome into a uniform [`MergeResponse`]. No failure crosses this boundary
//! as an unwind; an unsupported mode string, a validation error, and a panic
//! mid-handler all surface as `{success: false, error}`.
//!
//! Merging is all-or-nothing: a failed call never carries partial data.

use crate::config::{MergeConfig, MergeMode};
use crate::error::MergeError;
use crate::modes::{append, branch, cross, field_join, position};
use crate::record::{Record, RecordStream};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::panic::{self, AssertUnwindSafe};
use tracing::{debug, warn};

/// Fixed message returned by the capability stub.
pub const METADATA_UNSUPPORTED: &str = "metadata queries are not supported by the merge engine";

/// Uniform result envelope returned to the workflow executor.
///
/// Serializes as `{"success": true, "data": [...], "mode": "..."}` on success
/// and `{"success": false, "error": "..."}` on failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MergeResponse {
  /// Whether the merge produced a stream.
  pub success: bool,
  /// The merged output stream, present on success.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub data: Option<RecordStream>,
  /// The mode that ran, present on success.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub mode: Option<MergeMode>,
  /// The failure message, present on failure.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub error: Option<String>,
}

impl MergeResponse {
  /// Builds a success envelope carrying the merged stream.
  pub fn success(data: RecordStream, mode: MergeMode) -> Self {
    Self {
      success: true,
      data: Some(data),
      mode: Some(mode),
      error: None,
    }
  }

  /// Builds a failure envelope carrying the error message.
  pub fn failure(error: impl Into<String>) -> Self {
    Self {
      success: false,
      data: None,
      mode: None,
      error: Some(error.into()),
    }
  }
}

/// The executor's options value: both input streams plus the flattened
/// configuration keys.
#[derive(Debug, Deserialize)]
struct MergeRequest {
  #[serde(default)]
  input1: RecordStream,
  #[serde(default)]
  input2: RecordStream,
  #[serde(flatten)]
  config: MergeConfig,
}

/// Merges two record streams according to `config`.
///
/// Pure and synchronous: no I/O, no shared state, inputs are never mutated.
/// Validation errors (empty match fields, out-of-range branch index) are
/// returned before any records are processed.
pub fn execute(
  input1: &[Record],
  input2: &[Record],
  config: &MergeConfig,
) -> Result<Vec<Record>, MergeError> {
  debug!(
    mode = ?config.mode,
    input1 = input1.len(),
    input2 = input2.len(),
    "dispatching merge"
  );
  match config.mode {
    MergeMode::Append => Ok(append::append(input1, input2, config)),
    MergeMode::CombineByFields => field_join::field_join(input1, input2, config),
    MergeMode::CombineByPosition => Ok(position::position(input1, input2, config)),
    MergeMode::CombineAll => Ok(cross::cross(input1, input2, config)),
    MergeMode::ChooseBranch => branch::branch(input1, input2, config),
  }
}

/// Runs a merge from the executor's options value.
///
/// Every failure path is folded into the returned [`MergeResponse`]: options
/// that fail to deserialize (including unrecognized mode strings) become
/// [`MergeError::InvalidOptions`], and a panic inside a handler is caught here
/// and rewrapped as [`MergeError::Execution`] with the panic's message.
pub fn run(options: &Value) -> MergeResponse {
  let request: MergeRequest = match serde_json::from_value(options.clone()) {
    Ok(request) => request,
    Err(err) => {
      let err = MergeError::InvalidOptions(err.to_string());
      warn!(error = %err, "rejecting merge options");
      return MergeResponse::failure(err.to_string());
    }
  };

  let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
    execute(&request.input1, &request.input2, &request.config)
  }));

  match outcome {
    Ok(Ok(data)) => MergeResponse::success(data, request.config.mode),
    Ok(Err(err)) => {
      warn!(mode = ?request.config.mode, error = %err, "merge failed");
      MergeResponse::failure(err.to_string())
    }
    Err(payload) => {
      let err = MergeError::Execution(panic_message(payload));
      warn!(mode = ?request.config.mode, error = %err, "merge handler panicked");
      MergeResponse::failure(err.to_string())
    }
  }
}

/// Capability-query stub: metadata is a static external contract this engine
/// does not serve, so the response is always the same failure.
pub fn metadata() -> MergeResponse {
  MergeResponse::failure(METADATA_UNSUPPORTED)
}

fn panic_message(payload: Box<dyn std::any::Any + Send>) -> String {
  if let Some(message) = payload.downcast_ref::<&str>() {
    (*message).to_string()
  } else if let Some(message) = payload.downcast_ref::<String>() {
    message.clone()
  } else {
    "merge handler panicked".to_string()
  }
}

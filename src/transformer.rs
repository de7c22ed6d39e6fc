//! Stream-facing wrapper for the merge engine.
//!
//! # Overview
//!
//! [`MergeTransformer`] is the seam between the synchronous engine and an
//! asynchronous workflow executor. It exposes two input ports: the primary
//! stream arrives through [`Transformer::transform`] and the secondary stream
//! is attached up front with [`MergeTransformer::add_secondary`]. Both streams
//! are fully materialized (the engine works over bounded, in-memory
//! sequences), merged in one synchronous call, and the output is re-emitted as
//! a stream.
//!
//! # Quick Start
//!
//! ```rust
//! use futures::stream;
//! use mergeweave::{MergeConfig, MergeMode, MergeTransformer, Transformer};
//! use serde_json::json;
//!
//! # async fn example() {
//! let mut merger = MergeTransformer::new(MergeConfig::new(MergeMode::Append))
//!   .with_name("append-stage".to_string());
//! merger.add_secondary(Box::pin(stream::iter(vec![json!({"b": 2})])));
//!
//! let output = merger
//!   .transform(Box::pin(stream::iter(vec![json!({"a": 1})])))
//!   .await;
//! # let _ = output;
//! # }
//! ```
//!
//! # Failure Behavior
//!
//! The engine's all-or-nothing contract carries over: when the merge fails,
//! the wrapper emits nothing and logs the failure with an [`ErrorContext`].
//! Partial output is never emitted.

use crate::config::MergeConfig;
use crate::engine;
use crate::error::{ComponentInfo, ErrorContext};
use crate::record::RecordStream;
use async_trait::async_trait;
use futures::stream;
use futures::Stream;
use serde_json::Value;
use std::pin::Pin;
use tokio_stream::StreamExt;
use tracing::{error, warn};

/// Boxed stream of JSON values flowing into a transformer.
pub type InputStream = Pin<Box<dyn Stream<Item = Value> + Send>>;

/// Boxed stream of JSON values flowing out of a transformer.
pub type OutputStream = Pin<Box<dyn Stream<Item = Value> + Send>>;

/// A stage that consumes one value stream and produces another.
#[async_trait]
pub trait Transformer {
  /// Transforms the input stream into the output stream.
  async fn transform(&mut self, input: InputStream) -> OutputStream;

  /// Returns identification for this component, used in error reporting.
  fn component_info(&self) -> ComponentInfo;

  /// Builds the context attached to failure logs.
  fn create_error_context(&self) -> ErrorContext {
    let info = self.component_info();
    ErrorContext {
      timestamp: chrono::Utc::now(),
      component_name: info.name,
      component_type: info.type_name,
    }
  }
}

/// A transformer that merges its primary input stream with a secondary stream.
pub struct MergeTransformer {
  config: MergeConfig,
  name: Option<String>,
  secondary: Option<InputStream>,
}

impl MergeTransformer {
  /// Creates a merge transformer running the given configuration.
  ///
  /// Until [`add_secondary`](Self::add_secondary) is called, the second input
  /// stream is empty.
  pub fn new(config: MergeConfig) -> Self {
    Self {
      config,
      name: None,
      secondary: None,
    }
  }

  /// Sets the name for this transformer.
  pub fn with_name(mut self, name: String) -> Self {
    self.name = Some(name);
    self
  }

  /// Attaches the secondary input stream.
  ///
  /// The stream is consumed by the next [`transform`](Transformer::transform)
  /// call; attaching again replaces an unconsumed stream.
  pub fn add_secondary(&mut self, stream: InputStream) {
    self.secondary = Some(stream);
  }
}

#[async_trait]
impl Transformer for MergeTransformer {
  async fn transform(&mut self, input: InputStream) -> OutputStream {
    let primary = collect_records(input).await;
    let secondary = match self.secondary.take() {
      Some(stream) => collect_records(stream).await,
      None => Vec::new(),
    };

    match engine::execute(&primary, &secondary, &self.config) {
      Ok(records) => Box::pin(stream::iter(records.into_iter().map(Value::Object))),
      Err(err) => {
        let context = self.create_error_context();
        error!(
          component = %context.component_name,
          timestamp = %context.timestamp,
          error = %err,
          "merge failed, emitting nothing"
        );
        Box::pin(stream::empty::<Value>())
      }
    }
  }

  fn component_info(&self) -> ComponentInfo {
    ComponentInfo::new(
      self
        .name
        .clone()
        .unwrap_or_else(|| "merge_transformer".to_string()),
      std::any::type_name::<Self>().to_string(),
    )
  }
}

/// Materializes a value stream into a record stream, skipping non-objects.
async fn collect_records(mut stream: InputStream) -> RecordStream {
  let mut records = Vec::new();
  while let Some(value) = stream.next().await {
    match value {
      Value::Object(record) => records.push(record),
      other => warn!(item = %other, "skipping non-object stream item"),
    }
  }
  records
}

//! # MergeWeave
//!
//! Multi-mode record-merge engine for workflow graph streams.
//!
//! MergeWeave combines two ordered, fully materialized record streams produced
//! by upstream stages of a workflow graph into a single output stream. Five
//! combination strategies are supported, each with its own tie-break, fill,
//! and key-conflict policies:
//!
//! - **Append**: all of A, then all of B
//! - **Field join** (`combineByFields`): inner/left/right/outer join on field
//!   equality, with nested dotted paths and optional case folding
//! - **Positional zip** (`combineByPosition`): pair records by index, with
//!   null/repeat/skip fill policies
//! - **Cross product** (`combineAll`): every ordered pair, row-major
//! - **Branch select** (`chooseBranch`): pass one input stream through
//!
//! ## Quick Start
//!
//! ```rust
//! use mergeweave::{execute, MergeConfig, MergeMode};
//! use serde_json::json;
//!
//! let a = vec![json!({"id": 1, "x": "a"}).as_object().unwrap().clone()];
//! let b = vec![json!({"id": 1, "y": "b"}).as_object().unwrap().clone()];
//!
//! let config = MergeConfig::new(MergeMode::CombineByFields)
//!   .with_match_fields(vec!["id".to_string()]);
//! let merged = execute(&a, &b, &config).unwrap();
//! assert_eq!(merged[0]["y"], json!("b"));
//! ```
//!
//! The workflow executor talks to the engine through [`run`], which accepts an
//! options value (`mode`, `input1`, `input2`, plus the mode-specific config
//! keys) and returns a uniform success/failure envelope. Async pipelines wrap
//! the engine in a [`MergeTransformer`].

#![deny(missing_docs)]

/// Record combination with per-key conflict resolution.
pub mod combine;
/// Merge configuration: mode selector and per-mode policies.
pub mod config;
/// Mode dispatcher and result envelope.
pub mod engine;
/// Error types for merge operations.
pub mod error;
/// Field-level record matching.
pub mod matcher;
/// The five merge handlers.
pub mod modes;
/// Dotted-path resolution over record value trees.
pub mod path;
/// Record and stream types.
pub mod record;
/// Stream-facing async wrapper.
pub mod transformer;

pub use combine::combine_records;
pub use config::{
  ConflictResolution, FillMode, JoinType, MergeConfig, MergeMode, MultipleMatches, OutputDataFrom,
};
pub use engine::{execute, metadata, run, MergeResponse, METADATA_UNSUPPORTED};
pub use error::{ComponentInfo, ErrorContext, MergeError};
pub use matcher::records_match;
pub use path::resolve_path;
pub use record::{MergeSource, Record, RecordStream};
pub use transformer::{MergeTransformer, Transformer};

//! Tests for the cross-product handler

use crate::config::{ConflictResolution, MergeConfig, MergeMode};
use crate::modes::cross::cross;
use crate::record::Record;
use serde_json::{json, Value};

fn record(value: Value) -> Record {
  value.as_object().unwrap().clone()
}

fn config() -> MergeConfig {
  MergeConfig::new(MergeMode::CombineAll)
}

#[test]
fn test_row_major_product() {
  let a = vec![record(json!({"a": 1}))];
  let b = vec![record(json!({"b": 2})), record(json!({"b": 3}))];
  let out = cross(&a, &b, &config());
  assert_eq!(out.len(), 2);
  assert_eq!(Value::Object(out[0].clone()), json!({"a": 1, "b": 2}));
  assert_eq!(Value::Object(out[1].clone()), json!({"a": 1, "b": 3}));
}

#[test]
fn test_product_length() {
  let a = vec![record(json!({"a": 1})), record(json!({"a": 2})), record(json!({"a": 3}))];
  let b = vec![record(json!({"b": 1})), record(json!({"b": 2}))];
  assert_eq!(cross(&a, &b, &config()).len(), a.len() * b.len());
}

#[test]
fn test_empty_side_yields_empty_product() {
  let a = vec![record(json!({"a": 1}))];
  assert!(cross(&a, &[], &config()).is_empty());
  assert!(cross(&[], &a, &config()).is_empty());
}

#[test]
fn test_outer_loop_is_first_stream() {
  let a = vec![record(json!({"a": 1})), record(json!({"a": 2}))];
  let b = vec![record(json!({"b": 1})), record(json!({"b": 2}))];
  let out = cross(&a, &b, &config());
  let pairs: Vec<(i64, i64)> = out
    .iter()
    .map(|r| (r["a"].as_i64().unwrap(), r["b"].as_i64().unwrap()))
    .collect();
  assert_eq!(pairs, vec![(1, 1), (1, 2), (2, 1), (2, 2)]);
}

#[test]
fn test_conflict_resolution_applies_per_pair() {
  let a = vec![record(json!({"x": 1}))];
  let b = vec![record(json!({"x": 2}))];
  let cfg = config().with_conflict_resolution(ConflictResolution::Array);
  let out = cross(&a, &b, &cfg);
  assert_eq!(out[0]["x"], json!([1, 2]));
}

#[test]
fn test_source_tag_is_both() {
  let a = vec![record(json!({"a": 1}))];
  let b = vec![record(json!({"b": 2}))];
  let out = cross(&a, &b, &config().with_source_field());
  assert_eq!(out[0]["_source"], json!("both"));
}

//! Tests for the append handler

use crate::config::{MergeConfig, MergeMode};
use crate::modes::append::append;
use crate::record::Record;
use serde_json::{json, Value};

fn record(value: Value) -> Record {
  value.as_object().unwrap().clone()
}

fn config() -> MergeConfig {
  MergeConfig::new(MergeMode::Append)
}

#[test]
fn test_append_concatenates_in_order() {
  let a = vec![record(json!({"a": 1})), record(json!({"a": 2}))];
  let b = vec![record(json!({"b": 3}))];
  let out = append(&a, &b, &config());
  assert_eq!(out.len(), a.len() + b.len());
  assert_eq!(Value::Object(out[0].clone()), json!({"a": 1}));
  assert_eq!(Value::Object(out[1].clone()), json!({"a": 2}));
  assert_eq!(Value::Object(out[2].clone()), json!({"b": 3}));
}

#[test]
fn test_append_with_empty_sides() {
  let a = vec![record(json!({"a": 1}))];
  assert_eq!(append(&a, &[], &config()).len(), 1);
  assert_eq!(append(&[], &a, &config()).len(), 1);
  assert!(append(&[], &[], &config()).is_empty());
}

#[test]
fn test_append_tags_origin_stream() {
  let a = vec![record(json!({"a": 1}))];
  let b = vec![record(json!({"b": 2}))];
  let out = append(&a, &b, &config().with_source_field());
  assert_eq!(out[0]["_source"], json!("input1"));
  assert_eq!(out[1]["_source"], json!("input2"));
}

#[test]
fn test_append_custom_source_field_name() {
  let a = vec![record(json!({"a": 1}))];
  let out = append(&a, &[], &config().with_source_field_name("_origin"));
  assert_eq!(out[0]["_origin"], json!("input1"));
  assert!(!out[0].contains_key("_source"));
}

#[test]
fn test_append_does_not_mutate_inputs() {
  let a = vec![record(json!({"a": 1}))];
  let b = vec![record(json!({"b": 2}))];
  let _ = append(&a, &b, &config().with_source_field());
  assert!(!a[0].contains_key("_source"));
  assert!(!b[0].contains_key("_source"));
}

//! End-to-end tests for the merge engine through its public surface.

use mergeweave::{
  execute, metadata, run, FillMode, JoinType, MergeConfig, MergeMode, MergeTransformer,
  Transformer,
};
use futures::{stream, StreamExt};
use serde_json::{json, Value};

fn init_tracing() {
  let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

fn records(value: Value) -> Vec<mergeweave::Record> {
  value
    .as_array()
    .unwrap()
    .iter()
    .map(|item| item.as_object().unwrap().clone())
    .collect()
}

#[test]
fn append_preserves_length_and_order() {
  init_tracing();
  let a = records(json!([{"a": 1}, {"a": 2}]));
  let b = records(json!([{"b": 3}]));
  let out = execute(&a, &b, &MergeConfig::new(MergeMode::Append)).unwrap();
  assert_eq!(out.len(), a.len() + b.len());
  assert_eq!(out[..2], a[..]);
  assert_eq!(out[2], b[0]);
}

#[test]
fn cross_product_matches_reference_example() {
  init_tracing();
  let a = records(json!([{"a": 1}]));
  let b = records(json!([{"b": 2}, {"b": 3}]));
  let out = execute(&a, &b, &MergeConfig::new(MergeMode::CombineAll)).unwrap();
  assert_eq!(out, records(json!([{"a": 1, "b": 2}, {"a": 1, "b": 3}])));
}

#[test]
fn zip_skip_truncates_to_shorter_stream() {
  init_tracing();
  let a = records(json!([{"a": 1}, {"a": 2}, {"a": 3}]));
  let b = records(json!([{"b": 1}]));
  let config = MergeConfig::new(MergeMode::CombineByPosition).with_fill_mode(FillMode::Skip);
  assert_eq!(execute(&a, &b, &config).unwrap().len(), 1);
}

#[test]
fn options_envelope_round_trip() {
  init_tracing();
  let response = run(&json!({
    "mode": "combineByFields",
    "matchFields": ["id"],
    "input1": [{"id": 1, "x": "a"}],
    "input2": [{"id": 1, "y": "b"}, {"id": 2, "y": "c"}]
  }));
  assert!(response.success);
  assert_eq!(
    response.data.unwrap(),
    records(json!([{"id": 1, "x": "a", "y": "b"}]))
  );
}

#[test]
fn options_envelope_rejects_unknown_mode_without_panicking() {
  init_tracing();
  let response = run(&json!({"mode": "doTheMerge", "input1": [], "input2": []}));
  assert!(!response.success);
  assert!(response.error.is_some());
}

#[test]
fn metadata_is_a_static_refusal() {
  init_tracing();
  let response = metadata();
  assert!(!response.success);
  assert_eq!(
    response.error.as_deref(),
    Some("metadata queries are not supported by the merge engine")
  );
}

#[test]
fn outer_join_keeps_both_sides_leftovers() {
  init_tracing();
  let a = records(json!([{"id": 1, "x": "a"}, {"id": 7, "x": "lone"}]));
  let b = records(json!([{"id": 1, "y": "b"}, {"id": 2, "y": "c"}]));
  let config = MergeConfig::new(MergeMode::CombineByFields)
    .with_match_fields(vec!["id".to_string()])
    .with_join_type(JoinType::Outer);
  let out = execute(&a, &b, &config).unwrap();
  assert_eq!(
    out,
    records(json!([
      {"id": 1, "x": "a", "y": "b"},
      {"id": 7, "x": "lone"},
      {"id": 2, "y": "c"}
    ]))
  );
}

#[tokio::test]
async fn transformer_merges_two_value_streams() {
  init_tracing();
  let mut merger = MergeTransformer::new(MergeConfig::new(MergeMode::Append).with_source_field())
    .with_name("integration-merge".to_string());
  merger.add_secondary(Box::pin(stream::iter(vec![json!({"b": 2})])));

  let mut output = merger
    .transform(Box::pin(stream::iter(vec![json!({"a": 1})])))
    .await;

  let mut items = Vec::new();
  while let Some(item) = output.next().await {
    items.push(item);
  }
  assert_eq!(
    items,
    vec![
      json!({"a": 1, "_source": "input1"}),
      json!({"b": 2, "_source": "input2"})
    ]
  );
}

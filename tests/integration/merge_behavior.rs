//! End-to-end merge behavior over a mixed configuration tree.

use serde_json::{json, Value};
use stratum::merge::merge;
use stratum::types::ConfigMap;

fn map(value: Value) -> ConfigMap {
    match value {
        Value::Object(entries) => entries,
        other => panic!("expected mapping, got {:?}", other),
    }
}

fn merged_fixture() -> ConfigMap {
    let base = map(json!({
        "foo": 1,
        "bar": { "baz": 2, "qux": 3 },
        "simpleArr": [1, 2],
        "addArr": [1, 2],
        "subArr": [1, 2]
    }));
    let patch = map(json!({
        "foo": 2,
        "bar": { "baz": 5, "quux": 10 },
        "simpleArr": ["a", "b"],
        "+addArr": [3],
        "-subArr": [2]
    }));
    merge(&base, [&patch])
}

#[test]
fn test_merges_scalar_values() {
    assert_eq!(merged_fixture()["foo"], json!(2));
}

#[test]
fn test_merges_nested_scalar_values() {
    assert_eq!(merged_fixture()["bar"]["baz"], json!(5));
}

#[test]
fn test_merges_mappings_instead_of_overwriting() {
    let merged = merged_fixture();
    assert_eq!(merged["bar"]["qux"], json!(3));
    assert_eq!(merged["bar"]["quux"], json!(10));
}

#[test]
fn test_overwrites_sequences_by_default() {
    assert_eq!(merged_fixture()["simpleArr"], json!(["a", "b"]));
}

#[test]
fn test_adds_values_to_sequences() {
    assert_eq!(merged_fixture()["addArr"], json!([1, 2, 3]));
}

#[test]
fn test_removes_values_from_sequences() {
    assert_eq!(merged_fixture()["subArr"], json!([1]));
}

#[test]
fn test_modifier_keys_never_leak_into_result() {
    let merged = merged_fixture();
    assert!(!merged.contains_key("+addArr"));
    assert!(!merged.contains_key("-subArr"));
}

#[test]
fn test_sequential_application_equals_single_call() {
    let base = map(json!({ "a": 1, "arr": [1] }));
    let p1 = map(json!({ "a": 2, "+arr": [2] }));
    let p2 = map(json!({ "b": 3, "-arr": [1] }));

    let stepped = merge(&merge(&base, [&p1]), [&p2]);
    let combined = merge(&base, [&p1, &p2]);
    assert_eq!(stepped, combined);
}

#[test]
fn test_application_order_is_not_commutative() {
    let base = map(json!({ "value": 0 }));
    let p1 = map(json!({ "value": 1 }));
    let p2 = map(json!({ "value": 2 }));

    let forward = merge(&base, [&p1, &p2]);
    let backward = merge(&base, [&p2, &p1]);
    assert_ne!(forward, backward);
}

use super::{filters, json};
use crate::diff::{Diffs, FieldDiff, compare};
use crate::value::Value;

fn compare_json(name: &str, claim1: &str, claim2: &str) -> Diffs {
    compare(name, &json(claim1), &json(claim2), &[])
}

#[test]
fn empty_objects_have_no_diffs() {
    assert_eq!(compare_json("nil", "{}", "{}"), Diffs::new("nil"));
}

#[test]
fn null_objects_have_no_diffs() {
    let diffs = compare("nil", &Value::Null, &Value::Null, &[]);
    assert_eq!(diffs, Diffs::new("nil"));
    assert!(diffs.is_empty());
}

#[test]
fn equal_objects_with_single_field() {
    assert_eq!(
        compare_json("Test", r#"{ "field1" : "value1" }"#, r#"{ "field1" : "value1" }"#),
        Diffs::new("Test")
    );
}

#[test]
fn equal_complex_objects() {
    let text = r#"
    {
        "field1": [{"internalField1": "hello"}, {"internalField2": "goodbye"}],
        "field2": "value2",
        "field3": {"internalField3": ["hello3", "goodbye3"]}
    }"#;
    assert_eq!(compare_json("Test", text, text), Diffs::new("Test"));
}

#[test]
fn different_values_keep_claim1_order() {
    let claim1 = r#"
    {
        "field1": [{"internalField1": "hi"}, {"internalField2": "goodbye"}],
        "field2": "value2",
        "field3": {"internalField3": ["hi3", "goodbye3"]}
    }"#;
    let claim2 = r#"
    {
        "field1": [{"internalField1": "hello"}, {"internalField2": "goodbye"}],
        "field2": "value2",
        "field3": {"internalField3": ["hello3", "goodbye3"]}
    }"#;
    let expected = Diffs {
        fields: vec![
            FieldDiff::new("/field1/0/internalField1", "hi", "hello"),
            FieldDiff::new("/field3/internalField3/0", "hi3", "hello3"),
        ],
        ..Diffs::new("Test")
    };
    assert_eq!(compare_json("Test", claim1, claim2), expected);
}

#[test]
fn numeric_value_change() {
    let diffs = compare_json("X", r#"{"a": 1}"#, r#"{"a": 2}"#);
    assert_eq!(diffs.fields, vec![FieldDiff::new("/a", 1_i64, 2_i64)]);
    assert!(diffs.fields_in_claim1_only.is_empty());
    assert!(diffs.fields_in_claim2_only.is_empty());
}

#[test]
fn disjoint_paths_go_to_only_lists() {
    let diffs = compare_json("X", r#"{"a": 1}"#, r#"{"b": 2}"#);
    assert!(diffs.fields.is_empty());
    assert_eq!(diffs.fields_in_claim1_only, ["/a=1"]);
    assert_eq!(diffs.fields_in_claim2_only, ["/b=2"]);
}

#[test]
fn claim1_has_extra_field() {
    let diffs = compare_json(
        "Test",
        r#"{ "field1" : "value1", "field2": "value2" }"#,
        r#"{ "field1" : "value1" }"#,
    );
    assert_eq!(
        diffs,
        Diffs {
            fields_in_claim1_only: vec!["/field2=value2".to_owned()],
            ..Diffs::new("Test")
        }
    );
}

#[test]
fn claim2_has_extra_field() {
    let diffs = compare_json(
        "Test",
        r#"{ "field1" : "value1" }"#,
        r#"{ "field1" : "value1", "field2": "value2" }"#,
    );
    assert_eq!(
        diffs,
        Diffs {
            fields_in_claim2_only: vec!["/field2=value2".to_owned()],
            ..Diffs::new("Test")
        }
    );
}

#[test]
fn changed_value_and_missing_fields_on_both_sides() {
    let diffs = compare_json(
        "Test",
        r#"{ "field1" : "value1", "field2": "value3" }"#,
        r#"{ "field1" : "value2", "field3": "value4" }"#,
    );
    assert_eq!(
        diffs,
        Diffs {
            name: "Test".to_owned(),
            fields: vec![FieldDiff::new("/field1", "value1", "value2")],
            fields_in_claim1_only: vec!["/field2=value3".to_owned()],
            fields_in_claim2_only: vec!["/field3=value4".to_owned()],
        }
    );
}

#[test]
fn integer_and_integral_float_are_equal() {
    let diffs = compare_json("X", r#"{"mem": 58}"#, r#"{"mem": 58.0}"#);
    assert!(diffs.is_empty(), "unexpected diffs: {diffs:?}");
}

#[test]
fn type_change_is_a_difference() {
    let diffs = compare_json("X", r#"{"a": "1"}"#, r#"{"a": 1}"#);
    assert_eq!(diffs.fields, vec![FieldDiff::new("/a", "1", 1_i64)]);
}

#[test]
fn scalar_replaced_by_subtree() {
    let diffs = compare_json("X", r#"{"a": "flat"}"#, r#"{"a": {"b": true}}"#);
    assert!(diffs.fields.is_empty());
    assert_eq!(diffs.fields_in_claim1_only, ["/a=flat"]);
    assert_eq!(diffs.fields_in_claim2_only, ["/a/b=true"]);
}

#[test]
fn null_leaf_is_treated_as_absent() {
    let diffs = compare_json("X", r#"{"a": null}"#, r#"{"a": 3}"#);
    assert!(diffs.fields.is_empty());
    assert!(diffs.fields_in_claim1_only.is_empty());
    assert_eq!(diffs.fields_in_claim2_only, ["/a=3"]);
}

const FILTERED_CLAIM1: &str = r#"
{
    "field1" : {"field2": "value1", "field3": "value2"},
    "field4": {
        "field5": {"field6": 10, "field7": "hello"},
        "field8": "value1"
    }
}"#;

const FILTERED_CLAIM2: &str = r#"
{
    "field1" : {"field2": "value1", "field3": "value2"},
    "field4": {
        "field5": {"field6": 10, "field7": "goodbye"}
    }
}"#;

fn compare_filtered(filter_names: &[&str]) -> Diffs {
    compare(
        "Test",
        &json(FILTERED_CLAIM1),
        &json(FILTERED_CLAIM2),
        &filters(filter_names),
    )
}

#[test]
fn filter_on_equal_subtree_has_no_diffs() {
    assert_eq!(compare_filtered(&["field1"]), Diffs::new("Test"));
}

#[test]
fn filter_on_changed_subtree() {
    assert_eq!(
        compare_filtered(&["field5"]),
        Diffs {
            fields: vec![FieldDiff::new("/field4/field5/field7", "hello", "goodbye")],
            ..Diffs::new("Test")
        }
    );
}

#[test]
fn filter_on_parent_subtree_includes_missing_fields() {
    assert_eq!(
        compare_filtered(&["field4"]),
        Diffs {
            fields: vec![FieldDiff::new("/field4/field5/field7", "hello", "goodbye")],
            fields_in_claim1_only: vec!["/field4/field8=value1".to_owned()],
            ..Diffs::new("Test")
        }
    );
}

#[test]
fn overlapping_filters_duplicate_rows() {
    let diffs = compare_filtered(&["field4", "field5"]);
    assert_eq!(diffs.fields.len(), 2, "one row per matching filter");
    assert!(diffs.fields.iter().all(|d| d.field_path == "/field4/field5/field7"));
    assert_eq!(diffs.fields_in_claim1_only, ["/field4/field8=value1"]);
}

#[test]
fn fields_serialize_with_claim_keys() {
    let diffs = compare_json("X", r#"{"a": 1}"#, r#"{"a": "z", "b": false}"#);
    let value = serde_json::to_value(&diffs).expect("serialize");
    assert_eq!(
        value,
        serde_json::json!({
            "Name": "X",
            "Fields": [{"field": "/a", "claim1Value": 1, "claim2Value": "z"}],
            "FieldsInClaim1Only": [],
            "FieldsInClaim2Only": ["/b=false"],
        })
    );
}

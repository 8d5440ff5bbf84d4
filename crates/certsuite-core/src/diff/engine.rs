use std::collections::HashMap;

use crate::value::Value;

use super::traverse::{Field, traverse};
use super::types::{Diffs, FieldDiff};

/// Compares two decoded trees and returns their differences under `name`.
///
/// `claim1` is walked first, in traversal order: a path also present in
/// `claim2` with a different value becomes a [`FieldDiff`], a path missing
/// from `claim2` becomes a `path=value` entry in
/// [`Diffs::fields_in_claim1_only`]. `claim2` is then walked to collect the
/// paths missing from `claim1`.
///
/// `filters` is forwarded to [`traverse`]. When several filters match the
/// same leaf, the duplicate occurrences on the iterating side each produce a
/// row.
///
/// This function never fails: missing or `null` subtrees simply contribute
/// no fields.
pub fn compare(name: &str, claim1: &Value, claim2: &Value, filters: &[String]) -> Diffs {
    let claim1_fields = traverse(claim1, "", filters);
    let claim2_fields = traverse(claim2, "", filters);

    let claim1_by_path = index_by_path(&claim1_fields);
    let claim2_by_path = index_by_path(&claim2_fields);

    let mut diffs = Diffs::new(name);

    for field in &claim1_fields {
        match claim2_by_path.get(field.path.as_str()) {
            Some(claim2_value) => {
                if field.value != *claim2_value {
                    diffs.fields.push(FieldDiff {
                        field_path: field.path.clone(),
                        claim1_value: field.value.clone(),
                        claim2_value: (*claim2_value).clone(),
                    });
                }
            }
            None => diffs.fields_in_claim1_only.push(path_and_value(field)),
        }
    }

    for field in &claim2_fields {
        if !claim1_by_path.contains_key(field.path.as_str()) {
            diffs.fields_in_claim2_only.push(path_and_value(field));
        }
    }

    tracing::trace!(
        object = name,
        claim1_fields = claim1_fields.len(),
        claim2_fields = claim2_fields.len(),
        different = diffs.fields.len(),
        claim1_only = diffs.fields_in_claim1_only.len(),
        claim2_only = diffs.fields_in_claim2_only.len(),
        "compared object"
    );

    diffs
}

/// Builds a path lookup over a flattened field list. Later entries overwrite
/// earlier ones with the same path.
fn index_by_path<'f, 'v>(fields: &'f [Field<'v>]) -> HashMap<&'f str, &'v Value> {
    fields
        .iter()
        .map(|field| (field.path.as_str(), field.value))
        .collect()
}

fn path_and_value(field: &Field<'_>) -> String {
    format!("{}={}", field.path, field.value)
}

use serde::Serialize;

use crate::value::Value;

/// A field present in both claims whose values differ.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldDiff {
    /// Slash-delimited path of the leaf, e.g. `/field2/field4/field5`.
    #[serde(rename = "field")]
    pub field_path: String,
    /// Value of the leaf in claim 1.
    #[serde(rename = "claim1Value")]
    pub claim1_value: Value,
    /// Value of the leaf in claim 2.
    #[serde(rename = "claim2Value")]
    pub claim2_value: Value,
}

impl FieldDiff {
    /// Builds a [`FieldDiff`] from anything convertible into [`Value`].
    pub fn new(
        field_path: impl Into<String>,
        claim1_value: impl Into<Value>,
        claim2_value: impl Into<Value>,
    ) -> Self {
        Self {
            field_path: field_path.into(),
            claim1_value: claim1_value.into(),
            claim2_value: claim2_value.into(),
        }
    }
}

/// Differences between the same named object in two claim files.
///
/// A path appears in at most one of the three lists. Each list keeps the
/// order in which its entries were found while walking the corresponding
/// claim.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Diffs {
    /// Label of the compared object, used in the rendered section headers.
    pub name: String,
    /// Fields present in both claims with different values.
    pub fields: Vec<FieldDiff>,
    /// `path=value` entries found in claim 1 only.
    pub fields_in_claim1_only: Vec<String>,
    /// `path=value` entries found in claim 2 only.
    pub fields_in_claim2_only: Vec<String>,
}

impl Diffs {
    /// Creates an empty [`Diffs`] for the object `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Returns `true` if both claims agree on every compared field.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
            && self.fields_in_claim1_only.is_empty()
            && self.fields_in_claim2_only.is_empty()
    }

    /// Total number of entries across the three lists.
    pub fn len(&self) -> usize {
        self.fields.len() + self.fields_in_claim1_only.len() + self.fields_in_claim2_only.len()
    }
}

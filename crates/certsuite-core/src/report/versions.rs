//! Versions report: tool and platform versions of both runs.
use std::fmt;

use serde::Serialize;

use crate::claim::Versions;
use crate::diff::{Diffs, compare as compare_trees};
use crate::value::Value;

use super::{ClaimSide, ReportError};

/// Differences between the versions sections of two claims.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VersionsReport {
    /// Field-level differences, named `VERSIONS`.
    pub differences: Diffs,
}

impl fmt::Display for VersionsReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.differences)
    }
}

/// Compares two versions sections.
///
/// Both sides go through their serialized form first, so optional versions
/// left empty are absent from the tree instead of showing up as empty
/// strings.
///
/// # Errors
///
/// Returns [`ReportError::Versions`] if a side cannot be serialized.
pub fn compare(claim1: &Versions, claim2: &Versions) -> Result<VersionsReport, ReportError> {
    let v1 = to_tree(claim1, ClaimSide::Claim1)?;
    let v2 = to_tree(claim2, ClaimSide::Claim2)?;
    Ok(VersionsReport {
        differences: compare_trees("VERSIONS", &v1, &v2, &[]),
    })
}

fn to_tree(versions: &Versions, claim: ClaimSide) -> Result<Value, ReportError> {
    serde_json::to_value(versions)
        .map(Value::from)
        .map_err(|e| ReportError::Versions {
            claim,
            detail: e.to_string(),
        })
}

//! Claim file schema: the subset of a certification run's report that the
//! comparison reports read.
//!
//! Decoding is lenient. Every field defaults when absent or `null` and unknown
//! fields are ignored, so claim files from older or newer suite versions still
//! load. Producers write empty lists and maps as `null`.
//! Subtrees whose layout depends on the cluster (node summaries, CNI and CSI
//! data, hardware inventories, the suite configuration) stay untyped as
//! [`Value`].
use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

use crate::value::Value;

/// Result state of a test case that passed.
pub const TEST_CASE_RESULT_PASSED: &str = "passed";
/// Result state of a test case that was skipped.
pub const TEST_CASE_RESULT_SKIPPED: &str = "skipped";
/// Result state of a test case that failed.
pub const TEST_CASE_RESULT_FAILED: &str = "failed";

/// Errors raised while decoding a claim document.
#[derive(Debug, thiserror::Error)]
pub enum ClaimError {
    /// The document is not valid JSON or does not match the claim layout.
    #[error("invalid claim document: {0}")]
    Json(#[from] serde_json::Error),
}

/// Top-level claim document: `{"claim": {...}}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClaimFile {
    /// The claim body.
    #[serde(deserialize_with = "null_as_default")]
    pub claim: Claim,
}

/// Body of a claim document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Claim {
    /// Suite configuration and abnormal cluster events.
    #[serde(deserialize_with = "null_as_default")]
    pub configurations: Configurations,
    /// Cluster node information gathered during the run.
    #[serde(deserialize_with = "null_as_default")]
    pub nodes: Nodes,
    /// Test case results keyed by test case name.
    #[serde(deserialize_with = "null_as_default")]
    pub results: TestSuiteResults,
    /// Tool and platform versions.
    #[serde(deserialize_with = "null_as_default")]
    pub versions: Versions,
}

/// Test case results keyed by test case name.
pub type TestSuiteResults = BTreeMap<String, TestCaseResult>;

/// Tool and platform versions recorded in a claim.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Versions {
    /// Claim format version, e.g. `v0.5.0`.
    #[serde(deserialize_with = "null_as_default")]
    pub claim_format: String,
    /// Kubernetes version.
    #[serde(skip_serializing_if = "String::is_empty")]
    #[serde(deserialize_with = "null_as_default")]
    pub k8s: String,
    /// `oc` client version.
    #[serde(skip_serializing_if = "String::is_empty")]
    #[serde(deserialize_with = "null_as_default")]
    pub oc_client: String,
    /// OpenShift version.
    #[serde(skip_serializing_if = "String::is_empty")]
    #[serde(deserialize_with = "null_as_default")]
    pub ocp: String,
    /// Certification suite version.
    #[serde(deserialize_with = "null_as_default")]
    pub cert_suite: String,
    /// Git commit the certification suite was built from.
    #[serde(deserialize_with = "null_as_default")]
    pub cert_suite_git_commit: String,
}

/// Suite configuration section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Configurations {
    /// The suite configuration, as an untyped tree.
    #[serde(rename = "Config")]
    pub config: Value,
    /// Abnormal cluster events captured during the run.
    #[serde(rename = "AbnormalEvents", deserialize_with = "null_as_default")]
    pub abnormal_events: Vec<Value>,
    /// Operators under test.
    #[serde(rename = "testOperators", deserialize_with = "null_as_default")]
    pub test_operators: Vec<TestOperator>,
}

/// An operator exercised by the run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TestOperator {
    /// Operator name.
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    /// Namespace the operator runs in.
    #[serde(deserialize_with = "null_as_default")]
    pub namespace: String,
    /// Operator version.
    #[serde(deserialize_with = "null_as_default")]
    pub version: String,
}

/// Cluster node information. Every section is kept untyped.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Nodes {
    /// Per-node summary (labels, annotations, status, ...).
    #[serde(rename = "nodeSummary")]
    pub nodes_summary: Value,
    /// CNI plugin configuration per node.
    #[serde(rename = "cniPlugins")]
    pub cni_networks: Value,
    /// Hardware inventory per node.
    #[serde(rename = "nodesHwInfo")]
    pub nodes_hw_info: Value,
    /// CSI driver information.
    #[serde(rename = "csiDriver")]
    pub csi_driver: Value,
}

/// Identity of a test case.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TestCaseId {
    /// Unique test case identifier, e.g. `access-control-sys-admin-capability-check`.
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    /// Suite the test case belongs to.
    #[serde(deserialize_with = "null_as_default")]
    pub suite: String,
    /// Comma-separated tags.
    #[serde(deserialize_with = "null_as_default")]
    pub tags: String,
}

/// Catalog metadata attached to a test case result.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CatalogInfo {
    /// Link to the best practice the test enforces.
    #[serde(deserialize_with = "null_as_default")]
    pub best_practice_reference: String,
    /// What the test checks.
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    /// How to request an exception.
    #[serde(deserialize_with = "null_as_default")]
    pub exception_process: String,
    /// How to fix a failure.
    #[serde(deserialize_with = "null_as_default")]
    pub remediation: String,
}

/// Outcome of one test case.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TestCaseResult {
    /// Output captured while the test ran.
    #[serde(deserialize_with = "null_as_default")]
    pub captured_test_output: String,
    /// Catalog metadata.
    #[serde(deserialize_with = "null_as_default")]
    pub catalog_info: CatalogInfo,
    /// Category per scenario (e.g. `Telco: Mandatory`).
    #[serde(deserialize_with = "null_as_default")]
    pub category_classification: BTreeMap<String, String>,
    /// Run time in seconds.
    #[serde(deserialize_with = "null_as_default")]
    pub duration: i64,
    /// End timestamp.
    #[serde(deserialize_with = "null_as_default")]
    pub end_time: String,
    /// Source line of the failure, if any.
    #[serde(deserialize_with = "null_as_default")]
    pub failure_line_content: String,
    /// Source location of the failure, if any.
    #[serde(deserialize_with = "null_as_default")]
    pub failure_location: String,
    /// Why the test was skipped, if it was.
    #[serde(deserialize_with = "null_as_default")]
    pub skip_reason: String,
    /// Compliant/non-compliant object report.
    #[serde(deserialize_with = "null_as_default")]
    pub check_details: String,
    /// Start timestamp.
    #[serde(deserialize_with = "null_as_default")]
    pub start_time: String,
    /// One of `passed`, `skipped`, `failed` (other values are possible).
    #[serde(deserialize_with = "null_as_default")]
    pub state: String,
    /// Test case identity.
    #[serde(rename = "testID", deserialize_with = "null_as_default")]
    pub test_id: TestCaseId,
}

/// Decodes `T`, mapping an explicit `null` to `T::default()`.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Decodes a claim document from JSON text.
///
/// # Errors
///
/// Returns [`ClaimError::Json`] if `text` is not valid JSON or a known field
/// has the wrong type.
pub fn parse_claim(text: &str) -> Result<ClaimFile, ClaimError> {
    let claim_file = serde_json::from_str::<Option<ClaimFile>>(text)?.unwrap_or_default();
    tracing::debug!(
        results = claim_file.claim.results.len(),
        claim_format = %claim_file.claim.versions.claim_format,
        "decoded claim document"
    );
    Ok(claim_file)
}

//! Report assemblers: each one picks a section of two claim files, runs the
//! diff engine over it and renders a titled report.
//!
//! [`compare_claims`] runs all of them in the order the CLI prints them.
pub mod configurations;
pub mod nodes;
pub mod testcases;
pub mod versions;

use std::fmt;

use serde::Serialize;

use crate::claim::ClaimFile;

pub use configurations::{AbnormalEventsCount, ConfigurationsReport};
pub use nodes::NodesReport;
pub use testcases::{ResultsSummary, TestCaseDifference, TestCasesReport};
pub use versions::VersionsReport;

/// Which side of a comparison a report error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClaimSide {
    /// The first claim file.
    Claim1,
    /// The second claim file.
    Claim2,
}

impl fmt::Display for ClaimSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Claim1 => f.write_str("claim 1"),
            Self::Claim2 => f.write_str("claim 2"),
        }
    }
}

/// Errors raised while assembling a report.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// The versions section could not be converted into a generic tree.
    #[error("failed to convert versions of {claim} into a generic tree: {detail}")]
    Versions {
        /// The claim whose versions failed to convert.
        claim: ClaimSide,
        /// Serializer message.
        detail: String,
    },
}

/// All four reports for a pair of claim files.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimComparison {
    /// Tool and platform versions.
    pub versions: VersionsReport,
    /// Test case result summaries and per-test differences.
    pub test_cases: TestCasesReport,
    /// Suite configuration differences.
    pub configurations: ConfigurationsReport,
    /// Cluster node differences.
    pub nodes: NodesReport,
}

/// Compares two claim files section by section.
///
/// # Errors
///
/// Returns [`ReportError::Versions`] if either versions section cannot be
/// converted into a generic tree.
pub fn compare_claims(
    claim1: &ClaimFile,
    claim2: &ClaimFile,
) -> Result<ClaimComparison, ReportError> {
    let (c1, c2) = (&claim1.claim, &claim2.claim);

    let versions = versions::compare(&c1.versions, &c2.versions)?;
    let test_cases = testcases::diff_report(&c1.results, &c2.results);
    let configurations = configurations::diff_report(&c1.configurations, &c2.configurations);
    let nodes = nodes::diff_report(&c1.nodes, &c2.nodes);

    tracing::debug!(
        versions = versions.differences.len(),
        test_cases = test_cases.different_test_cases_results,
        configurations = configurations.config.len(),
        nodes = nodes.nodes.len(),
        cnis = nodes.cni.len(),
        csis = nodes.csi.len(),
        hardware = nodes.hardware.len(),
        "compared claim files"
    );

    Ok(ClaimComparison {
        versions,
        test_cases,
        configurations,
        nodes,
    })
}

/// The full human-readable comparison. The versions, test case and
/// configuration reports are each followed by a blank line; the nodes report
/// already ends with one.
impl fmt::Display for ClaimComparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.versions)?;
        writeln!(f, "{}", self.test_cases)?;
        writeln!(f, "{}", self.configurations)?;
        write!(f, "{}", self.nodes)
    }
}

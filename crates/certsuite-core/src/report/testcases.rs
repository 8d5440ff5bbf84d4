//! Test case results report: per-status counts and the test cases whose
//! result differs between the two runs.
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::Serialize;

use crate::claim::{
    TEST_CASE_RESULT_FAILED, TEST_CASE_RESULT_PASSED, TEST_CASE_RESULT_SKIPPED, TestSuiteResults,
};
use crate::diff::NO_DIFFS;

/// Result shown for a test case that one of the claims does not contain.
pub const TEST_CASE_RESULT_NOT_FOUND: &str = "not found";

/// Count of test cases per result state.
///
/// States other than passed, skipped and failed are not counted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ResultsSummary {
    /// Passed test cases.
    pub passed: usize,
    /// Skipped test cases.
    pub skipped: usize,
    /// Failed test cases.
    pub failed: usize,
}

/// A test case whose result differs between the claims, or that is missing
/// from one of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TestCaseDifference {
    /// Test case identifier.
    #[serde(rename = "Name")]
    pub name: String,
    /// Result in claim 1, or [`TEST_CASE_RESULT_NOT_FOUND`].
    #[serde(rename = "Claim1Result")]
    pub claim1_result: String,
    /// Result in claim 2, or [`TEST_CASE_RESULT_NOT_FOUND`].
    #[serde(rename = "Claim2Result")]
    pub claim2_result: String,
}

/// Test case results comparison.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TestCasesReport {
    /// Per-status counts for claim 1.
    #[serde(rename = "claimFile1ResultsSummary")]
    pub claim1_summary: ResultsSummary,
    /// Per-status counts for claim 2.
    #[serde(rename = "claimFile2ResultsSummary")]
    pub claim2_summary: ResultsSummary,
    /// Differing test cases, sorted by identifier.
    #[serde(rename = "resultsDifferences")]
    pub test_cases: Vec<TestCaseDifference>,
    /// Number of entries in `test_cases`.
    #[serde(rename = "differentTestCasesResults")]
    pub different_test_cases_results: usize,
}

/// Maps each test case identifier to its result state. Results sharing an
/// identifier collapse to one entry.
fn results_by_id(results: &TestSuiteResults) -> BTreeMap<&str, &str> {
    results
        .values()
        .map(|result| (result.test_id.id.as_str(), result.state.as_str()))
        .collect()
}

fn summarize(results: &BTreeMap<&str, &str>) -> ResultsSummary {
    let mut summary = ResultsSummary::default();
    for state in results.values() {
        match *state {
            TEST_CASE_RESULT_PASSED => summary.passed += 1,
            TEST_CASE_RESULT_SKIPPED => summary.skipped += 1,
            TEST_CASE_RESULT_FAILED => summary.failed += 1,
            _ => {}
        }
    }
    summary
}

/// Compares the test case results of two claims.
pub fn diff_report(claim1: &TestSuiteResults, claim2: &TestSuiteResults) -> TestCasesReport {
    let results1 = results_by_id(claim1);
    let results2 = results_by_id(claim2);

    let names: BTreeSet<&str> = results1.keys().chain(results2.keys()).copied().collect();

    let mut test_cases = Vec::new();
    for name in names {
        let claim1_result = results1
            .get(name)
            .copied()
            .unwrap_or(TEST_CASE_RESULT_NOT_FOUND);
        let claim2_result = results2
            .get(name)
            .copied()
            .unwrap_or(TEST_CASE_RESULT_NOT_FOUND);

        if claim1_result == claim2_result && claim1_result != TEST_CASE_RESULT_NOT_FOUND {
            continue;
        }

        test_cases.push(TestCaseDifference {
            name: name.to_owned(),
            claim1_result: claim1_result.to_owned(),
            claim2_result: claim2_result.to_owned(),
        });
    }

    TestCasesReport {
        claim1_summary: summarize(&results1),
        claim2_summary: summarize(&results2),
        different_test_cases_results: test_cases.len(),
        test_cases,
    }
}

impl fmt::Display for TestCasesReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "RESULTS SUMMARY")?;
        writeln!(f, "---------------")?;
        let rows = [
            ("STATUS", "# in CLAIM-1".to_owned(), "# in CLAIM-2".to_owned()),
            (
                TEST_CASE_RESULT_PASSED,
                self.claim1_summary.passed.to_string(),
                self.claim2_summary.passed.to_string(),
            ),
            (
                TEST_CASE_RESULT_SKIPPED,
                self.claim1_summary.skipped.to_string(),
                self.claim2_summary.skipped.to_string(),
            ),
            (
                TEST_CASE_RESULT_FAILED,
                self.claim1_summary.failed.to_string(),
                self.claim2_summary.failed.to_string(),
            ),
        ];
        for (status, claim1, claim2) in &rows {
            writeln!(f, "{status:<15}{claim1:<20}{claim2}")?;
        }
        writeln!(f)?;

        writeln!(f, "RESULTS DIFFERENCES")?;
        writeln!(f, "-------------------")?;
        if self.test_cases.is_empty() {
            return writeln!(f, "{NO_DIFFS}");
        }

        writeln!(f, "{:<60}{:<10}{}", "TEST CASE NAME", "CLAIM-1", "CLAIM-2")?;
        for diff in &self.test_cases {
            writeln!(
                f,
                "{:<60}{:<10}{}",
                diff.name, diff.claim1_result, diff.claim2_result
            )?;
        }
        Ok(())
    }
}

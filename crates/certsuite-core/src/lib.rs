#![deny(clippy::print_stdout, clippy::print_stderr)]

pub mod claim;
pub mod diff;
pub mod report;
pub mod value;

pub use claim::{
    Claim, ClaimError, ClaimFile, Configurations, Nodes, TEST_CASE_RESULT_FAILED,
    TEST_CASE_RESULT_PASSED, TEST_CASE_RESULT_SKIPPED, TestCaseResult, TestSuiteResults, Versions,
    parse_claim,
};
pub use diff::{Diffs, FieldDiff, compare, traverse};
pub use report::{ClaimComparison, ReportError, compare_claims};
pub use value::{Map, Value};

/// Returns the library version string.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

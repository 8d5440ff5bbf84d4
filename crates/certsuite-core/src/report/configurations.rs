//! Configurations report: suite configuration differences and abnormal
//! event counts.
use std::fmt;

use serde::Serialize;

use crate::claim::Configurations;
use crate::diff::{Diffs, compare};

/// Number of abnormal cluster events recorded by each claim.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct AbnormalEventsCount {
    /// Events in claim 1.
    pub claim1: usize,
    /// Events in claim 2.
    pub claim2: usize,
}

impl fmt::Display for AbnormalEventsCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Cluster abnormal events count")?;
        writeln!(f, "{:<12}{}", "CLAIM 1", "CLAIM 2")?;
        writeln!(f, "{:<12}{}", self.claim1, self.claim2)
    }
}

/// Differences between the configurations sections of two claims.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConfigurationsReport {
    /// Differences in the suite configuration tree.
    #[serde(rename = "CertSuiteConfig")]
    pub config: Diffs,
    /// Abnormal event counts per claim.
    #[serde(rename = "abnormalEventsCount")]
    pub abnormal_events: AbnormalEventsCount,
}

impl fmt::Display for ConfigurationsReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "CONFIGURATIONS")?;
        writeln!(f, "--------------")?;
        writeln!(f)?;
        write!(f, "{}", self.config)?;
        writeln!(f)?;
        write!(f, "{}", self.abnormal_events)
    }
}

/// Compares the suite configuration trees and counts abnormal events.
pub fn diff_report(claim1: &Configurations, claim2: &Configurations) -> ConfigurationsReport {
    ConfigurationsReport {
        config: compare("Cert Suite Configuration", &claim1.config, &claim2.config, &[]),
        abnormal_events: AbnormalEventsCount {
            claim1: claim1.abnormal_events.len(),
            claim2: claim2.abnormal_events.len(),
        },
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use super::*;
    use crate::diff::FieldDiff;
    use crate::value::Value;

    fn configurations(config: &str, events: &[&str]) -> Configurations {
        Configurations {
            config: serde_json::from_str(config).expect("config JSON"),
            abnormal_events: events.iter().map(|e| Value::from(*e)).collect(),
            ..Configurations::default()
        }
    }

    #[test]
    fn empty_configurations() {
        let report = diff_report(&Configurations::default(), &Configurations::default());
        assert_eq!(report.config, Diffs::new("Cert Suite Configuration"));
        assert_eq!(report.abnormal_events, AbnormalEventsCount::default());

        let expected = "\
CONFIGURATIONS
--------------

Cert Suite Configuration: Differences
FIELD     CLAIM 1     CLAIM 2
<none>

Cert Suite Configuration: Only in CLAIM 1
<none>

Cert Suite Configuration: Only in CLAIM 2
<none>

Cluster abnormal events count
CLAIM 1     CLAIM 2
0           0
";
        assert_eq!(report.to_string(), expected);
    }

    #[test]
    fn same_config_with_two_events() {
        let c = configurations(r#"{"field1": "value1"}"#, &["event1", "event2"]);
        let report = diff_report(&c, &c);
        assert!(report.config.is_empty());
        assert_eq!(
            report.abnormal_events,
            AbnormalEventsCount {
                claim1: 2,
                claim2: 2
            }
        );
        assert!(report.to_string().ends_with("CLAIM 1     CLAIM 2\n2           2\n"));
    }

    #[test]
    fn different_configs() {
        let c1 = configurations(r#"{"field1": "value1"}"#, &["event1"]);
        let c2 = configurations(
            r#"{"field1": "value11", "field2": {"subfield1": 58}}"#,
            &["event1", "event2"],
        );
        let report = diff_report(&c1, &c2);
        assert_eq!(
            report.config,
            Diffs {
                fields: vec![FieldDiff::new("/field1", "value1", "value11")],
                fields_in_claim2_only: vec!["/field2/subfield1=58".to_owned()],
                ..Diffs::new("Cert Suite Configuration")
            }
        );

        let expected = "\
CONFIGURATIONS
--------------

Cert Suite Configuration: Differences
FIELD       CLAIM 1     CLAIM 2
/field1     value1      value11

Cert Suite Configuration: Only in CLAIM 1
<none>

Cert Suite Configuration: Only in CLAIM 2
/field2/subfield1=58

Cluster abnormal events count
CLAIM 1     CLAIM 2
1           2
";
        assert_eq!(report.to_string(), expected);
    }

    #[test]
    fn serializes_with_report_keys() {
        let report = diff_report(
            &configurations("{}", &["e"]),
            &configurations("{}", &[]),
        );
        let value = serde_json::to_value(&report).expect("serialize");
        assert_eq!(value["CertSuiteConfig"]["Name"], "Cert Suite Configuration");
        assert_eq!(
            value["abnormalEventsCount"],
            serde_json::json!({"claim1": 1, "claim2": 0})
        );
    }
}

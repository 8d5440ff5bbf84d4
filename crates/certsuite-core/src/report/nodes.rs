//! Cluster nodes report: node summaries, CNI plugins, CSI drivers and
//! hardware inventories compared independently.
use std::fmt;

use serde::Serialize;

use crate::claim::Nodes;
use crate::diff::{Diffs, compare};

/// Node summary subtrees kept when comparing node summaries. Everything else
/// in a summary (status, conditions, timestamps) changes from run to run.
const NODE_SUMMARY_FILTERS: [&str; 2] = ["labels", "annotations"];

/// Differences between the nodes sections of two claims.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodesReport {
    /// Node labels and annotations.
    pub nodes: Diffs,
    /// CNI plugin configuration.
    #[serde(rename = "CNI")]
    pub cni: Diffs,
    /// CSI driver information.
    #[serde(rename = "CSI")]
    pub csi: Diffs,
    /// Hardware inventory.
    pub hardware: Diffs,
}

impl fmt::Display for NodesReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "CLUSTER NODES DIFFERENCES")?;
        writeln!(f, "-------------------------")?;
        writeln!(f)?;
        for diffs in [&self.nodes, &self.cni, &self.csi, &self.hardware] {
            writeln!(f, "{diffs}")?;
        }
        Ok(())
    }
}

/// Compares the four node sections.
pub fn diff_report(claim1: &Nodes, claim2: &Nodes) -> NodesReport {
    let summary_filters: Vec<String> = NODE_SUMMARY_FILTERS
        .iter()
        .map(|f| (*f).to_owned())
        .collect();
    NodesReport {
        nodes: compare(
            "Nodes",
            &claim1.nodes_summary,
            &claim2.nodes_summary,
            &summary_filters,
        ),
        cni: compare("CNIs", &claim1.cni_networks, &claim2.cni_networks, &[]),
        csi: compare("CSIs", &claim1.csi_driver, &claim2.csi_driver, &[]),
        hardware: compare("Hardware", &claim1.nodes_hw_info, &claim2.nodes_hw_info, &[]),
    }
}

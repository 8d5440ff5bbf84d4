use std::fmt;

use super::types::Diffs;

/// Placeholder written for an empty section.
pub(crate) const NO_DIFFS: &str = "<none>";

/// Extra spaces appended to the widest cell of a padded column.
const COLUMNS_GAP_SIZE: usize = 5;

const FIELD_HEADER: &str = "FIELD";
const CLAIM1_HEADER: &str = "CLAIM 1";
const CLAIM2_HEADER: &str = "CLAIM 2";

/// Renders the three-section table:
///
/// ```text
/// CNIs: Differences
/// FIELD                           CLAIM 1      CLAIM 2
/// /clus0-0/0/cniVersion           1.0.0        1.0.1
///
/// CNIs: Only in CLAIM 1
/// <none>
///
/// CNIs: Only in CLAIM 2
/// /clus0-1/0/plugins/0/newFakeFlag=true
/// ```
///
/// The first two columns are sized from this instance's own rows; two
/// [`Diffs`] rendered one after the other are not aligned with each other.
impl fmt::Display for Diffs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let claim1_values: Vec<String> = self
            .fields
            .iter()
            .map(|diff| diff.claim1_value.to_string())
            .collect();

        let field_width = self
            .fields
            .iter()
            .map(|diff| diff.field_path.len())
            .fold(FIELD_HEADER.len(), usize::max)
            + COLUMNS_GAP_SIZE;
        let claim1_width = claim1_values
            .iter()
            .map(String::len)
            .fold(CLAIM1_HEADER.len(), usize::max)
            + COLUMNS_GAP_SIZE;

        writeln!(f, "{}: Differences", self.name)?;
        writeln!(
            f,
            "{FIELD_HEADER:<field_width$}{CLAIM1_HEADER:<claim1_width$}{CLAIM2_HEADER}"
        )?;
        if self.fields.is_empty() {
            writeln!(f, "{NO_DIFFS}")?;
        }
        for (diff, claim1_value) in self.fields.iter().zip(&claim1_values) {
            writeln!(
                f,
                "{:<field_width$}{:<claim1_width$}{}",
                diff.field_path, claim1_value, diff.claim2_value
            )?;
        }

        writeln!(f)?;
        write_only_in(f, &self.name, CLAIM1_HEADER, &self.fields_in_claim1_only)?;
        writeln!(f)?;
        write_only_in(f, &self.name, CLAIM2_HEADER, &self.fields_in_claim2_only)
    }
}

fn write_only_in(
    f: &mut fmt::Formatter<'_>,
    name: &str,
    claim: &str,
    entries: &[String],
) -> fmt::Result {
    writeln!(f, "{name}: Only in {claim}")?;
    if entries.is_empty() {
        return writeln!(f, "{NO_DIFFS}");
    }
    for entry in entries {
        writeln!(f, "{entry}")?;
    }
    Ok(())
}

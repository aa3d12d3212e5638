use crate::domain::models::CoverageSummary;
use std::path::Path;

/// Pull the totals block out of a coverage.py JSON report.
pub fn read_coverage_totals(path: &Path) -> anyhow::Result<CoverageSummary> {
    let raw = std::fs::read_to_string(path)?;
    let v: serde_json::Value = serde_json::from_str(&raw)?;
    let totals = v
        .get("totals")
        .ok_or_else(|| anyhow::anyhow!("no totals in {}", path.display()))?;

    Ok(CoverageSummary {
        percent_covered: totals
            .get("percent_covered")
            .and_then(|x| x.as_f64())
            .unwrap_or(0.0),
        covered_lines: totals
            .get("covered_lines")
            .and_then(|x| x.as_u64())
            .unwrap_or(0),
        num_statements: totals
            .get("num_statements")
            .and_then(|x| x.as_u64())
            .unwrap_or(0),
    })
}

pub mod csv;
pub mod json;
pub mod table;

use crate::types::record::ContractSummary;

pub fn summary_text(summary: &ContractSummary) -> String {
    let mut output = String::new();
    output.push_str("Contract Summary\n");
    output.push_str(&format!(
        "  Weighted Shock Index: {:.4}\n",
        summary.weighted_shock_index
    ));
    output.push_str(&format!(
        "  Mean Shock Index:     {:.4}\n",
        summary.mean_shock_index
    ));
    output.push_str(&format!(
        "  Max Shock Index:      {:.4}\n",
        summary.max_shock_index
    ));
    output.push_str(&format!(
        "  Measure Count:        {}\n",
        summary.measure_count
    ));
    output.push_str(&format!("  Risk Tier:            {}\n", summary.risk_tier));
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::scoring::RiskTier;

    #[test]
    fn summary_text_contains_all_lines() {
        let summary = ContractSummary {
            weighted_shock_index: 0.4261,
            mean_shock_index: 0.4389,
            max_shock_index: 0.4952,
            measure_count: 3,
            risk_tier: RiskTier::Moderate,
        };

        let rendered = summary_text(&summary);
        assert!(rendered.contains("Contract Summary"));
        assert!(rendered.contains("Weighted Shock Index: 0.4261"));
        assert!(rendered.contains("Measure Count:        3"));
        assert!(rendered.contains("Risk Tier:            moderate"));
    }
}

use serde_json::json;

use crate::types::record::ContractSummary;
use crate::types::scoring::{RiskTier, Score};

fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}

pub fn single_to_json(shock_index: Score, risk_tier: RiskTier) -> Result<String, serde_json::Error> {
    serde_json::to_string(&json!({
        "shock_index": round4(shock_index),
        "risk_tier": risk_tier,
    }))
}

pub fn summary_to_json(summary: &ContractSummary) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(summary)
}

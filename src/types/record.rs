use serde::Serialize;

use crate::types::scoring::{RiskTier, Score};

/// One quality measure as reported by an NCQA ECDS results file.
#[derive(Debug, Clone)]
pub struct MeasureRecord {
    pub measure_id: String,
    pub completeness_rate: Score,
    pub mapping_coverage: Score,
    pub variance_ratio: Score,
    pub cutpoint_shift: Score,
}

/// One measure weight as reported by a CMS Stars definitions file.
#[derive(Debug, Clone)]
pub struct WeightRecord {
    pub measure_id: String,
    pub measure_name: Option<String>,
    pub measure_weight: u32,
}

/// Inner join of a [`MeasureRecord`] with its [`WeightRecord`].
#[derive(Debug, Clone)]
pub struct MergedRecord {
    pub measure_id: String,
    pub measure_name: Option<String>,
    pub completeness_rate: Score,
    pub mapping_coverage: Score,
    pub variance_ratio: Score,
    pub cutpoint_shift: Score,
    pub measure_weight: u32,
}

/// A merged record with its factor scores, composite index, and tier.
#[derive(Debug, Clone, Serialize)]
pub struct ScoredRecord {
    pub measure_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub measure_name: Option<String>,
    pub completeness_rate: Score,
    pub mapping_coverage: Score,
    pub variance_ratio: Score,
    pub cutpoint_shift: Score,
    pub measure_weight: u32,
    pub ccs: Score,
    pub eav: Score,
    pub cpr: Score,
    pub wm: Score,
    pub shock_index: Score,
    pub risk_tier: RiskTier,
}

/// Contract-level reduction of a scored batch.
#[derive(Debug, Clone, Serialize)]
pub struct ContractSummary {
    pub weighted_shock_index: Score,
    pub mean_shock_index: Score,
    pub max_shock_index: Score,
    pub measure_count: usize,
    pub risk_tier: RiskTier,
}

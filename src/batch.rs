use tracing::debug;

use crate::error::{Result, ShockError};
use crate::score::calculator::ShockIndexCalculator;
use crate::score::factors::{ccs_score, cpr_score, eav_score, wm_score, NormalizationParams};
use crate::score::tier::classify_risk;
use crate::types::record::{ContractSummary, MergedRecord, ScoredRecord};

/// Scores every merged record, preserving input order. Each row is
/// scored independently with no cross-row state.
pub fn score_records(
    merged: &[MergedRecord],
    calculator: &ShockIndexCalculator,
    params: &NormalizationParams,
) -> Result<Vec<ScoredRecord>> {
    merged
        .iter()
        .map(|record| score_record(record, calculator, params))
        .collect()
}

fn score_record(
    record: &MergedRecord,
    calculator: &ShockIndexCalculator,
    params: &NormalizationParams,
) -> Result<ScoredRecord> {
    let ccs = ccs_score(record.completeness_rate, record.mapping_coverage)?;
    let eav = eav_score(record.variance_ratio, params.eav_scale)?;
    let cpr = cpr_score(record.cutpoint_shift, params.max_shift)?;
    let wm = wm_score(f64::from(record.measure_weight), params.max_weight)?;
    let shock_index = calculator.calculate(ccs, eav, cpr, wm)?;
    let risk_tier = classify_risk(shock_index)?;

    debug!(
        measure_id = %record.measure_id,
        shock_index,
        tier = %risk_tier,
        "scored measure"
    );
    Ok(ScoredRecord {
        measure_id: record.measure_id.clone(),
        measure_name: record.measure_name.clone(),
        completeness_rate: record.completeness_rate,
        mapping_coverage: record.mapping_coverage,
        variance_ratio: record.variance_ratio,
        cutpoint_shift: record.cutpoint_shift,
        measure_weight: record.measure_weight,
        ccs,
        eav,
        cpr,
        wm,
        shock_index,
        risk_tier,
    })
}

/// Reduces a scored batch to the contract-level summary. The weighted
/// mean uses each row's Stars measure weight.
pub fn aggregate_contract(scored: &[ScoredRecord]) -> Result<ContractSummary> {
    if scored.is_empty() {
        return Err(ShockError::EmptyInput(
            "cannot aggregate an empty scored table".to_string(),
        ));
    }

    let total_weight: f64 = scored
        .iter()
        .map(|record| f64::from(record.measure_weight))
        .sum();
    let weighted_shock_index = if total_weight > 0.0 {
        scored
            .iter()
            .map(|record| record.shock_index * f64::from(record.measure_weight))
            .sum::<f64>()
            / total_weight
    } else {
        0.0
    };
    let mean_shock_index =
        scored.iter().map(|record| record.shock_index).sum::<f64>() / scored.len() as f64;
    let max_shock_index = scored
        .iter()
        .map(|record| record.shock_index)
        .fold(0.0, f64::max);
    // Row indexes are bounded, so clamping only trims float noise
    // before classification.
    let risk_tier = classify_risk(weighted_shock_index.clamp(0.0, 1.0))?;

    Ok(ContractSummary {
        weighted_shock_index,
        mean_shock_index,
        max_shock_index,
        measure_count: scored.len(),
        risk_tier,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::scoring::RiskTier;

    fn merged(id: &str, cr: f64, mc: f64, vr: f64, shift: f64, weight: u32) -> MergedRecord {
        MergedRecord {
            measure_id: id.to_string(),
            measure_name: None,
            completeness_rate: cr,
            mapping_coverage: mc,
            variance_ratio: vr,
            cutpoint_shift: shift,
            measure_weight: weight,
        }
    }

    /// Three-measure contract whose summary matches the documented
    /// example batch.
    fn example_contract() -> Vec<MergedRecord> {
        vec![
            merged("COL", 0.88, 0.92, 1.1046, 0.10, 1),
            merged("BCS", 0.79, 0.85, 1.0246, 0.16, 1),
            merged("A1C", 0.72, 0.78, 1.0046, 0.05, 3),
        ]
    }

    #[test]
    fn scoring_preserves_row_order_and_bounds() {
        let calc = ShockIndexCalculator::default();
        let scored = score_records(&example_contract(), &calc, &NormalizationParams::default())
            .expect("batch should score");

        let ids: Vec<&str> = scored.iter().map(|r| r.measure_id.as_str()).collect();
        assert_eq!(ids, vec!["COL", "BCS", "A1C"]);
        for record in &scored {
            for value in [record.ccs, record.eav, record.cpr, record.wm, record.shock_index] {
                assert!((0.0..=1.0).contains(&value), "score out of bounds: {value}");
            }
        }
    }

    #[test]
    fn round_trip_reproduces_documented_summary() {
        let calc = ShockIndexCalculator::default();
        let scored = score_records(&example_contract(), &calc, &NormalizationParams::default())
            .expect("batch should score");
        let summary = aggregate_contract(&scored).expect("batch is non-empty");

        assert!((summary.weighted_shock_index - 0.4261).abs() < 5e-4);
        assert!((summary.mean_shock_index - 0.4389).abs() < 5e-4);
        assert!((summary.max_shock_index - 0.4952).abs() < 5e-4);
        assert_eq!(summary.measure_count, 3);
        assert_eq!(summary.risk_tier, RiskTier::Moderate);
    }

    #[test]
    fn max_is_never_below_mean() {
        let calc = ShockIndexCalculator::default();
        let scored = score_records(&example_contract(), &calc, &NormalizationParams::default())
            .expect("batch should score");
        let summary = aggregate_contract(&scored).expect("batch is non-empty");
        assert!(summary.max_shock_index >= summary.mean_shock_index);
    }

    #[test]
    fn custom_normalization_params_flow_through() {
        let calc = ShockIndexCalculator::default();
        let params = NormalizationParams {
            max_shift: 1.0,
            max_weight: 3.0,
            ..NormalizationParams::default()
        };
        let scored =
            score_records(&example_contract(), &calc, &params).expect("batch should score");
        assert!((scored[0].cpr - 0.10).abs() < 1e-9);
        assert!((scored[2].wm - 1.0).abs() < 1e-9);
    }

    #[test]
    fn empty_batch_cannot_be_aggregated() {
        let err = aggregate_contract(&[]).expect_err("batch is empty");
        assert!(matches!(err, ShockError::EmptyInput(_)));
    }

    #[test]
    fn zero_total_weight_yields_zero_weighted_index() {
        let calc = ShockIndexCalculator::default();
        let mut scored = score_records(
            &[merged("COL", 0.88, 0.92, 1.1, 0.1, 1)],
            &calc,
            &NormalizationParams::default(),
        )
        .expect("batch should score");
        scored[0].measure_weight = 0;

        let summary = aggregate_contract(&scored).expect("batch is non-empty");
        assert_eq!(summary.weighted_shock_index, 0.0);
    }
}

use std::path::Path;

use crate::error::Result;
use crate::loader::csv::escape_field;
use crate::types::record::ScoredRecord;

const SCORED_HEADER: &str = "measure_id,measure_name,completeness_rate,mapping_coverage,variance_ratio,cutpoint_shift,measure_weight,ccs,eav,cpr,wm,shock_index,risk_tier";

/// Writes the scored table as CSV. Raw input columns keep their
/// loaded precision; computed scores are written with six decimals.
pub fn write_scored_csv(path: &Path, scored: &[ScoredRecord]) -> Result<()> {
    std::fs::write(path, to_csv(scored))?;
    Ok(())
}

pub fn to_csv(scored: &[ScoredRecord]) -> String {
    let mut output = String::from(SCORED_HEADER);
    output.push('\n');
    for record in scored {
        output.push_str(&format!(
            "{},{},{},{},{},{},{},{:.6},{:.6},{:.6},{:.6},{:.6},{}\n",
            escape_field(&record.measure_id),
            escape_field(record.measure_name.as_deref().unwrap_or("")),
            record.completeness_rate,
            record.mapping_coverage,
            record.variance_ratio,
            record.cutpoint_shift,
            record.measure_weight,
            record.ccs,
            record.eav,
            record.cpr,
            record.wm,
            record.shock_index,
            record.risk_tier,
        ));
    }
    output
}

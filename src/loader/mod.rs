pub mod csv;

use std::collections::{HashMap, HashSet};
use std::path::Path;

use tracing::debug;

use crate::error::{Result, ShockError};
use crate::types::record::{MeasureRecord, MergedRecord, WeightRecord};

use self::csv::CsvTable;

const ECDS_COLUMNS: [&str; 5] = [
    "measure_id",
    "completeness_rate",
    "mapping_coverage",
    "variance_ratio",
    "cutpoint_shift",
];
const WEIGHT_COLUMNS: [&str; 2] = ["measure_id", "measure_weight"];

pub const MIN_MEASURE_WEIGHT: u32 = 1;
pub const MAX_MEASURE_WEIGHT: u32 = 5;

/// Result of the inner join, with the per-side counts of rows that had
/// no partner. Unmatched rows are a warning for the caller, not an error.
#[derive(Debug, Clone)]
pub struct MergeOutcome {
    pub records: Vec<MergedRecord>,
    pub unmatched_measures: usize,
    pub unmatched_weights: usize,
}

/// Loads an NCQA ECDS results CSV into validated records.
pub fn load_ncqa_ecds(path: &Path) -> Result<Vec<MeasureRecord>> {
    let table = csv::read_table(path)?;
    let index = require_columns(&table, &ECDS_COLUMNS, path)?;
    let mut problems = Vec::new();
    let mut seen = HashSet::new();
    let mut records = Vec::with_capacity(table.rows.len());

    for (row_no, row) in table.rows.iter().enumerate() {
        let row_no = row_no + 1;
        let measure_id = row[index[0]].clone();
        if measure_id.is_empty() {
            problems.push(format!("row {row_no}: measure_id is empty"));
            continue;
        }
        if !seen.insert(measure_id.clone()) {
            return Err(ShockError::DuplicateKey {
                path: path.display().to_string(),
                key: measure_id,
            });
        }

        let completeness_rate =
            parse_unit_interval(&mut problems, row_no, "completeness_rate", &row[index[1]]);
        let mapping_coverage =
            parse_unit_interval(&mut problems, row_no, "mapping_coverage", &row[index[2]]);
        let variance_ratio =
            parse_non_negative(&mut problems, row_no, "variance_ratio", &row[index[3]]);
        let cutpoint_shift =
            parse_non_negative(&mut problems, row_no, "cutpoint_shift", &row[index[4]]);

        if let (Some(completeness_rate), Some(mapping_coverage), Some(variance_ratio), Some(cutpoint_shift)) =
            (completeness_rate, mapping_coverage, variance_ratio, cutpoint_shift)
        {
            records.push(MeasureRecord {
                measure_id,
                completeness_rate,
                mapping_coverage,
                variance_ratio,
                cutpoint_shift,
            });
        }
    }

    if !problems.is_empty() {
        return Err(ShockError::Schema {
            path: path.display().to_string(),
            detail: problems.join("; "),
        });
    }
    debug!(rows = records.len(), path = %path.display(), "loaded NCQA ECDS results");
    Ok(records)
}

/// Loads a CMS Stars measure weights CSV. `measure_name` is optional;
/// `measure_weight` must be an integer in [1, 5].
pub fn load_cms_measure_weights(path: &Path) -> Result<Vec<WeightRecord>> {
    let table = csv::read_table(path)?;
    let index = require_columns(&table, &WEIGHT_COLUMNS, path)?;
    let name_index = table.column_index("measure_name");
    let mut problems = Vec::new();
    let mut seen = HashSet::new();
    let mut records = Vec::with_capacity(table.rows.len());

    for (row_no, row) in table.rows.iter().enumerate() {
        let row_no = row_no + 1;
        let measure_id = row[index[0]].clone();
        if measure_id.is_empty() {
            problems.push(format!("row {row_no}: measure_id is empty"));
            continue;
        }
        if !seen.insert(measure_id.clone()) {
            return Err(ShockError::DuplicateKey {
                path: path.display().to_string(),
                key: measure_id,
            });
        }

        let raw_weight = &row[index[1]];
        let measure_weight = match raw_weight.parse::<u32>() {
            Ok(weight) if (MIN_MEASURE_WEIGHT..=MAX_MEASURE_WEIGHT).contains(&weight) => {
                Some(weight)
            }
            _ => {
                problems.push(format!(
                    "row {row_no}: measure_weight must be an integer in [{MIN_MEASURE_WEIGHT}, {MAX_MEASURE_WEIGHT}], got '{raw_weight}'"
                ));
                None
            }
        };

        let measure_name = name_index
            .map(|i| row[i].clone())
            .filter(|name| !name.is_empty());

        if let Some(measure_weight) = measure_weight {
            records.push(WeightRecord {
                measure_id,
                measure_name,
                measure_weight,
            });
        }
    }

    if !problems.is_empty() {
        return Err(ShockError::Schema {
            path: path.display().to_string(),
            detail: problems.join("; "),
        });
    }
    debug!(rows = records.len(), path = %path.display(), "loaded CMS measure weights");
    Ok(records)
}

/// Inner join on `measure_id`, preserving the ECDS row order. Rows
/// present on only one side are dropped and counted in the outcome.
pub fn merge_ecds_and_weights(
    measures: &[MeasureRecord],
    weights: &[WeightRecord],
) -> MergeOutcome {
    let by_id: HashMap<&str, &WeightRecord> = weights
        .iter()
        .map(|weight| (weight.measure_id.as_str(), weight))
        .collect();

    let mut records = Vec::with_capacity(measures.len());
    let mut matched_ids = HashSet::new();
    for measure in measures {
        if let Some(weight) = by_id.get(measure.measure_id.as_str()) {
            matched_ids.insert(measure.measure_id.as_str());
            records.push(MergedRecord {
                measure_id: measure.measure_id.clone(),
                measure_name: weight.measure_name.clone(),
                completeness_rate: measure.completeness_rate,
                mapping_coverage: measure.mapping_coverage,
                variance_ratio: measure.variance_ratio,
                cutpoint_shift: measure.cutpoint_shift,
                measure_weight: weight.measure_weight,
            });
        }
    }

    let unmatched_measures = measures.len() - records.len();
    let unmatched_weights = weights
        .iter()
        .filter(|weight| !matched_ids.contains(weight.measure_id.as_str()))
        .count();

    debug!(
        merged = records.len(),
        unmatched_measures, unmatched_weights, "merged ECDS results with measure weights"
    );
    MergeOutcome {
        records,
        unmatched_measures,
        unmatched_weights,
    }
}

fn require_columns(table: &CsvTable, required: &[&str], path: &Path) -> Result<Vec<usize>> {
    let mut index = Vec::with_capacity(required.len());
    let mut missing = Vec::new();
    for column in required {
        match table.column_index(column) {
            Some(i) => index.push(i),
            None => missing.push(*column),
        }
    }
    if !missing.is_empty() {
        return Err(ShockError::Schema {
            path: path.display().to_string(),
            detail: format!("missing required columns: {}", missing.join(", ")),
        });
    }
    Ok(index)
}

fn parse_unit_interval(
    problems: &mut Vec<String>,
    row_no: usize,
    column: &str,
    raw: &str,
) -> Option<f64> {
    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() && (0.0..=1.0).contains(&value) => Some(value),
        _ => {
            problems.push(format!(
                "row {row_no}: {column} must be a number in [0, 1], got '{raw}'"
            ));
            None
        }
    }
}

fn parse_non_negative(
    problems: &mut Vec<String>,
    row_no: usize,
    column: &str,
    raw: &str,
) -> Option<f64> {
    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => Some(value),
        _ => {
            problems.push(format!(
                "row {row_no}: {column} must be a non-negative number, got '{raw}'"
            ));
            None
        }
    }
}

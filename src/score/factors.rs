use crate::error::{Result, ShockError};
use crate::types::config::NormalizationSection;
use crate::types::scoring::Score;

pub const DEFAULT_MAX_SHIFT: f64 = 0.5;
pub const DEFAULT_MAX_WEIGHT: f64 = 5.0;
/// Calibrated so a variance ratio of 1.15 scores 0.575 and the
/// baseline ratio of 1.0 scores 0.
pub const DEFAULT_EAV_SCALE: f64 = 23.0 / 6.0;

/// Normalization parameters shared by a batch run.
#[derive(Debug, Clone, Copy)]
pub struct NormalizationParams {
    pub max_shift: f64,
    pub max_weight: f64,
    pub eav_scale: f64,
}

impl Default for NormalizationParams {
    fn default() -> Self {
        NormalizationParams {
            max_shift: DEFAULT_MAX_SHIFT,
            max_weight: DEFAULT_MAX_WEIGHT,
            eav_scale: DEFAULT_EAV_SCALE,
        }
    }
}

impl From<&NormalizationSection> for NormalizationParams {
    fn from(section: &NormalizationSection) -> Self {
        NormalizationParams {
            max_shift: section.max_shift,
            max_weight: section.max_weight,
            eav_scale: section.eav_scale,
        }
    }
}

fn clamp01(value: f64) -> f64 {
    value.clamp(0.0, 1.0)
}

fn ensure_finite(name: &str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ShockError::InvalidInput(format!(
            "{name} must be finite, got {value}"
        )))
    }
}

/// Clinical Completeness Score: mean of data completeness and
/// coding/mapping coverage, clamped to [0, 1].
pub fn ccs_score(completeness_rate: f64, mapping_coverage: f64) -> Result<Score> {
    ensure_finite("completeness_rate", completeness_rate)?;
    ensure_finite("mapping_coverage", mapping_coverage)?;
    if completeness_rate < 0.0 || mapping_coverage < 0.0 {
        return Err(ShockError::InvalidInput(format!(
            "completeness_rate and mapping_coverage must be non-negative, got {completeness_rate} and {mapping_coverage}"
        )));
    }
    Ok(clamp01((completeness_rate + mapping_coverage) / 2.0))
}

/// ECDS Adoption Variability score: scaled absolute deviation of the
/// variance ratio from the 1.0 baseline, capped at 1.
pub fn eav_score(variance_ratio: f64, scale: f64) -> Result<Score> {
    ensure_finite("variance_ratio", variance_ratio)?;
    if variance_ratio < 0.0 {
        return Err(ShockError::InvalidInput(format!(
            "variance_ratio must be non-negative, got {variance_ratio}"
        )));
    }
    if !scale.is_finite() || scale <= 0.0 {
        return Err(ShockError::InvalidInput(format!(
            "eav_scale must be greater than zero, got {scale}"
        )));
    }
    Ok(clamp01((variance_ratio - 1.0).abs() * scale))
}

/// Cutpoint Pressure Risk score: linear in the cutpoint shift, with
/// max_shift mapping to the maximum score of 1.
pub fn cpr_score(cutpoint_shift: f64, max_shift: f64) -> Result<Score> {
    ensure_finite("cutpoint_shift", cutpoint_shift)?;
    if cutpoint_shift < 0.0 {
        return Err(ShockError::InvalidInput(format!(
            "cutpoint_shift must be non-negative, got {cutpoint_shift}"
        )));
    }
    if !max_shift.is_finite() || max_shift <= 0.0 {
        return Err(ShockError::InvalidInput(format!(
            "max_shift must be greater than zero, got {max_shift}"
        )));
    }
    Ok(clamp01(cutpoint_shift / max_shift))
}

/// Weight Multiplier score from the Stars measure weight.
pub fn wm_score(measure_weight: f64, max_weight: f64) -> Result<Score> {
    ensure_finite("measure_weight", measure_weight)?;
    if measure_weight < 0.0 {
        return Err(ShockError::InvalidInput(format!(
            "measure_weight must be non-negative, got {measure_weight}"
        )));
    }
    if !max_weight.is_finite() || max_weight <= 0.0 {
        return Err(ShockError::InvalidInput(format!(
            "max_weight must be greater than zero, got {max_weight}"
        )));
    }
    Ok(clamp01(measure_weight / max_weight))
}

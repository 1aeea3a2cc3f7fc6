use crate::error::{Result, ShockError};
use crate::types::config::WeightsSection;
use crate::types::scoring::Score;

pub const DEFAULT_ALPHA_CCS: f64 = 0.35;
pub const DEFAULT_BETA_EAV: f64 = 0.25;
pub const DEFAULT_GAMMA_CPR: f64 = 0.20;
pub const DEFAULT_DELTA_WM: f64 = 0.20;

const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

/// Validated component weights for the composite index.
///
/// The defaults favor completeness and measure weight while still
/// accounting for variance and cutpoint pressure.
#[derive(Debug, Clone, Copy)]
pub struct IndexWeights {
    pub alpha_ccs: f64,
    pub beta_eav: f64,
    pub gamma_cpr: f64,
    pub delta_wm: f64,
}

impl IndexWeights {
    pub fn new(alpha_ccs: f64, beta_eav: f64, gamma_cpr: f64, delta_wm: f64) -> Result<Self> {
        let weights = [alpha_ccs, beta_eav, gamma_cpr, delta_wm];
        if weights.iter().any(|w| !w.is_finite() || *w < 0.0) {
            return Err(ShockError::InvalidConfig(format!(
                "index weights must be finite and non-negative, got ({alpha_ccs}, {beta_eav}, {gamma_cpr}, {delta_wm})"
            )));
        }
        let total: f64 = weights.iter().sum();
        if (total - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(ShockError::InvalidConfig(format!(
                "index weights must sum to 1.0, got {total}"
            )));
        }
        Ok(IndexWeights {
            alpha_ccs,
            beta_eav,
            gamma_cpr,
            delta_wm,
        })
    }

    pub fn from_section(section: &WeightsSection) -> Result<Self> {
        IndexWeights::new(
            section.alpha_ccs,
            section.beta_eav,
            section.gamma_cpr,
            section.delta_wm,
        )
    }
}

impl Default for IndexWeights {
    fn default() -> Self {
        IndexWeights {
            alpha_ccs: DEFAULT_ALPHA_CCS,
            beta_eav: DEFAULT_BETA_EAV,
            gamma_cpr: DEFAULT_GAMMA_CPR,
            delta_wm: DEFAULT_DELTA_WM,
        }
    }
}

/// Combines normalized factor scores into the composite shock index.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShockIndexCalculator {
    weights: IndexWeights,
}

impl ShockIndexCalculator {
    pub fn new(weights: IndexWeights) -> Self {
        ShockIndexCalculator { weights }
    }

    /// Weighted sum of the four factor scores. Each component must
    /// already be normalized to [0, 1].
    pub fn calculate(&self, ccs: Score, eav: Score, cpr: Score, wm: Score) -> Result<Score> {
        for (name, value) in [("ccs", ccs), ("eav", eav), ("cpr", cpr), ("wm", wm)] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ShockError::InvalidInput(format!(
                    "{name} must be within [0, 1], got {value}"
                )));
            }
        }
        let weighted = self.weights.alpha_ccs * ccs
            + self.weights.beta_eav * eav
            + self.weights.gamma_cpr * cpr
            + self.weights.delta_wm * wm;
        // The weights sum to 1 and inputs are bounded, so this only
        // trims float noise at the edges.
        Ok(weighted.clamp(0.0, 1.0))
    }
}

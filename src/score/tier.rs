use crate::error::{Result, ShockError};
use crate::types::scoring::{RiskTier, Score};

/// Maps a shock index value to its risk tier over half-open intervals:
/// [0, 0.25) low, [0.25, 0.5) moderate, [0.5, 0.75) high, [0.75, 1] critical.
pub fn classify_risk(index: Score) -> Result<RiskTier> {
    if !index.is_finite() || !(0.0..=1.0).contains(&index) {
        return Err(ShockError::InvalidInput(format!(
            "shock index must be within [0, 1], got {index}"
        )));
    }
    let tier = if index < 0.25 {
        RiskTier::Low
    } else if index < 0.50 {
        RiskTier::Moderate
    } else if index < 0.75 {
        RiskTier::High
    } else {
        RiskTier::Critical
    };
    Ok(tier)
}

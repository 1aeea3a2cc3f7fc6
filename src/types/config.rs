use serde::Deserialize;

use crate::score::calculator::{DEFAULT_ALPHA_CCS, DEFAULT_BETA_EAV, DEFAULT_DELTA_WM, DEFAULT_GAMMA_CPR};
use crate::score::factors::{DEFAULT_EAV_SCALE, DEFAULT_MAX_SHIFT, DEFAULT_MAX_WEIGHT};

/// Calibration file schema. Every field falls back to the built-in
/// defaults, so a partial file only overrides what it names.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ShockConfig {
    #[serde(default)]
    pub weights: WeightsSection,
    #[serde(default)]
    pub normalization: NormalizationSection,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeightsSection {
    #[serde(default = "default_alpha_ccs")]
    pub alpha_ccs: f64,
    #[serde(default = "default_beta_eav")]
    pub beta_eav: f64,
    #[serde(default = "default_gamma_cpr")]
    pub gamma_cpr: f64,
    #[serde(default = "default_delta_wm")]
    pub delta_wm: f64,
}

impl Default for WeightsSection {
    fn default() -> Self {
        WeightsSection {
            alpha_ccs: DEFAULT_ALPHA_CCS,
            beta_eav: DEFAULT_BETA_EAV,
            gamma_cpr: DEFAULT_GAMMA_CPR,
            delta_wm: DEFAULT_DELTA_WM,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct NormalizationSection {
    #[serde(default = "default_max_shift")]
    pub max_shift: f64,
    #[serde(default = "default_max_weight")]
    pub max_weight: f64,
    #[serde(default = "default_eav_scale")]
    pub eav_scale: f64,
}

impl Default for NormalizationSection {
    fn default() -> Self {
        NormalizationSection {
            max_shift: DEFAULT_MAX_SHIFT,
            max_weight: DEFAULT_MAX_WEIGHT,
            eav_scale: DEFAULT_EAV_SCALE,
        }
    }
}

fn default_alpha_ccs() -> f64 {
    DEFAULT_ALPHA_CCS
}

fn default_beta_eav() -> f64 {
    DEFAULT_BETA_EAV
}

fn default_gamma_cpr() -> f64 {
    DEFAULT_GAMMA_CPR
}

fn default_delta_wm() -> f64 {
    DEFAULT_DELTA_WM
}

fn default_max_shift() -> f64 {
    DEFAULT_MAX_SHIFT
}

fn default_max_weight() -> f64 {
    DEFAULT_MAX_WEIGHT
}

fn default_eav_scale() -> f64 {
    DEFAULT_EAV_SCALE
}

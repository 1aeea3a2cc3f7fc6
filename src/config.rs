use std::path::Path;

use crate::error::{Result, ShockError};
use crate::types::config::ShockConfig;

/// Loads the optional calibration file. With no path the built-in
/// defaults apply; a partial file only overrides the fields it names.
pub fn load_config(path: Option<&Path>) -> Result<ShockConfig> {
    let Some(path) = path else {
        return Ok(ShockConfig::default());
    };
    let content = std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ShockError::FileNotFound(path.display().to_string())
        } else {
            ShockError::Io(e)
        }
    })?;
    toml::from_str(&content)
        .map_err(|e| ShockError::InvalidConfig(format!("{}: {}", path.display(), e)))
}

//! JSON runtime configuration for the demo binary.
use crate::detector::PlateParams;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Where to write the JSON detection report (stdout summary otherwise).
    pub json_out: Option<PathBuf>,
    /// Directory receiving one PNG per intermediate grid.
    pub debug_dir: Option<PathBuf>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct RuntimeConfig {
    pub input: PathBuf,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub params: PlateParams,
}

pub fn load_config(path: &Path) -> Result<RuntimeConfig, String> {
    let contents = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&contents)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detector::GrayscalePolicy;

    #[test]
    fn minimal_config_parses_with_defaults() {
        let config: RuntimeConfig =
            serde_json::from_str(r#"{ "input": "car.png" }"#).unwrap();
        assert_eq!(config.input, PathBuf::from("car.png"));
        assert!(config.output.json_out.is_none());
        assert_eq!(config.params.threshold, 150);
        assert_eq!(config.params.grayscale, GrayscalePolicy::Luminance);
    }
}

//! Resolving encoder parameters from defaults, a config file and flags.
//!
//! Precedence, lowest to highest: built-in defaults, `--config` JSON file,
//! explicit command-line flags.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use dtmfwav_encoder::{EncodeParams, Quantization};

/// Default output file name.
pub const DEFAULT_OUTPUT: &str = "dtmf_output.wav";

/// Flag values that override the config file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParamOverrides {
    /// Tone length in milliseconds.
    pub note_ms: Option<u32>,
    /// Pause length in milliseconds.
    pub pause_ms: Option<u32>,
    /// Sample rate in Hz.
    pub sample_rate: Option<u32>,
    /// Quantization mode name.
    pub quantization: Option<String>,
    /// Duration ceiling in seconds.
    pub max_duration: Option<f64>,
}

/// Loads an [`EncodeParams`] JSON file. Missing fields take their defaults.
pub fn load_params_file(path: &Path) -> Result<EncodeParams> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Builds the final parameters.
pub fn resolve_params(config: Option<&Path>, overrides: &ParamOverrides) -> Result<EncodeParams> {
    let mut params = match config {
        Some(path) => load_params_file(path)?,
        None => EncodeParams::default(),
    };

    if let Some(ms) = overrides.note_ms {
        params = params.with_note_ms(ms);
    }
    if let Some(ms) = overrides.pause_ms {
        params = params.with_pause_ms(ms);
    }
    if let Some(rate) = overrides.sample_rate {
        params.sample_rate = rate;
    }
    if let Some(name) = overrides.quantization.as_deref() {
        params.quantization = parse_quantization(name)?;
    }
    if let Some(seconds) = overrides.max_duration {
        params.max_duration_seconds = seconds;
    }

    tracing::debug!(?params, "resolved parameters");
    Ok(params)
}

/// Parses a quantization mode name.
pub fn parse_quantization(name: &str) -> Result<Quantization> {
    match name.to_ascii_lowercase().as_str() {
        "truncate" => Ok(Quantization::Truncate),
        "nearest" => Ok(Quantization::Nearest),
        other => bail!("Unknown quantization '{}' (expected truncate or nearest)", other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults_without_config() {
        let params = resolve_params(None, &ParamOverrides::default()).unwrap();
        assert_eq!(params, EncodeParams::default());
    }

    #[test]
    fn test_flags_override_defaults() {
        let overrides = ParamOverrides {
            note_ms: Some(100),
            pause_ms: Some(500),
            sample_rate: Some(44100),
            quantization: Some("nearest".to_string()),
            max_duration: Some(10.0),
        };
        let params = resolve_params(None, &overrides).unwrap();
        assert_eq!(params.note_seconds, 0.1);
        assert_eq!(params.pause_seconds, 0.5);
        assert_eq!(params.sample_rate, 44100);
        assert_eq!(params.quantization, Quantization::Nearest);
        assert_eq!(params.max_duration_seconds, 10.0);
    }

    #[test]
    fn test_config_file_then_flags() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("params.json");
        fs::write(&path, r#"{ "note_seconds": 0.05, "sample_rate": 16000 }"#).unwrap();

        let overrides = ParamOverrides {
            sample_rate: Some(22050),
            ..Default::default()
        };
        let params = resolve_params(Some(&path), &overrides).unwrap();
        assert_eq!(params.note_seconds, 0.05);
        assert_eq!(params.pause_seconds, 0.1);
        assert_eq!(params.sample_rate, 22050);
    }

    #[test]
    fn test_bad_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("params.json");
        fs::write(&path, "{ not json").unwrap();

        let err = resolve_params(Some(&path), &ParamOverrides::default()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));

        let missing = dir.path().join("missing.json");
        let err = resolve_params(Some(&missing), &ParamOverrides::default()).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn test_parse_quantization() {
        assert_eq!(parse_quantization("Truncate").unwrap(), Quantization::Truncate);
        assert_eq!(parse_quantization("nearest").unwrap(), Quantization::Nearest);
        assert!(parse_quantization("floor").is_err());
    }
}

//! JSON output types for machine-readable CLI output.
//!
//! Every command that accepts `--json` prints exactly one of these documents
//! to stdout, whether it succeeds or fails.

use serde::{Deserialize, Serialize};

use dtmfwav_encoder::{EncodeError, ParamWarning, WavHeader};

/// Error codes for CLI operations.
///
/// Encoder failures pass through the encoder's own `ENC_XXX` codes.
pub mod error_codes {
    /// File could not be read
    pub const FILE_READ: &str = "CLI_001";
    /// File could not be created or written
    pub const FILE_WRITE: &str = "CLI_002";
    /// Config file could not be loaded
    pub const CONFIG: &str = "CLI_003";
    /// File is not a readable WAV file
    pub const INVALID_WAV: &str = "CLI_004";
}

/// A structured error in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonError {
    /// Stable error code (e.g., "CLI_001", "ENC_002")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// File path (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

impl JsonError {
    /// Creates a new error with code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            file: None,
        }
    }

    /// Sets the file path for this error.
    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }
}

impl From<&EncodeError> for JsonError {
    fn from(err: &EncodeError) -> Self {
        Self::new(err.code(), err.to_string())
    }
}

/// A structured warning in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonWarning {
    /// Stable warning code (e.g., "W001")
    pub code: String,
    /// Human-readable warning message
    pub message: String,
}

impl From<&ParamWarning> for JsonWarning {
    fn from(warning: &ParamWarning) -> Self {
        Self {
            code: warning.code.code().to_string(),
            message: warning.message.clone(),
        }
    }
}

/// Summary of a finished encode.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct EncodeSummary {
    /// Path of the written file
    pub output: String,
    /// Number of input characters
    pub chars: usize,
    /// Number of beeps (two per character)
    pub beeps: usize,
    /// Tone length in seconds
    pub note_seconds: f64,
    /// Pause length in seconds
    pub pause_seconds: f64,
    /// Sample rate in Hz
    pub sample_rate: u32,
    /// Total duration in seconds
    pub duration_seconds: f64,
    /// Number of samples written
    pub num_samples: usize,
    /// Size of the written file in bytes
    pub file_size: usize,
    /// Header fields as written
    pub header: WavHeader,
    /// BLAKE3 hash of the PCM data
    pub pcm_hash: String,
}

/// JSON output for the `encode` command.
#[derive(Debug, Clone, Serialize)]
pub struct EncodeOutput {
    /// Whether the encode succeeded
    pub success: bool,
    /// Errors encountered
    pub errors: Vec<JsonError>,
    /// Parameter warnings
    pub warnings: Vec<JsonWarning>,
    /// Encode summary (on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<EncodeSummary>,
}

impl EncodeOutput {
    /// Creates a successful encode output.
    pub fn success(summary: EncodeSummary, warnings: Vec<JsonWarning>) -> Self {
        Self {
            success: true,
            errors: Vec::new(),
            warnings,
            result: Some(summary),
        }
    }

    /// Creates a failed encode output.
    pub fn failure(errors: Vec<JsonError>, warnings: Vec<JsonWarning>) -> Self {
        Self {
            success: false,
            errors,
            warnings,
            result: None,
        }
    }
}

/// Header fields and hash of an inspected file.
#[derive(Debug, Clone, Serialize)]
pub struct InspectResult {
    /// Inspected file path
    pub file: String,
    /// File size on disk in bytes
    pub file_size: u64,
    /// Parsed header fields
    pub header: WavHeader,
    /// Duration implied by the header, in seconds
    pub duration_seconds: f64,
    /// BLAKE3 hash of the PCM data, if the data chunk is complete
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pcm_hash: Option<String>,
}

/// JSON output for the `inspect` command.
#[derive(Debug, Clone, Serialize)]
pub struct InspectOutput {
    /// Whether inspection succeeded
    pub success: bool,
    /// Errors encountered
    pub errors: Vec<JsonError>,
    /// Inspection result (on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<InspectResult>,
}

impl InspectOutput {
    /// Creates a successful inspect output.
    pub fn success(result: InspectResult) -> Self {
        Self {
            success: true,
            errors: Vec::new(),
            result: Some(result),
        }
    }

    /// Creates a failed inspect output.
    pub fn failure(errors: Vec<JsonError>) -> Self {
        Self {
            success: false,
            errors,
            result: None,
        }
    }
}

/// One row of the `tones` table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ToneRow {
    /// Nibble value 0-15
    pub nibble: u8,
    /// Hex digit for the nibble
    pub symbol: char,
    /// High-group frequency in Hz
    pub high_hz: u16,
    /// Low-group frequency in Hz
    pub low_hz: u16,
}

#[cfg(test)]
mod tests {
    use super::*;
    use dtmfwav_encoder::WarningCode;

    #[test]
    fn test_json_error_serialization() {
        let error = JsonError::new(error_codes::FILE_READ, "missing").with_file("in.wav");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"code\":\"CLI_001\""));
        assert!(json.contains("\"file\":\"in.wav\""));

        let bare = serde_json::to_string(&JsonError::new("X", "y")).unwrap();
        assert!(!bare.contains("file"));
    }

    #[test]
    fn test_json_error_from_encode_error() {
        let error = JsonError::from(&EncodeError::EmptyInput);
        assert_eq!(error.code, "ENC_001");
        assert_eq!(error.message, "no data to encode given");
    }

    #[test]
    fn test_json_warning_from_param_warning() {
        let warning = ParamWarning::new(WarningCode::ZeroPauseLength, "the pause length is 0.0s");
        let json = JsonWarning::from(&warning);
        assert_eq!(json.code, "W002");
        assert_eq!(json.message, "the pause length is 0.0s");
    }

    #[test]
    fn test_encode_output_failure_omits_result() {
        let output = EncodeOutput::failure(vec![JsonError::new("ENC_001", "empty")], vec![]);
        let json = serde_json::to_string(&output).unwrap();
        assert!(json.contains("\"success\":false"));
        assert!(!json.contains("\"result\""));
    }
}

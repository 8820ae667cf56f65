//! Encoding parameters and their validation.

use serde::{Deserialize, Serialize};

use crate::error::{EncodeError, EncodeResult};
use crate::synthesis::Quantization;

/// Default tone length in seconds.
pub const DEFAULT_NOTE_SECONDS: f64 = 0.3;
/// Default silence length in seconds.
pub const DEFAULT_PAUSE_SECONDS: f64 = 0.1;
/// Default sample rate in Hz.
pub const DEFAULT_SAMPLE_RATE: u32 = 8000;
/// Default ceiling on the total encoded duration (one hour).
pub const DEFAULT_MAX_DURATION_SECONDS: f64 = 3600.0;
/// Highest sample rate whose byte rate still fits the 32-bit header field.
pub const MAX_SAMPLE_RATE: u32 = u32::MAX / 2;

/// Timing and format parameters for one encode.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EncodeParams {
    /// Length of each tone in seconds.
    pub note_seconds: f64,
    /// Length of the silence after each tone in seconds.
    pub pause_seconds: f64,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Upper bound on the total duration in seconds.
    pub max_duration_seconds: f64,
    /// How synthesized amplitudes are converted to integers.
    pub quantization: Quantization,
}

impl Default for EncodeParams {
    fn default() -> Self {
        Self {
            note_seconds: DEFAULT_NOTE_SECONDS,
            pause_seconds: DEFAULT_PAUSE_SECONDS,
            sample_rate: DEFAULT_SAMPLE_RATE,
            max_duration_seconds: DEFAULT_MAX_DURATION_SECONDS,
            quantization: Quantization::default(),
        }
    }
}

impl EncodeParams {
    /// Creates parameters with the given timing and default everything else.
    pub fn new(note_seconds: f64, pause_seconds: f64, sample_rate: u32) -> Self {
        Self {
            note_seconds,
            pause_seconds,
            sample_rate,
            ..Self::default()
        }
    }

    /// Sets the note length from milliseconds.
    pub fn with_note_ms(mut self, ms: u32) -> Self {
        self.note_seconds = ms as f64 / 1000.0;
        self
    }

    /// Sets the pause length from milliseconds.
    pub fn with_pause_ms(mut self, ms: u32) -> Self {
        self.pause_seconds = ms as f64 / 1000.0;
        self
    }

    /// Sets the quantization mode.
    pub fn with_quantization(mut self, quantization: Quantization) -> Self {
        self.quantization = quantization;
        self
    }

    /// Sets the duration ceiling.
    pub fn with_max_duration(mut self, seconds: f64) -> Self {
        self.max_duration_seconds = seconds;
        self
    }

    /// Number of samples in one tone segment.
    pub fn note_samples(&self) -> u64 {
        segment_samples(self.sample_rate, self.note_seconds)
    }

    /// Number of samples in one silence segment.
    pub fn pause_samples(&self) -> u64 {
        segment_samples(self.sample_rate, self.pause_seconds)
    }

    /// Total duration in seconds for `nibbles` beeps.
    pub fn duration_for(&self, nibbles: usize) -> f64 {
        nibbles as f64 * (self.note_seconds + self.pause_seconds)
    }

    /// Checks the parameters.
    ///
    /// Hard errors are returned as `Err`; conditions that still produce a
    /// usable file (zero-length tones or pauses) come back as warnings.
    pub fn validate(&self) -> EncodeResult<Vec<ParamWarning>> {
        if self.sample_rate == 0 || self.sample_rate > MAX_SAMPLE_RATE {
            return Err(EncodeError::InvalidSampleRate {
                rate: self.sample_rate,
            });
        }
        check_duration("note length", self.note_seconds)?;
        check_duration("pause length", self.pause_seconds)?;
        check_duration("duration limit", self.max_duration_seconds)?;

        let mut warnings = Vec::new();
        if self.note_seconds == 0.0 {
            warnings.push(ParamWarning::new(
                WarningCode::ZeroNoteLength,
                "the note length is 0.0s",
            ));
        }
        if self.pause_seconds == 0.0 {
            warnings.push(ParamWarning::new(
                WarningCode::ZeroPauseLength,
                "the pause length is 0.0s",
            ));
        }
        Ok(warnings)
    }
}

fn check_duration(name: &'static str, value: f64) -> EncodeResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(EncodeError::invalid_duration(name, value));
    }
    Ok(())
}

fn segment_samples(sample_rate: u32, seconds: f64) -> u64 {
    (sample_rate as f64 * seconds).round() as u64
}

/// Warning codes for parameter validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum WarningCode {
    /// W001: tones have zero length
    ZeroNoteLength,
    /// W002: pauses have zero length
    ZeroPauseLength,
}

impl WarningCode {
    /// Returns the warning code string (e.g., "W001").
    pub fn code(&self) -> &'static str {
        match self {
            WarningCode::ZeroNoteLength => "W001",
            WarningCode::ZeroPauseLength => "W002",
        }
    }
}

impl std::fmt::Display for WarningCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A non-fatal parameter problem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamWarning {
    /// The warning code.
    pub code: WarningCode,
    /// Human-readable message.
    pub message: String,
}

impl ParamWarning {
    /// Creates a new warning.
    pub fn new(code: WarningCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ParamWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

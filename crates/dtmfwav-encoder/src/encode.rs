//! Main entry point: text in, WAV bytes out.

use std::io::Write;

use crate::error::{EncodeError, EncodeResult};
use crate::nibbles::NibbleStream;
use crate::params::{EncodeParams, ParamWarning};
use crate::synthesis::{synthesize, SegmentPlan};
use crate::wav::{write_to_sink, WavResult};

/// Result of an encode.
#[derive(Debug)]
pub struct EncodeOutput {
    /// Serialized WAV file and metadata.
    pub wav: WavResult,
    /// Nibbles that were encoded, in order.
    pub nibbles: NibbleStream,
    /// Segment layout used for synthesis.
    pub plan: SegmentPlan,
    /// Nominal duration (`nibbles * (note + pause)`) in seconds.
    pub duration_seconds: f64,
    /// Non-fatal parameter warnings.
    pub warnings: Vec<ParamWarning>,
}

impl EncodeOutput {
    /// Number of input bytes.
    pub fn char_count(&self) -> usize {
        self.nibbles.len() / 2
    }

    /// Number of beeps.
    pub fn beep_count(&self) -> usize {
        self.nibbles.len()
    }
}

/// Rejects empty input.
///
/// The encoder itself accepts empty text (producing a header-only file);
/// front ends that require data call this first.
pub fn ensure_non_empty(text: &[u8]) -> EncodeResult<()> {
    if text.is_empty() {
        return Err(EncodeError::EmptyInput);
    }
    Ok(())
}

/// Encodes `text` into a complete in-memory WAV file.
///
/// # Arguments
/// * `text` - Bytes to encode, two beeps per byte
/// * `params` - Timing and format parameters
///
/// # Returns
/// The WAV bytes plus metadata; nothing is written anywhere
pub fn encode(text: &[u8], params: &EncodeParams) -> EncodeResult<EncodeOutput> {
    let warnings = params.validate()?;
    let nibbles = NibbleStream::from_bytes(text);
    let duration_seconds = params.duration_for(nibbles.len());

    tracing::debug!(
        chars = text.len(),
        beeps = nibbles.len(),
        duration_seconds,
        sample_rate = params.sample_rate,
        "encoding"
    );

    let samples = synthesize(&nibbles, params)?;
    let wav = WavResult::from_mono(&samples, params.sample_rate);

    Ok(EncodeOutput {
        wav,
        plan: SegmentPlan::new(nibbles.len(), params),
        nibbles,
        duration_seconds,
        warnings,
    })
}

/// Encodes `text` and writes the WAV file to `sink`.
///
/// Synthesis finishes before the first byte is written, so a synthesis
/// failure leaves the sink untouched. A `SinkWrite` error means the sink
/// may hold a truncated file.
pub fn encode_to_writer<W: Write>(
    text: &[u8],
    params: &EncodeParams,
    sink: &mut W,
) -> EncodeResult<EncodeOutput> {
    let output = encode(text, params)?;
    write_to_sink(&output.wav.wav_data, sink)?;
    Ok(output)
}

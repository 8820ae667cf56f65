//! Core WAV serialization and sink writing.

use std::io::Write;

use crate::error::EncodeResult;

use super::format::WavFormat;
use super::header::{WavHeader, WAV_HEADER_SIZE};

/// Serializes a complete WAV file: 44-byte header then little-endian samples.
///
/// # Arguments
/// * `samples` - 16-bit PCM samples
/// * `format` - WAV format parameters
///
/// # Returns
/// Exactly `44 + 2 * samples.len()` bytes for 16-bit output
pub fn build_wav(samples: &[i16], format: &WavFormat) -> Vec<u8> {
    let header = WavHeader::new(format, samples.len());
    let mut buffer = Vec::with_capacity(WAV_HEADER_SIZE + samples.len() * 2);
    buffer.extend_from_slice(&header.to_bytes());
    append_pcm16(&mut buffer, samples);
    buffer
}

/// Converts 16-bit samples to little-endian PCM bytes.
pub fn samples_to_pcm16(samples: &[i16]) -> Vec<u8> {
    let mut pcm = Vec::with_capacity(samples.len() * 2);
    append_pcm16(&mut pcm, samples);
    pcm
}

fn append_pcm16(out: &mut Vec<u8>, samples: &[i16]) {
    for &sample in samples {
        out.extend_from_slice(&sample.to_le_bytes());
    }
}

/// Writes serialized bytes to a sink and flushes it.
///
/// # Errors
/// `SinkWrite` if the sink rejects the data. Anything already written should
/// be treated as incomplete.
pub fn write_to_sink<W: Write>(bytes: &[u8], sink: &mut W) -> EncodeResult<()> {
    sink.write_all(bytes)?;
    sink.flush()?;
    tracing::debug!(bytes = bytes.len(), "wrote wav");
    Ok(())
}

/// Serializes and writes a WAV file in one step.
pub fn write_wav<W: Write>(sink: &mut W, format: &WavFormat, samples: &[i16]) -> EncodeResult<()> {
    write_to_sink(&build_wav(samples, format), sink)
}

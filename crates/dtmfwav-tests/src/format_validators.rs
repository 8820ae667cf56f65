//! Binary format validators for test infrastructure.
//!
//! The WAV validator here parses headers independently of the encoder's own
//! `WavHeader::parse`, so tests do not check the writer against itself.

use std::fmt;

/// Size of the fixed header the encoder writes.
pub const HEADER_SIZE: usize = 44;

/// Error type for format validation failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatError {
    /// The format being validated.
    pub format: &'static str,
    /// Description of what went wrong.
    pub message: String,
    /// Byte offset where the error occurred, if applicable.
    pub offset: Option<usize>,
}

impl FormatError {
    /// Create a new format error.
    pub fn new(format: &'static str, message: impl Into<String>) -> Self {
        Self {
            format,
            message: message.into(),
            offset: None,
        }
    }

    /// Create a format error with a byte offset.
    pub fn at_offset(format: &'static str, message: impl Into<String>, offset: usize) -> Self {
        Self {
            format,
            message: message.into(),
            offset: Some(offset),
        }
    }
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(offset) = self.offset {
            write!(f, "{} error at offset {}: {}", self.format, offset, self.message)
        } else {
            write!(f, "{} error: {}", self.format, self.message)
        }
    }
}

impl std::error::Error for FormatError {}

/// Information extracted from a WAV file header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WavInfo {
    /// Value of the RIFF length field at offset 4.
    pub file_length: u32,
    /// Number of audio channels.
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Bits per sample.
    pub bits_per_sample: u16,
    /// Audio format code (1 = PCM).
    pub audio_format: u16,
    /// Byte rate field.
    pub byte_rate: u32,
    /// Block alignment field.
    pub block_align: u16,
    /// Value of the data length field at offset 40.
    pub data_length: u32,
    /// Total number of samples.
    pub num_samples: usize,
}

fn u16_at(data: &[u8], offset: usize) -> u16 {
    u16::from_le_bytes([data[offset], data[offset + 1]])
}

fn u32_at(data: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes([
        data[offset],
        data[offset + 1],
        data[offset + 2],
        data[offset + 3],
    ])
}

fn expect_tag(data: &[u8], offset: usize, tag: &[u8; 4]) -> Result<(), FormatError> {
    if &data[offset..offset + 4] != tag {
        return Err(FormatError::at_offset(
            "WAV",
            format!(
                "expected '{}', got {:?}",
                String::from_utf8_lossy(tag),
                &data[offset..offset + 4]
            ),
            offset,
        ));
    }
    Ok(())
}

/// Validate a dtmfwav WAV file and extract header information.
///
/// Checks the fixed 44-byte layout:
/// - `RIFF`/`WAVE`/`fmt `/`data` tags at their fixed offsets
/// - PCM format tag, 16-byte fmt chunk, mono, 16 bits
/// - byte rate and block align consistent with the sample rate
/// - `file_length == data_length + 44`
/// - the data chunk is complete
///
/// # Arguments
/// * `data` - Raw bytes of the WAV file
///
/// # Returns
/// * `Ok(WavInfo)` - Successfully parsed WAV file information
/// * `Err(FormatError)` - Invalid or corrupted WAV file
pub fn validate_wav(data: &[u8]) -> Result<WavInfo, FormatError> {
    if data.len() < HEADER_SIZE {
        return Err(FormatError::new(
            "WAV",
            format!(
                "File too short: {} bytes (minimum {} required)",
                data.len(),
                HEADER_SIZE
            ),
        ));
    }

    expect_tag(data, 0, b"RIFF")?;
    expect_tag(data, 8, b"WAVE")?;
    expect_tag(data, 12, b"fmt ")?;
    expect_tag(data, 36, b"data")?;

    let file_length = u32_at(data, 4);
    let chunk_size = u32_at(data, 16);
    let audio_format = u16_at(data, 20);
    let channels = u16_at(data, 22);
    let sample_rate = u32_at(data, 24);
    let byte_rate = u32_at(data, 28);
    let block_align = u16_at(data, 32);
    let bits_per_sample = u16_at(data, 34);
    let data_length = u32_at(data, 40);

    if chunk_size != 16 {
        return Err(FormatError::at_offset(
            "WAV",
            format!("fmt chunk size {} (expected 16)", chunk_size),
            16,
        ));
    }
    if audio_format != 1 {
        return Err(FormatError::at_offset(
            "WAV",
            format!("format tag {} (expected PCM)", audio_format),
            20,
        ));
    }
    if channels != 1 || bits_per_sample != 16 {
        return Err(FormatError::at_offset(
            "WAV",
            format!(
                "{} channels at {} bits (expected mono 16-bit)",
                channels, bits_per_sample
            ),
            22,
        ));
    }
    if u64::from(byte_rate) != u64::from(sample_rate) * 2 {
        return Err(FormatError::at_offset(
            "WAV",
            format!("byte rate {} for sample rate {}", byte_rate, sample_rate),
            28,
        ));
    }
    if block_align != 2 {
        return Err(FormatError::at_offset(
            "WAV",
            format!("block align {} (expected 2)", block_align),
            32,
        ));
    }
    if u64::from(file_length) != u64::from(data_length) + HEADER_SIZE as u64 {
        return Err(FormatError::at_offset(
            "WAV",
            format!(
                "file length {} does not equal data length {} + {}",
                file_length, data_length, HEADER_SIZE
            ),
            4,
        ));
    }

    let available = data.len() - HEADER_SIZE;
    if (data_length as usize) > available {
        return Err(FormatError::at_offset(
            "WAV",
            format!(
                "Truncated data chunk: header says {} bytes, {} present",
                data_length, available
            ),
            40,
        ));
    }

    Ok(WavInfo {
        file_length,
        channels,
        sample_rate,
        bits_per_sample,
        audio_format,
        byte_rate,
        block_align,
        data_length,
        num_samples: data_length as usize / 2,
    })
}

/// Decodes the little-endian samples after the header.
pub fn read_samples(data: &[u8]) -> Result<Vec<i16>, FormatError> {
    let info = validate_wav(data)?;
    let end = HEADER_SIZE + info.data_length as usize;
    Ok(data[HEADER_SIZE..end]
        .chunks_exact(2)
        .map(|pair| i16::from_le_bytes([pair[0], pair[1]]))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use dtmfwav_encoder::{build_wav, WavFormat};

    #[test]
    fn test_validate_encoder_output() {
        let wav = build_wav(&[0i16; 100], &WavFormat::mono(8000));
        let info = validate_wav(&wav).unwrap();
        assert_eq!(info.channels, 1);
        assert_eq!(info.sample_rate, 8000);
        assert_eq!(info.byte_rate, 16000);
        assert_eq!(info.data_length, 200);
        assert_eq!(info.file_length, 244);
        assert_eq!(info.num_samples, 100);
    }

    #[test]
    fn test_validate_too_short() {
        let err = validate_wav(&[0u8; 20]).unwrap_err();
        assert!(err.message.contains("too short"));
        assert_eq!(err.offset, None);
    }

    #[test]
    fn test_validate_bad_tag() {
        let mut wav = build_wav(&[], &WavFormat::mono(8000));
        wav[0..4].copy_from_slice(b"RIFX");
        let err = validate_wav(&wav).unwrap_err();
        assert_eq!(err.offset, Some(0));
    }

    #[test]
    fn test_validate_standard_riff_length_is_rejected() {
        // Standard RIFF writers store data_length + 36.
        let mut wav = build_wav(&[1, 2], &WavFormat::mono(8000));
        wav[4..8].copy_from_slice(&40u32.to_le_bytes());
        let err = validate_wav(&wav).unwrap_err();
        assert_eq!(err.offset, Some(4));
    }

    #[test]
    fn test_validate_truncated_data() {
        let wav = build_wav(&[1, 2, 3, 4], &WavFormat::mono(8000));
        let err = validate_wav(&wav[..48]).unwrap_err();
        assert!(err.to_string().contains("Truncated data chunk"));
    }

    #[test]
    fn test_read_samples() {
        let wav = build_wav(&[20000, -20000, 0], &WavFormat::mono(8000));
        assert_eq!(read_samples(&wav).unwrap(), vec![20000, -20000, 0]);
    }
}

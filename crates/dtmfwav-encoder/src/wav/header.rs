//! The fixed 44-byte WAV header.

use std::fmt;
use std::io::{self, Write};

use serde::Serialize;
use thiserror::Error;

use super::format::WavFormat;

/// Size of the serialized header in bytes.
pub const WAV_HEADER_SIZE: usize = 44;

const RIFF: &[u8; 4] = b"RIFF";
const WAVE: &[u8; 4] = b"WAVE";
const FMT: &[u8; 4] = b"fmt ";
const DATA: &[u8; 4] = b"data";

/// PCM format tag.
pub const FORMAT_PCM: u16 = 1;
/// Size of the PCM fmt chunk body.
pub const FMT_CHUNK_SIZE: u32 = 16;

/// Numeric fields of the header. The four ASCII markers are implied.
///
/// `file_length` counts the whole file including the 44 header bytes
/// (`data_length + 44`), which is what existing players of these files
/// expect from this encoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WavHeader {
    /// Total file length in bytes.
    pub file_length: u32,
    /// Size of the fmt chunk.
    pub chunk_size: u32,
    /// 1 = PCM.
    pub format_tag: u16,
    /// 1 = mono.
    pub num_channels: u16,
    /// Samples per second.
    pub sample_rate: u32,
    /// `sample_rate * bytes_per_sample`.
    pub bytes_per_sec: u32,
    /// Bytes per sample frame (2 for 16-bit mono).
    pub bytes_per_sample: u16,
    /// Bits per sample.
    pub bits_per_sample: u16,
    /// Length of the sample data in bytes.
    pub data_length: u32,
}

/// Errors from parsing a header.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HeaderError {
    /// Fewer than 44 bytes available.
    #[error("header too short: {len} bytes (need {})", WAV_HEADER_SIZE)]
    TooShort {
        /// Bytes available.
        len: usize,
    },
    /// A chunk marker did not match.
    #[error("expected '{expected}' at offset {offset}")]
    BadMarker {
        /// Byte offset of the marker.
        offset: usize,
        /// The marker that should be there.
        expected: &'static str,
    },
}

impl WavHeader {
    /// Builds the header for `sample_count` samples of the given format.
    ///
    /// Lengths saturate at `u32::MAX`; the synthesizer never produces buffers
    /// that large.
    pub fn new(format: &WavFormat, sample_count: usize) -> Self {
        let data_length = u32::try_from(sample_count as u64 * format.bytes_per_sample() as u64)
            .unwrap_or(u32::MAX);
        Self {
            file_length: data_length.saturating_add(WAV_HEADER_SIZE as u32),
            chunk_size: FMT_CHUNK_SIZE,
            format_tag: FORMAT_PCM,
            num_channels: format.channels,
            sample_rate: format.sample_rate,
            bytes_per_sec: format.byte_rate(),
            bytes_per_sample: format.block_align(),
            bits_per_sample: format.bits_per_sample,
            data_length,
        }
    }

    /// Number of samples described by `data_length`.
    pub fn sample_count(&self) -> usize {
        let width = (self.bits_per_sample / 8).max(1) as usize;
        self.data_length as usize / width
    }

    /// Duration of the data in seconds.
    pub fn duration_seconds(&self) -> f64 {
        if self.bytes_per_sec == 0 {
            return 0.0;
        }
        self.data_length as f64 / self.bytes_per_sec as f64
    }

    /// Serializes the header, all integers little-endian.
    pub fn to_bytes(&self) -> [u8; WAV_HEADER_SIZE] {
        let mut out = [0u8; WAV_HEADER_SIZE];
        out[0..4].copy_from_slice(RIFF);
        out[4..8].copy_from_slice(&self.file_length.to_le_bytes());
        out[8..12].copy_from_slice(WAVE);
        out[12..16].copy_from_slice(FMT);
        out[16..20].copy_from_slice(&self.chunk_size.to_le_bytes());
        out[20..22].copy_from_slice(&self.format_tag.to_le_bytes());
        out[22..24].copy_from_slice(&self.num_channels.to_le_bytes());
        out[24..28].copy_from_slice(&self.sample_rate.to_le_bytes());
        out[28..32].copy_from_slice(&self.bytes_per_sec.to_le_bytes());
        out[32..34].copy_from_slice(&self.bytes_per_sample.to_le_bytes());
        out[34..36].copy_from_slice(&self.bits_per_sample.to_le_bytes());
        out[36..40].copy_from_slice(DATA);
        out[40..44].copy_from_slice(&self.data_length.to_le_bytes());
        out
    }

    /// Writes the serialized header.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writer.write_all(&self.to_bytes())
    }

    /// Parses the first 44 bytes of a file in this layout.
    pub fn parse(bytes: &[u8]) -> Result<Self, HeaderError> {
        if bytes.len() < WAV_HEADER_SIZE {
            return Err(HeaderError::TooShort { len: bytes.len() });
        }

        for (offset, marker) in [(0, RIFF), (8, WAVE), (12, FMT), (36, DATA)] {
            if &bytes[offset..offset + 4] != marker {
                return Err(HeaderError::BadMarker {
                    offset,
                    // markers are ASCII
                    expected: std::str::from_utf8(marker).unwrap_or("?"),
                });
            }
        }

        let u16_at = |at: usize| u16::from_le_bytes([bytes[at], bytes[at + 1]]);
        let u32_at = |at: usize| {
            u32::from_le_bytes([bytes[at], bytes[at + 1], bytes[at + 2], bytes[at + 3]])
        };

        Ok(Self {
            file_length: u32_at(4),
            chunk_size: u32_at(16),
            format_tag: u16_at(20),
            num_channels: u16_at(22),
            sample_rate: u32_at(24),
            bytes_per_sec: u32_at(28),
            bytes_per_sample: u16_at(32),
            bits_per_sample: u16_at(34),
            data_length: u32_at(40),
        })
    }
}

impl fmt::Display for WavHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marker = |m: &[u8; 4]| String::from_utf8_lossy(m).into_owned();
        writeln!(f, "{:>16}: {}", "riff", marker(RIFF))?;
        writeln!(f, "{:>16}: {}", "file length", self.file_length)?;
        writeln!(f, "{:>16}: {}", "wave", marker(WAVE))?;
        writeln!(f, "{:>16}: {}", "fmt", marker(FMT))?;
        writeln!(f, "{:>16}: {}", "chunk size", self.chunk_size)?;
        writeln!(f, "{:>16}: {}", "format tag", self.format_tag)?;
        writeln!(f, "{:>16}: {}", "num of channels", self.num_channels)?;
        writeln!(f, "{:>16}: {}", "sample rate", self.sample_rate)?;
        writeln!(f, "{:>16}: {}", "bytes per sec", self.bytes_per_sec)?;
        writeln!(f, "{:>16}: {}", "bytes per sample", self.bytes_per_sample)?;
        writeln!(f, "{:>16}: {}", "bits per sample", self.bits_per_sample)?;
        writeln!(f, "{:>16}: {}", "data", marker(DATA))?;
        write!(f, "{:>16}: {}", "data length", self.data_length)
    }
}

//! Tests for the WAV container module.

use std::io::{self, Write};

use pretty_assertions::assert_eq;

use crate::error::EncodeError;

use super::*;

fn u16_at(buf: &[u8], at: usize) -> u16 {
    u16::from_le_bytes([buf[at], buf[at + 1]])
}

fn u32_at(buf: &[u8], at: usize) -> u32 {
    u32::from_le_bytes([buf[at], buf[at + 1], buf[at + 2], buf[at + 3]])
}

// =========================================================================
// WavFormat
// =========================================================================

#[test]
fn test_mono_format() {
    let format = WavFormat::mono(8000);
    assert_eq!(format.channels, 1);
    assert_eq!(format.bits_per_sample, 16);
    assert_eq!(format.bytes_per_sample(), 2);
    assert_eq!(format.block_align(), 2);
    assert_eq!(format.byte_rate(), 16000);
}

#[test]
fn test_byte_rate_various_sample_rates() {
    for &rate in &[8000, 11025, 22050, 44100, 48000] {
        assert_eq!(WavFormat::mono(rate).byte_rate(), rate * 2);
    }
}

#[test]
fn test_byte_rate_saturates() {
    assert_eq!(WavFormat::mono(u32::MAX / 2).byte_rate(), u32::MAX - 1);
    assert_eq!(WavFormat::mono(3_000_000_000).byte_rate(), u32::MAX);

    let header = WavHeader::new(&WavFormat::mono(u32::MAX), 0);
    assert_eq!(header.bytes_per_sec, u32::MAX);
}

// =========================================================================
// Header layout
// =========================================================================

#[test]
fn test_header_layout() {
    let buf = build_wav(&[0i16; 320], &WavFormat::mono(8000));

    assert_eq!(&buf[0..4], b"RIFF");
    assert_eq!(u32_at(&buf, 4), 640 + 44);
    assert_eq!(&buf[8..12], b"WAVE");
    assert_eq!(&buf[12..16], b"fmt ");
    assert_eq!(u32_at(&buf, 16), 16);
    assert_eq!(u16_at(&buf, 20), 1);
    assert_eq!(u16_at(&buf, 22), 1);
    assert_eq!(u32_at(&buf, 24), 8000);
    assert_eq!(u32_at(&buf, 28), 16000);
    assert_eq!(u16_at(&buf, 32), 2);
    assert_eq!(u16_at(&buf, 34), 16);
    assert_eq!(&buf[36..40], b"data");
    assert_eq!(u32_at(&buf, 40), 640);
    assert_eq!(buf.len(), 44 + 640);
}

#[test]
fn test_header_invariants() {
    for count in [0usize, 1, 2, 2400, 100_000] {
        let header = WavHeader::new(&WavFormat::mono(22050), count);
        assert_eq!(header.data_length as usize, count * 2);
        assert_eq!(header.file_length, header.data_length + 44);
        assert_eq!(header.bytes_per_sec, 22050 * 2);
        assert_eq!(header.bytes_per_sample, 2);
        assert_eq!(header.sample_count(), count);
    }
}

#[test]
fn test_empty_buffer_is_header_only() {
    let buf = build_wav(&[], &WavFormat::mono(8000));
    assert_eq!(buf.len(), 44);
    assert_eq!(u32_at(&buf, 4), 44);
    assert_eq!(u32_at(&buf, 40), 0);
}

#[test]
fn test_header_saturates() {
    let header = WavHeader::new(&WavFormat::mono(8000), usize::MAX / 4);
    assert_eq!(header.data_length, u32::MAX);
    assert_eq!(header.file_length, u32::MAX);
}

#[test]
fn test_header_parse_roundtrip() {
    let header = WavHeader::new(&WavFormat::mono(8000), 2400);
    let parsed = WavHeader::parse(&header.to_bytes()).unwrap();
    assert_eq!(parsed, header);
    assert_eq!(parsed.duration_seconds(), 0.3);
}

#[test]
fn test_header_parse_errors() {
    assert_eq!(
        WavHeader::parse(&[0u8; 10]),
        Err(HeaderError::TooShort { len: 10 })
    );

    let mut bytes = WavHeader::new(&WavFormat::mono(8000), 0).to_bytes();
    bytes[36..40].copy_from_slice(b"LIST");
    assert_eq!(
        WavHeader::parse(&bytes),
        Err(HeaderError::BadMarker {
            offset: 36,
            expected: "data"
        })
    );
}

#[test]
fn test_header_display() {
    let text = WavHeader::new(&WavFormat::mono(8000), 2400).to_string();
    assert!(text.contains("            riff: RIFF"));
    assert!(text.contains("     file length: 4844"));
    assert!(text.contains(" num of channels: 1"));
    assert!(text.contains("bytes per sample: 2"));
    assert!(text.ends_with("     data length: 4800"));
    assert_eq!(text.lines().count(), 13);
}

// =========================================================================
// Sample serialization
// =========================================================================

#[test]
fn test_samples_little_endian() {
    let pcm = samples_to_pcm16(&[20000, -1, 0, i16::MIN]);
    assert_eq!(pcm, vec![0x20, 0x4E, 0xFF, 0xFF, 0x00, 0x00, 0x00, 0x80]);
}

#[test]
fn test_data_follows_header() {
    let samples = [1i16, -2, 300];
    let buf = build_wav(&samples, &WavFormat::mono(8000));
    assert_eq!(&buf[44..], samples_to_pcm16(&samples).as_slice());
}

#[test]
fn test_build_is_deterministic() {
    let samples: Vec<i16> = (0..1000).map(|i| (i * 37 % 2000) as i16).collect();
    let a = build_wav(&samples, &WavFormat::mono(8000));
    let b = build_wav(&samples, &WavFormat::mono(8000));
    assert_eq!(a, b);
}

// =========================================================================
// PCM extraction and hashing
// =========================================================================

#[test]
fn test_extract_pcm_data() {
    let samples = [10i16, 20, 30];
    let buf = build_wav(&samples, &WavFormat::mono(8000));
    assert_eq!(extract_pcm_data(&buf), Some(&buf[44..]));
}

#[test]
fn test_extract_pcm_data_invalid() {
    assert_eq!(extract_pcm_data(b"not a wav"), None);

    let mut buf = build_wav(&[1, 2, 3], &WavFormat::mono(8000));
    buf.truncate(47);
    assert_eq!(extract_pcm_data(&buf), None);
}

#[test]
fn test_pcm_hash() {
    let buf = build_wav(&[1, 2, 3], &WavFormat::mono(8000));
    let hash = compute_pcm_hash(&buf).unwrap();
    assert_eq!(hash.len(), 64);
    assert_eq!(hash, hash_pcm(&samples_to_pcm16(&[1, 2, 3])));
}

#[test]
fn test_wav_result() {
    let result = WavResult::from_mono(&[0i16; 8000], 8000);
    assert_eq!(result.len(), 44 + 16000);
    assert_eq!(result.header.data_length, 16000);
    assert_eq!(result.duration_seconds(), 1.0);
    assert_eq!(Some(result.pcm_hash.clone()), compute_pcm_hash(&result.wav_data));
    assert!(!result.is_empty());
}

// =========================================================================
// Sink writing
// =========================================================================

struct FailingSink {
    accept: usize,
}

impl Write for FailingSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.accept == 0 {
            return Err(io::Error::new(io::ErrorKind::Other, "disk full"));
        }
        let n = buf.len().min(self.accept);
        self.accept -= n;
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_write_wav_to_vec() {
    let mut sink = Vec::new();
    write_wav(&mut sink, &WavFormat::mono(8000), &[5, 6]).unwrap();
    assert_eq!(sink.len(), 48);
    assert_eq!(&sink[44..], &[5, 0, 6, 0]);
}

#[test]
fn test_write_failure_surfaces() {
    let mut sink = FailingSink { accept: 20 };
    let err = write_wav(&mut sink, &WavFormat::mono(8000), &[1, 2, 3]).unwrap_err();
    assert!(matches!(err, EncodeError::SinkWrite(_)));
    assert!(err.is_partial_output());
}

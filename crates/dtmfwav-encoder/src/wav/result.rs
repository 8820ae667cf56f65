//! WAV file generation result type.

use super::format::WavFormat;
use super::header::{WavHeader, WAV_HEADER_SIZE};
use super::pcm::hash_pcm;
use super::writer::build_wav;

/// Serialized WAV file plus its metadata.
#[derive(Debug, Clone)]
pub struct WavResult {
    /// Complete WAV file bytes.
    pub wav_data: Vec<u8>,
    /// Header written at the start of `wav_data`.
    pub header: WavHeader,
    /// BLAKE3 hash of the PCM data only.
    pub pcm_hash: String,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Number of samples.
    pub num_samples: usize,
}

impl WavResult {
    /// Creates a WavResult from mono samples.
    pub fn from_mono(samples: &[i16], sample_rate: u32) -> Self {
        let format = WavFormat::mono(sample_rate);
        let wav_data = build_wav(samples, &format);
        let pcm_hash = hash_pcm(&wav_data[WAV_HEADER_SIZE..]);

        Self {
            wav_data,
            header: WavHeader::new(&format, samples.len()),
            pcm_hash,
            sample_rate,
            num_samples: samples.len(),
        }
    }

    /// Returns the duration in seconds.
    pub fn duration_seconds(&self) -> f64 {
        if self.sample_rate == 0 {
            return 0.0;
        }
        self.num_samples as f64 / self.sample_rate as f64
    }

    /// Size of the file in bytes.
    pub fn len(&self) -> usize {
        self.wav_data.len()
    }

    /// Always false; a WAV file has at least its header.
    pub fn is_empty(&self) -> bool {
        self.wav_data.is_empty()
    }
}

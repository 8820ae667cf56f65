//! Tone synthesis.
//!
//! Turns a [`NibbleStream`] into 16-bit samples. Every nibble becomes a
//! dual-tone segment followed by a silence segment:
//!
//! ```text
//! | tone(n0) | silence | tone(n1) | silence | ... |
//! ```
//!
//! Segment lengths are `round(sample_rate * seconds)` and the buffer is
//! allocated once at its exact final size after the duration ceiling check.

pub mod dual_tone;


use serde::{Deserialize, Serialize};

use crate::error::{EncodeError, EncodeResult};
use crate::nibbles::NibbleStream;
use crate::params::EncodeParams;
use crate::wav::WAV_HEADER_SIZE;

pub use dual_tone::{DualTone, AMPLITUDE_SCALE};

/// Synthesized mono 16-bit PCM samples.
pub type SampleBuffer = Vec<i16>;

/// Conversion of a synthesized amplitude to a 16-bit sample.
///
/// Both modes saturate at the `i16` bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Quantization {
    /// Truncate toward zero. Bit-compatible with existing reference files.
    #[default]
    Truncate,
    /// Round to nearest, halves away from zero.
    Nearest,
}

impl Quantization {
    /// Converts one amplitude.
    #[inline]
    pub fn quantize(self, value: f64) -> i16 {
        match self {
            Quantization::Truncate => value as i16,
            Quantization::Nearest => value.round() as i16,
        }
    }
}

/// A generator that appends one segment of samples.
pub trait SegmentSource {
    /// Appends `count` samples to `out`.
    fn render(&self, out: &mut Vec<i16>, count: u64, sample_rate: u32);
}

/// Silence: a run of zero samples.
#[derive(Debug, Clone, Copy, Default)]
pub struct Silence;

impl SegmentSource for Silence {
    fn render(&self, out: &mut Vec<i16>, count: u64, _sample_rate: u32) {
        out.resize(out.len() + count as usize, 0);
    }
}

/// Precomputed segment layout for one encode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SegmentPlan {
    /// Number of beeps.
    pub nibbles: u64,
    /// Samples per tone segment.
    pub note_samples: u64,
    /// Samples per silence segment.
    pub pause_samples: u64,
}

impl SegmentPlan {
    /// Lays out segments for `nibbles` beeps.
    pub fn new(nibbles: usize, params: &EncodeParams) -> Self {
        Self {
            nibbles: nibbles as u64,
            note_samples: params.note_samples(),
            pause_samples: params.pause_samples(),
        }
    }

    /// Samples per beep (tone plus silence).
    pub fn samples_per_nibble(&self) -> u64 {
        self.note_samples.saturating_add(self.pause_samples)
    }

    /// Exact length of the finished buffer, or `None` on overflow.
    pub fn total_samples(&self) -> Option<u64> {
        self.nibbles.checked_mul(self.samples_per_nibble())
    }
}

/// Checks the duration ceiling for `nibbles` beeps.
pub fn check_duration(nibbles: usize, params: &EncodeParams) -> EncodeResult<f64> {
    let duration = params.duration_for(nibbles);
    if duration > params.max_duration_seconds {
        return Err(EncodeError::DurationTooLong {
            duration,
            limit: params.max_duration_seconds,
        });
    }
    Ok(duration)
}

/// Synthesizes the full sample buffer for a nibble stream.
///
/// # Errors
/// * `DurationTooLong` if the encoded audio would exceed the ceiling
/// * `BufferTooLarge` if the data chunk would not fit a WAV container
///
/// Both checks happen before the buffer is allocated.
pub fn synthesize(nibbles: &NibbleStream, params: &EncodeParams) -> EncodeResult<SampleBuffer> {
    check_duration(nibbles.len(), params)?;

    let plan = SegmentPlan::new(nibbles.len(), params);
    let total = plan
        .total_samples()
        .filter(|&n| fits_wav_container(n))
        .ok_or(EncodeError::BufferTooLarge {
            samples: plan.nibbles.saturating_mul(plan.samples_per_nibble()),
        })?;
    let capacity = usize::try_from(total).map_err(|_| EncodeError::BufferTooLarge { samples: total })?;

    tracing::debug!(
        nibbles = plan.nibbles,
        note_samples = plan.note_samples,
        pause_samples = plan.pause_samples,
        total_samples = total,
        "synthesizing"
    );

    let sample_rate = params.sample_rate;
    let mut buffer = Vec::with_capacity(capacity);
    // Tone segments only depend on the nibble, so repeats copy the first render.
    let mut first_render: [Option<usize>; 16] = [None; 16];
    let note_len = plan.note_samples as usize;

    for nibble in nibbles.iter() {
        let slot = &mut first_render[nibble as usize];
        match *slot {
            Some(start) => buffer.extend_from_within(start..start + note_len),
            None => {
                *slot = Some(buffer.len());
                DualTone::for_nibble(nibble, params.quantization).render(
                    &mut buffer,
                    plan.note_samples,
                    sample_rate,
                );
            }
        }
        Silence.render(&mut buffer, plan.pause_samples, sample_rate);
        tracing::trace!(nibble, len = buffer.len(), "segment done");
    }

    debug_assert_eq!(buffer.len() as u64, total);
    Ok(buffer)
}

fn fits_wav_container(samples: u64) -> bool {
    samples
        .checked_mul(2)
        .and_then(|bytes| bytes.checked_add(WAV_HEADER_SIZE as u64))
        .map_or(false, |len| len <= u32::MAX as u64)
}

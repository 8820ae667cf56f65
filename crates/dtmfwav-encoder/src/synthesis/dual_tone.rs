//! Dual-tone (two summed cosines) segment generator.

use std::f64::consts::PI;

use crate::tones::{tone_pair, TonePair};

use super::{Quantization, SegmentSource};

/// Fixed amplitude scale applied to the sum of the two unit cosines.
///
/// The sum lies in [-2.0, 2.0], so samples stay within [-20000, 20000].
pub const AMPLITUDE_SCALE: f64 = 10000.0;

/// Generator for one DTMF symbol.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DualTone {
    /// Frequency pair being summed.
    pub pair: TonePair,
    /// Integer conversion of the summed signal.
    pub quantization: Quantization,
}

impl DualTone {
    /// Creates a generator for the given nibble.
    pub fn for_nibble(nibble: u8, quantization: Quantization) -> Self {
        Self {
            pair: tone_pair(nibble),
            quantization,
        }
    }

    /// Unquantized amplitude at sample `index` of the segment.
    #[inline]
    pub fn raw_amplitude(&self, index: u64, sample_rate: u32) -> f64 {
        let i = index as f64;
        let sr = sample_rate as f64;
        let high = (2.0 * PI * self.pair.high as f64 * i) / sr;
        let low = (2.0 * PI * self.pair.low as f64 * i) / sr;
        (high.cos() + low.cos()) * AMPLITUDE_SCALE
    }

    /// Quantized amplitude at sample `index` of the segment.
    #[inline]
    pub fn amplitude(&self, index: u64, sample_rate: u32) -> i16 {
        self.quantization
            .quantize(self.raw_amplitude(index, sample_rate))
    }
}

impl SegmentSource for DualTone {
    fn render(&self, out: &mut Vec<i16>, count: u64, sample_rate: u32) {
        out.extend((0..count).map(|i| self.amplitude(i, sample_rate)));
    }
}

//! dtmfwav Encoder
//!
//! Turns text into DTMF beeps stored in a mono 16-bit PCM WAV file.
//!
//! # Overview
//!
//! Every input byte is split into two nibbles (high first). Each nibble is
//! played as the sum of two cosines from the DTMF frequency table, followed
//! by silence:
//!
//! - **Nibbles** - byte to 4-bit symbol split
//! - **Tones** - the fixed 16-entry frequency table
//! - **Synthesis** - dual-tone and silence segments at the given sample rate
//! - **WAV** - 44-byte header plus little-endian samples
//!
//! # Determinism
//!
//! Encoding is a pure function of the text and [`EncodeParams`]. The same
//! inputs always produce byte-identical files; [`WavResult::pcm_hash`] can
//! be used to compare outputs.
//!
//! # Example
//!
//! ```
//! use dtmfwav_encoder::{encode, EncodeParams};
//!
//! let params = EncodeParams::new(0.1, 0.05, 8000);
//! let output = encode(b"A", &params).unwrap();
//!
//! assert_eq!(output.wav.num_samples, 2400);
//! assert_eq!(output.wav.header.file_length, 4844);
//! ```
//!
//! # Crate Structure
//!
//! - [`encode()`] - Main entry point
//! - [`nibbles`] - Byte to nibble splitting
//! - [`params`] - Encoding parameters and validation
//! - [`synthesis`] - Tone and silence generation
//! - [`tones`] - DTMF frequency table
//! - [`wav`] - Deterministic WAV container builder

pub mod encode;
pub mod error;
pub mod nibbles;
pub mod params;
pub mod synthesis;
pub mod tones;
pub mod wav;

// Re-export main types at crate root
pub use encode::{encode, encode_to_writer, ensure_non_empty, EncodeOutput};
pub use error::{EncodeError, EncodeResult};
pub use nibbles::NibbleStream;
pub use params::{EncodeParams, ParamWarning, WarningCode};
pub use synthesis::{synthesize, Quantization, SampleBuffer};
pub use tones::{tone_pair, TonePair, DTMF_TONES};
pub use wav::{build_wav, WavFormat, WavHeader, WavResult};

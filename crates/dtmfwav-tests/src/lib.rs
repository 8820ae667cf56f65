//! dtmfwav End-to-End Test Infrastructure
//!
//! Integration tests for the encoder and CLI:
//!
//! - **Encoding**: text -> WAV file on disk, checked by an independent
//!   header validator
//! - **Determinism**: byte-identical output across runs
//! - **Length laws**: property tests over text, timing and sample rate
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p dtmfwav-tests
//! ```

pub mod determinism;
pub mod format_validators;

use dtmfwav_encoder::EncodeParams;

// Re-export commonly used items
pub use determinism::{compute_hash, verify_determinism, DeterminismResult, DiffInfo};
pub use format_validators::{read_samples, validate_wav, FormatError, WavInfo};

/// Sample count an encode of `chars` characters must produce.
pub fn expected_sample_count(chars: usize, params: &EncodeParams) -> u64 {
    2 * chars as u64 * (params.note_samples() + params.pause_samples())
}

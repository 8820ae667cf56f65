//! Deterministic WAV container builder.
//!
//! Writes mono 16-bit PCM WAV files with a fixed 44-byte header and no
//! timestamps or optional chunks, so identical samples always serialize to
//! identical bytes.

mod format;
mod header;
mod pcm;
mod result;
mod writer;

#[cfg(test)]
mod tests;

// Re-export public API
pub use format::WavFormat;
pub use header::{HeaderError, WavHeader, FMT_CHUNK_SIZE, FORMAT_PCM, WAV_HEADER_SIZE};
pub use pcm::{compute_pcm_hash, extract_pcm_data, hash_pcm};
pub use result::WavResult;
pub use writer::{build_wav, samples_to_pcm16, write_to_sink, write_wav};

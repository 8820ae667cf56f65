//! End-to-End Determinism Tests for dtmfwav
//!
//! Tests verify that the same text and parameters always produce the same
//! bytes, in memory and on disk.
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p dtmfwav-tests --test e2e_determinism
//! ```

use std::fs;

use dtmfwav_cli::commands::encode::encode_to_file;
use dtmfwav_encoder::{encode, EncodeParams, Quantization};
use dtmfwav_tests::determinism::verify_determinism;
use dtmfwav_tests::test_determinism;

// ============================================================================
// Macro-generated tests
// ============================================================================

test_determinism!(encode_hello_defaults, {
    encode(b"hello", &EncodeParams::default()).unwrap().wav.wav_data
});

test_determinism!(encode_all_nibbles, {
    let text: Vec<u8> = (0u8..16).map(|n| n * 17).collect();
    encode(&text, &EncodeParams::new(0.02, 0.01, 16000))
        .unwrap()
        .wav
        .wav_data
});

test_determinism!(encode_nearest_quantization, {
    let params = EncodeParams::new(0.05, 0.02, 44100).with_quantization(Quantization::Nearest);
    encode(b"round", &params).unwrap().wav.wav_data
});

// ============================================================================
// Explicit checks
// ============================================================================

/// Repeated characters reuse cached tone segments; the result must equal a
/// fresh render of the same nibble.
#[test]
fn test_repeated_text_matches_single_renders() {
    let params = EncodeParams::new(0.03, 0.01, 8000);
    let single = encode(b"z", &params).unwrap().wav.wav_data;
    let triple = encode(b"zzz", &params).unwrap().wav.wav_data;

    let segment = &single[44..];
    assert_eq!(triple.len(), 44 + 3 * segment.len());
    for chunk in triple[44..].chunks(segment.len()) {
        assert_eq!(chunk, segment);
    }
}

#[test]
fn test_file_output_is_deterministic() {
    let tmp = tempfile::tempdir().unwrap();
    let params = EncodeParams::default();

    let result = verify_determinism(
        || {
            let path = tmp.path().join("run.wav");
            encode_to_file(b"on disk", &path, &params).unwrap();
            fs::read(&path).unwrap()
        },
        3,
    );
    result.assert_deterministic();
    assert_eq!(result.output_size, 44 + 14 * 3200 * 2);
}

#[test]
fn test_pcm_hash_is_stable_across_runs() {
    let params = EncodeParams::new(0.1, 0.05, 8000);
    let hashes: Vec<String> = (0..3)
        .map(|_| encode(b"hash", &params).unwrap().wav.pcm_hash)
        .collect();
    assert!(hashes.windows(2).all(|w| w[0] == w[1]));
}

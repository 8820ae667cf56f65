//! Determinism testing helpers.
//!
//! Encoding must be a pure function of the text and parameters. These
//! helpers run an encode several times and report the first differing byte.

use std::fmt;

/// Result of a determinism verification.
#[derive(Debug, Clone)]
pub struct DeterminismResult {
    /// Whether all runs produced identical output.
    pub is_deterministic: bool,
    /// Number of runs performed.
    pub runs: usize,
    /// Size of the output in bytes.
    pub output_size: usize,
    /// BLAKE3 hash of the first run's output.
    pub hash: String,
    /// If non-deterministic, the first difference found.
    pub diff_info: Option<DiffInfo>,
}

/// Information about the first byte difference found between runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffInfo {
    /// Byte offset where the difference was found.
    pub offset: usize,
    /// Value from the first run, if it has a byte at `offset`.
    pub expected: Option<u8>,
    /// Value from the differing run, if it has a byte at `offset`.
    pub actual: Option<u8>,
    /// Which run (0-indexed) produced the differing output.
    pub run_index: usize,
}

fn fmt_byte(byte: Option<u8>) -> String {
    match byte {
        Some(b) => format!("0x{:02X}", b),
        None => "<end>".to_string(),
    }
}

impl fmt::Display for DiffInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Difference at byte {}: expected {}, got {} (run {})",
            self.offset,
            fmt_byte(self.expected),
            fmt_byte(self.actual),
            self.run_index
        )
    }
}

impl DeterminismResult {
    /// Panic with a detailed message if not deterministic.
    pub fn assert_deterministic(&self) {
        if let Some(diff) = &self.diff_info {
            panic!(
                "Non-deterministic output detected!\n\
                 Runs: {}\n\
                 Output size: {} bytes\n\
                 Hash: {}\n\
                 {}",
                self.runs, self.output_size, self.hash, diff
            );
        }
    }
}

/// Computes the BLAKE3 hex hash of `data`.
pub fn compute_hash(data: &[u8]) -> String {
    blake3::hash(data).to_hex().to_string()
}

/// Run `generate_fn` `runs` times and verify all outputs are identical.
///
/// # Panics
/// If `runs` is less than 2.
pub fn verify_determinism<F, O>(generate_fn: F, runs: usize) -> DeterminismResult
where
    F: Fn() -> O,
    O: AsRef<[u8]>,
{
    assert!(runs >= 2, "Must run at least 2 times to verify determinism");

    let reference = generate_fn();
    let reference_bytes = reference.as_ref();
    let hash = compute_hash(reference_bytes);

    for run_index in 1..runs {
        let output = generate_fn();
        if let Some(diff) = find_first_difference(reference_bytes, output.as_ref(), run_index) {
            return DeterminismResult {
                is_deterministic: false,
                runs,
                output_size: reference_bytes.len(),
                hash,
                diff_info: Some(diff),
            };
        }
    }

    DeterminismResult {
        is_deterministic: true,
        runs,
        output_size: reference_bytes.len(),
        hash,
        diff_info: None,
    }
}

/// Finds the first offset where `expected` and `actual` differ, including
/// a length mismatch.
pub fn find_first_difference(expected: &[u8], actual: &[u8], run_index: usize) -> Option<DiffInfo> {
    let len = expected.len().max(actual.len());
    (0..len)
        .find(|&i| expected.get(i) != actual.get(i))
        .map(|offset| DiffInfo {
            offset,
            expected: expected.get(offset).copied(),
            actual: actual.get(offset).copied(),
            run_index,
        })
}

/// Generates a test that encodes with the given expression three times and
/// asserts byte-identical output.
///
/// ```rust,ignore
/// use dtmfwav_tests::test_determinism;
///
/// test_determinism!(encode_hello, {
///     encode(b"hello", &EncodeParams::default()).unwrap().wav.wav_data
/// });
/// ```
#[macro_export]
macro_rules! test_determinism {
    ($name:ident, $generate:expr) => {
        #[test]
        fn $name() {
            $crate::determinism::verify_determinism(|| $generate, 3).assert_deterministic();
        }
    };
}

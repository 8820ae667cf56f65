//! Encode command implementation
//!
//! Encodes a text argument into a DTMF WAV file. The whole file is
//! synthesized in memory before the output path is created, so a failed
//! encode never leaves a file behind; a failed write removes the partial
//! file.

use anyhow::Result;
use colored::Colorize;
use std::fmt;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use dtmfwav_encoder::wav::write_to_sink;
use dtmfwav_encoder::{encode, ensure_non_empty, EncodeError, EncodeOutput, EncodeParams};

use super::json_output::{
    error_codes, EncodeOutput as EncodeJson, EncodeSummary, JsonError, JsonWarning,
};
use crate::input::{resolve_params, ParamOverrides};

/// Arguments for one `encode` invocation.
#[derive(Debug, Clone, Default)]
pub struct EncodeArgs {
    /// Text to encode
    pub text: String,
    /// Output file path
    pub output: String,
    /// Optional params JSON file
    pub config: Option<String>,
    /// Flag overrides
    pub overrides: ParamOverrides,
}

/// Failure while encoding to a file.
#[derive(Debug)]
pub enum FileEncodeError {
    /// The encoder rejected the input or the write failed.
    Encode(EncodeError),
    /// The output file could not be created.
    Create {
        /// Output path
        path: PathBuf,
        /// Underlying I/O error
        source: io::Error,
    },
}

impl FileEncodeError {
    /// Stable error code for JSON output.
    pub fn code(&self) -> &'static str {
        match self {
            FileEncodeError::Encode(err) => err.code(),
            FileEncodeError::Create { .. } => error_codes::FILE_WRITE,
        }
    }
}

impl fmt::Display for FileEncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileEncodeError::Encode(err) => write!(f, "{}", err),
            FileEncodeError::Create { path, source } => {
                write!(f, "Failed to create output file {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for FileEncodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FileEncodeError::Encode(err) => Some(err),
            FileEncodeError::Create { source, .. } => Some(source),
        }
    }
}

impl From<EncodeError> for FileEncodeError {
    fn from(err: EncodeError) -> Self {
        FileEncodeError::Encode(err)
    }
}

/// Run the encode command
///
/// # Arguments
/// * `args` - Text, output path and parameter sources
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 on success, 1 on error
pub fn run(args: &EncodeArgs, json_output: bool) -> Result<ExitCode> {
    if json_output {
        run_json(args)
    } else {
        run_human(args)
    }
}

/// Encodes `text` and writes the WAV file to `path`.
///
/// Empty text is rejected. Nothing is created on disk unless synthesis
/// succeeded.
pub fn encode_to_file(
    text: &[u8],
    path: &Path,
    params: &EncodeParams,
) -> Result<EncodeOutput, FileEncodeError> {
    ensure_non_empty(text)?;
    let output = encode(text, params)?;

    let file = File::create(path).map_err(|source| FileEncodeError::Create {
        path: path.to_path_buf(),
        source,
    })?;
    write_or_remove(&output.wav.wav_data, BufWriter::new(file), path)?;

    tracing::info!(
        path = %path.display(),
        bytes = output.wav.len(),
        "wrote output"
    );
    Ok(output)
}

/// Writes `bytes` to `sink`, which writes to the file at `path`.
///
/// On failure the sink is closed and `path` removed, so no truncated file
/// is left behind.
pub fn write_or_remove<W: Write>(bytes: &[u8], mut sink: W, path: &Path) -> Result<(), EncodeError> {
    let result = write_to_sink(bytes, &mut sink);
    drop(sink);

    if let Err(err) = result {
        if let Err(remove_err) = fs::remove_file(path) {
            tracing::warn!(
                path = %path.display(),
                error = %remove_err,
                "failed to remove partial output"
            );
        }
        return Err(err);
    }
    Ok(())
}

/// Label/value pairs of the parameter summary printed before encoding.
pub fn summary_lines(text: &[u8], output: &str, params: &EncodeParams) -> Vec<(&'static str, String)> {
    let beeps = text.len() * 2;
    vec![
        ("note length", format!("{}s", params.note_seconds)),
        ("pause length", format!("{}s", params.pause_seconds)),
        ("sample rate", format!("{} Hz", params.sample_rate)),
        ("data to encode", String::from_utf8_lossy(text).into_owned()),
        ("amount of chars", text.len().to_string()),
        ("amount of beeps", beeps.to_string()),
        ("output file", output.to_string()),
        ("duration", format!("{:.2}s", params.duration_for(beeps))),
    ]
}

/// Run encode with human-readable (colored) output
fn run_human(args: &EncodeArgs) -> Result<ExitCode> {
    let text = args.text.as_bytes();
    ensure_non_empty(text)?;
    let params = resolve_params(args.config.as_deref().map(Path::new), &args.overrides)?;

    println!("{}", "Encoding:".cyan().bold());
    for (label, value) in summary_lines(text, &args.output, &params) {
        println!("  {} {}", format!("{:>16}:", label).dimmed(), value);
    }

    for warning in params.validate()? {
        println!("{} {}", "warning:".yellow().bold(), warning);
    }

    let output = encode_to_file(text, Path::new(&args.output), &params)?;

    println!(
        "\n{} {} ({} bytes, {:.2}s)",
        "Wrote".green().bold(),
        args.output,
        output.wav.len(),
        output.wav.duration_seconds()
    );
    println!("{} {}", "PCM hash:".dimmed(), output.wav.pcm_hash);

    Ok(ExitCode::SUCCESS)
}

/// Run encode with machine-readable JSON output
fn run_json(args: &EncodeArgs) -> Result<ExitCode> {
    let params = match resolve_params(args.config.as_deref().map(Path::new), &args.overrides) {
        Ok(params) => params,
        Err(e) => {
            let mut error = JsonError::new(error_codes::CONFIG, format!("{:#}", e));
            if let Some(config) = &args.config {
                error = error.with_file(config.as_str());
            }
            return print_failure(error, Vec::new());
        }
    };

    let warnings: Vec<JsonWarning> = params
        .validate()
        .map(|w| w.iter().map(JsonWarning::from).collect())
        .unwrap_or_default();

    match encode_to_file(args.text.as_bytes(), Path::new(&args.output), &params) {
        Ok(output) => {
            let summary = build_summary(&args.output, &params, &output);
            let report = EncodeJson::success(summary, warnings);
            println!("{}", serde_json::to_string_pretty(&report)?);
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            let mut error = JsonError::new(err.code(), err.to_string());
            if matches!(err, FileEncodeError::Create { .. }) || is_partial(&err) {
                error = error.with_file(args.output.as_str());
            }
            print_failure(error, warnings)
        }
    }
}

fn is_partial(err: &FileEncodeError) -> bool {
    matches!(err, FileEncodeError::Encode(e) if e.is_partial_output())
}

fn print_failure(error: JsonError, warnings: Vec<JsonWarning>) -> Result<ExitCode> {
    let report = EncodeJson::failure(vec![error], warnings);
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(ExitCode::from(1))
}

/// Builds the JSON summary of a finished encode.
pub fn build_summary(path: &str, params: &EncodeParams, output: &EncodeOutput) -> EncodeSummary {
    EncodeSummary {
        output: path.to_string(),
        chars: output.char_count(),
        beeps: output.beep_count(),
        note_seconds: params.note_seconds,
        pause_seconds: params.pause_seconds,
        sample_rate: params.sample_rate,
        duration_seconds: output.duration_seconds,
        num_samples: output.wav.num_samples,
        file_size: output.wav.len(),
        header: output.wav.header,
        pcm_hash: output.wav.pcm_hash.clone(),
    }
}

//! Inspect command implementation
//!
//! Reads an existing WAV file, prints its 44-byte header field by field and
//! the BLAKE3 hash of its PCM data.

use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;
use std::path::Path;
use std::process::ExitCode;

use dtmfwav_encoder::wav::compute_pcm_hash;
use dtmfwav_encoder::WavHeader;

use super::json_output::{error_codes, InspectOutput, InspectResult, JsonError};

/// Run the inspect command
///
/// # Arguments
/// * `path` - WAV file to inspect
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 on success, 1 on error
pub fn run(path: &str, json_output: bool) -> Result<ExitCode> {
    if json_output {
        run_json(path)
    } else {
        run_human(path)
    }
}

/// Reads and parses `path`.
pub fn inspect_file(path: &Path) -> Result<InspectResult> {
    let data =
        fs::read(path).with_context(|| format!("Failed to read file: {}", path.display()))?;
    inspect_bytes(&path.display().to_string(), &data)
}

/// Parses the header of `data` and hashes its PCM chunk.
pub fn inspect_bytes(name: &str, data: &[u8]) -> Result<InspectResult> {
    let header = WavHeader::parse(data).with_context(|| format!("Not a WAV file: {}", name))?;
    let pcm_hash = compute_pcm_hash(data);
    if pcm_hash.is_none() {
        tracing::debug!(file = name, "data chunk is truncated, skipping hash");
    }

    Ok(InspectResult {
        file: name.to_string(),
        file_size: data.len() as u64,
        duration_seconds: header.duration_seconds(),
        header,
        pcm_hash,
    })
}

/// Run inspect with human-readable (colored) output
fn run_human(path: &str) -> Result<ExitCode> {
    let result = inspect_file(Path::new(path))?;

    println!("{} {}", "Inspecting:".cyan().bold(), result.file);
    println!("{}", result.header);
    println!("{:>16}: {:.3}s", "duration", result.duration_seconds);
    println!("{:>16}: {}", "file size", result.file_size);

    let expected = u64::from(result.header.file_length);
    if result.file_size != expected {
        println!(
            "{} file size {} does not match header file length {}",
            "warning:".yellow().bold(),
            result.file_size,
            expected
        );
    }

    match &result.pcm_hash {
        Some(hash) => println!("{:>16}: {}", "pcm hash", hash),
        None => println!("{}", "PCM data chunk is truncated".yellow()),
    }

    Ok(ExitCode::SUCCESS)
}

/// Run inspect with machine-readable JSON output
fn run_json(path: &str) -> Result<ExitCode> {
    let data = match fs::read(path) {
        Ok(data) => data,
        Err(e) => {
            let error = JsonError::new(error_codes::FILE_READ, format!("Failed to read file: {}", e))
                .with_file(path);
            return print_output(&InspectOutput::failure(vec![error]), ExitCode::from(1));
        }
    };

    match inspect_bytes(path, &data) {
        Ok(result) => print_output(&InspectOutput::success(result), ExitCode::SUCCESS),
        Err(e) => {
            let error = JsonError::new(error_codes::INVALID_WAV, format!("{:#}", e)).with_file(path);
            print_output(&InspectOutput::failure(vec![error]), ExitCode::from(1))
        }
    }
}

fn print_output(output: &InspectOutput, code: ExitCode) -> Result<ExitCode> {
    println!("{}", serde_json::to_string_pretty(output)?);
    Ok(code)
}

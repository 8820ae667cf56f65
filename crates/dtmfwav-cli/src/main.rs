//! dtmfwav CLI - Encode text as DTMF beeps in a WAV file
//!
//! This binary encodes text into DTMF tones, inspects the resulting WAV
//! headers, and prints the tone table.

use clap::{Parser, Subcommand};
use std::process::ExitCode;

use dtmfwav_cli::commands;
use dtmfwav_cli::commands::encode::EncodeArgs;
use dtmfwav_cli::input::{ParamOverrides, DEFAULT_OUTPUT};
use dtmfwav_cli::logging;

/// dtmfwav - Text to DTMF WAV encoder
#[derive(Parser)]
#[command(name = "dtmfwav")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Log level for diagnostics on stderr (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    /// Shorthand for --log-level debug
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode text into a DTMF WAV file
    Encode {
        /// Text to encode (two beeps per character)
        text: Option<String>,

        /// Note length in milliseconds [default: 300]
        #[arg(short = 'n', long = "note")]
        note_ms: Option<u32>,

        /// Pause length in milliseconds [default: 100]
        #[arg(short = 'p', long = "pause")]
        pause_ms: Option<u32>,

        /// Output file path
        #[arg(short, long, default_value = DEFAULT_OUTPUT)]
        output: String,

        /// Sample rate in Hz [default: 8000]
        #[arg(long)]
        sample_rate: Option<u32>,

        /// Amplitude quantization [default: truncate]
        #[arg(long, value_parser = ["truncate", "nearest"])]
        quantization: Option<String>,

        /// Maximum total duration in seconds [default: 3600]
        #[arg(long)]
        max_duration: Option<f64>,

        /// Path to an encode parameters file (JSON); flags override its values
        #[arg(short, long)]
        config: Option<String>,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Print the header and PCM hash of a WAV file
    Inspect {
        /// Path to the WAV file
        path: String,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Print the nibble to DTMF frequency table
    Tones {
        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { cli.log_level.as_str() };
    if let Err(e) = logging::init(level) {
        eprintln!("{}: {}", colored::Colorize::red("error"), e);
        return ExitCode::from(1);
    }

    let result = match cli.command {
        Commands::Encode {
            text,
            note_ms,
            pause_ms,
            output,
            sample_rate,
            quantization,
            max_duration,
            config,
            json,
        } => {
            let args = EncodeArgs {
                text: text.unwrap_or_default(),
                output,
                config,
                overrides: ParamOverrides {
                    note_ms,
                    pause_ms,
                    sample_rate,
                    quantization,
                    max_duration,
                },
            };
            commands::encode::run(&args, json)
        }
        Commands::Inspect { path, json } => commands::inspect::run(&path, json),
        Commands::Tones { json } => commands::tones::run(json),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}

//! Tones command implementation
//!
//! Prints the nibble to frequency-pair table used by the encoder.

use anyhow::Result;
use colored::Colorize;
use std::process::ExitCode;

use dtmfwav_encoder::DTMF_TONES;

use super::json_output::ToneRow;

/// Run the tones command
pub fn run(json_output: bool) -> Result<ExitCode> {
    let rows = tone_rows();

    if json_output {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(ExitCode::SUCCESS);
    }

    println!("{}", "DTMF tone table:".cyan().bold());
    println!(
        "  {:>6}  {:>7}  {:>7}",
        "nibble".dimmed(),
        "high Hz".dimmed(),
        "low Hz".dimmed()
    );
    for row in &rows {
        println!(
            "  {:>6}  {:>7}  {:>7}",
            row.symbol.to_string().bold(),
            row.high_hz,
            row.low_hz
        );
    }

    Ok(ExitCode::SUCCESS)
}

/// One row per nibble value, 0 through F.
pub fn tone_rows() -> Vec<ToneRow> {
    DTMF_TONES
        .iter()
        .zip(0u8..)
        .map(|(pair, nibble)| ToneRow {
            nibble,
            symbol: char::from_digit(u32::from(nibble), 16)
                .map(|c| c.to_ascii_uppercase())
                .unwrap_or('?'),
            high_hz: pair.high,
            low_hz: pair.low,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_tone_rows() {
        let rows = tone_rows();
        assert_eq!(rows.len(), 16);
        assert_eq!(
            rows[0],
            ToneRow {
                nibble: 0,
                symbol: '0',
                high_hz: 1336,
                low_hz: 941
            }
        );
        assert_eq!(rows[14].symbol, 'E');
        assert_eq!((rows[14].high_hz, rows[14].low_hz), (1209, 941));
        assert_eq!((rows[15].high_hz, rows[15].low_hz), (1477, 941));
    }

    #[test]
    fn test_run() {
        assert_eq!(run(false).unwrap(), ExitCode::SUCCESS);
        assert_eq!(run(true).unwrap(), ExitCode::SUCCESS);
    }
}

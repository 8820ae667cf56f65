//! PCM data extraction and hashing utilities.

use super::header::WAV_HEADER_SIZE;

/// Extracts PCM data from a WAV file buffer.
///
/// Walks the RIFF chunks after the `WAVE` marker and returns the body of
/// the first `data` chunk.
///
/// # Arguments
/// * `wav_data` - Complete WAV file bytes
///
/// # Returns
/// PCM data if found, or None if the format is invalid or truncated
pub fn extract_pcm_data(wav_data: &[u8]) -> Option<&[u8]> {
    if wav_data.len() < WAV_HEADER_SIZE {
        return None;
    }

    if &wav_data[0..4] != b"RIFF" || &wav_data[8..12] != b"WAVE" {
        return None;
    }

    let mut pos = 12;
    while pos + 8 <= wav_data.len() {
        let chunk_id = &wav_data[pos..pos + 4];
        let chunk_size = u32::from_le_bytes([
            wav_data[pos + 4],
            wav_data[pos + 5],
            wav_data[pos + 6],
            wav_data[pos + 7],
        ]) as usize;

        if chunk_id == b"data" {
            let data_start = pos + 8;
            let data_end = data_start.checked_add(chunk_size)?;
            return wav_data.get(data_start..data_end);
        }

        pos = pos.checked_add(8 + chunk_size)?;
        // Align to word boundary
        if chunk_size % 2 != 0 {
            pos += 1;
        }
    }

    None
}

/// BLAKE3 hash of raw PCM bytes, hex encoded.
pub fn hash_pcm(pcm: &[u8]) -> String {
    blake3::hash(pcm).to_hex().to_string()
}

/// Computes the PCM hash of a WAV file.
///
/// # Returns
/// BLAKE3 hash of the data chunk, or None if the format is invalid
pub fn compute_pcm_hash(wav_data: &[u8]) -> Option<String> {
    extract_pcm_data(wav_data).map(hash_pcm)
}

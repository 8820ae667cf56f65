//! DTMF frequency table.
//!
//! Maps every 4-bit value to a pair of frequencies: one from the high
//! (column) group 1209/1336/1477/1633 Hz and one from the low (row) group
//! 697/770/852/941 Hz. Digits 0-9 and A-D follow the telephone keypad; E and
//! F take the keypad's `*` and `#` positions.

use serde::Serialize;

/// A pair of frequencies in Hz.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct TonePair {
    /// Column group frequency.
    pub high: u16,
    /// Row group frequency.
    pub low: u16,
}

impl TonePair {
    const fn new(high: u16, low: u16) -> Self {
        Self { high, low }
    }
}

/// Tone pairs indexed by nibble value.
pub static DTMF_TONES: [TonePair; 16] = [
    TonePair::new(1336, 941), // 0
    TonePair::new(1209, 697), // 1
    TonePair::new(1336, 697), // 2
    TonePair::new(1477, 697), // 3
    TonePair::new(1209, 770), // 4
    TonePair::new(1336, 770), // 5
    TonePair::new(1477, 770), // 6
    TonePair::new(1209, 852), // 7
    TonePair::new(1336, 852), // 8
    TonePair::new(1477, 852), // 9
    TonePair::new(1633, 697), // A
    TonePair::new(1633, 770), // B
    TonePair::new(1633, 852), // C
    TonePair::new(1633, 941), // D
    TonePair::new(1209, 941), // E (keypad *)
    TonePair::new(1477, 941), // F (keypad #)
];

/// Looks up the tone pair for a nibble. Only the low four bits are used.
#[inline]
pub fn tone_pair(nibble: u8) -> TonePair {
    DTMF_TONES[(nibble & 0x0F) as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_matches_documented_pairs() {
        let expected: [(u16, u16); 16] = [
            (1336, 941),
            (1209, 697),
            (1336, 697),
            (1477, 697),
            (1209, 770),
            (1336, 770),
            (1477, 770),
            (1209, 852),
            (1336, 852),
            (1477, 852),
            (1633, 697),
            (1633, 770),
            (1633, 852),
            (1633, 941),
            (1209, 941),
            (1477, 941),
        ];

        for (nibble, &(high, low)) in expected.iter().enumerate() {
            assert_eq!(
                tone_pair(nibble as u8),
                TonePair { high, low },
                "nibble {:X}",
                nibble
            );
        }
    }

    #[test]
    fn test_every_pair_is_unique() {
        for a in 0..16 {
            for b in (a + 1)..16 {
                assert_ne!(DTMF_TONES[a], DTMF_TONES[b], "{:X} vs {:X}", a, b);
            }
        }
    }

    #[test]
    fn test_groups() {
        for pair in DTMF_TONES.iter() {
            assert!([1209, 1336, 1477, 1633].contains(&pair.high));
            assert!([697, 770, 852, 941].contains(&pair.low));
        }
    }

    #[test]
    fn test_high_bits_ignored() {
        assert_eq!(tone_pair(0x1F), tone_pair(0x0F));
    }
}

//! Splitting input bytes into 4-bit symbols.

/// Ordered 4-bit values derived from a byte sequence.
///
/// Each byte contributes its high nibble followed by its low nibble.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NibbleStream {
    nibbles: Vec<u8>,
}

impl NibbleStream {
    /// Splits `bytes` into nibbles, most significant first.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let mut nibbles = Vec::with_capacity(bytes.len() * 2);
        for &byte in bytes {
            nibbles.push(byte >> 4);
            nibbles.push(byte & 0x0F);
        }
        Self { nibbles }
    }

    /// Number of nibbles (twice the input byte count).
    pub fn len(&self) -> usize {
        self.nibbles.len()
    }

    /// Returns true if there are no nibbles.
    pub fn is_empty(&self) -> bool {
        self.nibbles.is_empty()
    }

    /// Iterates over the nibble values in order.
    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        self.nibbles.iter().copied()
    }

    /// The nibbles as a slice.
    pub fn as_slice(&self) -> &[u8] {
        &self.nibbles
    }

    /// Uppercase hex rendering, one digit per nibble.
    pub fn to_hex(&self) -> String {
        self.nibbles
            .iter()
            .map(|&n| char::from_digit(n as u32, 16).unwrap_or('?').to_ascii_uppercase())
            .collect()
    }
}

impl From<&str> for NibbleStream {
    fn from(text: &str) -> Self {
        Self::from_bytes(text.as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_byte() {
        let stream = NibbleStream::from("A");
        assert_eq!(stream.as_slice(), &[4, 1]);
        assert_eq!(stream.len(), 2);
    }

    #[test]
    fn test_high_nibble_first() {
        let stream = NibbleStream::from_bytes(&[0xF0, 0x0F, 0xA5]);
        assert_eq!(stream.as_slice(), &[0xF, 0x0, 0x0, 0xF, 0xA, 0x5]);
        assert_eq!(stream.to_hex(), "F00FA5");
    }

    #[test]
    fn test_empty() {
        let stream = NibbleStream::from_bytes(&[]);
        assert!(stream.is_empty());
        assert_eq!(stream.iter().count(), 0);
        assert_eq!(stream.to_hex(), "");
    }

    #[test]
    fn test_length_is_twice_bytes() {
        let text = "hello world";
        assert_eq!(NibbleStream::from(text).len(), text.len() * 2);
    }
}

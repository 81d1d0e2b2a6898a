//! Alphanumeric mode encoder (Mode 0010)
//! Alphanumeric character set: 0-9, A-Z, space, $%*+-./:
use super::Mode;
use crate::encoder::bitstream::BitStream;
use crate::error::EncodeError;

const ALPHANUMERIC_TABLE: [u8; 45] = *b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ $%*+-./:";

/// Pairs = 11 bits, single = 6 bits
pub struct AlphanumericEncoder;

impl AlphanumericEncoder {
    /// Index of `b` in the alphanumeric table
    pub fn value_of(b: u8) -> Option<u32> {
        ALPHANUMERIC_TABLE
            .iter()
            .position(|&c| c == b)
            .map(|i| i as u32)
    }

    /// True when every byte is in the 45-character set
    pub fn accepts(payload: &[u8]) -> bool {
        payload.iter().all(|&b| Self::value_of(b).is_some())
    }

    /// Pairs into 11 bits, a trailing character into 6
    pub fn encode(payload: &[u8]) -> Result<BitStream, EncodeError> {
        let lookup = |b: u8| {
            Self::value_of(b).ok_or(EncodeError::UnsupportedCharacter {
                ch: b as char,
                mode: Mode::Alphanumeric,
            })
        };

        let mut stream = BitStream::with_capacity(Mode::Alphanumeric.body_bits(payload.len()));
        for pair in payload.chunks(2) {
            match *pair {
                [a, b] => stream.append_bits(lookup(a)? * 45 + lookup(b)?, 11),
                [a] => stream.append_bits(lookup(a)?, 6),
                _ => unreachable!("chunks(2) yields one or two items"),
            }
        }
        Ok(stream)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::bitstream::from_binary;

    #[test]
    fn test_alphanumeric_encode() {
        // "A1" = (10 * 45 + 1) = 451 = 0b00111000011 (11 bits)
        let bits = AlphanumericEncoder::encode(b"A1").unwrap();
        assert_eq!(bits.len(), 11);
        assert_eq!(from_binary(bits.as_bits()), 451);
    }

    #[test]
    fn test_trailing_char_uses_six_bits() {
        let bits = AlphanumericEncoder::encode(b"HELLO WORLD").unwrap();
        assert_eq!(bits.len(), 5 * 11 + 6);
        let bits = bits.as_bits();
        assert_eq!(from_binary(&bits[..11]), 779); // HE
        assert_eq!(from_binary(&bits[55..]), 13); // D
    }

    #[test]
    fn test_table_values() {
        assert_eq!(AlphanumericEncoder::value_of(b'0'), Some(0));
        assert_eq!(AlphanumericEncoder::value_of(b'Z'), Some(35));
        assert_eq!(AlphanumericEncoder::value_of(b' '), Some(36));
        assert_eq!(AlphanumericEncoder::value_of(b':'), Some(44));
        assert_eq!(AlphanumericEncoder::value_of(b'a'), None);
    }
}

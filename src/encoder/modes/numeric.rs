//! Numeric mode encoder (Mode 0001)
//! Groups of 3 digits = 10 bits, 2 digits = 7 bits, 1 digit = 4 bits
use super::Mode;
use crate::encoder::bitstream::BitStream;
use crate::error::EncodeError;

/// Numeric mode body encoder
pub struct NumericEncoder;

impl NumericEncoder {
    /// True when every byte is an ASCII digit
    pub fn accepts(payload: &[u8]) -> bool {
        payload.iter().all(u8::is_ascii_digit)
    }

    /// Groups of three digits into 10 bits, remainders into 7 or 4
    pub fn encode(payload: &[u8]) -> Result<BitStream, EncodeError> {
        let mut stream = BitStream::with_capacity(Mode::Numeric.body_bits(payload.len()));
        for group in payload.chunks(3) {
            let mut value = 0u32;
            for &b in group {
                if !b.is_ascii_digit() {
                    return Err(EncodeError::UnsupportedCharacter {
                        ch: b as char,
                        mode: Mode::Numeric,
                    });
                }
                value = value * 10 + u32::from(b - b'0');
            }
            let width = match group.len() {
                3 => 10,
                2 => 7,
                _ => 4,
            };
            stream.append_bits(value, width);
        }
        Ok(stream)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::bitstream::from_binary;

    #[test]
    fn test_numeric_encode() {
        // 867 5309 -> 1101100011 1010011 1001
        let bits = NumericEncoder::encode(b"8675309").unwrap();
        let bits = bits.as_bits();
        assert_eq!(bits.len(), 10 + 10 + 4);
        assert_eq!(from_binary(&bits[..10]), 867);
        assert_eq!(from_binary(&bits[10..20]), 530);
        assert_eq!(from_binary(&bits[20..]), 9);
    }

    #[test]
    fn test_leading_zeros_keep_width() {
        let bits = NumericEncoder::encode(b"0012").unwrap();
        assert_eq!(bits.len(), 14);
        assert_eq!(from_binary(&bits.as_bits()[..10]), 1);
        assert_eq!(from_binary(&bits.as_bits()[10..]), 2);

        let two = NumericEncoder::encode(b"05").unwrap();
        assert_eq!(two.len(), 7);
        assert_eq!(from_binary(two.as_bits()), 5);
    }
}

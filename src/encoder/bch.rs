/// BCH error correction for QR code format and version info
pub struct BchEncoder;

/// Format info generator: x^10 + x^8 + x^5 + x^4 + x^2 + x + 1
pub const FORMAT_GENERATOR: u32 = 0b101_0011_0111;
/// Version info generator: x^12 + x^11 + x^10 + x^9 + x^8 + x^5 + x^2 + 1
pub const VERSION_GENERATOR: u32 = 0b1_1111_0010_0101;

fn bit_length(v: u32) -> u32 {
    u32::BITS - v.leading_zeros()
}

impl BchEncoder {
    /// Remainder of `data * x^degree` divided by `generator`
    ///
    /// `degree` is the generator's degree, so the result fits in `degree` bits.
    pub fn remainder(data: u32, generator: u32) -> u32 {
        let degree = bit_length(generator) - 1;
        let mut rem = data << degree;
        while bit_length(rem) > degree {
            rem ^= generator << (bit_length(rem) - bit_length(generator));
        }
        rem
    }

    /// `data` followed by its BCH check bits
    pub fn encode(data: u32, generator: u32) -> u32 {
        let degree = bit_length(generator) - 1;
        (data << degree) | Self::remainder(data, generator)
    }

    /// True when `codeword` is a multiple of `generator`
    pub fn is_valid(codeword: u32, generator: u32) -> bool {
        let degree = bit_length(generator) - 1;
        Self::remainder(codeword >> degree, generator) == codeword & ((1 << degree) - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_remainder() {
        // EC level L (01), mask 4 (100): 01100 -> 1000111101
        assert_eq!(BchEncoder::remainder(0b01100, FORMAT_GENERATOR), 0b10_0011_1101);
        assert_eq!(BchEncoder::remainder(0, FORMAT_GENERATOR), 0);
    }

    #[test]
    fn test_version_remainder() {
        // Version 7: 000111 -> 110010010100
        assert_eq!(BchEncoder::remainder(7, VERSION_GENERATOR), 0b1100_1001_0100);
    }

    #[test]
    fn test_encoded_words_are_valid() {
        for data in 0..32 {
            let word = BchEncoder::encode(data, FORMAT_GENERATOR);
            assert!(BchEncoder::is_valid(word, FORMAT_GENERATOR));
            assert!(!BchEncoder::is_valid(word ^ 1, FORMAT_GENERATOR));
        }
        for version in 7..=40 {
            let word = BchEncoder::encode(version, VERSION_GENERATOR);
            assert!(BchEncoder::is_valid(word, VERSION_GENERATOR));
        }
    }
}

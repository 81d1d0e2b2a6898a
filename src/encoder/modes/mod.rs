//! QR code data mode encoders
//!
//! This module contains encoders for the supported QR data modes:
//! - Numeric: Efficient encoding for digits (0-9)
//! - Alphanumeric: Upper-case letters, digits, and nine symbols
//! - Byte: 8-bit data (UTF-8, binary, etc.)

/// Alphanumeric mode (0-9, A-Z, space, $%*+-./:)
pub mod alphanumeric;
/// Byte mode (raw 8-bit data)
pub mod byte;
/// Numeric mode (digits only)
pub mod numeric;

use super::bitstream::BitStream;
use crate::error::EncodeError;
use crate::models::Version;
use alphanumeric::AlphanumericEncoder;
use byte::ByteEncoder;
use numeric::NumericEncoder;

/// Data encoding mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Digits only (Mode 0001)
    Numeric,
    /// 45-character set (Mode 0010)
    Alphanumeric,
    /// Raw bytes (Mode 0100)
    Byte,
}

impl Mode {
    /// 4-bit mode indicator
    pub fn mode_bits(self) -> u32 {
        match self {
            Mode::Numeric => 0b0001,
            Mode::Alphanumeric => 0b0010,
            Mode::Byte => 0b0100,
        }
    }

    /// Width of the character count indicator for `version`
    pub fn char_count_bits(self, version: Version) -> usize {
        let widths = match self {
            Mode::Numeric => [10, 12, 14],
            Mode::Alphanumeric => [9, 11, 13],
            Mode::Byte => [8, 16, 16],
        };
        match version.number() {
            1..=9 => widths[0],
            10..=26 => widths[1],
            _ => widths[2],
        }
    }

    /// Body bits needed for `count` characters
    pub fn body_bits(self, count: usize) -> usize {
        match self {
            Mode::Numeric => 10 * (count / 3) + [0, 4, 7][count % 3],
            Mode::Alphanumeric => 11 * (count / 2) + 6 * (count % 2),
            Mode::Byte => 8 * count,
        }
    }
}

/// Pick the densest mode that can represent the whole payload
pub fn select_mode(payload: &[u8]) -> Mode {
    if NumericEncoder::accepts(payload) {
        Mode::Numeric
    } else if AlphanumericEncoder::accepts(payload) {
        Mode::Alphanumeric
    } else {
        Mode::Byte
    }
}

/// Encode the payload body (no mode or count indicator)
pub fn encode_body(payload: &[u8], mode: Mode) -> Result<BitStream, EncodeError> {
    match mode {
        Mode::Numeric => NumericEncoder::encode(payload),
        Mode::Alphanumeric => AlphanumericEncoder::encode(payload),
        Mode::Byte => Ok(ByteEncoder::encode(payload)),
    }
}

//! Format information: EC level + mask pattern, BCH protected and XOR-masked
use super::bch::{BchEncoder, FORMAT_GENERATOR};
use crate::error::EncodeError;
use crate::models::{BitMatrix, ECLevel, MaskPattern, Module, ModuleMatrix};

/// XOR mask applied to the 15-bit format string
pub const FORMAT_MASK: u16 = 0b101_0100_0001_0010;

/// Format info is 15 bits (5 data + 10 ECC), stored twice in the symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatInfo {
    /// Error correction level
    pub ec_level: ECLevel,
    /// Mask applied to the data
    pub mask_pattern: MaskPattern,
}

impl FormatInfo {
    /// Pair an EC level with a mask
    pub fn new(ec_level: ECLevel, mask_pattern: MaskPattern) -> Self {
        Self {
            ec_level,
            mask_pattern,
        }
    }

    /// 15-bit masked format string, bit 14 first
    pub fn bits(&self) -> u16 {
        let data = u32::from(self.ec_level.format_bits() << 3 | self.mask_pattern.index());
        (BchEncoder::encode(data, FORMAT_GENERATOR) as u16) ^ FORMAT_MASK
    }

    /// Module positions of bit `i` (0 = least significant) in both copies
    fn positions(i: usize, size: usize) -> [(usize, usize); 2] {
        // Copy 1 wraps around the top-left finder
        let first = match i {
            0..=5 => (8, i),
            6 => (8, 7),
            7 => (8, 8),
            8 => (7, 8),
            _ => (14 - i, 8),
        };
        // Copy 2 is split between top-right and bottom-left
        let second = if i < 8 {
            (size - 1 - i, 8)
        } else {
            (8, size - 15 + i)
        };
        [first, second]
    }

    /// Write both copies into the reserved format cells
    pub fn draw(&self, matrix: &mut ModuleMatrix) -> Result<(), EncodeError> {
        let bits = self.bits();
        let size = matrix.width();
        for i in 0..15 {
            let dark = (bits >> i) & 1 == 1;
            for (x, y) in Self::positions(i, size) {
                matrix.draw_pixel(x as isize, y as isize, Module::function(dark))?;
            }
        }
        Ok(())
    }

    /// Read the format string back from a finished symbol
    ///
    /// Returns `None` unless both copies agree and pass the BCH check.
    pub fn read(matrix: &BitMatrix) -> Option<Self> {
        let size = matrix.width();
        if size < 21 {
            return None;
        }
        let mut copies = [0u16; 2];
        for i in 0..15 {
            for (copy, (x, y)) in copies.iter_mut().zip(Self::positions(i, size)) {
                *copy |= u16::from(matrix.get(x, y)) << i;
            }
        }
        if copies[0] != copies[1] {
            return None;
        }
        Self::decode(copies[0])
    }

    /// Decode a masked 15-bit format string
    pub fn decode(bits: u16) -> Option<Self> {
        let raw = u32::from(bits ^ FORMAT_MASK);
        if !BchEncoder::is_valid(raw, FORMAT_GENERATOR) {
            return None;
        }
        let data = (raw >> 10) as u8;
        let ec_level = ECLevel::from_format_bits(data >> 3);
        let mask_pattern = MaskPattern::from_bits(data & 0x07).ok()?;
        Some(Self::new(ec_level, mask_pattern))
    }
}

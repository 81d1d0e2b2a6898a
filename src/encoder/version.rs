//! Version information blocks for QR codes v7+
use super::bch::{BchEncoder, VERSION_GENERATOR};
use crate::error::EncodeError;
use crate::models::{BitMatrix, Module, ModuleMatrix, Version};

/// Version info is 18 bits (6 data + 12 ECC) for versions 7-40
pub struct VersionInfo;

impl VersionInfo {
    /// 18-bit version string, `None` below version 7
    pub fn bits(version: Version) -> Option<u32> {
        version
            .has_version_info()
            .then(|| BchEncoder::encode(u32::from(version.number()), VERSION_GENERATOR))
    }

    /// Write the 6x3 block left of the top-right finder and its transpose
    /// above the bottom-left finder
    pub fn draw(version: Version, matrix: &mut ModuleMatrix) -> Result<(), EncodeError> {
        let Some(bits) = Self::bits(version) else {
            return Ok(());
        };
        for i in 0..18 {
            let module = Module::function((bits >> i) & 1 == 1);
            let a = (i % 3) as isize - 11;
            let b = (i / 3) as isize;
            matrix.draw_pixel(a, b, module)?;
            matrix.draw_pixel(b, a, module)?;
        }
        Ok(())
    }

    /// Read the version back from a finished symbol (versions 7+ only)
    pub fn read(matrix: &BitMatrix) -> Option<u8> {
        let size = matrix.width();
        if size < 45 {
            // Version 6 or below - no version info area
            return None;
        }

        let mut top_right = 0u32;
        let mut bottom_left = 0u32;
        for i in 0..18 {
            let a = size - 11 + i % 3;
            let b = i / 3;
            top_right |= u32::from(matrix.get(a, b)) << i;
            bottom_left |= u32::from(matrix.get(b, a)) << i;
        }

        [top_right, bottom_left]
            .into_iter()
            .find(|&bits| BchEncoder::is_valid(bits, VERSION_GENERATOR))
            .map(|bits| (bits >> 12) as u8)
            .filter(|v| (7..=40).contains(v))
    }
}

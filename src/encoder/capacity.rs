//! Character capacities and version selection
use super::modes::Mode;
use super::tables::bit_size_for;
use crate::error::EncodeError;
use crate::models::{ECLevel, Version};

/// Mode indicator width
const MODE_INDICATOR_BITS: usize = 4;

/// Most characters of `mode` that fit `version` at `ec_level`
pub fn char_capacity(version: Version, ec_level: ECLevel, mode: Mode) -> usize {
    let count_bits = mode.char_count_bits(version);
    let Some(avail) = bit_size_for(version, ec_level).checked_sub(MODE_INDICATOR_BITS + count_bits)
    else {
        return 0;
    };
    let chars = match mode {
        Mode::Numeric => {
            let tail = match avail % 10 {
                7..=9 => 2,
                4..=6 => 1,
                _ => 0,
            };
            3 * (avail / 10) + tail
        }
        Mode::Alphanumeric => 2 * (avail / 11) + usize::from(avail % 11 >= 6),
        Mode::Byte => avail / 8,
    };
    // The count indicator must also be able to hold the length
    chars.min((1 << count_bits) - 1)
}

/// Smallest version at or above `min_version` whose capacity holds `length`
pub fn select_version(
    length: usize,
    mode: Mode,
    ec_level: ECLevel,
    min_version: Version,
) -> Result<Version, EncodeError> {
    min_version
        .up_to_max()
        .find(|&v| char_capacity(v, ec_level, mode) >= length)
        .ok_or(EncodeError::PayloadTooLarge {
            mode,
            ec_level,
            length,
        })
}

/// Strongest level at or above `ec_level` that still holds `length` in `version`
pub fn boost_ec_level(version: Version, ec_level: ECLevel, mode: Mode, length: usize) -> ECLevel {
    let mut level = ec_level;
    while let Some(next) = level.stronger() {
        if char_capacity(version, next, mode) < length {
            break;
        }
        level = next;
    }
    level
}

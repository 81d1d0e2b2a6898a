//! Terminator, byte alignment and pad codewords
use super::bitstream::BitStream;
use crate::error::EncodeError;

/// Alternating pad codewords
const PAD_BYTES: [u8; 2] = [0xEC, 0x11];

/// Extend `stream` to exactly `bit_size` bits
///
/// Appends up to four terminator zeros, zero-fills to a byte boundary, then
/// alternates 0xEC / 0x11 until full.
pub fn add_terminal_padding(mut stream: BitStream, bit_size: usize) -> Result<BitStream, EncodeError> {
    if stream.len() > bit_size {
        return Err(EncodeError::LayoutMismatch {
            expected: bit_size,
            actual: stream.len(),
        });
    }

    let terminator = (bit_size - stream.len()).min(4);
    stream.append_bits(0, terminator);

    let misalign = stream.len() % 8;
    if misalign != 0 {
        stream.append_bits(0, (8 - misalign).min(bit_size - stream.len()));
    }

    for &pad in PAD_BYTES.iter().cycle() {
        if bit_size - stream.len() < 8 {
            break;
        }
        stream.append_bits(u32::from(pad), 8);
    }

    if stream.len() != bit_size {
        // Only reachable when bit_size is not a whole number of codewords
        return Err(EncodeError::LayoutMismatch {
            expected: bit_size,
            actual: stream.len(),
        });
    }
    Ok(stream)
}

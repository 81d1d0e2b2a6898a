//! Byte mode encoder (Mode 0100) for 8-bit data
use crate::encoder::bitstream::BitStream;

/// Each byte is copied verbatim (8 bits per character)
pub struct ByteEncoder;

impl ByteEncoder {
    /// Each byte as 8 bits
    pub fn encode(payload: &[u8]) -> BitStream {
        BitStream::from_bytes(payload)
    }
}

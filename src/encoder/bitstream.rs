//! Append-only bit buffer and the mode + count + body data stream
use super::modes::{Mode, encode_body};
use crate::error::EncodeError;
use crate::models::Version;

/// Ordered sequence of bits, MSB-first when packed into bytes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BitStream {
    bits: Vec<bool>,
}

impl BitStream {
    /// Empty stream
    pub fn new() -> Self {
        Self { bits: Vec::new() }
    }

    /// Empty stream with room for `bits` bits
    pub fn with_capacity(bits: usize) -> Self {
        Self {
            bits: Vec::with_capacity(bits),
        }
    }

    /// Number of bits
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// True when no bits were written
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Append one bit
    pub fn push(&mut self, bit: bool) {
        self.bits.push(bit);
    }

    /// Append the low `width` bits of `value`, most significant first
    pub fn append_bits(&mut self, value: u32, width: usize) {
        debug_assert!(width <= 32 && (width == 32 || value >> width == 0));
        self.bits.extend(to_binary(value, width));
    }

    /// Append whole bytes, MSB first
    pub fn append_bytes(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.append_bits(u32::from(b), 8);
        }
    }

    /// Append another stream
    pub fn extend(&mut self, other: &BitStream) {
        self.bits.extend_from_slice(&other.bits);
    }

    /// Bits in write order
    pub fn as_bits(&self) -> &[bool] {
        &self.bits
    }

    /// Pack into bytes; a trailing partial byte is zero-filled
    pub fn to_bytes(&self) -> Vec<u8> {
        self.bits
            .chunks(8)
            .map(|chunk| {
                chunk
                    .iter()
                    .enumerate()
                    .fold(0u8, |acc, (i, &b)| acc | (u8::from(b) << (7 - i)))
            })
            .collect()
    }

    /// Expand codewords into a stream
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let mut stream = Self::with_capacity(bytes.len() * 8);
        stream.append_bytes(bytes);
        stream
    }

    /// Consume into the bit vector
    pub fn into_bits(self) -> Vec<bool> {
        self.bits
    }
}

/// `value` as `width` bits, most significant first
pub fn to_binary(value: u32, width: usize) -> impl Iterator<Item = bool> {
    (0..width).rev().map(move |i| i < 32 && (value >> i) & 1 == 1)
}

/// Inverse of [`to_binary`]
pub fn from_binary(bits: &[bool]) -> u32 {
    bits.iter().fold(0u32, |acc, &b| (acc << 1) | u32::from(b))
}

/// Mode indicator, character count indicator and encoded body
pub fn build_data_stream(
    payload: &[u8],
    mode: Mode,
    version: Version,
) -> Result<BitStream, EncodeError> {
    let mut stream = BitStream::new();
    stream.append_bits(mode.mode_bits(), 4);
    stream.append_bits(payload.len() as u32, mode.char_count_bits(version));
    stream.extend(&encode_body(payload, mode)?);
    Ok(stream)
}

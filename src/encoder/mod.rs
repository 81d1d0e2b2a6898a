//! QR code encoding pipeline
//!
//! Leaf modules first: GF(256) and Reed-Solomon, the mode encoders and bit
//! stream, capacity tables, then layout, placement, masking and the
//! [`qr_encoder::QrEncoder`] that drives them.

/// BCH codes for format and version info
pub mod bch;
/// Bit buffer and mode/count/body data stream
pub mod bitstream;
/// Block grouping, EC per block and interleaving
pub mod blocks;
/// Character capacity, version selection and EC boost
pub mod capacity;
/// Format information (EC level, mask pattern)
pub mod format;
/// GF(256) arithmetic and polynomials
pub mod galois;
/// Function patterns and reserved areas
pub mod layout;
/// Penalty scoring and mask selection
pub mod mask;
/// Data mode encoders (numeric, alphanumeric, byte)
pub mod modes;
/// Terminator and pad codewords
pub mod padding;
/// Zig-zag placement of codeword bits
pub mod placement;
/// Main QR encoder that drives the pipeline
pub mod qr_encoder;
/// Reed-Solomon error correction codewords
pub mod reed_solomon;
/// QR specification tables (ECC codewords/blocks)
pub mod tables;
/// Version information (versions 7-40)
pub mod version;

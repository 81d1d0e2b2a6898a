//! qrweave - QR Code symbol encoder
//!
//! Turns a text or byte payload into a finished QR Code (Model 2, versions
//! 1-40, EC levels L/M/Q/H): mode selection, Reed-Solomon error correction,
//! pattern layout, zig-zag placement and penalty-scored masking.

#![warn(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

/// Environment defaults and per-call encode options
pub mod config;
/// QR code encoding modules (error correction, layout, masking, data modes)
pub mod encoder;
/// Error type shared by every stage
pub mod error;
/// Core data structures (QrCode, BitMatrix, ModuleMatrix, etc.)
pub mod models;
/// Rendering helpers (grayscale image, PNG, ASCII)
pub mod tools;

pub use config::EncodeOptions;
pub use encoder::modes::Mode;
pub use error::EncodeError;
pub use models::{BitMatrix, ECLevel, MaskPattern, QrCode, Version};

use encoder::modes::select_mode;
use encoder::qr_encoder::QrEncoder;
use rayon::prelude::*;

/// Encode text at the given error correction level
///
/// The densest mode that covers the whole payload is chosen (numeric,
/// alphanumeric, then byte over the UTF-8 encoding) and the smallest version
/// that holds it is used.
///
/// # Example
/// ```
/// use qrweave::{ECLevel, encode};
///
/// let qr = encode("HELLO WORLD", ECLevel::M).unwrap();
/// assert_eq!(qr.width(), 21);
/// ```
pub fn encode(payload: &str, ec_level: ECLevel) -> Result<QrCode, EncodeError> {
    encode_with_options(payload, &EncodeOptions::new(ec_level))
}

/// Encode text with explicit options (mask override, minimum version, EC boost)
pub fn encode_with_options(payload: &str, options: &EncodeOptions) -> Result<QrCode, EncodeError> {
    let bytes = payload.as_bytes();
    QrEncoder::encode(bytes, select_mode(bytes), options)
}

/// Encode arbitrary binary data in byte mode
pub fn encode_bytes(data: &[u8], options: &EncodeOptions) -> Result<QrCode, EncodeError> {
    QrEncoder::encode(data, Mode::Byte, options)
}

/// Encode many payloads in parallel; results keep the input order
pub fn encode_batch(payloads: &[&str], ec_level: ECLevel) -> Vec<Result<QrCode, EncodeError>> {
    let options = EncodeOptions::new(ec_level);
    payloads
        .par_iter()
        .map(|payload| encode_with_options(payload, &options))
        .collect()
}

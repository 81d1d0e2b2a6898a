use crate::encoder::modes::Mode;
use crate::encoder::qr_encoder::SymbolStage;
use crate::models::ECLevel;
use thiserror::Error;

/// Everything that can go wrong while building a symbol.
///
/// Only [`EncodeError::PayloadTooLarge`] is expected in normal use. The other
/// variants mean a table, layout or padding step disagrees with itself.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// No version 1-40 holds the payload at the requested level
    #[error("payload of {length} characters does not fit any version ({mode:?} mode, EC level {ec_level:?})")]
    PayloadTooLarge {
        /// Mode the payload was classified into
        mode: Mode,
        /// Requested error correction level
        ec_level: ECLevel,
        /// Character count (bytes in byte mode)
        length: usize,
    },

    /// A numeric/alphanumeric encoder was handed a character outside its charset
    #[error("character {ch:?} cannot be encoded in {mode:?} mode")]
    UnsupportedCharacter {
        /// Offending character
        ch: char,
        /// Mode whose charset rejected it
        mode: Mode,
    },

    /// GF(256) division with a zero divisor
    #[error("division by zero in GF(256)")]
    DivisionByZero,

    /// Canvas write outside the grid under the rejecting policy
    #[error("module ({x}, {y}) is outside the {width}x{height} canvas")]
    OutOfBounds {
        /// Requested column (before wraparound)
        x: isize,
        /// Requested row (before wraparound)
        y: isize,
        /// Canvas width
        width: usize,
        /// Canvas height
        height: usize,
    },

    /// Bit or codeword count disagrees with the space reserved for it
    #[error("layout mismatch: expected {expected}, got {actual}")]
    LayoutMismatch {
        /// Count the layout calls for
        expected: usize,
        /// Count actually produced
        actual: usize,
    },

    /// A build step was called out of order
    #[error("symbol is at stage {actual:?}, expected {expected:?}")]
    InvalidStage {
        /// Stage the step requires
        expected: SymbolStage,
        /// Stage the symbol is in
        actual: SymbolStage,
    },

    /// Version number outside 1-40
    #[error("version {0} is outside 1-40")]
    InvalidVersion(u8),

    /// Mask index outside 0-7
    #[error("mask pattern {0} is outside 0-7")]
    InvalidMask(u8),
}

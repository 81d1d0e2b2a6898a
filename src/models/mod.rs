/// Packed bit matrix
pub mod matrix;
/// Module canvas used while building a symbol
pub mod module;
/// Finished symbol and its parameters
pub mod qr_code;

pub use matrix::BitMatrix;
pub use module::{Module, ModuleMatrix, OutOfBoundsPolicy};
pub use qr_code::{ECLevel, MaskPattern, QrCode, Version};

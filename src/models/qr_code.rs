use super::BitMatrix;
use crate::encoder::modes::Mode;
use crate::error::EncodeError;
use std::fmt;
use std::str::FromStr;

/// QR code version (1-40, Model 2)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version(u8);

impl Version {
    /// Smallest symbol (21x21)
    pub const MIN: Version = Version(1);
    /// Largest symbol (177x177)
    pub const MAX: Version = Version(40);

    /// Create a version, rejecting numbers outside 1-40
    pub fn new(number: u8) -> Result<Self, EncodeError> {
        if (Self::MIN.0..=Self::MAX.0).contains(&number) {
            Ok(Self(number))
        } else {
            Err(EncodeError::InvalidVersion(number))
        }
    }

    /// Get the version number
    pub fn number(&self) -> u8 {
        self.0
    }

    /// Get the size in modules (width = height)
    pub fn size(&self) -> usize {
        4 * self.0 as usize + 17
    }

    /// Whether the symbol carries version information blocks
    pub fn has_version_info(&self) -> bool {
        self.0 >= 7
    }

    /// Iterate all versions from `self` up to 40
    pub fn up_to_max(self) -> impl Iterator<Item = Version> {
        (self.0..=Self::MAX.0).map(Version)
    }

    /// Iterate every version 1-40
    pub fn all() -> impl Iterator<Item = Version> {
        Self::MIN.up_to_max()
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error correction level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ECLevel {
    /// Low (~7% recovery capacity)
    L = 0,
    /// Medium (~15% recovery capacity)
    M = 1,
    /// Quartile (~25% recovery capacity)
    Q = 2,
    /// High (~30% recovery capacity)
    H = 3,
}

impl ECLevel {
    /// All levels from weakest to strongest
    pub const ALL: [ECLevel; 4] = [ECLevel::L, ECLevel::M, ECLevel::Q, ECLevel::H];

    /// Row index into the per-level tables
    pub fn ordinal(self) -> usize {
        self as usize
    }

    /// 2-bit code written into format information (L=01, M=00, Q=11, H=10)
    pub fn format_bits(self) -> u8 {
        match self {
            ECLevel::L => 0b01,
            ECLevel::M => 0b00,
            ECLevel::Q => 0b11,
            ECLevel::H => 0b10,
        }
    }

    /// Inverse of [`ECLevel::format_bits`]
    pub fn from_format_bits(bits: u8) -> Self {
        match bits & 0x03 {
            0b01 => ECLevel::L,
            0b00 => ECLevel::M,
            0b11 => ECLevel::Q,
            _ => ECLevel::H,
        }
    }

    /// Next stronger level, if any
    pub fn stronger(self) -> Option<Self> {
        match self {
            ECLevel::L => Some(ECLevel::M),
            ECLevel::M => Some(ECLevel::Q),
            ECLevel::Q => Some(ECLevel::H),
            ECLevel::H => None,
        }
    }
}

impl FromStr for ECLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "L" | "LOW" => Ok(ECLevel::L),
            "M" | "MEDIUM" => Ok(ECLevel::M),
            "Q" | "QUARTILE" => Ok(ECLevel::Q),
            "H" | "HIGH" => Ok(ECLevel::H),
            other => Err(format!("unknown error correction level '{}'", other)),
        }
    }
}

/// Mask pattern (0-7)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MaskPattern {
    /// (i + j) % 2 == 0
    Pattern0 = 0,
    /// i % 2 == 0
    Pattern1 = 1,
    /// j % 3 == 0
    Pattern2 = 2,
    /// (i + j) % 3 == 0
    Pattern3 = 3,
    /// (i/2 + j/3) % 2 == 0
    Pattern4 = 4,
    /// (i*j)%2 + (i*j)%3 == 0
    Pattern5 = 5,
    /// ((i*j)%2 + (i*j)%3) % 2 == 0
    Pattern6 = 6,
    /// ((i+j)%2 + (i*j)%3) % 2 == 0
    Pattern7 = 7,
}

impl MaskPattern {
    /// All eight patterns in index order
    pub const ALL: [MaskPattern; 8] = [
        MaskPattern::Pattern0,
        MaskPattern::Pattern1,
        MaskPattern::Pattern2,
        MaskPattern::Pattern3,
        MaskPattern::Pattern4,
        MaskPattern::Pattern5,
        MaskPattern::Pattern6,
        MaskPattern::Pattern7,
    ];

    /// Get mask pattern from its 3-bit index
    pub fn from_bits(bits: u8) -> Result<Self, EncodeError> {
        Self::ALL
            .get(bits as usize)
            .copied()
            .ok_or(EncodeError::InvalidMask(bits))
    }

    /// 3-bit index
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Check if module at (row i, column j) is flipped
    pub fn is_masked(&self, i: usize, j: usize) -> bool {
        match self {
            MaskPattern::Pattern0 => (i + j) % 2 == 0,
            MaskPattern::Pattern1 => i % 2 == 0,
            MaskPattern::Pattern2 => j % 3 == 0,
            MaskPattern::Pattern3 => (i + j) % 3 == 0,
            MaskPattern::Pattern4 => (i / 2 + j / 3) % 2 == 0,
            MaskPattern::Pattern5 => ((i * j) % 2 + (i * j) % 3) == 0,
            MaskPattern::Pattern6 => (((i * j) % 2) + ((i * j) % 3)) % 2 == 0,
            MaskPattern::Pattern7 => (((i + j) % 2) + ((i * j) % 3)) % 2 == 0,
        }
    }
}

/// Finished QR code symbol
///
/// A read-only snapshot: modules are final colours with the mask already
/// applied, packed into a [`BitMatrix`] (true = dark).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QrCode {
    version: Version,
    ec_level: ECLevel,
    mask_pattern: MaskPattern,
    mode: Mode,
    modules: BitMatrix,
}

impl QrCode {
    pub(crate) fn new(
        version: Version,
        ec_level: ECLevel,
        mask_pattern: MaskPattern,
        mode: Mode,
        modules: BitMatrix,
    ) -> Self {
        Self {
            version,
            ec_level,
            mask_pattern,
            mode,
            modules,
        }
    }

    /// Symbol width in modules
    pub fn width(&self) -> usize {
        self.modules.width()
    }

    /// Symbol height in modules
    pub fn height(&self) -> usize {
        self.modules.height()
    }

    /// Final colour of the module at (x, y); true = dark
    ///
    /// Coordinates outside the symbol read as light, which lets renderers
    /// draw a quiet zone without special cases.
    pub fn get_masked_pixel(&self, x: usize, y: usize) -> bool {
        self.modules.get(x, y)
    }

    /// QR code version
    pub fn version(&self) -> Version {
        self.version
    }

    /// Error correction level
    pub fn ec_level(&self) -> ECLevel {
        self.ec_level
    }

    /// Mask pattern applied to the data modules
    pub fn mask(&self) -> MaskPattern {
        self.mask_pattern
    }

    /// Mode the payload was encoded in
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Packed module matrix
    pub fn modules(&self) -> &BitMatrix {
        &self.modules
    }
}

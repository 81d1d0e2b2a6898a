use crate::models::{ECLevel, MaskPattern, Version};
use std::sync::OnceLock;

fn parse_env_usize(name: &str, default: usize) -> usize {
    std::env::var(name)
        .ok()
        .and_then(|v| v.trim().parse::<usize>().ok())
        .unwrap_or(default)
}

fn parse_env_u8(name: &str) -> Option<u8> {
    std::env::var(name)
        .ok()
        .and_then(|v| v.trim().parse::<u8>().ok())
}

static DEBUG_ENABLED: OnceLock<bool> = OnceLock::new();

pub(crate) fn debug_enabled() -> bool {
    *DEBUG_ENABLED.get_or_init(|| std::env::var("QR_DEBUG").is_ok())
}

static MASK_OVERRIDE: OnceLock<Option<MaskPattern>> = OnceLock::new();

/// `QR_MASK=0..7` forces a mask pattern; anything else is ignored
pub fn mask_override() -> Option<MaskPattern> {
    *MASK_OVERRIDE.get_or_init(|| parse_env_u8("QR_MASK").and_then(|m| MaskPattern::from_bits(m).ok()))
}

static DEFAULT_EC_LEVEL: OnceLock<ECLevel> = OnceLock::new();

/// `QR_EC_LEVEL=L|M|Q|H`, medium when unset or invalid
pub fn default_ec_level() -> ECLevel {
    *DEFAULT_EC_LEVEL.get_or_init(|| {
        std::env::var("QR_EC_LEVEL")
            .ok()
            .and_then(|v| v.parse::<ECLevel>().ok())
            .unwrap_or(ECLevel::M)
    })
}

static DEFAULT_SCALE: OnceLock<usize> = OnceLock::new();

/// Pixels per module for rendered images
pub fn default_scale() -> usize {
    *DEFAULT_SCALE.get_or_init(|| parse_env_usize("QR_SCALE", 8).clamp(1, 64))
}

static DEFAULT_BORDER: OnceLock<usize> = OnceLock::new();

/// Quiet zone width in modules for rendered images
pub fn default_border() -> usize {
    *DEFAULT_BORDER.get_or_init(|| parse_env_usize("QR_BORDER", 4).min(32))
}

/// Knobs for a single encode call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodeOptions {
    /// Requested error correction level
    pub ec_level: ECLevel,
    /// Use this mask instead of the lowest-penalty one
    pub mask: Option<MaskPattern>,
    /// Smallest version to consider
    pub min_version: Version,
    /// Raise the EC level while the payload still fits the selected version
    pub boost_ec: bool,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self {
            ec_level: ECLevel::M,
            mask: None,
            min_version: Version::MIN,
            boost_ec: false,
        }
    }
}

impl EncodeOptions {
    /// Defaults with the given EC level
    pub fn new(ec_level: ECLevel) -> Self {
        Self {
            ec_level,
            ..Self::default()
        }
    }

    /// Defaults taken from `QR_EC_LEVEL` and `QR_MASK`
    pub fn from_env() -> Self {
        Self {
            ec_level: default_ec_level(),
            mask: mask_override(),
            ..Self::default()
        }
    }

    /// Set the EC level
    pub fn with_ec_level(mut self, ec_level: ECLevel) -> Self {
        self.ec_level = ec_level;
        self
    }

    /// Force a mask pattern
    pub fn with_mask(mut self, mask: MaskPattern) -> Self {
        self.mask = Some(mask);
        self
    }

    /// Set the smallest version to consider
    pub fn with_min_version(mut self, min_version: Version) -> Self {
        self.min_version = min_version;
        self
    }

    /// Enable or disable EC boosting
    pub fn with_boost_ec(mut self, boost_ec: bool) -> Self {
        self.boost_ec = boost_ec;
        self
    }
}

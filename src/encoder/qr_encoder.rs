//! Main QR code encoder - wires everything together
use crate::config::{EncodeOptions, debug_enabled};
use crate::encoder::bitstream::{BitStream, build_data_stream};
use crate::encoder::blocks::build_codewords;
use crate::encoder::capacity::{boost_ec_level, select_version};
use crate::encoder::format::FormatInfo;
use crate::encoder::layout::LayoutDrawer;
use crate::encoder::mask::Masker;
use crate::encoder::modes::Mode;
use crate::encoder::padding::add_terminal_padding;
use crate::encoder::placement::PayloadPlacer;
use crate::encoder::tables::{bit_size_for, block_layout, remainder_bits};
use crate::encoder::version::VersionInfo;
use crate::error::EncodeError;
use crate::models::{ECLevel, MaskPattern, ModuleMatrix, QrCode, Version};

/// Build progress of a symbol; each step moves it forward exactly once
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SymbolStage {
    /// Blank canvas
    Empty,
    /// Function patterns drawn, format/version areas reserved
    LayoutDrawn,
    /// Every free module holds a data bit
    PayloadPlaced,
    /// Mask chosen and baked into the data bits
    Masked,
    /// Format and version information written
    Finalized,
}

/// One symbol under construction
pub struct QrEncoder {
    version: Version,
    ec_level: ECLevel,
    mode: Mode,
    matrix: ModuleMatrix,
    mask: Option<MaskPattern>,
    stage: SymbolStage,
}

impl QrEncoder {
    /// Blank canvas sized for `version`
    pub fn new(version: Version, ec_level: ECLevel, mode: Mode) -> Self {
        Self {
            version,
            ec_level,
            mode,
            matrix: ModuleMatrix::square(version.size()),
            mask: None,
            stage: SymbolStage::Empty,
        }
    }

    /// Run the whole pipeline for a payload already classified into `mode`
    pub fn encode(payload: &[u8], mode: Mode, options: &EncodeOptions) -> Result<QrCode, EncodeError> {
        let length = payload.len();
        let version = select_version(length, mode, options.ec_level, options.min_version)?;
        let ec_level = if options.boost_ec {
            boost_ec_level(version, options.ec_level, mode, length)
        } else {
            options.ec_level
        };

        if cfg!(debug_assertions) && debug_enabled() {
            eprintln!(
                "[DEBUG] {} chars, mode {:?}, version {}, EC {:?}",
                length, mode, version, ec_level
            );
        }

        let bits = Self::codeword_bits(payload, mode, version, ec_level)?;

        let mut encoder = Self::new(version, ec_level, mode);
        encoder.draw_layout()?;
        encoder.place_payload(&bits)?;
        encoder.apply_mask(options.mask)?;
        encoder.write_info()?;
        encoder.finish()
    }

    /// Padded, interleaved codewords plus remainder bits, ready for placement
    pub fn codeword_bits(
        payload: &[u8],
        mode: Mode,
        version: Version,
        ec_level: ECLevel,
    ) -> Result<Vec<bool>, EncodeError> {
        let stream = build_data_stream(payload, mode, version)?;
        let padded = add_terminal_padding(stream, bit_size_for(version, ec_level))?;
        let codewords = build_codewords(&padded.to_bytes(), &block_layout(version, ec_level))?;

        let mut bits = BitStream::from_bytes(&codewords);
        bits.append_bits(0, remainder_bits(version));
        Ok(bits.into_bits())
    }

    /// Current lifecycle stage
    pub fn stage(&self) -> SymbolStage {
        self.stage
    }

    /// Canvas as drawn so far
    pub fn matrix(&self) -> &ModuleMatrix {
        &self.matrix
    }

    fn advance(&mut self, expected: SymbolStage, next: SymbolStage) -> Result<(), EncodeError> {
        if self.stage != expected {
            return Err(EncodeError::InvalidStage {
                expected,
                actual: self.stage,
            });
        }
        self.stage = next;
        Ok(())
    }

    /// Function patterns and reserved areas
    pub fn draw_layout(&mut self) -> Result<(), EncodeError> {
        self.advance(SymbolStage::Empty, SymbolStage::LayoutDrawn)?;
        LayoutDrawer::draw(self.version, &mut self.matrix)
    }

    /// Zig-zag the codeword bits into every free module
    pub fn place_payload(&mut self, bits: &[bool]) -> Result<(), EncodeError> {
        self.advance(SymbolStage::LayoutDrawn, SymbolStage::PayloadPlaced)?;
        PayloadPlacer::place(bits, &mut self.matrix)
    }

    /// Commit `forced`, or the lowest-penalty mask when `None`
    pub fn apply_mask(&mut self, forced: Option<MaskPattern>) -> Result<MaskPattern, EncodeError> {
        self.advance(SymbolStage::PayloadPlaced, SymbolStage::Masked)?;
        let mask = match forced {
            Some(mask) => mask,
            None => {
                let scores = Masker::score_all(&mut self.matrix);
                if cfg!(debug_assertions) && debug_enabled() {
                    eprintln!("[DEBUG] Mask penalties: {:?}", scores);
                }
                Masker::lowest(&scores)
            }
        };
        if cfg!(debug_assertions) && debug_enabled() {
            eprintln!("[DEBUG] Using mask {}", mask.index());
        }
        Masker::commit(&mut self.matrix, mask);
        self.mask = Some(mask);
        Ok(mask)
    }

    /// Format and version information into their reserved cells
    pub fn write_info(&mut self) -> Result<(), EncodeError> {
        let mask = self.mask.ok_or(EncodeError::InvalidStage {
            expected: SymbolStage::Masked,
            actual: self.stage,
        })?;
        self.advance(SymbolStage::Masked, SymbolStage::Finalized)?;
        FormatInfo::new(self.ec_level, mask).draw(&mut self.matrix)?;
        VersionInfo::draw(self.version, &mut self.matrix)
    }

    /// Hand out the finished symbol
    pub fn finish(self) -> Result<QrCode, EncodeError> {
        match (self.stage, self.mask) {
            (SymbolStage::Finalized, Some(mask)) => Ok(QrCode::new(
                self.version,
                self.ec_level,
                mask,
                self.mode,
                self.matrix.to_bit_matrix(),
            )),
            (actual, _) => Err(EncodeError::InvalidStage {
                expected: SymbolStage::Finalized,
                actual,
            }),
        }
    }
}

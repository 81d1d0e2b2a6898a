//! Function patterns and reserved areas
use crate::error::EncodeError;
use crate::models::{Module, ModuleMatrix, Version};

const DARK: Module = Module::FunctionDark;
const LIGHT: Module = Module::FunctionLight;

/// Alignment pattern centers for a given version.
pub fn alignment_positions(version: Version) -> Vec<usize> {
    let v = version.number() as usize;
    if v == 1 {
        return Vec::new();
    }
    let num_align = v / 7 + 2;
    let step = if v == 32 {
        26
    } else {
        (v * 4 + num_align * 2 + 1) / (num_align * 2 - 2) * 2
    };

    let last = version.size() - 7;
    let mut positions = vec![6usize; num_align];
    for (i, slot) in positions.iter_mut().enumerate().skip(1) {
        *slot = last - (num_align - 1 - i) * step;
    }
    positions
}

/// Draws everything that is not payload onto a fresh canvas
pub struct LayoutDrawer;

impl LayoutDrawer {
    /// Draw the full function layout for `version`; the canvas must be sized for it
    pub fn draw(version: Version, matrix: &mut ModuleMatrix) -> Result<(), EncodeError> {
        let size = version.size();
        if matrix.width() != size || matrix.height() != size {
            return Err(EncodeError::LayoutMismatch {
                expected: size,
                actual: matrix.width(),
            });
        }

        Self::draw_finders(matrix)?;
        Self::draw_alignment(version, matrix)?;
        Self::draw_timing(matrix)?;
        // Dark module
        matrix.draw_pixel(8, -8, DARK)?;
        Self::reserve_format(matrix)?;
        if version.has_version_info() {
            Self::reserve_version(matrix)?;
        }
        Ok(())
    }

    fn draw_finders(matrix: &mut ModuleMatrix) -> Result<(), EncodeError> {
        for (x, y) in [(0, 0), (-7, 0), (0, -7)] {
            matrix.draw_rect(x, y, 7, 7, DARK)?;
            matrix.draw_rect(x + 1, y + 1, 5, 5, LIGHT)?;
            matrix.fill_rect(x + 2, y + 2, 3, 3, DARK)?;
        }
        // Separators
        matrix.draw_hline(0, 7, 8, LIGHT)?;
        matrix.draw_vline(7, 0, 8, LIGHT)?;
        matrix.draw_hline(-8, 7, 8, LIGHT)?;
        matrix.draw_vline(-8, 0, 8, LIGHT)?;
        matrix.draw_hline(0, -8, 8, LIGHT)?;
        matrix.draw_vline(7, -8, 8, LIGHT)
    }

    fn draw_alignment(version: Version, matrix: &mut ModuleMatrix) -> Result<(), EncodeError> {
        let positions = alignment_positions(version);
        for &cy in &positions {
            for &cx in &positions {
                let (cx, cy) = (cx as isize, cy as isize);
                // Centres under a finder are skipped
                if matrix.get(cx, cy) != Some(Module::Unset) {
                    continue;
                }
                matrix.draw_rect(cx - 2, cy - 2, 5, 5, DARK)?;
                matrix.draw_rect(cx - 1, cy - 1, 3, 3, LIGHT)?;
                matrix.draw_pixel(cx, cy, DARK)?;
            }
        }
        Ok(())
    }

    fn draw_timing(matrix: &mut ModuleMatrix) -> Result<(), EncodeError> {
        for i in 0..matrix.width() as isize {
            let module = Module::function(i % 2 == 0);
            if matrix.get(i, 6) == Some(Module::Unset) {
                matrix.draw_pixel(i, 6, module)?;
            }
            if matrix.get(6, i) == Some(Module::Unset) {
                matrix.draw_pixel(6, i, module)?;
            }
        }
        Ok(())
    }

    fn reserve_format(matrix: &mut ModuleMatrix) -> Result<(), EncodeError> {
        // Beside the top-left finder
        matrix.reserve_rect(0, 8, 9, 1)?;
        matrix.reserve_rect(8, 0, 1, 9)?;
        // Under the top-right finder and beside the bottom-left one
        matrix.reserve_rect(-8, 8, 8, 1)?;
        matrix.reserve_rect(8, -7, 1, 7)
    }

    fn reserve_version(matrix: &mut ModuleMatrix) -> Result<(), EncodeError> {
        matrix.reserve_rect(-11, 0, 3, 6)?;
        matrix.reserve_rect(0, -11, 6, 3)
    }
}

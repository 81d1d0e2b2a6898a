//! Zig-zag data placement
use crate::error::EncodeError;
use crate::models::{Module, ModuleMatrix};

/// Fills the `Unset` cells of a laid-out canvas with payload bits
pub struct PayloadPlacer;

impl PayloadPlacer {
    /// `Unset` cells in placement order
    ///
    /// Column pairs run right to left (column 6 is skipped as a whole), the
    /// first pair upward, then alternating; the right column of a pair is
    /// visited before the left one on every row.
    pub fn zigzag_order(matrix: &ModuleMatrix) -> Vec<(usize, usize)> {
        Self::walk(matrix, |m| m == Module::Unset)
    }

    fn walk(matrix: &ModuleMatrix, take: impl Fn(Module) -> bool) -> Vec<(usize, usize)> {
        let width = matrix.width() as isize;
        let height = matrix.height();
        let mut cells = Vec::with_capacity(matrix.unset_count());

        let mut upward = true;
        let mut col = width - 1;
        while col > 0 {
            if col == 6 {
                col -= 1;
                continue;
            }

            let mut visit = |row: usize| {
                for c in [col as usize, col as usize - 1] {
                    if take(matrix.module(c, row)) {
                        cells.push((c, row));
                    }
                }
            };

            if upward {
                (0..height).rev().for_each(&mut visit);
            } else {
                (0..height).for_each(&mut visit);
            }

            upward = !upward;
            col -= 2;
        }
        cells
    }

    /// Write `bits` into the canvas; the count must match the free cells exactly
    pub fn place(bits: &[bool], matrix: &mut ModuleMatrix) -> Result<(), EncodeError> {
        let order = Self::zigzag_order(matrix);
        if bits.len() != order.len() {
            return Err(EncodeError::LayoutMismatch {
                expected: order.len(),
                actual: bits.len(),
            });
        }
        for (&(x, y), &bit) in order.iter().zip(bits) {
            matrix.draw_pixel(x as isize, y as isize, Module::DataBit(bit))?;
        }
        Ok(())
    }

    /// Data bits in placement order (as stored, masked or not)
    pub fn extract(matrix: &ModuleMatrix) -> Vec<bool> {
        Self::walk(matrix, |m| !m.is_function())
            .into_iter()
            .filter_map(|(x, y)| match matrix.module(x, y) {
                Module::DataBit(bit) => Some(bit),
                _ => None,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::layout::LayoutDrawer;
    use crate::models::Version;

    fn laid_out(n: u8) -> ModuleMatrix {
        let version = Version::new(n).unwrap();
        let mut matrix = ModuleMatrix::square(version.size());
        LayoutDrawer::draw(version, &mut matrix).unwrap();
        matrix
    }

    #[test]
    fn test_first_cells_of_version_1() {
        let matrix = laid_out(1);
        let order = PayloadPlacer::zigzag_order(&matrix);
        assert_eq!(order.len(), 208);
        assert_eq!(&order[..4], &[(20, 20), (19, 20), (20, 19), (19, 19)]);
        // Second column pair runs downward from the top free row
        let down = order.iter().position(|&(x, _)| x == 18).unwrap();
        assert_eq!(order[down], (18, 9));
        // Column 6 is never used
        assert!(order.iter().all(|&(x, _)| x != 6));
    }

    #[test]
    fn test_place_fills_every_free_cell() {
        let mut matrix = laid_out(3);
        let free = matrix.unset_count();
        let bits: Vec<bool> = (0..free).map(|i| i % 5 == 0).collect();
        PayloadPlacer::place(&bits, &mut matrix).unwrap();
        assert_eq!(matrix.unset_count(), 0);
        assert_eq!(PayloadPlacer::extract(&matrix), bits);
    }

    #[test]
    fn test_bit_count_mismatch() {
        let mut matrix = laid_out(1);
        assert_eq!(
            PayloadPlacer::place(&[true; 207], &mut matrix),
            Err(EncodeError::LayoutMismatch {
                expected: 208,
                actual: 207,
            })
        );
        assert_eq!(
            PayloadPlacer::place(&[true; 209], &mut matrix),
            Err(EncodeError::LayoutMismatch {
                expected: 208,
                actual: 209,
            })
        );
        assert_eq!(matrix.unset_count(), 208);
    }
}

use super::{BitMatrix, MaskPattern};
use crate::error::EncodeError;

/// State of a single cell while a symbol is being built
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Module {
    /// Waiting for a data bit
    #[default]
    Unset,
    /// Payload bit (true = dark before masking)
    DataBit(bool),
    /// Reserved light cell, never masked
    FunctionLight,
    /// Function pattern dark cell, never masked
    FunctionDark,
}

impl Module {
    /// Function module of the given colour
    pub fn function(dark: bool) -> Self {
        if dark {
            Module::FunctionDark
        } else {
            Module::FunctionLight
        }
    }

    /// True for finder/timing/alignment/reserved cells
    pub fn is_function(self) -> bool {
        matches!(self, Module::FunctionLight | Module::FunctionDark)
    }
}

/// What a write outside the grid does
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutOfBoundsPolicy {
    /// Fail with [`EncodeError::OutOfBounds`]
    #[default]
    Reject,
    /// Drop the write
    Ignore,
}

/// Module grid used while laying out a symbol
///
/// Coordinates are signed: a negative `x` or `y` counts back from the far
/// edge once (`-1` is the last column), so layout code can address
/// "8 from the right" the same way as "8 from the left".
#[derive(Debug, Clone)]
pub struct ModuleMatrix {
    width: usize,
    height: usize,
    cells: Vec<Module>,
    policy: OutOfBoundsPolicy,
    mask: Option<MaskPattern>,
}

impl ModuleMatrix {
    /// Create an all-`Unset` grid
    pub fn new(width: usize, height: usize, policy: OutOfBoundsPolicy) -> Self {
        Self {
            width,
            height,
            cells: vec![Module::Unset; width * height],
            policy,
            mask: None,
        }
    }

    /// Square grid rejecting out-of-range writes
    pub fn square(size: usize) -> Self {
        Self::new(size, size, OutOfBoundsPolicy::Reject)
    }

    /// Get grid width
    pub fn width(&self) -> usize {
        self.width
    }

    /// Get grid height
    pub fn height(&self) -> usize {
        self.height
    }

    fn resolve(&self, x: isize, y: isize) -> Option<usize> {
        let wrap = |v: isize, len: usize| -> Option<usize> {
            let v = if v < 0 { len as isize + v } else { v };
            (0..len as isize).contains(&v).then_some(v as usize)
        };
        let cx = wrap(x, self.width)?;
        let cy = wrap(y, self.height)?;
        Some(cy * self.width + cx)
    }

    /// Cell at (x, y) with wraparound, `None` outside the grid
    pub fn get(&self, x: isize, y: isize) -> Option<Module> {
        self.resolve(x, y).map(|i| self.cells[i])
    }

    /// Cell at non-negative (x, y)
    pub fn module(&self, x: usize, y: usize) -> Module {
        self.cells[y * self.width + x]
    }

    /// Write a cell, honouring the out-of-bounds policy
    pub fn draw_pixel(&mut self, x: isize, y: isize, value: Module) -> Result<(), EncodeError> {
        match self.resolve(x, y) {
            Some(i) => {
                self.cells[i] = value;
                Ok(())
            }
            None => match self.policy {
                OutOfBoundsPolicy::Ignore => Ok(()),
                OutOfBoundsPolicy::Reject => Err(EncodeError::OutOfBounds {
                    x,
                    y,
                    width: self.width,
                    height: self.height,
                }),
            },
        }
    }

    /// Mark a cell `FunctionLight` only if it is still `Unset`
    pub fn reserve_pixel(&mut self, x: isize, y: isize) -> Result<(), EncodeError> {
        match self.get(x, y) {
            Some(Module::Unset) | None => self.draw_pixel(x, y, Module::FunctionLight),
            Some(_) => Ok(()),
        }
    }

    /// Horizontal run of `len` cells starting at (x, y)
    pub fn draw_hline(
        &mut self,
        x: isize,
        y: isize,
        len: usize,
        value: Module,
    ) -> Result<(), EncodeError> {
        for dx in 0..len as isize {
            self.draw_pixel(x + dx, y, value)?;
        }
        Ok(())
    }

    /// Vertical run of `len` cells starting at (x, y)
    pub fn draw_vline(
        &mut self,
        x: isize,
        y: isize,
        len: usize,
        value: Module,
    ) -> Result<(), EncodeError> {
        for dy in 0..len as isize {
            self.draw_pixel(x, y + dy, value)?;
        }
        Ok(())
    }

    /// One-module outline of a `w` x `h` rectangle
    pub fn draw_rect(
        &mut self,
        x: isize,
        y: isize,
        w: usize,
        h: usize,
        value: Module,
    ) -> Result<(), EncodeError> {
        if w == 0 || h == 0 {
            return Ok(());
        }
        let (right, bottom) = (x + w as isize - 1, y + h as isize - 1);
        self.draw_hline(x, y, w, value)?;
        self.draw_hline(x, bottom, w, value)?;
        self.draw_vline(x, y, h, value)?;
        self.draw_vline(right, y, h, value)
    }

    /// Solid `w` x `h` rectangle
    pub fn fill_rect(
        &mut self,
        x: isize,
        y: isize,
        w: usize,
        h: usize,
        value: Module,
    ) -> Result<(), EncodeError> {
        for dy in 0..h as isize {
            self.draw_hline(x, y + dy, w, value)?;
        }
        Ok(())
    }

    /// Reserve every still-`Unset` cell of a `w` x `h` rectangle
    pub fn reserve_rect(&mut self, x: isize, y: isize, w: usize, h: usize) -> Result<(), EncodeError> {
        for dy in 0..h as isize {
            for dx in 0..w as isize {
                self.reserve_pixel(x + dx, y + dy)?;
            }
        }
        Ok(())
    }

    /// Number of cells still waiting for data
    pub fn unset_count(&self) -> usize {
        self.cells.iter().filter(|m| **m == Module::Unset).count()
    }

    /// Select the mask seen by [`ModuleMatrix::masked_pixel`]; stored bits are untouched
    pub fn apply_mask(&mut self, mask: Option<MaskPattern>) {
        self.mask = mask;
    }

    /// Currently selected mask
    pub fn active_mask(&self) -> Option<MaskPattern> {
        self.mask
    }

    /// Colour of (x, y) under the active mask (true = dark)
    ///
    /// `Unset` cells read as a light data bit.
    pub fn masked_pixel(&self, x: usize, y: usize) -> bool {
        let bit = match self.module(x, y) {
            Module::FunctionDark => return true,
            Module::FunctionLight => return false,
            Module::DataBit(bit) => bit,
            Module::Unset => false,
        };
        match self.mask {
            Some(mask) => bit ^ mask.is_masked(y, x),
            None => bit,
        }
    }

    /// Permanently XOR every `DataBit` with `mask`
    ///
    /// Applying the same mask twice restores the original bits.
    pub fn xor_data_bits(&mut self, mask: MaskPattern) {
        let width = self.width;
        for (i, cell) in self.cells.iter_mut().enumerate() {
            if let Module::DataBit(bit) = cell {
                *bit ^= mask.is_masked(i / width, i % width);
            }
        }
    }

    /// Snapshot of the masked view
    pub fn to_bit_matrix(&self) -> BitMatrix {
        BitMatrix::from_fn(self.width, self.height, |x, y| self.masked_pixel(x, y))
    }
}

use crate::models::{BitMatrix, QrCode};
use image::{GrayImage, Luma};
use std::path::Path;

const DARK: Luma<u8> = Luma([0]);
const LIGHT: Luma<u8> = Luma([255]);

/// Render a symbol as a grayscale image.
///
/// Each module becomes a `scale` x `scale` square; `border` light modules
/// surround the symbol as the quiet zone.
pub fn to_luma_image(qr: &QrCode, scale: usize, border: usize) -> GrayImage {
    let scale = scale.max(1);
    let side = (qr.width() + 2 * border) * scale;
    GrayImage::from_fn(side as u32, side as u32, |px, py| {
        let mx = (px as usize / scale).checked_sub(border);
        let my = (py as usize / scale).checked_sub(border);
        match (mx, my) {
            (Some(x), Some(y)) if qr.get_masked_pixel(x, y) => DARK,
            _ => LIGHT,
        }
    })
}

/// Render a symbol and write it as a PNG.
pub fn save_png<P: AsRef<Path>>(
    qr: &QrCode,
    path: P,
    scale: usize,
    border: usize,
) -> Result<(), image::ImageError> {
    to_luma_image(qr, scale, border).save_with_format(path, image::ImageFormat::Png)
}

/// Text rendering, two characters per module so the output stays square.
pub fn to_ascii(qr: &QrCode, border: usize) -> String {
    let side = qr.width() + 2 * border;
    let mut out = String::with_capacity(side * (2 * side + 1));
    for y in 0..side {
        for x in 0..side {
            let dark = x >= border
                && y >= border
                && qr.get_masked_pixel(x - border, y - border);
            out.push_str(if dark { "##" } else { "  " });
        }
        out.push('\n');
    }
    out
}

/// Load an image as 8-bit grayscale.
pub fn load_luma<P: AsRef<Path>>(path: P) -> Result<GrayImage, image::ImageError> {
    Ok(image::open(path)?.to_luma8())
}

/// Recover the module grid from an image written by [`save_png`].
///
/// Samples the centre of every module; returns `None` if the image size does
/// not fit the given scale and border.
pub fn sample_modules(image: &GrayImage, scale: usize, border: usize) -> Option<BitMatrix> {
    let scale = scale.max(1);
    let (w, h) = image.dimensions();
    let (w, h) = (w as usize, h as usize);
    if w != h || w % scale != 0 {
        return None;
    }
    let size = (w / scale).checked_sub(2 * border)?;
    if size < 21 {
        return None;
    }
    Some(BitMatrix::from_fn(size, size, |x, y| {
        let px = (x + border) * scale + scale / 2;
        let py = (y + border) * scale + scale / 2;
        image.get_pixel(px as u32, py as u32).0[0] < 128
    }))
}

/// Summary statistics for a module matrix.
#[derive(Debug, Clone, Copy)]
pub struct ModuleStats {
    /// Count of dark modules.
    pub dark_modules: usize,
    /// Total modules in the matrix.
    pub total_modules: usize,
    /// Ratio of dark modules to total modules.
    pub dark_ratio: f64,
}

/// Compute dark module stats for a matrix.
pub fn module_stats(modules: &BitMatrix) -> ModuleStats {
    let dark = modules.count_dark();
    let total = modules.width() * modules.height();
    let ratio = if total == 0 {
        0.0
    } else {
        dark as f64 / total as f64
    };
    ModuleStats {
        dark_modules: dark,
        total_modules: total,
        dark_ratio: ratio,
    }
}

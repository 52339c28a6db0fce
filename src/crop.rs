use std::path::{Path, PathBuf};

use crate::error::{FavicropError, Result};

/// Target edge lengths for the derived favicon files, in output order.
pub const FAVICON_SIZES: [u32; 6] = [16, 32, 48, 64, 128, 256];

/// Edge length of the primary favicon written at the output path itself.
pub const PRIMARY_SIZE: u32 = 32;

/// Centered crop region in source-pixel coordinates.
///
/// Invariant: `left < right <= width` and `top < bottom <= height`,
/// guaranteed by [`CropRect::centered`] for any accepted fraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropRect {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl CropRect {
    /// Compute the rectangle that remains after removing `fraction` of the
    /// width from the left and right edges and `fraction` of the height from
    /// the top and bottom edges. Margins are truncated to whole pixels.
    ///
    /// Fractions at or above 0.5 would collapse or invert the rectangle and
    /// are rejected with [`FavicropError::DegenerateCrop`], as are negative
    /// and non-finite values.
    pub fn centered(width: u32, height: u32, fraction: f64) -> Result<CropRect> {
        if !(0.0..0.5).contains(&fraction) {
            return Err(FavicropError::DegenerateCrop { fraction });
        }

        let margin_x = (width as f64 * fraction) as u32;
        let margin_y = (height as f64 * fraction) as u32;

        Ok(CropRect {
            left: margin_x,
            top: margin_y,
            right: width - margin_x,
            bottom: height - margin_y,
        })
    }

    pub fn width(&self) -> u32 {
        self.right - self.left
    }

    pub fn height(&self) -> u32 {
        self.bottom - self.top
    }
}

/// Derive the output path for one favicon size by inserting a
/// `_{size}x{size}` token before the file extension.
///
/// `public/favicon.png` becomes `public/favicon_16x16.png` for size 16.
/// A path without an extension gets the token appended to its file name.
pub fn sized_path(output: &Path, size: u32) -> PathBuf {
    let stem = output.file_stem().unwrap_or_default().to_string_lossy();
    let name = match output.extension() {
        Some(ext) => format!("{}_{}x{}.{}", stem, size, size, ext.to_string_lossy()),
        None => format!("{}_{}x{}", stem, size, size),
    };
    output.with_file_name(name)
}

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use image::{
    ImageReader, RgbaImage,
    codecs::png::{CompressionType, FilterType, PngEncoder},
};

use crate::error::Result;

/// Decode the image at `path` into an RGBA8 buffer.
///
/// Sources without an alpha channel are converted, previously opaque pixels
/// end up with alpha 255.
pub fn read_image(path: &Path) -> Result<RgbaImage> {
    let image = ImageReader::open(path)?.decode()?;
    Ok(image.to_rgba8())
}

/// Encode `image` as PNG at `path` with the slowest, smallest compression
/// and adaptive row filtering. Lossless.
pub fn write_png(image: &RgbaImage, path: &Path) -> Result {
    let file = &mut BufWriter::new(File::create(path)?);
    let encoder = PngEncoder::new_with_quality(file, CompressionType::Best, FilterType::Adaptive);
    image.write_with_encoder(encoder)?;
    Ok(())
}

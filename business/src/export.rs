//! PNG export of the current pixel buffer.
//!
//! Always writes 4-channel RGBA at one pixel per module; on-screen
//! magnification is never applied to the exported file.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};
use thiserror::Error;

use crate::raster::PixelBuffer;

/// Why a PNG export failed.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to create {path}: {source}")]
    Create {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to encode PNG: {0}")]
    Encode(#[from] image::ImageError),
}

/// Write `pixels` to `path` as an RGBA PNG.
///
/// The encoder is chosen explicitly rather than inferred from the file
/// extension, so a path picked without one still produces a PNG.
pub fn write_png(pixels: &PixelBuffer, path: &Path) -> Result<(), ExportError> {
    let file = File::create(path).map_err(|source| ExportError::Create {
        path: path.to_path_buf(),
        source,
    })?;
    let encoder = PngEncoder::new(BufWriter::new(file));
    let side = pixels.size() as u32;
    encoder.write_image(pixels.bytes(), side, side, ExtendedColorType::Rgba8)?;
    Ok(())
}

//! Pixel buffer to egui image conversion.

use egui::{Color32, ColorImage};
use qrview_business::PixelBuffer;

/// Convert the viewer's RGBA pixel buffer into a `ColorImage` that can be
/// loaded as a texture in egui.
pub fn color_image_from_pixels(pixels: &PixelBuffer) -> ColorImage {
    let size = pixels.size();
    let colors = pixels
        .bytes()
        .chunks_exact(4)
        .map(|px| Color32::from_rgba_unmultiplied(px[0], px[1], px[2], px[3]))
        .collect();
    ColorImage::new([size, size], colors)
}

//! Module-grid rasterization: grid + colors in, RGBA pixels out.
//!
//! All color packing goes through [`pack_color`], parameterized by the target
//! channel order. The viewer itself renders and exports RGBA throughout; the
//! `Abgr` order exists for surfaces that want the mirrored packing, so the
//! byte-order choice lives in exactly one place.

use crate::grid::ModuleGrid;

/// Foreground ("Color 1", dark modules) and background ("Color 2") colors,
/// RGBA with each channel in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorPair {
    pub foreground: [f32; 4],
    pub background: [f32; 4],
}

impl Default for ColorPair {
    fn default() -> Self {
        Self {
            foreground: [0.0, 0.0, 0.0, 1.0],
            background: [1.0, 1.0, 1.0, 1.0],
        }
    }
}

/// Byte order of a packed 32-bit pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelOrder {
    /// Red in the most significant byte.
    Rgba,
    /// Alpha in the most significant byte.
    Abgr,
}

/// Truncating `[0, 1]` float to 8-bit channel conversion.
fn quantize(channel: f32) -> u8 {
    (channel * 255.0) as u8
}

/// Pack an RGBA float color into one 32-bit word in the given channel order.
pub fn pack_color(color: [f32; 4], order: ChannelOrder) -> u32 {
    let [r, g, b, a] = color.map(quantize);
    match order {
        ChannelOrder::Rgba => u32::from_be_bytes([r, g, b, a]),
        ChannelOrder::Abgr => u32::from_be_bytes([a, b, g, r]),
    }
}

/// A square RGBA8 pixel buffer, one pixel per QR module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    size: usize,
    bytes: Vec<u8>,
}

impl PixelBuffer {
    /// Side length in pixels.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Raw RGBA bytes, row-major, 4 bytes per pixel.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// The `[r, g, b, a]` channels of the pixel at `(x, y)`.
    pub fn pixel(&self, x: usize, y: usize) -> [u8; 4] {
        let offset = (y * self.size + x) * 4;
        let px = &self.bytes[offset..offset + 4];
        [px[0], px[1], px[2], px[3]]
    }
}

/// Convert a module grid into an RGBA pixel buffer.
///
/// Deterministic and total: the same grid and colors always produce the same
/// bytes.
pub fn rasterize(grid: &ModuleGrid, colors: &ColorPair) -> PixelBuffer {
    let fg = pack_color(colors.foreground, ChannelOrder::Rgba).to_be_bytes();
    let bg = pack_color(colors.background, ChannelOrder::Rgba).to_be_bytes();

    let size = grid.size();
    let mut bytes = Vec::with_capacity(size * size * 4);
    for y in 0..size {
        for x in 0..size {
            bytes.extend_from_slice(if grid.get(x, y) { &fg } else { &bg });
        }
    }
    PixelBuffer { size, bytes }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pack_color_rgba_order() {
        let packed = pack_color([1.0, 0.0, 0.0, 1.0], ChannelOrder::Rgba);
        assert_eq!(packed, 0xFF00_00FF);
    }

    #[test]
    fn test_pack_color_abgr_order_mirrors_rgba() {
        let color = [0.2, 0.4, 0.6, 0.8];
        let rgba = pack_color(color, ChannelOrder::Rgba).to_be_bytes();
        let abgr = pack_color(color, ChannelOrder::Abgr).to_be_bytes();
        assert_eq!(rgba[0], abgr[3]);
        assert_eq!(rgba[1], abgr[2]);
        assert_eq!(rgba[2], abgr[1]);
        assert_eq!(rgba[3], abgr[0]);
    }

    #[test]
    fn test_quantization_truncates() {
        // 0.999 * 255 = 254.745, which truncates to 254.
        let packed = pack_color([0.999, 0.0, 0.0, 0.0], ChannelOrder::Rgba);
        assert_eq!(packed.to_be_bytes()[0], 254);
    }

    #[test]
    fn test_rasterize_maps_modules_to_colors() {
        let grid = ModuleGrid::from_fn(2, |x, y| x == y);
        let pixels = rasterize(&grid, &ColorPair::default());
        assert_eq!(pixels.size(), 2);
        assert_eq!(pixels.pixel(0, 0), [0, 0, 0, 255]);
        assert_eq!(pixels.pixel(1, 0), [255, 255, 255, 255]);
        assert_eq!(pixels.pixel(0, 1), [255, 255, 255, 255]);
        assert_eq!(pixels.pixel(1, 1), [0, 0, 0, 255]);
    }

    #[test]
    fn test_rasterize_is_deterministic() {
        let grid = ModuleGrid::from_fn(21, |x, y| (x + y) % 3 == 0);
        let colors = ColorPair {
            foreground: [0.1, 0.5, 0.9, 1.0],
            background: [0.9, 0.5, 0.1, 0.5],
        };
        assert_eq!(rasterize(&grid, &colors), rasterize(&grid, &colors));
    }

    #[test]
    fn test_buffer_length_is_four_bytes_per_module() {
        let grid = ModuleGrid::from_fn(25, |_, _| true);
        let pixels = rasterize(&grid, &ColorPair::default());
        assert_eq!(pixels.bytes().len(), 25 * 25 * 4);
    }
}

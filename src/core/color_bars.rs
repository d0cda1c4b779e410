use std::ops::Range;

use super::display_context::{DisplayContext, BYTES_PER_PIXEL};

/// Number of vertical bands in the pattern
pub const BAND_COUNT: usize = 8;

/// RGBA8 color of a single band
pub type Rgba = [u8; 4];

pub const RED: Rgba = [0xFF, 0x00, 0x00, 0xFF];
pub const GREEN: Rgba = [0x00, 0xFF, 0x00, 0xFF];
pub const BLUE: Rgba = [0x00, 0x00, 0xFF, 0xFF];
pub const YELLOW: Rgba = [0xFF, 0xFF, 0x00, 0xFF];
pub const MAGENTA: Rgba = [0xFF, 0x00, 0xFF, 0xFF];
pub const CYAN: Rgba = [0x00, 0xFF, 0xFF, 0xFF];
pub const WHITE: Rgba = [0xFF, 0xFF, 0xFF, 0xFF];
pub const BLACK: Rgba = [0x00, 0x00, 0x00, 0xFF];

/// Band colors, left to right
pub const BAND_COLORS: [Rgba; BAND_COUNT] = [RED, GREEN, BLUE, YELLOW, MAGENTA, CYAN, WHITE, BLACK];

/// Column range covered by each band.
///
/// Band `k` spans `k*W/8 .. (k+1)*W/8` with truncating division, so the last
/// band absorbs the remainder. For `W < 8` some ranges are empty.
pub fn band_ranges(width: u32) -> [Range<u32>; BAND_COUNT] {
    let boundary = |k: u64| ((k * width as u64) / BAND_COUNT as u64) as u32;
    std::array::from_fn(|k| boundary(k as u64)..boundary(k as u64 + 1))
}

/// CPU-side color bar image, immutable once synthesized
#[derive(Debug, Clone)]
pub struct ColorBarTexture {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl ColorBarTexture {
    /// Synthesize the 8-band pattern for the given display size
    pub fn synthesize(context: &DisplayContext) -> Self {
        let row = Self::build_row(context.width);
        let pixels = row.repeat(context.height as usize);

        Self {
            width: context.width,
            height: context.height,
            pixels,
        }
    }

    fn build_row(width: u32) -> Vec<u8> {
        let mut row = vec![0u8; width as usize * BYTES_PER_PIXEL];

        for (range, color) in band_ranges(width).into_iter().zip(BAND_COLORS) {
            let start = range.start as usize * BYTES_PER_PIXEL;
            let end = range.end as usize * BYTES_PER_PIXEL;
            for pixel in row[start..end].chunks_exact_mut(BYTES_PER_PIXEL) {
                pixel.copy_from_slice(&color);
            }
        }

        row
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Tightly packed RGBA8 rows, top to bottom
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Color of the pixel at (`x`, `y`), if inside the image
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let offset = (y as usize * self.width as usize + x as usize) * BYTES_PER_PIXEL;
        let mut rgba = [0u8; BYTES_PER_PIXEL];
        rgba.copy_from_slice(&self.pixels[offset..offset + BYTES_PER_PIXEL]);
        Some(rgba)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranges_cover_width_without_gaps() {
        let ranges = band_ranges(1000);
        assert_eq!(ranges[0].start, 0);
        assert_eq!(ranges[7].end, 1000);
        for pair in ranges.windows(2) {
            assert_eq!(pair[0].end, pair[1].start);
        }
    }

    #[test]
    fn remainder_lands_in_last_band() {
        // 13 * k / 8 -> 0,1,3,4,6,8,9,11,13
        let widths: Vec<u32> = band_ranges(13).iter().map(|r| r.end - r.start).collect();
        assert_eq!(widths, vec![1, 2, 1, 2, 2, 1, 2, 2]);
    }

    #[test]
    fn narrow_width_yields_empty_bands() {
        let ranges = band_ranges(3);
        let empty = ranges.iter().filter(|r| r.is_empty()).count();
        assert_eq!(empty, 5);
        assert_eq!(ranges[7].end, 3);
    }

    #[test]
    fn single_pixel_row() {
        let texture = ColorBarTexture::synthesize(&DisplayContext::new(8, 1));
        for (x, color) in BAND_COLORS.iter().enumerate() {
            assert_eq!(texture.pixel(x as u32, 0), Some(*color));
        }
        assert_eq!(texture.pixel(8, 0), None);
    }
}

use crate::*;

/// Opaque ARGB word as display surfaces take it.
pub fn pack_u32(r: u8, g: u8, b: u8) -> u32 {
    0xFF00_0000 | (r as u32) << 16 | (g as u32) << 8 | b as u32
}

/// ARGB word for the raw bytes of one pixel in `format`.
pub fn pixel_to_u32(format: PixelFormat, pixel: &[u8]) -> u32 {
    match format {
        PixelFormat::Rgb8 => pack_u32(pixel[0], pixel[1], pixel[2]),
        PixelFormat::Rgb565 => {
            let (r, g, b) = rgb565_to_rgb888(pixel[0], pixel[1]);
            pack_u32(r, g, b)
        }
    }
}

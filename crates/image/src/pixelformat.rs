/// Pixel layouts moving through the classifier pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelFormat {
    /// 16-bit packed 5-6-5, low byte first. What the sensor delivers.
    Rgb565,
    /// 8 bits per channel, R G B. What the model consumes.
    Rgb8,
}

impl PixelFormat {
    pub fn bytes_per_pixel(&self) -> usize {
        match self {
            PixelFormat::Rgb565 => 2,
            PixelFormat::Rgb8 => 3,
        }
    }
}

/// Expand one packed 5-6-5 pixel to 8-8-8.
///
/// Channels are shifted up without replicating the high bits, so red and
/// blue only ever take 32 distinct values and green 64.
pub fn rgb565_to_rgb888(lo: u8, hi: u8) -> (u8, u8, u8) {
    let r = hi & 0xF8;
    let g = ((hi & 0x07) << 5) | ((lo & 0xE0) >> 3);
    let b = (lo & 0x1F) << 3;
    (r, g, b)
}

/// Pack an 8-8-8 pixel into 5-6-5 `(lo, hi)`, dropping the low bits of each channel.
pub fn rgb888_to_rgb565(r: u8, g: u8, b: u8) -> (u8, u8) {
    let hi = (r & 0xF8) | (g >> 5);
    let lo = ((g << 3) & 0xE0) | (b >> 3);
    (lo, hi)
}

use {crate::*, base::Vec2};

/// Convert a whole 5-6-5 buffer to 8-8-8, keeping pixel order.
pub fn rgb565_to_rgb(size: Vec2<usize>, data: &[u8]) -> Vec<u8> {
    let mut rgb = Vec::with_capacity(size.area() * 3);
    for chunk in data.chunks_exact(2) {
        let (r, g, b) = rgb565_to_rgb888(chunk[0], chunk[1]);
        rgb.extend_from_slice(&[r, g, b]);
    }
    rgb
}

/// Fill a 5-6-5 buffer with a single 8-8-8 color.
pub fn fill_rgb565(data: &mut [u8], r: u8, g: u8, b: u8) {
    let (lo, hi) = rgb888_to_rgb565(r, g, b);
    for chunk in data.chunks_exact_mut(2) {
        chunk[0] = lo;
        chunk[1] = hi;
    }
}

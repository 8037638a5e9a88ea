use {crate::*, base::Vec2};

/// Column where the centered square crop of a landscape frame starts.
pub fn crop_offset(src_size: Vec2<usize>) -> usize {
    (src_size.x - src_size.y) / 2
}

/// Integer sampling stride shared by both axes.
///
/// The smaller of the two per-axis ratios wins so the tile keeps a square
/// aspect. On the wider axis this samples less than the full crop.
pub fn resample_stride(src_size: Vec2<usize>, side: usize) -> usize {
    (src_size.x / side).min(src_size.y / side)
}

/// Source pixel read for tile sample `(x, y)`, before the output flip.
pub fn sample_point(src_size: Vec2<usize>, side: usize, sample: Vec2<usize>) -> Vec2<usize> {
    let stride = resample_stride(src_size, side);
    Vec2::new(crop_offset(src_size) + sample.x * stride, sample.y * stride)
}

/// Center-crop, subsample and convert a 5-6-5 frame into a `side x side` 8-8-8 tile.
///
/// Sample `(x, y)` is written at `(side - 1 - x, side - 1 - y)`: the sensor is
/// mounted upside down, so the tile is rotated 180 degrees relative to the
/// frame. Every tile pixel is written exactly once.
///
/// Geometry is fixed at build time; the preconditions are only checked in
/// debug builds.
pub fn resample_rgb565_to_rgb888(src_size: Vec2<usize>, src: &[u8], side: usize, dst: &mut [u8]) {
    debug_assert!(src_size.x >= src_size.y, "frame must be landscape, got {}", src_size);
    debug_assert!(src_size.y >= side, "frame {} smaller than tile side {}", src_size, side);
    debug_assert!(src.len() >= src_size.area() * 2, "frame buffer too small");
    debug_assert!(dst.len() >= side * side * 3, "tile buffer too small");

    let offset = crop_offset(src_size);
    let stride = resample_stride(src_size, side);

    for y in 0..side {
        let row = y * stride * src_size.x;
        let out_row = (side - 1 - y) * side;
        for x in 0..side {
            let src_index = (row + offset + x * stride) * 2;
            let (r, g, b) = rgb565_to_rgb888(src[src_index], src[src_index + 1]);
            let dst_index = (out_row + side - 1 - x) * 3;
            dst[dst_index] = r;
            dst[dst_index + 1] = g;
            dst[dst_index + 2] = b;
        }
    }
}

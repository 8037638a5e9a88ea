use {
    crate::*,
    base::Vec2,
    image::{Image, PixelFormat, pixel_to_u32},
};

/// Draw `image` onto `surface`, one `set_pixel` per source pixel.
///
/// Placement depends on the format, matching the two screen regions of the
/// board: 8-8-8 tiles are drawn upright from `origin`, 5-6-5 sensor frames
/// are drawn mirrored on both axes, growing up and left from `origin`.
pub fn display<S: Surface + ?Sized>(surface: &mut S, image: &Image, origin: Vec2<i32>) {
    match image.format() {
        PixelFormat::Rgb8 => display_rgb888(surface, image, origin),
        PixelFormat::Rgb565 => display_rgb565(surface, image, origin),
    }
}

fn display_rgb888<S: Surface + ?Sized>(surface: &mut S, image: &Image, origin: Vec2<i32>) {
    for y in 0..image.height() {
        for x in 0..image.width() {
            let color = pixel_to_u32(PixelFormat::Rgb8, image.pixel(x, y));
            surface.set_pixel(origin.x + x as i32, origin.y + y as i32, color);
        }
    }
}

fn display_rgb565<S: Surface + ?Sized>(surface: &mut S, image: &Image, origin: Vec2<i32>) {
    for y in 0..image.height() {
        for x in 0..image.width() {
            let color = pixel_to_u32(PixelFormat::Rgb565, image.pixel(x, y));
            // sensor frame is upside down, draw from bottom-right to top-left
            surface.set_pixel(origin.x - x as i32, origin.y - y as i32, color);
        }
    }
}

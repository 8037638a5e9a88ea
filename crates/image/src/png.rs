use {crate::*, crates_image::ImageEncoder};

/// Encode an image as PNG, expanding 5-6-5 to 8-8-8 first.
pub fn encode_png(image: &Image) -> Result<Vec<u8>, ImageError> {
    let expanded;
    let rgb = match image.format() {
        PixelFormat::Rgb8 => image.data(),
        PixelFormat::Rgb565 => {
            expanded = rgb565_to_rgb(image.size(), image.data());
            expanded.as_slice()
        }
    };
    let mut buffer = Vec::new();
    crates_image::codecs::png::PngEncoder::new(&mut buffer).write_image(
        rgb,
        image.size().x as u32,
        image.size().y as u32,
        crates_image::ExtendedColorType::Rgb8,
    )?;
    Ok(buffer)
}

use {crate::*, base::Vec2};

/// A borrowed, row-major pixel buffer with its size and layout.
///
/// The pipeline owns its buffers as fixed arrays; `Image` is how they are
/// handed to the presenter and the PNG encoder. The data length always
/// matches the size and format.
#[derive(Debug, Clone, Copy)]
pub struct Image<'a> {
    size: Vec2<usize>,
    data: &'a [u8],
    format: PixelFormat,
}

impl<'a> Image<'a> {
    pub fn new(size: Vec2<usize>, data: &'a [u8], format: PixelFormat) -> Result<Self, ImageError> {
        let expected = size.area() * format.bytes_per_pixel();
        if data.len() != expected {
            return Err(ImageError::Size {
                expected,
                got: data.len(),
            });
        }
        Ok(Self { size, data, format })
    }

    pub fn size(&self) -> Vec2<usize> {
        self.size
    }

    pub fn data(&self) -> &'a [u8] {
        self.data
    }

    pub fn format(&self) -> PixelFormat {
        self.format
    }

    pub fn width(&self) -> usize {
        self.size.x
    }

    pub fn height(&self) -> usize {
        self.size.y
    }

    /// Raw bytes of the pixel at `(x, y)`.
    pub fn pixel(&self, x: usize, y: usize) -> &'a [u8] {
        let bpp = self.format.bytes_per_pixel();
        let index = (y * self.size.x + x) * bpp;
        &self.data[index..index + bpp]
    }
}

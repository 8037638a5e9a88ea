use {
    base::Vec2,
    image::{Image, ImageError, PixelFormat, resample_rgb565_to_rgb888},
};

pub const FRAME_WIDTH: usize = 160;
pub const FRAME_HEIGHT: usize = 120;
pub const TILE_SIDE: usize = 32;

pub const FRAME_SIZE: Vec2<usize> = Vec2::new(FRAME_WIDTH, FRAME_HEIGHT);
pub const TILE_SIZE: Vec2<usize> = Vec2::new(TILE_SIDE, TILE_SIDE);

pub const FRAME_BYTES: usize = FRAME_WIDTH * FRAME_HEIGHT * 2;
pub const TILE_BYTES: usize = TILE_SIDE * TILE_SIDE * 3;

// resampler preconditions, checked at build time
const _: () = assert!(FRAME_WIDTH >= FRAME_HEIGHT);
const _: () = assert!(FRAME_HEIGHT >= TILE_SIDE);

/// Raw sensor frame, packed 5-6-5.
#[derive(Clone)]
pub struct Frame {
    pub data: [u8; FRAME_BYTES],
}

impl Frame {
    pub fn new() -> Self {
        Self {
            data: [0; FRAME_BYTES],
        }
    }

    pub fn image(&self) -> Result<Image<'_>, ImageError> {
        Image::new(FRAME_SIZE, &self.data, PixelFormat::Rgb565)
    }
}

impl Default for Frame {
    fn default() -> Self {
        Self::new()
    }
}

/// Model-input tile, 8-8-8.
#[derive(Clone)]
pub struct Tile {
    pub data: [u8; TILE_BYTES],
}

impl Tile {
    pub fn new() -> Self {
        Self {
            data: [0; TILE_BYTES],
        }
    }

    pub fn image(&self) -> Result<Image<'_>, ImageError> {
        Image::new(TILE_SIZE, &self.data, PixelFormat::Rgb8)
    }
}

impl Default for Tile {
    fn default() -> Self {
        Self::new()
    }
}

/// Resample `frame` into `tile`: center crop, subsample, rotate 180 degrees, expand to 8-8-8.
pub fn resample(frame: &Frame, tile: &mut Tile) {
    resample_rgb565_to_rgb888(FRAME_SIZE, &frame.data, TILE_SIDE, &mut tile.data);
}

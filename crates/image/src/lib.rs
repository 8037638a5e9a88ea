//! Pixel formats and conversions for the camera classifier.
//!
//! Frames arrive as packed 5-6-5 and are resampled into the square 8-8-8
//! tile the model takes. Display surfaces take opaque ARGB `u32` words.

mod argb;
pub use argb::*;

mod error;
pub use error::*;

mod image;
pub use image::*;

mod pixelformat;
pub use pixelformat::*;

mod png;
pub use png::*;

mod resample;
pub use resample::*;

mod rgb565;
pub use rgb565::*;

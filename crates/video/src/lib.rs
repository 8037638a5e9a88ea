//! Frame capture and display surfaces for the camera classifier.
//!
//! Capture devices fill caller-owned 5-6-5 buffers; the presenter draws
//! buffers onto any `Surface`.

pub mod config;
pub mod error;
pub mod presenter;
pub mod surface;
pub mod videoin;

pub use config::CaptureConfig;
pub use error::VideoError;
pub use presenter::display;
pub use surface::{Alignment, Framebuffer, Surface, TextLine};
pub use videoin::{VideoInDevice, pattern::TestPattern};

#[cfg(feature = "v4l2")]
pub use videoin::v4l2::V4l2;

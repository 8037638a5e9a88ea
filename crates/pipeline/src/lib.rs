//! Capture, resample, classify, present: the camera classifier loop.
//!
//! `Pipeline` owns the three working buffers and runs one iteration per
//! `step` call against any capture device, model and surface.

mod buffers;
pub use buffers::*;

mod config;
pub use config::*;

mod error;
pub use error::*;

mod pipeline;
pub use pipeline::*;

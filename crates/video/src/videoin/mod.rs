use crate::*;

/// A frame source that fills caller-owned 5-6-5 buffers.
///
/// Capture is blocking: `blocking_capture` returns once a whole frame has
/// been copied into `frame`. No frame is allocated by the device.
pub trait VideoInDevice {
    /// Open the device, returning the configuration that was actually applied.
    fn open(&mut self, config: &CaptureConfig) -> Result<CaptureConfig, VideoError>;

    /// Close the device, if open.
    fn close(&mut self);

    /// Capture one frame into `frame`, which must hold exactly one frame.
    fn blocking_capture(&mut self, frame: &mut [u8]) -> Result<(), VideoError>;
}

impl<T: VideoInDevice + ?Sized> VideoInDevice for Box<T> {
    fn open(&mut self, config: &CaptureConfig) -> Result<CaptureConfig, VideoError> {
        (**self).open(config)
    }

    fn close(&mut self) {
        (**self).close()
    }

    fn blocking_capture(&mut self, frame: &mut [u8]) -> Result<(), VideoError> {
        (**self).blocking_capture(frame)
    }
}

pub(crate) fn check_frame_len(config: &CaptureConfig, frame: &[u8]) -> Result<(), VideoError> {
    let expected = config.frame_bytes();
    if frame.len() != expected {
        return Err(VideoError::Size {
            expected,
            got: frame.len(),
        });
    }
    Ok(())
}

pub mod pattern;

#[cfg(feature = "v4l2")]
pub mod v4l2;

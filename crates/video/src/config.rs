use {base::Vec2, std::path::PathBuf};

/// Configuration for frame capture.
///
/// The pipeline needs frames of one exact size, so devices either deliver
/// `size` or fail to open.
#[derive(Clone, Debug, PartialEq)]
pub struct CaptureConfig {
    device: Option<PathBuf>,
    size: Vec2<usize>,
    frame_rate: u32,
    buffer_count: u32,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            device: None,
            size: Vec2::new(160, 120),
            frame_rate: 30,
            buffer_count: 4,
        }
    }
}

impl CaptureConfig {
    /// Set the device path (e.g., "/dev/video0"). `None` picks the first device.
    pub fn with_device(mut self, device: Option<PathBuf>) -> Self {
        self.device = device;
        self
    }

    /// Set the frame size in pixels.
    pub fn with_size(mut self, size: Vec2<usize>) -> Self {
        self.size = size;
        self
    }

    /// Set the frames per second.
    pub fn with_frame_rate(mut self, frame_rate: u32) -> Self {
        self.frame_rate = frame_rate;
        self
    }

    /// Set the buffer count for the capture stream.
    pub fn with_buffer_count(mut self, buffer_count: u32) -> Self {
        self.buffer_count = buffer_count;
        self
    }

    pub fn device(&self) -> Option<&PathBuf> {
        self.device.as_ref()
    }

    pub fn size(&self) -> Vec2<usize> {
        self.size
    }

    pub fn frame_rate(&self) -> u32 {
        self.frame_rate
    }

    pub fn buffer_count(&self) -> u32 {
        self.buffer_count
    }

    /// Bytes in one packed 5-6-5 frame of this size.
    pub fn frame_bytes(&self) -> usize {
        self.size.area() * 2
    }
}

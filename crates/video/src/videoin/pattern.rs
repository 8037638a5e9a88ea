use {
    super::check_frame_len,
    crate::*,
    image::{fill_rgb565, rgb888_to_rgb565},
};

// classic eight-bar pattern, left to right
const BARS: [(u8, u8, u8); 8] = [
    (0xFF, 0xFF, 0xFF),
    (0xFF, 0xFF, 0x00),
    (0x00, 0xFF, 0xFF),
    (0x00, 0xFF, 0x00),
    (0xFF, 0x00, 0xFF),
    (0xFF, 0x00, 0x00),
    (0x00, 0x00, 0xFF),
    (0x00, 0x00, 0x00),
];

#[derive(Debug, Clone, Copy, PartialEq)]
enum Pattern {
    Bars,
    Solid(u8, u8, u8),
}

/// Synthetic frame source for running the pipeline without a sensor.
///
/// `bars()` scrolls vertical color bars one pixel per frame, `solid()`
/// produces a constant color.
#[derive(Debug)]
pub struct TestPattern {
    pattern: Pattern,
    config: Option<CaptureConfig>,
    frame_count: usize,
}

impl TestPattern {
    pub fn bars() -> Self {
        Self {
            pattern: Pattern::Bars,
            config: None,
            frame_count: 0,
        }
    }

    pub fn solid(r: u8, g: u8, b: u8) -> Self {
        Self {
            pattern: Pattern::Solid(r, g, b),
            config: None,
            frame_count: 0,
        }
    }

    pub fn frame_count(&self) -> usize {
        self.frame_count
    }
}

impl VideoInDevice for TestPattern {
    fn open(&mut self, config: &CaptureConfig) -> Result<CaptureConfig, VideoError> {
        let size = config.size();
        if size.x == 0 || size.y == 0 {
            return Err(VideoError::Device(format!("invalid frame size {}", size)));
        }
        self.config = Some(config.clone().with_device(None));
        self.frame_count = 0;
        Ok(config.clone().with_device(None))
    }

    fn close(&mut self) {
        self.config = None;
    }

    fn blocking_capture(&mut self, frame: &mut [u8]) -> Result<(), VideoError> {
        let config = self
            .config
            .as_ref()
            .ok_or_else(|| VideoError::Stream("test pattern not open".to_string()))?;
        check_frame_len(config, frame)?;

        match self.pattern {
            Pattern::Solid(r, g, b) => fill_rgb565(frame, r, g, b),
            Pattern::Bars => {
                let width = config.size().x;
                let bar_width = width.div_ceil(BARS.len());
                for (i, pixel) in frame.chunks_exact_mut(2).enumerate() {
                    let x = (i % width + self.frame_count) % width;
                    let (r, g, b) = BARS[x / bar_width];
                    let (lo, hi) = rgb888_to_rgb565(r, g, b);
                    pixel[0] = lo;
                    pixel[1] = hi;
                }
            }
        }
        self.frame_count += 1;
        Ok(())
    }
}

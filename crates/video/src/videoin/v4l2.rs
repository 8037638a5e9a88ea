use {
    super::check_frame_len,
    crate::*,
    base::{Vec2, log_info},
    v4l::{
        Device, Format, FourCC, buffer::Type, io::mmap::Stream as MmapStream,
        io::traits::CaptureStream, video::Capture,
    },
};

// V4L2 fourcc for little-endian RGB565
const FOURCC_RGB565: &[u8; 4] = b"RGBP";

/// V4L2 sensor delivering RGB565 frames.
pub struct V4l2 {
    stream: Option<MmapStream<'static>>,
    config: Option<CaptureConfig>,
}

impl V4l2 {
    pub fn new() -> Self {
        Self {
            stream: None,
            config: None,
        }
    }
}

impl Default for V4l2 {
    fn default() -> Self {
        Self::new()
    }
}

impl VideoInDevice for V4l2 {
    fn open(&mut self, config: &CaptureConfig) -> Result<CaptureConfig, VideoError> {
        self.close();

        let device = match config.device() {
            Some(path) => Device::with_path(path)?,
            None => Device::new(0)?,
        };

        // the resampler geometry is fixed, so the sensor has to match exactly
        let desired = config.size();
        let actual_format = Capture::set_format(
            &device,
            &Format::new(desired.x as u32, desired.y as u32, FourCC::new(FOURCC_RGB565)),
        )?;
        if &actual_format.fourcc.repr != FOURCC_RGB565 {
            return Err(VideoError::Device(format!(
                "Unsupported pixel format: {}",
                actual_format.fourcc
            )));
        }
        let actual_size = Vec2::new(actual_format.width as usize, actual_format.height as usize);
        if actual_size != desired {
            return Err(VideoError::Device(format!(
                "requested {} frames, device offers {}",
                desired, actual_size
            )));
        }

        let actual_params = Capture::set_params(
            &device,
            &v4l::video::capture::Parameters::with_fps(config.frame_rate()),
        )?;
        let frame_rate = actual_params.interval.denominator / actual_params.interval.numerator.max(1);

        let stream = MmapStream::with_buffers(&device, Type::VideoCapture, config.buffer_count())
            .map_err(|error| VideoError::Stream(error.to_string()))?;
        self.stream = Some(stream);

        let applied = config.clone().with_frame_rate(frame_rate);
        log_info!("v4l2: {} RGB565 at {} fps", applied.size(), applied.frame_rate());
        self.config = Some(applied.clone());
        Ok(applied)
    }

    fn close(&mut self) {
        self.stream.take();
        self.config.take();
    }

    fn blocking_capture(&mut self, frame: &mut [u8]) -> Result<(), VideoError> {
        let (Some(stream), Some(config)) = (self.stream.as_mut(), self.config.as_ref()) else {
            return Err(VideoError::Stream("No stream".to_string()));
        };
        check_frame_len(config, frame)?;
        let (data, _metadata) =
            CaptureStream::next(stream).map_err(|error| VideoError::Stream(error.to_string()))?;
        if data.len() < frame.len() {
            return Err(VideoError::Size {
                expected: frame.len(),
                got: data.len(),
            });
        }
        frame.copy_from_slice(&data[..frame.len()]);
        Ok(())
    }
}

use {
    crate::*,
    base::{log_error, log_info, log_warn},
    image::encode_png,
    inference::{
        CIFAR10_LABELS, ClassScores, Model, NUM_CLASSES, Prediction, softmax_q7, top_prediction,
    },
    std::path::Path,
    video::{Alignment, CaptureConfig, Surface, VideoInDevice, display},
};

/// In-place score normalization, run between the model and the arg-max.
pub type Normalizer = fn(&mut [i8]);

/// The classifier loop.
///
/// Owns the raw frame, the model-input tile and the score vector; they are
/// reused every iteration and only borrowed by each stage.
pub struct Pipeline<D: VideoInDevice, M: Model> {
    device: D,
    model: M,
    normalize: Normalizer,
    labels: &'static [&'static str],
    config: PipelineConfig,
    frame: Frame,
    tile: Tile,
    scores: ClassScores,
}

impl<D: VideoInDevice, M: Model> Pipeline<D, M> {
    pub fn new(device: D, model: M, config: PipelineConfig) -> Self {
        Self {
            device,
            model,
            normalize: softmax_q7,
            labels: &CIFAR10_LABELS,
            config,
            frame: Frame::new(),
            tile: Tile::new(),
            scores: [0; NUM_CLASSES],
        }
    }

    /// Replace the default `softmax_q7` normalization.
    pub fn with_normalizer(mut self, normalize: Normalizer) -> Self {
        self.normalize = normalize;
        self
    }

    /// Open the capture device and prepare the screen.
    ///
    /// On failure the screen is cleared to the alert color and the loop may
    /// still be stepped; capture errors are then reported per frame.
    /// Returns whether capture started.
    pub fn start<S: Surface + ?Sized>(&mut self, surface: &mut S) -> bool {
        self.start_with(surface, &CaptureConfig::default())
    }

    /// Like `start`, with the device, frame rate and buffer count from
    /// `capture`. The frame size is always `FRAME_SIZE`.
    pub fn start_with<S: Surface + ?Sized>(
        &mut self,
        surface: &mut S,
        capture: &CaptureConfig,
    ) -> bool {
        if capture.size() != FRAME_SIZE {
            log_warn!(
                "requested {} frames, capturing {} instead",
                capture.size(),
                FRAME_SIZE
            );
        }
        let capture = capture.clone().with_size(FRAME_SIZE);
        match self.device.open(&capture) {
            Ok(applied) => {
                surface.clear(self.config.background());
                log_info!("Camera init - SUCCESS");
                log_info!(
                    "capture {} at {} fps, {} buffers",
                    applied.size(),
                    applied.frame_rate(),
                    applied.buffer_count()
                );
                true
            }
            Err(err) => {
                surface.clear(self.config.alert_color());
                log_error!("Camera init - FAILED");
                log_error!("{}", err);
                false
            }
        }
    }

    /// Run one iteration and return the winning class.
    ///
    /// A capture error is logged and the previous frame is used again. A
    /// model error is returned before any text is drawn.
    pub fn step<S: Surface + ?Sized>(
        &mut self,
        surface: &mut S,
    ) -> Result<Prediction, PipelineError> {
        if let Err(err) = self.device.blocking_capture(&mut self.frame.data) {
            log_warn!("capture failed, reusing last frame: {}", err);
        }

        resample(&self.frame, &mut self.tile);

        display(surface, &self.tile.image()?, self.config.tile_origin());
        if self.config.show_frame() {
            display(surface, &self.frame.image()?, self.config.frame_origin());
        }

        self.model.infer(&self.tile.data, &mut self.scores)?;
        (self.normalize)(&mut self.scores);

        let prediction = top_prediction(&self.scores);
        let label = prediction.label(self.labels);
        let confidence = prediction.confidence_text();

        surface.draw_text(
            self.config.prediction_line(),
            &format!("  Prediction: {}       ", label),
            Alignment::Left,
        );
        surface.draw_text(
            self.config.confidence_line(),
            &format!("  Confidence: {}   ", confidence),
            Alignment::Left,
        );

        log_info!("Prediction: {}", label);
        log_info!("Confidence: {}", confidence);

        Ok(prediction)
    }

    /// Write the current tile and frame as `tile.png` and `frame.png` in `dir`.
    pub fn save_snapshot(&self, dir: impl AsRef<Path>) -> Result<(), PipelineError> {
        let dir = dir.as_ref();
        std::fs::create_dir_all(dir)?;
        std::fs::write(dir.join("tile.png"), encode_png(&self.tile.image()?)?)?;
        std::fs::write(dir.join("frame.png"), encode_png(&self.frame.image()?)?)?;
        log_info!("snapshot written to {:?}", dir);
        Ok(())
    }

    pub fn stop(&mut self) {
        self.device.close();
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    pub fn tile(&self) -> &Tile {
        &self.tile
    }

    pub fn scores(&self) -> &ClassScores {
        &self.scores
    }
}
